use std::rc::Rc;

use crossterm::event::KeyCode;
use ratatui::Frame;
use recommender_core::Recommender;

use crate::state::session::SessionState;
use crate::ui::draw;

use super::{menu::MenuState, Action, Screen};

pub struct RecommendState {
    session: SessionState,
    top_n: usize,
}

impl RecommendState {
    pub fn new(recommender: Rc<Recommender>, top_n: usize) -> Self {
        Self {
            session: SessionState::new(recommender, top_n),
            top_n,
        }
    }
}

pub fn handle_key(state: &mut RecommendState, key: KeyCode) -> Action {
    let session = &mut state.session;

    match key {
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => session.focus_next(),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => session.focus_prev(),
        KeyCode::Left | KeyCode::Char('h') => session.cycle(-1),
        KeyCode::Right | KeyCode::Char('l') => session.cycle(1),
        KeyCode::Enter => session.activate(),
        KeyCode::Esc => {
            return Action::Transition(Screen::Menu(MenuState::new(
                Rc::clone(session.recommender()),
                state.top_n,
            )))
        }
        KeyCode::Char('q') => return Action::Quit,
        _ => {}
    }

    Action::None
}

pub fn draw(f: &mut Frame, state: &RecommendState) {
    draw::draw(f, state.session.view());
}
