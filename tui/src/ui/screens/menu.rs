use std::rc::Rc;

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use recommender_core::Recommender;

use crate::ui::{layout::centered_rect, theme::Theme, widgets::PAGE_TITLE};

use super::{recommend::RecommendState, Action, Screen};

const LOGO: &str = r#"
 ██████╗  ██████╗███╗   ███╗██████╗
 ██╔══██╗██╔════╝████╗ ████║██╔══██╗
 ██████╔╝██║     ██╔████╔██║██████╔╝
 ██╔═══╝ ██║     ██║╚██╔╝██║██╔══██╗
 ██║     ╚██████╗██║ ╚═╝ ██║██████╔╝
 ╚═╝      ╚═════╝╚═╝     ╚═╝╚═════╝
"#;

const MENU_ITEMS: &[&str] = &["Get Recommendations", "Quit"];

pub struct MenuState {
    pub selected: usize,
    recommender: Rc<Recommender>,
    top_n: usize,
}

impl MenuState {
    pub fn new(recommender: Rc<Recommender>, top_n: usize) -> Self {
        Self {
            selected: 0,
            recommender,
            top_n,
        }
    }
}

pub fn handle_key(state: &mut MenuState, key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            if state.selected > 0 {
                state.selected -= 1;
            }
            Action::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.selected < MENU_ITEMS.len() - 1 {
                state.selected += 1;
            }
            Action::None
        }
        KeyCode::Enter => match state.selected {
            0 => Action::Transition(Screen::Recommend(RecommendState::new(
                Rc::clone(&state.recommender),
                state.top_n,
            ))),
            1 => Action::Quit,
            _ => Action::None,
        },
        KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}

pub fn draw(f: &mut Frame, state: &MenuState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = centered_rect(60, 70, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Length(1),
            Constraint::Length(MENU_ITEMS.len() as u16 * 2 + 2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(outer);

    draw_logo(f, chunks[0]);
    draw_menu(f, chunks[2], state);
    draw_hint(f, chunks[4]);
}

fn draw_logo(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::from(Span::styled(l, Theme::title())))
        .collect();
    lines.push(Line::from(Span::styled(PAGE_TITLE, Theme::dim())));

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_menu(f: &mut Frame, area: Rect, state: &MenuState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(" MENU ")
        .title_alignment(Alignment::Center)
        .title_style(Theme::title());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let item_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            MENU_ITEMS
                .iter()
                .map(|_| Constraint::Length(2))
                .collect::<Vec<_>>(),
        )
        .split(inner);

    for (i, (label, item_area)) in MENU_ITEMS.iter().zip(item_areas.iter()).enumerate() {
        let (prefix, style) = if i == state.selected {
            ("▶ ", Theme::focused().add_modifier(Modifier::BOLD))
        } else {
            ("  ", Theme::dim())
        };

        let line = Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(*label, style),
        ]);

        f.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), *item_area);
    }
}

fn draw_hint(f: &mut Frame, area: Rect) {
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("↑↓ / j k", Theme::dim()),
        Span::styled("  navigate    ", Theme::muted()),
        Span::styled("enter", Theme::dim()),
        Span::styled("  select    ", Theme::muted()),
        Span::styled("q", Theme::dim()),
        Span::styled("  quit", Theme::muted()),
    ]))
    .alignment(Alignment::Center);

    f.render_widget(hint, area);
}

#[cfg(test)]
mod tests {
    use recommender_core::{Catalog, RecommenderConfig};

    use super::*;

    fn menu() -> MenuState {
        let config = RecommenderConfig {
            seed: Some(1),
            ..RecommenderConfig::default()
        };
        let rec = Recommender::from_config(Catalog::pcmb(), &config).unwrap();
        MenuState::new(Rc::new(rec), 3)
    }

    #[test]
    fn enter_on_first_item_opens_form() {
        let mut m = menu();
        assert!(matches!(
            handle_key(&mut m, KeyCode::Enter),
            Action::Transition(Screen::Recommend(_))
        ));
    }

    #[test]
    fn selection_is_clamped() {
        let mut m = menu();
        handle_key(&mut m, KeyCode::Up);
        assert_eq!(m.selected, 0);
        handle_key(&mut m, KeyCode::Down);
        handle_key(&mut m, KeyCode::Down);
        assert_eq!(m.selected, 1);
        assert!(matches!(handle_key(&mut m, KeyCode::Enter), Action::Quit));
    }
}
