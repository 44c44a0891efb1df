use ratatui::{widgets::Block, Frame};

use crate::state::model::{Focus, RecommendView};

use super::{layout, theme::Theme, widgets};

/// Draws the recommendation form, its results and the event log.
pub fn draw(f: &mut Frame, view: &RecommendView) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (header_area, form_area, results_area, logs_area) = layout::vertical(area);
    let (student_area, subject_area, button_area) = layout::form(form_area);

    f.render_widget(widgets::header(view), header_area);

    f.render_widget(
        widgets::selector(
            "Select Student",
            view.selected_student(),
            widgets::is_focused(view, Focus::Student),
        ),
        student_area,
    );
    f.render_widget(
        widgets::selector(
            "Select Subject",
            view.selected_subject(),
            widgets::is_focused(view, Focus::Subject),
        ),
        subject_area,
    );
    f.render_widget(
        widgets::button(widgets::is_focused(view, Focus::Button)),
        button_area,
    );

    f.render_widget(widgets::results(view), results_area);
    f.render_widget(widgets::logs(view), logs_area);
}
