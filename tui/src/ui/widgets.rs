use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::model::{Focus, RecommendView};

use super::theme::Theme;

pub const PAGE_TITLE: &str = "PCMB Learning Material Recommender";

fn panel(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
        .title_style(Theme::title())
}

pub fn header(view: &RecommendView) -> Paragraph<'_> {
    let line1 = Line::from(Span::styled(PAGE_TITLE, Theme::title()));
    let line2 = Line::from(Span::styled(
        format!(
            "Students: {}  |  Subjects: {}  |  Ratings: {}  |  Top N: {}",
            view.students.len(),
            view.subjects.len(),
            view.ratings,
            view.top_n
        ),
        Theme::dim(),
    ));

    let line3 = Line::from(vec![
        Span::styled("tab / ↑↓", Theme::dim()),
        Span::styled("  focus    ", Theme::muted()),
        Span::styled("←→", Theme::dim()),
        Span::styled("  change    ", Theme::muted()),
        Span::styled("enter", Theme::dim()),
        Span::styled("  recommend    ", Theme::muted()),
        Span::styled("esc", Theme::dim()),
        Span::styled("  menu", Theme::muted()),
    ]);

    Paragraph::new(vec![line1, line2, line3])
        .block(panel("Overview", false))
        .wrap(Wrap { trim: true })
}

/// A `◀ value ▶` selector, arrows only shown while focused.
pub fn selector<'a>(title: &'a str, value: &'a str, focused: bool) -> Paragraph<'a> {
    let (left, right, style) = if focused {
        ("◀ ", " ▶", Theme::focused())
    } else {
        ("  ", "  ", Theme::text())
    };

    let line = Line::from(vec![
        Span::styled(left, Theme::dim()),
        Span::styled(value, style),
        Span::styled(right, Theme::dim()),
    ]);

    Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(panel(title, focused))
}

pub fn button(focused: bool) -> Paragraph<'static> {
    let style = if focused { Theme::focused() } else { Theme::text() };

    Paragraph::new(Span::styled("[ Get Recommendations ]", style))
        .alignment(Alignment::Center)
        .block(panel("Action", focused))
}

pub fn results(view: &RecommendView) -> Paragraph<'_> {
    let lines = match &view.results {
        None => vec![Line::from(Span::styled(
            "Pick a student and a subject, then press the button.",
            Theme::muted(),
        ))],
        Some(recs) => {
            let mut lines = vec![Line::from(Span::styled(
                format!("Recommended Subjects for {}:", recs.student),
                Theme::ok(),
            ))];

            if recs.subjects.is_empty() {
                lines.push(Line::from(Span::styled("(nothing to recommend)", Theme::muted())));
            }
            lines.extend(
                recs.subjects
                    .iter()
                    .map(|s| Line::from(Span::styled(format!("- {s}"), Theme::text()))),
            );
            lines
        }
    };

    Paragraph::new(lines)
        .block(panel("Recommendations", false))
        .wrap(Wrap { trim: true })
}

pub fn logs(view: &RecommendView) -> Paragraph<'_> {
    let tail = view.logs.iter().rev().take(6).rev();

    let lines = tail
        .map(|l| {
            Line::from(vec![
                Span::styled(format!("[{}] ", l.level), level_style(l.level)),
                Span::styled(l.message.as_str(), Theme::dim()),
            ])
        })
        .collect::<Vec<_>>();

    Paragraph::new(lines)
        .block(panel("Events", false))
        .wrap(Wrap { trim: true })
}

pub fn is_focused(view: &RecommendView, focus: Focus) -> bool {
    view.focus == focus
}

fn level_style(level: &str) -> Style {
    match level {
        "ERROR" => Theme::error(),
        _ => Theme::ok(),
    }
}
