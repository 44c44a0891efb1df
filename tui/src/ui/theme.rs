use ratatui::style::{Color, Modifier, Style};

/// Chalkboard theme.
///
/// Base aesthetic:
/// - chalk white foreground on a slate background
/// - amber for the focused form element
/// - green/red for result and error lines
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(24, 38, 34);
    pub const FG_CHALK: Color = Color::Rgb(236, 236, 226);
    pub const FG_DIM: Color = Color::Rgb(170, 180, 170);
    pub const FG_MUTED: Color = Color::Rgb(95, 110, 100);

    pub const ACCENT_AMBER: Color = Color::Rgb(255, 191, 0);
    pub const ACCENT_GREEN: Color = Color::Rgb(120, 220, 120);
    pub const ACCENT_RED: Color = Color::Rgb(255, 90, 90);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG_CHALK).bg(Self::BG)
    }

    /// Panel borders.
    pub fn border() -> Style {
        Style::default().fg(Self::FG_DIM).bg(Self::BG)
    }

    /// Border of the focused panel.
    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_AMBER).bg(Self::BG)
    }

    /// Titles (bold chalk).
    pub fn title() -> Style {
        Style::default()
            .fg(Self::FG_CHALK)
            .add_modifier(Modifier::BOLD)
    }

    /// Regular text.
    pub fn text() -> Style {
        Style::default().fg(Self::FG_CHALK)
    }

    /// Secondary/dim text.
    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    /// Muted/disabled text.
    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Focused selector value or button label.
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn ok() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }
}
