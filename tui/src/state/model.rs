/// Form element that currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Student,
    Subject,
    Button,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Student => Focus::Subject,
            Focus::Subject => Focus::Button,
            Focus::Button => Focus::Student,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Student => Focus::Button,
            Focus::Subject => Focus::Student,
            Focus::Button => Focus::Subject,
        }
    }
}

/// A single log entry shown in the event panel.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub level: &'static str,
    pub message: String,
}

/// Outcome of the last triggered recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendations {
    pub student: String,
    pub subjects: Vec<String>,
}

/// Full snapshot rendered by the TUI.
#[derive(Debug, Clone)]
pub struct RecommendView {
    pub students: Vec<String>,
    pub subjects: Vec<String>,
    pub student: usize,
    pub subject: usize,
    pub focus: Focus,
    pub top_n: usize,
    pub ratings: usize,
    pub results: Option<Recommendations>,
    pub logs: Vec<LogLine>,
}

impl RecommendView {
    pub fn selected_student(&self) -> &str {
        &self.students[self.student]
    }

    pub fn selected_subject(&self) -> &str {
        &self.subjects[self.subject]
    }
}
