use std::{fmt, io};

/// The result type used across the recommender crate.
pub type Result<T> = std::result::Result<T, RecError>;

/// Errors produced while building the dataset, fitting the models or answering queries.
#[derive(Debug)]
pub enum RecError {
    /// The subject is not part of the catalog.
    UnknownSubject(String),

    /// The student is not part of the catalog.
    UnknownStudent(String),

    /// The catalog has no students or no subjects.
    EmptyCatalog,

    /// A configuration value is out of its valid domain.
    InvalidConfig(String),

    /// The configuration file could not be read.
    Io(io::Error),

    /// The configuration file is not valid JSON for the expected schema.
    Json(serde_json::Error),
}

impl fmt::Display for RecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSubject(id) => write!(f, "unknown subject: {id}"),
            Self::UnknownStudent(id) => write!(f, "unknown student: {id}"),
            Self::EmptyCatalog => write!(f, "the catalog must contain students and subjects"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Json(e) => write!(f, "invalid JSON: {e}"),
        }
    }
}

impl std::error::Error for RecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RecError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for RecError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
