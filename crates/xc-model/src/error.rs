use thiserror::Error;

/// Errors raised while deriving paces, places and team scores.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// A time field does not match `H:MM:SS` or `MM:SS`.
    #[error("invalid time '{value}': {reason}")]
    InvalidTime { value: String, reason: String },

    /// A record references a course absent from the registry.
    #[error("unknown course '{course}'")]
    UnknownCourse { course: String },

    /// Pace ranking was requested for a record without a course.
    #[error("runner '{runner}' has no course; pace cannot be computed")]
    MissingCourse { runner: String },

    /// Course distances must be finite and positive.
    #[error("invalid distance {miles} for course '{course}'")]
    InvalidDistance { course: String, miles: f64 },

    /// A team score needs at least one scoring runner.
    #[error("scorers per team must be at least 1, got {scorers}")]
    InvalidScorerCount { scorers: usize },

    /// A manual reorder addressed a row that does not exist.
    #[error("row {index} is out of range for {len} ranked runner(s)")]
    RowOutOfRange { index: usize, len: usize },
}

impl ScoringError {
    pub(crate) fn invalid_time(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidTime {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoringError>;
