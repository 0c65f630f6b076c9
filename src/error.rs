use std::fmt;

/// Errors surfaced by the timer and its formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// The timer cannot run as configured (no display sink, or the host
    /// refused to schedule the tick).
    Configuration(String),
    /// A negative duration was handed to the formatter.
    InvalidInput(i64),
}

impl TimerError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "timer configuration error: {}", msg),
            Self::InvalidInput(ms) => write!(f, "invalid duration: {} ms is negative", ms),
        }
    }
}

impl std::error::Error for TimerError {}
