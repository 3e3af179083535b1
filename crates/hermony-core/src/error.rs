//! Core error types for hermony-core.
//!
//! The engine itself has no fallible I/O; errors here are input validation
//! failures that callers surface before events or rules reach the engine.

use thiserror::Error;

use crate::preferences::TimeOfDay;

/// Core error type for hermony-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Referenced event does not exist
    #[error("Unknown event id: {0}")]
    UnknownEvent(String),

    /// Referenced no-zone rule does not exist
    #[error("Unknown no-zone rule id: {0}")]
    UnknownRule(String),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Invalid time range
    #[error("Invalid time range: end ({end}) must be after start ({start})")]
    InvalidTimeRange {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    /// Event submitted without a title
    #[error("Event title must not be empty")]
    EmptyTitle,

    /// Badly formatted clock time
    #[error("Invalid time of day '{0}': expected HH:MM")]
    InvalidTimeOfDay(String),

    /// No-zone window is inverted or empty
    #[error("Invalid no-zone window: {start} must be before {end}")]
    InvalidRuleWindow { start: TimeOfDay, end: TimeOfDay },

    /// Day of week outside 0..=6
    #[error("Invalid day of week: {0} (expected 0 = Sunday .. 6 = Saturday)")]
    InvalidDayOfWeek(u8),

    /// Invalid preference value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
