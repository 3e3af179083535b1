//! Calendar event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Kind of calendar event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Work meeting or focus block
    Work,
    /// Personal time
    Personal,
    /// Protected no-zone instance, spawned from a NoZoneRule
    #[serde(rename = "no-zone")]
    NoZone,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::NoZone => "no-zone",
        }
    }
}

/// A single event on the calendar.
///
/// Events are never mutated in place; updates replace the entry by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: EventKind,
}

impl CalendarEvent {
    /// Create a new calendar event
    ///
    /// # Panics
    /// Panics if the title is empty or `end <= start`. Use
    /// [`try_new`](Self::try_new) for a non-panicking version.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        kind: EventKind,
    ) -> Self {
        Self::try_new(id, title, start, end, kind)
            .expect("CalendarEvent::new: end must be after start and title non-empty")
    }

    /// Create a new calendar event, returning a Result
    ///
    /// # Errors
    /// Returns an error if the title is empty or `end <= start`
    pub fn try_new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        kind: EventKind,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if end <= start {
            return Err(ValidationError::InvalidTimeRange { start, end });
        }
        Ok(Self {
            id: id.into(),
            title,
            start,
            end,
            kind,
        })
    }

    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Get duration in fractional hours
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_minutes() as f64 / 60.0
    }

    /// Check if this event overlaps with another.
    ///
    /// Intervals are closed-open: `[s1, e1)` and `[s2, e2)` overlap iff
    /// `s1 < e2 && s2 < e1`, so abutting events do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn is_no_zone(&self) -> bool {
        self.kind == EventKind::NoZone
    }
}
