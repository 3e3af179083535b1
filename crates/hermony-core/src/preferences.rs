//! User preferences: work hours, no-zone rules, and balance thresholds.
//!
//! There is a single `Preferences` value per session. Preference edits
//! replace the whole value; the engine never mutates it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Short day names indexed by day-of-week (0 = Sunday).
pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A clock time within a day, minute resolution.
///
/// Serialized as a zero-padded `"HH:MM"` string; parsing validates bounds so
/// malformed time strings never reach the generator or evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Create a time of day, validating `hour < 24` and `minute < 60`.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        if hour > 23 || minute > 59 {
            return Err(ValidationError::InvalidTimeOfDay(format!("{hour}:{minute}")));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Minutes since midnight, for ordering and window arithmetic.
    pub fn minutes_from_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidTimeOfDay(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

/// Daily work-hour bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHours {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// A recurring or one-off window the user marks as protected from work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoZoneRule {
    pub id: String,
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: u8,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    /// Non-recurring rules spawn an instance only in the current week.
    pub recurring: bool,
}

impl NoZoneRule {
    /// Create a rule, validating the day index and `start < end`.
    pub fn try_new(
        id: impl Into<String>,
        day_of_week: u8,
        start: TimeOfDay,
        end: TimeOfDay,
        recurring: bool,
    ) -> Result<Self, ValidationError> {
        let rule = Self {
            id: id.into(),
            day_of_week,
            start,
            end,
            recurring,
        };
        rule.validate()?;
        Ok(rule)
    }

    /// Check the rule invariants: `day_of_week <= 6` and `start < end`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.day_of_week > 6 {
            return Err(ValidationError::InvalidDayOfWeek(self.day_of_week));
        }
        if self.start >= self.end {
            return Err(ValidationError::InvalidRuleWindow {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Short name of the rule's weekday.
    pub fn day_name(&self) -> &'static str {
        DAY_NAMES.get(self.day_of_week as usize).copied().unwrap_or("?")
    }
}

impl fmt::Display for NoZoneRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.day_name(), self.start, self.end)?;
        if self.recurring {
            write!(f, " (recurring)")?;
        }
        Ok(())
    }
}

/// Schedule-balance preferences for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub work_hours: WorkHours,
    pub no_zone_times: Vec<NoZoneRule>,
    /// Streak-warning threshold in fractional hours. Must be positive.
    pub max_consecutive_meeting_hours: f64,
    /// Daily meeting-count threshold. Must be positive.
    pub max_meetings_per_day: u32,
    /// A gap of at least this many minutes resets a meeting streak.
    pub min_break_duration: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        // Matches the product's first-run defaults: lunch on Monday and
        // Friday evenings protected, 3h streak limit, 5 meetings, 15 min break.
        Self {
            work_hours: WorkHours {
                start: TimeOfDay { hour: 9, minute: 0 },
                end: TimeOfDay { hour: 17, minute: 0 },
            },
            no_zone_times: vec![
                NoZoneRule {
                    id: "1".to_string(),
                    day_of_week: 1,
                    start: TimeOfDay { hour: 12, minute: 0 },
                    end: TimeOfDay { hour: 13, minute: 0 },
                    recurring: true,
                },
                NoZoneRule {
                    id: "2".to_string(),
                    day_of_week: 5,
                    start: TimeOfDay { hour: 16, minute: 0 },
                    end: TimeOfDay { hour: 23, minute: 59 },
                    recurring: true,
                },
            ],
            max_consecutive_meeting_hours: 3.0,
            max_meetings_per_day: 5,
            min_break_duration: 15,
        }
    }
}

impl Preferences {
    /// Check all preference invariants, including every no-zone rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_consecutive_meeting_hours <= 0.0 {
            return Err(ValidationError::InvalidValue {
                field: "max_consecutive_meeting_hours".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if self.max_meetings_per_day == 0 {
            return Err(ValidationError::InvalidValue {
                field: "max_meetings_per_day".to_string(),
                message: "must be positive".to_string(),
            });
        }
        for rule in &self.no_zone_times {
            rule.validate()?;
        }
        Ok(())
    }
}
