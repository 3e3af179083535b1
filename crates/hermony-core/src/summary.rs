//! Daily work/life summary derived from the event list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::event::{CalendarEvent, EventKind};

/// Work-to-personal hour ratio.
///
/// `Undefined` stands in for the mathematically infinite ratio when no
/// personal time is scheduled; it renders as the infinity symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum WorkLifeRatio {
    Ratio(f64),
    Undefined,
}

impl fmt::Display for WorkLifeRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ratio(value) => write!(f, "{value}"),
            Self::Undefined => write!(f, "∞"),
        }
    }
}

/// Derived snapshot of a day's balance; recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Total work hours, rounded to one decimal.
    pub work_hours: f64,
    /// Total personal hours, rounded to one decimal.
    pub personal_hours: f64,
    /// Count of all work events, unaffected by any evaluator early exit.
    pub meeting_count: usize,
    pub work_life_ratio: WorkLifeRatio,
}

/// Compute the daily summary from the full event list.
///
/// Hour totals use `f64::round` at one decimal, i.e. half-away-from-zero.
pub fn summarize(events: &[CalendarEvent]) -> DailySummary {
    let work_hours: f64 = events
        .iter()
        .filter(|e| e.kind == EventKind::Work)
        .map(|e| e.duration_hours())
        .sum();
    let personal_hours: f64 = events
        .iter()
        .filter(|e| e.kind == EventKind::Personal)
        .map(|e| e.duration_hours())
        .sum();
    let meeting_count = events.iter().filter(|e| e.kind == EventKind::Work).count();

    let work_life_ratio = if personal_hours > 0.0 {
        WorkLifeRatio::Ratio(round1(work_hours / personal_hours))
    } else {
        WorkLifeRatio::Undefined
    };

    DailySummary {
        work_hours: round1(work_hours),
        personal_hours: round1(personal_hours),
        meeting_count,
        work_life_ratio,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
