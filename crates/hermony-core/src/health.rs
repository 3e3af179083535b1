//! Schedule-health evaluation.
//!
//! A pure, memoryless pass over the event list: re-run it whenever the list
//! or the preferences change. It reports overload patterns (meeting streaks
//! without breaks, too many meetings in a day) and protected-time violations
//! (work events overlapping no-zone instances).

use serde::{Deserialize, Serialize};

use crate::event::{CalendarEvent, EventKind};
use crate::preferences::Preferences;

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Display icon, matching the product's notification styling.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✗",
        }
    }
}

/// An ephemeral judgment about the schedule, consumed by a notification sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub message: String,
    pub severity: Severity,
}

impl Finding {
    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Info }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Success }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Warning }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Error }
    }
}

/// Evaluate schedule health for the given events and preferences.
///
/// Checks, in order:
/// 1. Meeting streaks: work events sorted by start accumulate consecutive
///    hours; a gap of at least `min_break_duration` minutes before the next
///    meeting resets the streak. Only the first streak violation is reported
///    per pass, to avoid flooding the sink.
/// 2. Meeting count: counts every work event, independent of the streak
///    scan's early exit (the two checks are conceptually separate).
/// 3. No-zone violations: every (work, no-zone) overlapping pair is
///    reported, so one long meeting spanning several protected windows
///    produces several findings.
pub fn evaluate(events: &[CalendarEvent], preferences: &Preferences) -> Vec<Finding> {
    let mut findings = Vec::new();

    let mut work: Vec<&CalendarEvent> = events
        .iter()
        .filter(|e| e.kind == EventKind::Work)
        .collect();
    // Stable sort: ties keep input order.
    work.sort_by_key(|e| e.start);

    // 1. Streak scan.
    let mut consecutive_hours = 0.0_f64;
    for (i, event) in work.iter().enumerate() {
        consecutive_hours += event.duration_hours();

        // A sufficient break before the next meeting resets the streak.
        if let Some(next) = work.get(i + 1) {
            let break_minutes = (next.start - event.end).num_minutes();
            if break_minutes >= preferences.min_break_duration as i64 {
                consecutive_hours = 0.0;
            }
        }

        if consecutive_hours >= preferences.max_consecutive_meeting_hours {
            findings.push(Finding::warning(format!(
                "You've been in meetings for {} hours straight. Consider taking a break!",
                consecutive_hours.round()
            )));
            break;
        }
    }

    // 2. Meeting count, over all work events.
    let meeting_count = work.len();
    if meeting_count > preferences.max_meetings_per_day as usize {
        findings.push(Finding::warning(format!(
            "You've scheduled {} meetings today, more than your preferred maximum of {}.",
            meeting_count, preferences.max_meetings_per_day
        )));
    }

    // 3. No-zone violations.
    let no_zones: Vec<&CalendarEvent> = events.iter().filter(|e| e.is_no_zone()).collect();
    for work_event in &work {
        for no_zone in &no_zones {
            if work_event.overlaps(no_zone) {
                findings.push(Finding::error(format!(
                    "You have a meeting scheduled during your protected No-Zone time: {}",
                    work_event.title
                )));
            }
        }
    }

    findings
}
