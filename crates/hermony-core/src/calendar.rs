//! Calendar source seam.
//!
//! The engine is agnostic to where events come from; anything that can
//! produce `CalendarEvent`s satisfies the contract. The only implementation
//! here is the demo calendar the product ships with -- a real provider
//! integration would plug in behind the same trait.

use chrono::{DateTime, Timelike, Utc};

use crate::event::{CalendarEvent, EventKind};

/// Supplier of calendar events.
pub trait CalendarSource {
    fn fetch_events(&self) -> Vec<CalendarEvent>;
}

/// Static demo calendar: three work meetings and one personal block,
/// anchored to a given day.
#[derive(Debug, Clone, Copy)]
pub struct MockCalendar {
    day: DateTime<Utc>,
}

impl MockCalendar {
    /// Anchor the demo events to the given day.
    pub fn new(day: DateTime<Utc>) -> Self {
        Self { day }
    }

    /// Anchor the demo events to today.
    pub fn today() -> Self {
        Self { day: Utc::now() }
    }

    fn at(&self, hour: u32, minute: u32) -> Option<DateTime<Utc>> {
        self.day
            .with_hour(hour)?
            .with_minute(minute)?
            .with_second(0)?
            .with_nanosecond(0)
    }

    fn event(
        &self,
        id: &str,
        title: &str,
        kind: EventKind,
        start: (u32, u32),
        end: (u32, u32),
    ) -> Option<CalendarEvent> {
        Some(CalendarEvent {
            id: id.to_string(),
            title: title.to_string(),
            start: self.at(start.0, start.1)?,
            end: self.at(end.0, end.1)?,
            kind,
        })
    }
}

impl CalendarSource for MockCalendar {
    fn fetch_events(&self) -> Vec<CalendarEvent> {
        [
            self.event("1", "Team Meeting", EventKind::Work, (10, 0), (11, 0)),
            self.event("2", "Client Call", EventKind::Work, (11, 30), (12, 30)),
            self.event("3", "Project Planning", EventKind::Work, (14, 0), (16, 0)),
            self.event("4", "Family Time", EventKind::Personal, (18, 0), (20, 0)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_calendar_shape() {
        let events = MockCalendar::today().fetch_events();
        assert_eq!(events.len(), 4);

        let work: Vec<_> = events.iter().filter(|e| e.kind == EventKind::Work).collect();
        assert_eq!(work.len(), 3);
        assert_eq!(work[0].title, "Team Meeting");

        let personal: Vec<_> = events
            .iter()
            .filter(|e| e.kind == EventKind::Personal)
            .collect();
        assert_eq!(personal.len(), 1);
        assert_eq!(personal[0].duration_minutes(), 120);
    }

    #[test]
    fn test_mock_calendar_is_well_formed() {
        for event in MockCalendar::today().fetch_events() {
            assert!(event.end > event.start);
            assert!(!event.title.is_empty());
        }
    }
}
