//! No-zone rule expansion into concrete calendar events.
//!
//! Rules describe weekly protected windows; the expander turns them into
//! `CalendarEvent` instances over a rolling 8-week horizon. Instance ids are
//! derived from the rule id and week offset, so regenerating from the same
//! rule set always yields the same id set.

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};

use crate::event::{CalendarEvent, EventKind};
use crate::preferences::NoZoneRule;

/// Number of weeks of instances to generate, starting with the current week.
pub const WEEKS_TO_GENERATE: usize = 8;

/// Title carried by every generated no-zone instance.
pub const NO_ZONE_TITLE: &str = "No-Zone Time (Protected)";

/// Midnight at the start of the week containing `now` (weeks start Sunday).
pub fn start_of_week(now: DateTime<Utc>) -> DateTime<Utc> {
    let days_back = now.weekday().num_days_from_sunday() as i64;
    let date = (now - Duration::days(days_back)).date_naive();
    date.and_hms_opt(0, 0, 0)
        .map(|dt| Utc.from_utc_datetime(&dt))
        // Midnight always exists in UTC.
        .unwrap_or(now)
}

/// Expand no-zone rules into event instances for the horizon starting at
/// the current week of `now`.
///
/// Non-recurring rules spawn an instance only in the first generated week;
/// recurring rules spawn one per week. Output order is deterministic: rules
/// in input order, weeks ascending.
pub fn expand(rules: &[NoZoneRule], now: DateTime<Utc>) -> Vec<CalendarEvent> {
    let week_start = start_of_week(now);
    let mut events = Vec::new();

    for rule in rules {
        for week_offset in 0..WEEKS_TO_GENERATE {
            if week_offset == 0 || rule.recurring {
                if let Some(event) = instance_for(rule, week_start, week_offset) {
                    events.push(event);
                }
            }
        }
    }

    events
}

/// Build the concrete instance of `rule` for one week offset.
fn instance_for(
    rule: &NoZoneRule,
    week_start: DateTime<Utc>,
    week_offset: usize,
) -> Option<CalendarEvent> {
    let day = week_start
        + Duration::weeks(week_offset as i64)
        + Duration::days(rule.day_of_week as i64);

    let start = day
        .with_hour(rule.start.hour())?
        .with_minute(rule.start.minute())?;
    let end = day.with_hour(rule.end.hour())?.with_minute(rule.end.minute())?;

    Some(CalendarEvent {
        id: format!("no-zone-{}-week-{}", rule.id, week_offset),
        title: NO_ZONE_TITLE.to_string(),
        start,
        end,
        kind: EventKind::NoZone,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::TimeOfDay;
    use chrono::Weekday;
    use proptest::prelude::*;

    fn rule(id: &str, day: u8, start: &str, end: &str, recurring: bool) -> NoZoneRule {
        NoZoneRule::try_new(
            id,
            day,
            start.parse::<TimeOfDay>().unwrap(),
            end.parse::<TimeOfDay>().unwrap(),
            recurring,
        )
        .unwrap()
    }

    #[test]
    fn test_start_of_week_is_sunday_midnight() {
        let now = Utc::now();
        let ws = start_of_week(now);
        assert_eq!(ws.weekday(), Weekday::Sun);
        assert_eq!((ws.hour(), ws.minute(), ws.second()), (0, 0, 0));
        assert!(ws <= now);
        assert!(now - ws < Duration::weeks(1));
    }

    #[test]
    fn test_recurring_rule_spawns_one_per_week() {
        let rules = vec![rule("1", 1, "12:00", "13:00", true)];
        let events = expand(&rules, Utc::now());
        assert_eq!(events.len(), WEEKS_TO_GENERATE);
        assert!(events.iter().all(|e| e.kind == EventKind::NoZone));
        assert!(events.iter().all(|e| e.title == NO_ZONE_TITLE));
    }

    #[test]
    fn test_non_recurring_rule_spawns_once() {
        let rules = vec![rule("once", 3, "18:00", "21:00", false)];
        let events = expand(&rules, Utc::now());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "no-zone-once-week-0");
    }

    #[test]
    fn test_instance_ids_encode_rule_and_week() {
        let rules = vec![rule("abc", 5, "16:00", "23:59", true)];
        let events = expand(&rules, Utc::now());
        let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
        for (offset, id) in ids.iter().enumerate() {
            assert_eq!(*id, format!("no-zone-abc-week-{offset}"));
        }
    }

    #[test]
    fn test_instance_lands_on_rule_weekday_with_rule_times() {
        let now = Utc::now();
        let rules = vec![rule("1", 1, "12:00", "13:00", true)];
        let events = expand(&rules, now);

        for event in &events {
            assert_eq!(event.start.weekday(), Weekday::Mon);
            assert_eq!((event.start.hour(), event.start.minute()), (12, 0));
            assert_eq!((event.end.hour(), event.end.minute()), (13, 0));
        }
        // First instance falls inside the current week.
        assert!(events[0].start - start_of_week(now) < Duration::weeks(1));
    }

    #[test]
    fn test_regeneration_is_idempotent() {
        let rules = vec![
            rule("1", 1, "12:00", "13:00", true),
            rule("2", 5, "16:00", "23:59", true),
            rule("3", 0, "08:00", "10:30", false),
        ];
        let anchor = Utc::now();
        let first = expand(&rules, anchor);
        let second = expand(&rules, anchor);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.start, b.start);
            assert_eq!(a.end, b.end);
        }
    }

    proptest! {
        #[test]
        fn prop_expansion_deterministic_and_counted(
            day in 0u8..7,
            start_hour in 0u32..23,
            recurring in any::<bool>(),
        ) {
            let start = TimeOfDay::new(start_hour, 0).unwrap();
            let end = TimeOfDay::new(start_hour + 1, 0).unwrap();
            let rules = vec![NoZoneRule::try_new("p", day, start, end, recurring).unwrap()];

            let anchor = Utc::now();
            let first = expand(&rules, anchor);
            let second = expand(&rules, anchor);

            let expected = if recurring { WEEKS_TO_GENERATE } else { 1 };
            prop_assert_eq!(first.len(), expected);

            let first_ids: Vec<_> = first.iter().map(|e| e.id.clone()).collect();
            let second_ids: Vec<_> = second.iter().map(|e| e.id.clone()).collect();
            prop_assert_eq!(first_ids, second_ids);
            for (a, b) in first.iter().zip(second.iter()) {
                prop_assert_eq!(a.start, b.start);
                prop_assert_eq!(a.end, b.end);
            }
        }
    }
}
