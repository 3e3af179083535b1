//! Balance planner: the single logical owner of the event list and
//! preferences.
//!
//! All mutations are full-value replacements -- events are replaced by id,
//! never edited in place, and preference updates swap the whole value. That
//! keeps the state torn-read-free if a caller ever moves it behind a lock.

use chrono::{DateTime, Utc};

use crate::calendar::CalendarSource;
use crate::error::{CoreError, Result, ValidationError};
use crate::event::{CalendarEvent, EventKind};
use crate::health::{self, Finding};
use crate::no_zone;
use crate::preferences::{NoZoneRule, Preferences};
use crate::summary::{self, DailySummary};

/// User-submitted event data, validated on insertion.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub kind: EventKind,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// In-memory holder of the schedule state.
#[derive(Debug, Clone, Default)]
pub struct BalancePlanner {
    events: Vec<CalendarEvent>,
    preferences: Preferences,
}

impl BalancePlanner {
    /// Create a planner with default preferences and no events.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a planner with the given preferences.
    pub fn with_preferences(preferences: Preferences) -> Self {
        Self {
            events: Vec::new(),
            preferences,
        }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Replace the event list with the source's events, then regenerate
    /// no-zone instances so the protected windows stay on the calendar.
    pub fn sync_from(&mut self, source: &dyn CalendarSource, now: DateTime<Utc>) {
        self.events = source.fetch_events();
        self.refresh_no_zone_events(now);
    }

    /// Validate and insert a user-submitted event under a fresh id.
    ///
    /// Rejections (empty title, end not after start) are the inline-error
    /// path: the caller surfaces them as error findings, they never panic.
    pub fn add_event(&mut self, draft: EventDraft) -> Result<CalendarEvent, ValidationError> {
        let event = CalendarEvent::try_new(
            uuid::Uuid::new_v4().to_string(),
            draft.title,
            draft.start,
            draft.end,
            draft.kind,
        )?;
        self.events.push(event.clone());
        Ok(event)
    }

    /// Replace the event with the given id, keeping the id stable.
    pub fn replace_event(&mut self, id: &str, draft: EventDraft) -> Result<CalendarEvent> {
        let replacement =
            CalendarEvent::try_new(id, draft.title, draft.start, draft.end, draft.kind)?;
        let slot = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CoreError::UnknownEvent(id.to_string()))?;
        self.events[slot] = replacement.clone();
        Ok(replacement)
    }

    /// Remove the event with the given id.
    pub fn remove_event(&mut self, id: &str) -> Result<CalendarEvent> {
        let slot = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CoreError::UnknownEvent(id.to_string()))?;
        Ok(self.events.remove(slot))
    }

    /// Swap in a whole new preference set and regenerate no-zone instances.
    pub fn set_preferences(
        &mut self,
        preferences: Preferences,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        preferences.validate()?;
        self.preferences = preferences;
        self.refresh_no_zone_events(now);
        Ok(())
    }

    /// Add a no-zone rule and spawn its instances.
    pub fn add_no_zone_rule(
        &mut self,
        rule: NoZoneRule,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        rule.validate()?;
        self.preferences.no_zone_times.push(rule);
        self.refresh_no_zone_events(now);
        Ok(())
    }

    /// Remove a no-zone rule; the instances it spawned disappear with it.
    pub fn remove_no_zone_rule(&mut self, rule_id: &str, now: DateTime<Utc>) -> Result<()> {
        let before = self.preferences.no_zone_times.len();
        self.preferences.no_zone_times.retain(|r| r.id != rule_id);
        if self.preferences.no_zone_times.len() == before {
            return Err(CoreError::UnknownRule(rule_id.to_string()));
        }
        self.refresh_no_zone_events(now);
        Ok(())
    }

    /// Drop all no-zone instances and re-expand the current rules.
    ///
    /// Instance ids are a pure function of the rule set, so refreshing with
    /// unchanged rules is a no-op on the id set.
    pub fn refresh_no_zone_events(&mut self, now: DateTime<Utc>) {
        self.events.retain(|e| !e.is_no_zone());
        self.events
            .extend(no_zone::expand(&self.preferences.no_zone_times, now));
    }

    /// Run the schedule-health evaluator over the current state.
    pub fn check_health(&self) -> Vec<Finding> {
        health::evaluate(&self.events, &self.preferences)
    }

    /// Compute the daily work/life summary for the current state.
    pub fn daily_summary(&self) -> DailySummary {
        summary::summarize(&self.events)
    }
}
