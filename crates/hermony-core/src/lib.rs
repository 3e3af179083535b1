//! # Hermony Core Library
//!
//! This library provides the core business logic for the Hermony smart
//! balance scheduler. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with any GUI
//! surface being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **No-Zone Generator**: Expands recurring protected-time rules into
//!   concrete calendar events over an eight-week horizon
//! - **Health Evaluator**: A pure function over the event list that flags
//!   meeting streaks, meeting overload, and no-zone violations
//! - **Summary Aggregator**: Derives daily work/life totals and ratio
//! - **Balance Planner**: Single owner of events and preferences; all
//!   mutations go through it
//! - **Learning Period**: A wall-clock countdown state machine that requires
//!   the caller to periodically invoke `tick()` for progress updates
//!
//! ## Key Components
//!
//! - [`BalancePlanner`]: Schedule state owner and mutation surface
//! - [`Preferences`]: User limits and no-zone rules
//! - [`Finding`]: One schedule-health observation with a severity
//! - [`CalendarSource`]: Trait for calendar providers

pub mod calendar;
pub mod error;
pub mod event;
pub mod health;
pub mod learning;
pub mod no_zone;
pub mod notify;
pub mod planner;
pub mod preferences;
pub mod summary;

pub use calendar::{CalendarSource, MockCalendar};
pub use error::{CoreError, Result, ValidationError};
pub use event::{CalendarEvent, EventKind};
pub use health::{evaluate, Finding, Severity};
pub use learning::{LearningEvent, LearningPeriod, LearningState};
pub use no_zone::{expand, start_of_week, NO_ZONE_TITLE, WEEKS_TO_GENERATE};
pub use notify::{dispatch, ConsoleSink, MemorySink, NotificationSink};
pub use planner::{BalancePlanner, EventDraft};
pub use preferences::{NoZoneRule, Preferences, TimeOfDay, WorkHours};
pub use summary::{summarize, DailySummary, WorkLifeRatio};
