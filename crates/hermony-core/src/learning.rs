//! Learning-period countdown.
//!
//! After first-time setup the scheduler passively observes for a fixed
//! number of days before full analysis is presumed active (simulated only;
//! nothing is actually learned). The countdown is a wall-clock state machine
//! in the same style as a timer engine: no internal threads, the caller
//! invokes `tick()` periodically, and `cancel()` tears it down so no
//! countdown outlives its owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default length of the learning period, in simulated days.
pub const DEFAULT_LEARNING_DAYS: u32 = 14;

/// Demo compression: one simulated day elapses every 10 seconds.
pub const DEMO_DAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningState {
    Idle,
    Active,
    Completed,
    Cancelled,
}

/// State changes emitted by the countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LearningEvent {
    Started {
        days_left: u32,
        at: DateTime<Utc>,
    },
    DayElapsed {
        days_left: u32,
        at: DateTime<Utc>,
    },
    Completed {
        at: DateTime<Utc>,
    },
    Cancelled {
        days_left: u32,
        at: DateTime<Utc>,
    },
}

/// Cancelable learning-period countdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPeriod {
    state: LearningState,
    days_left: u32,
    /// Wall-clock length of one simulated day.
    day_duration_ms: u64,
    /// Timestamp (ms since epoch) of the last tick while active.
    #[serde(default)]
    last_tick_epoch_ms: Option<u64>,
    /// Elapsed wall-clock not yet converted into a full day.
    #[serde(default)]
    carry_ms: u64,
}

impl LearningPeriod {
    /// Create a countdown with the default 14-day period and demo pacing.
    pub fn new() -> Self {
        Self::with_days(DEFAULT_LEARNING_DAYS)
    }

    /// Create a countdown over a custom number of days.
    pub fn with_days(days: u32) -> Self {
        Self {
            state: LearningState::Idle,
            days_left: days,
            day_duration_ms: DEMO_DAY_MS,
            last_tick_epoch_ms: None,
            carry_ms: 0,
        }
    }

    /// Override the wall-clock length of a simulated day (minimum 1 ms).
    pub fn with_day_duration_ms(mut self, ms: u64) -> Self {
        self.day_duration_ms = ms.max(1);
        self
    }

    pub fn state(&self) -> LearningState {
        self.state
    }

    pub fn days_left(&self) -> u32 {
        self.days_left
    }

    pub fn is_active(&self) -> bool {
        self.state == LearningState::Active
    }

    /// Arm the countdown. Only valid from `Idle`.
    pub fn start(&mut self) -> Option<LearningEvent> {
        if self.state != LearningState::Idle || self.days_left == 0 {
            return None;
        }
        self.state = LearningState::Active;
        self.last_tick_epoch_ms = Some(now_ms());
        self.carry_ms = 0;
        Some(LearningEvent::Started {
            days_left: self.days_left,
            at: Utc::now(),
        })
    }

    /// Call periodically. Emits `DayElapsed` as simulated days pass and
    /// `Completed` when the countdown reaches zero. No-op unless active.
    pub fn tick(&mut self) -> Option<LearningEvent> {
        self.tick_at(now_ms())
    }

    /// Deterministic variant of [`tick`](Self::tick) for callers that own
    /// the clock.
    pub fn tick_at(&mut self, now_epoch_ms: u64) -> Option<LearningEvent> {
        if self.state != LearningState::Active {
            return None;
        }

        let last = self.last_tick_epoch_ms.unwrap_or(now_epoch_ms);
        self.carry_ms += now_epoch_ms.saturating_sub(last);
        self.last_tick_epoch_ms = Some(now_epoch_ms);

        let mut elapsed_days = 0;
        while self.carry_ms >= self.day_duration_ms && self.days_left > 0 {
            self.carry_ms -= self.day_duration_ms;
            self.days_left -= 1;
            elapsed_days += 1;
        }

        if self.days_left == 0 {
            self.state = LearningState::Completed;
            self.last_tick_epoch_ms = None;
            return Some(LearningEvent::Completed { at: Utc::now() });
        }

        if elapsed_days > 0 {
            return Some(LearningEvent::DayElapsed {
                days_left: self.days_left,
                at: Utc::now(),
            });
        }

        None
    }

    /// Tear down the countdown. Subsequent ticks are no-ops.
    pub fn cancel(&mut self) -> Option<LearningEvent> {
        if self.state != LearningState::Active {
            return None;
        }
        self.state = LearningState::Cancelled;
        self.last_tick_epoch_ms = None;
        Some(LearningEvent::Cancelled {
            days_left: self.days_left,
            at: Utc::now(),
        })
    }
}

impl Default for LearningPeriod {
    fn default() -> Self {
        Self::new()
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
