use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::TimerState;

/// Every timer state change produces an Event.
/// The presentation layer polls for them after each command or tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerConfigured {
        total_secs: u64,
        at: DateTime<Utc>,
    },
    TimerStarted {
        remaining_secs: u64,
        total_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        total_secs: u64,
        at: DateTime<Utc>,
    },
    /// Countdown reached zero. Emitted once per run.
    TimerCompleted {
        total_secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        remaining_secs: u64,
        total_secs: u64,
        fraction_remaining: f64,
        label: String,
        at: DateTime<Utc>,
    },
}
