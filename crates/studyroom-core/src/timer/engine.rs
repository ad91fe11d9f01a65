//! Countdown timer implementation.
//!
//! The timer is a tick-driven state machine. It does not use internal
//! threads or read the clock - the caller is responsible for calling
//! `tick()` once per second while the timer view is active. Each tick
//! subtracts exactly one second, so accuracy depends on tick delivery.
//!
//! ## State Transitions
//!
//! ```text
//! Stopped -> Running -> (Paused -> Running)* -> Finished
//!    ^                                             |
//!    +-------------- stop() / configure() ---------+
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = CountdownTimer::new(25 * 60)?;
//! timer.start();
//! // In a loop:
//! timer.tick(); // Returns Some(Event::TimerCompleted) when time runs out
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;

/// Default focus length, 25 minutes.
pub const DEFAULT_TOTAL_SECS: u64 = 25 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Stopped,
    Running,
    Paused,
    Finished,
}

/// Focus countdown.
///
/// The state is derived from `remaining_secs`, `total_secs` and `running`
/// rather than stored, so the three fields cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownTimer {
    total_secs: u64,
    remaining_secs: u64,
    running: bool,
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self {
            total_secs: DEFAULT_TOTAL_SECS,
            remaining_secs: DEFAULT_TOTAL_SECS,
            running: false,
        }
    }
}

impl CountdownTimer {
    /// Create a stopped timer of `total_secs` seconds.
    pub fn new(total_secs: u64) -> Result<Self, ValidationError> {
        check_total(total_secs)?;
        Ok(Self {
            total_secs,
            remaining_secs: total_secs,
            running: false,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        if self.remaining_secs == 0 {
            TimerState::Finished
        } else if self.running {
            TimerState::Running
        } else if self.remaining_secs >= self.total_secs {
            TimerState::Stopped
        } else {
            TimerState::Paused
        }
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// 0.0 .. 1.0 share of the countdown still remaining.
    pub fn fraction_remaining(&self) -> f64 {
        if self.total_secs == 0 {
            return 0.0;
        }
        self.remaining_secs as f64 / self.total_secs as f64
    }

    /// Remaining time as `mm:ss`.
    pub fn label(&self) -> String {
        format_mm_ss(self.remaining_secs)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state(),
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs,
            fraction_remaining: self.fraction_remaining(),
            label: self.label(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Set a new duration. Only allowed while stopped or finished.
    pub fn configure(&mut self, total_secs: u64) -> Result<Event, ValidationError> {
        check_total(total_secs)?;
        match self.state() {
            TimerState::Stopped | TimerState::Finished => {
                self.total_secs = total_secs;
                self.remaining_secs = total_secs;
                self.running = false;
                tracing::debug!(total_secs, "timer configured");
                Ok(Event::TimerConfigured {
                    total_secs,
                    at: Utc::now(),
                })
            }
            state => Err(ValidationError::invalid(
                "timer",
                format!("cannot change duration while {state:?}"),
            )),
        }
    }

    pub fn start(&mut self) -> Option<Event> {
        match self.state() {
            TimerState::Stopped | TimerState::Paused => {
                self.running = true;
                tracing::debug!(remaining_secs = self.remaining_secs, "timer started");
                Some(Event::TimerStarted {
                    remaining_secs: self.remaining_secs,
                    total_secs: self.total_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Running | TimerState::Finished => None,
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        match self.state() {
            TimerState::Running => {
                self.running = false;
                tracing::debug!(remaining_secs = self.remaining_secs, "timer paused");
                Some(Event::TimerPaused {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Return to `Stopped` with the full duration remaining.
    pub fn reset(&mut self) -> Event {
        self.running = false;
        self.remaining_secs = self.total_secs;
        tracing::debug!(total_secs = self.total_secs, "timer reset");
        Event::TimerReset {
            total_secs: self.total_secs,
            at: Utc::now(),
        }
    }

    /// Alias of [`reset`](Self::reset).
    pub fn stop(&mut self) -> Event {
        self.reset()
    }

    /// Advance by one second. Returns `Some(Event::TimerCompleted)` on the
    /// tick that reaches zero.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state() != TimerState::Running {
            return None;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            self.running = false;
            tracing::info!(total_secs = self.total_secs, "focus countdown finished");
            return Some(Event::TimerCompleted {
                total_secs: self.total_secs,
                at: Utc::now(),
            });
        }
        None
    }
}

fn check_total(total_secs: u64) -> Result<(), ValidationError> {
    if total_secs == 0 {
        return Err(ValidationError::invalid("total_secs", "must be greater than zero"));
    }
    Ok(())
}

pub fn format_mm_ss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_pause_resume() {
        let mut timer = CountdownTimer::default();
        assert_eq!(timer.state(), TimerState::Stopped);

        assert!(timer.start().is_some());
        assert_eq!(timer.state(), TimerState::Running);
        assert!(timer.start().is_none());

        timer.tick();
        assert!(timer.pause().is_some());
        assert_eq!(timer.state(), TimerState::Paused);
        assert!(timer.pause().is_none());

        assert!(timer.start().is_some());
        assert_eq!(timer.state(), TimerState::Running);
    }

    #[test]
    fn pause_before_first_tick_reads_as_stopped() {
        let mut timer = CountdownTimer::new(10).unwrap();
        timer.start();
        timer.pause();
        assert_eq!(timer.state(), TimerState::Stopped);
        assert_eq!(timer.remaining_secs(), 10);
    }

    #[test]
    fn tick_is_noop_unless_running() {
        let mut timer = CountdownTimer::new(10).unwrap();
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_secs(), 10);

        timer.start();
        timer.tick();
        timer.pause();
        timer.tick();
        assert_eq!(timer.remaining_secs(), 9);
    }

    #[test]
    fn completes_once() {
        let mut timer = CountdownTimer::new(3).unwrap();
        timer.start();
        assert!(timer.tick().is_none());
        assert!(timer.tick().is_none());
        assert!(matches!(timer.tick(), Some(Event::TimerCompleted { total_secs: 3, .. })));
        assert_eq!(timer.state(), TimerState::Finished);
        assert!(timer.tick().is_none());
        assert!(timer.start().is_none());
        assert_eq!(timer.remaining_secs(), 0);
    }

    #[test]
    fn reset_restores_total() {
        let mut timer = CountdownTimer::new(5).unwrap();
        timer.start();
        timer.tick();
        timer.tick();
        assert!(matches!(timer.reset(), Event::TimerReset { total_secs: 5, .. }));
        assert_eq!(timer.state(), TimerState::Stopped);
        assert_eq!(timer.remaining_secs(), 5);
        assert!(!timer.is_running());
    }

    #[test]
    fn configure_only_when_stopped_or_finished() {
        let mut timer = CountdownTimer::new(2).unwrap();
        assert!(timer.configure(60).is_ok());
        assert_eq!(timer.total_secs(), 60);

        timer.start();
        assert!(timer.configure(30).is_err());
        timer.tick();
        timer.pause();
        assert!(timer.configure(30).is_err());
        assert_eq!(timer.total_secs(), 60);
        assert_eq!(timer.remaining_secs(), 59);

        timer.reset();
        assert!(timer.configure(0).is_err());
        assert!(timer.configure(1).is_ok());
        timer.start();
        timer.tick();
        assert_eq!(timer.state(), TimerState::Finished);
        assert!(timer.configure(90).is_ok());
        assert_eq!(timer.state(), TimerState::Stopped);
        assert_eq!(timer.remaining_secs(), 90);
    }

    #[test]
    fn label_and_fraction() {
        let mut timer = CountdownTimer::new(1500).unwrap();
        assert_eq!(timer.label(), "25:00");
        assert_eq!(timer.fraction_remaining(), 1.0);
        timer.start();
        for _ in 0..751 {
            timer.tick();
        }
        assert_eq!(timer.label(), "12:29");
        assert!((timer.fraction_remaining() - 749.0 / 1500.0).abs() < 1e-12);
        assert_eq!(format_mm_ss(7200), "120:00");
        assert_eq!(format_mm_ss(65), "01:05");
    }

    #[test]
    fn fraction_guards_zero_total() {
        let timer: CountdownTimer =
            serde_json::from_str(r#"{"total_secs":0,"remaining_secs":0,"running":false}"#).unwrap();
        assert_eq!(timer.fraction_remaining(), 0.0);
    }

    #[test]
    fn snapshot_returns_valid_event() {
        let timer = CountdownTimer::default();
        match timer.snapshot() {
            Event::StateSnapshot {
                state,
                remaining_secs,
                label,
                ..
            } => {
                assert_eq!(state, TimerState::Stopped);
                assert_eq!(remaining_secs, 1500);
                assert_eq!(label, "25:00");
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }
}
