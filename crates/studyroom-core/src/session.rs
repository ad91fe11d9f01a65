//! Per-session state and its event handlers.
//!
//! A [`Session`] owns everything the user builds up while the app is open:
//! the current plan, the pending actual-hours form, the satisfaction rating
//! and the focus timer. The presentation layer keeps exactly one instance
//! and feeds it one event at a time. Nothing here outlives the process.

use serde::{Deserialize, Serialize};

use crate::chart::{ComparisonChart, RingProgress};
use crate::error::ValidationError;
use crate::events::Event;
use crate::feedback::{evaluate_plan, FeedbackMessage, SatisfactionRating};
use crate::plan::{generate, parse_subjects, ActualsDraft, StudyPlan};
use crate::storage::Config;
use crate::timer::CountdownTimer;

pub const PLAN_CREATED: &str = "Your study plan has been created!";
pub const ACTUALS_SAVED: &str = "Study time saved.";
pub const NO_PLAN: &str = "Create a study plan first.";
pub const FOCUS_COMPLETE: &str = "Focus session complete! Great job!";

/// User-facing banner produced by a session event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Notification {
    Success(String),
    Error(String),
    /// Success with a celebratory effect.
    Celebrate(String),
}

impl Notification {
    pub fn message(&self) -> &str {
        match self {
            Notification::Success(m) | Notification::Error(m) | Notification::Celebrate(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error(_))
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    plan: Option<StudyPlan>,
    draft: ActualsDraft,
    satisfaction: Option<SatisfactionRating>,
    timer: CountdownTimer,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Session {
    pub fn new(config: Config) -> Self {
        let timer = CountdownTimer::new(config.focus_secs()).unwrap_or_default();
        Self {
            config,
            plan: None,
            draft: ActualsDraft::default(),
            satisfaction: None,
            timer,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn plan(&self) -> Option<&StudyPlan> {
        self.plan.as_ref()
    }

    pub fn draft(&self) -> &ActualsDraft {
        &self.draft
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    pub fn satisfaction(&self) -> Option<SatisfactionRating> {
        self.satisfaction
    }

    // ── Plan ─────────────────────────────────────────────────────────

    /// Handle the plan form submit.
    ///
    /// On any validation failure the previous plan, if one exists, is kept.
    pub fn submit_plan(&mut self, goal: &str, subjects: &str, daily_hours: f64) -> Notification {
        match build_plan(goal, subjects, daily_hours) {
            Ok(plan) => {
                self.draft = ActualsDraft::for_plan(&plan);
                self.plan = Some(plan);
                Notification::Success(PLAN_CREATED.into())
            }
            Err(e) => {
                tracing::debug!("plan rejected: {e}");
                Notification::Error(ValidationError::USER_MESSAGE.into())
            }
        }
    }

    /// Stage an actual-hours edit in the form. The value goes through the
    /// configured widget bounds; returns the staged value.
    pub fn edit_actual(&mut self, index: usize, hours: f64) -> Option<f64> {
        let len = self.plan.as_ref()?.len();
        if index >= len {
            return None;
        }
        let hours = self.config.hours_input().clamp(hours);
        self.draft.set(index, hours);
        Some(hours)
    }

    /// Handle the record form submit: commit every staged edit at once.
    pub fn save_actuals(&mut self) -> Notification {
        match self.plan.as_mut() {
            Some(plan) => {
                self.draft.commit(plan);
                Notification::Success(ACTUALS_SAVED.into())
            }
            None => Notification::Error(NO_PLAN.into()),
        }
    }

    pub fn feedback(&self) -> Vec<FeedbackMessage> {
        self.plan.as_ref().map(evaluate_plan).unwrap_or_default()
    }

    pub fn comparison_chart(&self) -> Option<ComparisonChart> {
        self.plan.as_ref().map(ComparisonChart::from_plan)
    }

    pub fn rate(&mut self, value: u8) -> Result<SatisfactionRating, ValidationError> {
        let rating = SatisfactionRating::new(value)?;
        self.satisfaction = Some(rating);
        Ok(rating)
    }

    // ── Timer ────────────────────────────────────────────────────────

    /// Set the focus length in minutes, clamped to the configured bounds.
    pub fn set_focus_minutes(&mut self, minutes: u64) -> Result<Event, ValidationError> {
        let minutes = self.config.clamp_focus_minutes(minutes);
        self.timer.configure(minutes.saturating_mul(60))
    }

    pub fn start_timer(&mut self) -> Option<Event> {
        self.timer.start()
    }

    pub fn pause_timer(&mut self) -> Option<Event> {
        self.timer.pause()
    }

    pub fn stop_timer(&mut self) -> Event {
        self.timer.stop()
    }

    pub fn ring(&self) -> RingProgress {
        RingProgress::from_timer(&self.timer)
    }

    /// Deliver one periodic tick. Returns the completion banner on the tick
    /// that finishes the countdown.
    pub fn tick(&mut self) -> Option<Notification> {
        self.timer.tick()?;
        Some(if self.config.notifications.celebrate {
            Notification::Celebrate(FOCUS_COMPLETE.into())
        } else {
            Notification::Success(FOCUS_COMPLETE.into())
        })
    }
}

fn build_plan(goal: &str, subjects: &str, daily_hours: f64) -> Result<StudyPlan, ValidationError> {
    let goal = goal.trim();
    if goal.is_empty() {
        return Err(ValidationError::BlankField("goal".into()));
    }
    Ok(generate(&parse_subjects(subjects), daily_hours)?.with_goal(goal))
}
