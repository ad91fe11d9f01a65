//! Rule-based feedback on actual vs planned study hours.
//!
//! A subject is `Under` when the actual hours fall more than half an hour
//! short of the plan, `Over` when they exceed it by more than half an hour,
//! and `OnTarget` otherwise. The ±0.5 boundaries belong to `OnTarget`.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::plan::{StudyPlan, StudySubject};

const TOLERANCE_HOURS: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackClass {
    Under,
    OnTarget,
    Over,
}

impl FeedbackClass {
    pub fn from_diff(diff: f64) -> Self {
        if diff < -TOLERANCE_HOURS {
            FeedbackClass::Under
        } else if diff > TOLERANCE_HOURS {
            FeedbackClass::Over
        } else {
            FeedbackClass::OnTarget
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeedbackClass::Under => "under",
            FeedbackClass::OnTarget => "on target",
            FeedbackClass::Over => "over",
        }
    }
}

/// Feedback for a single subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackMessage {
    pub subject: String,
    pub planned_hours: f64,
    pub actual_hours: f64,
    pub diff: f64,
    pub class: FeedbackClass,
    pub message: String,
}

/// Classify one subject. Depends only on `actual_hours - planned_hours`.
pub fn evaluate(subject: &StudySubject) -> FeedbackMessage {
    let diff = subject.diff();
    let class = FeedbackClass::from_diff(diff);
    let message = match class {
        FeedbackClass::Under => format!(
            "{}: you studied less than planned. Try to focus a little more next time.",
            subject.name
        ),
        FeedbackClass::Over => format!(
            "{}: you studied more than planned. Excellent work!",
            subject.name
        ),
        FeedbackClass::OnTarget => format!(
            "{}: you met your plan. Keep up the consistency!",
            subject.name
        ),
    };
    FeedbackMessage {
        subject: subject.name.clone(),
        planned_hours: subject.planned_hours,
        actual_hours: subject.actual_hours,
        diff,
        class,
        message,
    }
}

/// Evaluate every subject in plan order.
pub fn evaluate_plan(plan: &StudyPlan) -> Vec<FeedbackMessage> {
    plan.subjects.iter().map(evaluate).collect()
}

/// Self-reported satisfaction with the day, 1 to 5.
///
/// Stored as given; no feedback is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SatisfactionRating(u8);

impl SatisfactionRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::invalid(
                "satisfaction",
                format!("must be between {} and {}, got {value}", Self::MIN, Self::MAX),
            ))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SatisfactionRating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SatisfactionRating> for u8 {
    fn from(rating: SatisfactionRating) -> Self {
        rating.0
    }
}
