//! Plain chart data handed to the rendering layer.
//!
//! The core decides what is drawn, not how: a planned-vs-actual comparison
//! per subject and a ring showing how much of the countdown remains.

use serde::{Deserialize, Serialize};

use crate::plan::StudyPlan;
use crate::timer::CountdownTimer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPoint {
    pub subject: String,
    pub planned_hours: f64,
    pub actual_hours: f64,
}

/// Actual hours as bars, planned hours as a line, in plan order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonChart {
    pub points: Vec<ComparisonPoint>,
}

impl ComparisonChart {
    pub fn from_plan(plan: &StudyPlan) -> Self {
        Self {
            points: plan
                .subjects
                .iter()
                .map(|s| ComparisonPoint {
                    subject: s.name.clone(),
                    planned_hours: s.planned_hours,
                    actual_hours: s.actual_hours,
                })
                .collect(),
        }
    }

    /// Largest planned or actual value, for scaling the y axis.
    pub fn max_hours(&self) -> f64 {
        self.points
            .iter()
            .flat_map(|p| [p.planned_hours, p.actual_hours])
            .fold(0.0, f64::max)
    }
}

/// Donut progress indicator with a centered `mm:ss` label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingProgress {
    pub remaining_secs: u64,
    pub total_secs: u64,
    pub fraction_remaining: f64,
    pub label: String,
}

impl RingProgress {
    pub fn from_timer(timer: &CountdownTimer) -> Self {
        Self {
            remaining_secs: timer.remaining_secs(),
            total_secs: timer.total_secs(),
            fraction_remaining: timer.fraction_remaining(),
            label: timer.label(),
        }
    }

    /// Share of the countdown already elapsed, 0 .. 100.
    pub fn elapsed_pct(&self) -> f64 {
        (1.0 - self.fraction_remaining) * 100.0
    }
}
