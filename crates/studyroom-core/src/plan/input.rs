use serde::{Deserialize, Serialize};

/// Bounds and step for an hours input widget.
///
/// The core never clamps on its own; the presentation layer runs raw user
/// values through this before they reach a draft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoursInput {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for HoursInput {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 24.0,
            step: 0.25,
        }
    }
}

impl HoursInput {
    /// Clamp into `[min, max]` and snap to the nearest step.
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }
        let clamped = value.max(self.min).min(self.max);
        if self.step <= 0.0 {
            return clamped;
        }
        let snapped = self.min + ((clamped - self.min) / self.step).round() * self.step;
        snapped.max(self.min).min(self.max)
    }
}
