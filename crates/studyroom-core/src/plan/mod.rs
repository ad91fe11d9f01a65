//! Study plan generation.
//!
//! A plan splits a daily hour budget evenly across the subjects the user
//! entered. Planned hours are rounded to two decimals, so the sum may differ
//! from the budget by at most `0.01` per subject.

mod input;
mod log;

pub use input::HoursInput;
pub use log::{ActualEntries, ActualsDraft};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One subject in a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySubject {
    pub name: String,
    pub planned_hours: f64,
    #[serde(default)]
    pub actual_hours: f64,
}

impl StudySubject {
    /// Actual minus planned hours.
    pub fn diff(&self) -> f64 {
        self.actual_hours - self.planned_hours
    }
}

/// Ordered subjects for one day, built by [`generate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    #[serde(default)]
    pub goal: Option<String>,
    pub daily_hours: f64,
    pub subjects: Vec<StudySubject>,
    pub created_at: DateTime<Utc>,
}

impl StudyPlan {
    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = Some(goal.into());
        self
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn total_planned(&self) -> f64 {
        self.subjects.iter().map(|s| s.planned_hours).sum()
    }

    pub fn total_actual(&self) -> f64 {
        self.subjects.iter().map(|s| s.actual_hours).sum()
    }
}

/// Build a plan that splits `daily_hours` evenly across `subjects`.
///
/// Names are trimmed; order and duplicates are kept as given. Fails when
/// the list is empty, a name is blank, or the budget is not a positive
/// finite number.
pub fn generate<S: AsRef<str>>(
    subjects: &[S],
    daily_hours: f64,
) -> Result<StudyPlan, ValidationError> {
    if subjects.is_empty() {
        return Err(ValidationError::EmptyCollection("subjects".into()));
    }
    if !daily_hours.is_finite() || daily_hours <= 0.0 {
        return Err(ValidationError::invalid(
            "daily_hours",
            format!("must be greater than zero, got {daily_hours}"),
        ));
    }

    let names = subjects
        .iter()
        .map(|s| {
            let name = s.as_ref().trim();
            if name.is_empty() {
                Err(ValidationError::BlankField("subject".into()))
            } else {
                Ok(name.to_string())
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let per_subject = round2(daily_hours / names.len() as f64);
    let subjects = names
        .into_iter()
        .map(|name| StudySubject {
            name,
            planned_hours: per_subject,
            actual_hours: 0.0,
        })
        .collect::<Vec<_>>();

    tracing::info!(
        subjects = subjects.len(),
        daily_hours,
        per_subject,
        "study plan generated"
    );

    Ok(StudyPlan {
        goal: None,
        daily_hours,
        subjects,
        created_at: Utc::now(),
    })
}

/// Split comma-separated subject input, dropping blank entries.
pub fn parse_subjects(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_budget_evenly() {
        let plan = generate(&["Math", "English"], 4.0).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.subjects[0].name, "Math");
        assert_eq!(plan.subjects[0].planned_hours, 2.0);
        assert_eq!(plan.subjects[1].name, "English");
        assert_eq!(plan.subjects[1].planned_hours, 2.0);
        assert!(plan.subjects.iter().all(|s| s.actual_hours == 0.0));
    }

    #[test]
    fn rounds_to_two_decimals() {
        let plan = generate(&["A", "B", "C"], 5.0).unwrap();
        for subject in &plan.subjects {
            assert_eq!(subject.planned_hours, 1.67);
        }
        assert!((plan.total_planned() - 5.01).abs() < 1e-9);
    }

    #[test]
    fn keeps_duplicates_in_order() {
        let plan = generate(&["Math", "Art", "Math"], 3.0).unwrap();
        let names: Vec<_> = plan.subjects.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Math", "Art", "Math"]);
    }

    #[test]
    fn trims_names() {
        let plan = generate(&["  Math "], 1.5).unwrap();
        assert_eq!(plan.subjects[0].name, "Math");
        assert_eq!(plan.subjects[0].planned_hours, 1.5);
    }

    #[test]
    fn rejects_empty_subject_list() {
        let empty: [&str; 0] = [];
        assert_eq!(
            generate(&empty, 4.0),
            Err(ValidationError::EmptyCollection("subjects".into()))
        );
    }

    #[test]
    fn rejects_blank_subject() {
        assert_eq!(
            generate(&["Math", "   "], 4.0),
            Err(ValidationError::BlankField("subject".into()))
        );
    }

    #[test]
    fn rejects_non_positive_budget() {
        assert!(generate(&["Math"], 0.0).is_err());
        assert!(generate(&["Math"], -2.0).is_err());
        assert!(generate(&["Math"], f64::NAN).is_err());
    }

    #[test]
    fn parse_subjects_drops_blank_entries() {
        assert_eq!(
            parse_subjects(" Math, English ,, Science,"),
            vec!["Math", "English", "Science"]
        );
        assert!(parse_subjects(" , ").is_empty());
    }

    #[test]
    fn goal_is_attached() {
        let plan = generate(&["Math"], 2.0).unwrap().with_goal("Pass the exam");
        assert_eq!(plan.goal.as_deref(), Some("Pass the exam"));
    }
}
