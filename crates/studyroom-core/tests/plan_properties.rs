//! Property tests for even plan splits.

use proptest::prelude::*;
use studyroom_core::{evaluate, generate, FeedbackClass, StudySubject};

proptest! {
    #[test]
    fn planned_hours_sum_within_rounding(count in 1usize..20, daily_hours in 0.01f64..24.0) {
        let subjects: Vec<String> = (0..count).map(|i| format!("Subject {i}")).collect();
        let plan = generate(&subjects, daily_hours).unwrap();

        let expected = (daily_hours / count as f64 * 100.0).round() / 100.0;
        for subject in &plan.subjects {
            prop_assert_eq!(subject.planned_hours, expected);
            prop_assert_eq!(subject.actual_hours, 0.0);
        }
        let tolerance = 0.01 * count as f64 + 1e-9;
        prop_assert!((plan.total_planned() - daily_hours).abs() <= tolerance);
    }

    #[test]
    fn non_positive_budget_always_fails(count in 1usize..5, daily_hours in -24.0f64..=0.0) {
        let subjects: Vec<String> = (0..count).map(|i| format!("S{i}")).collect();
        prop_assert!(generate(&subjects, daily_hours).is_err());
    }

    #[test]
    fn feedback_depends_only_on_difference(planned in 0.0f64..12.0, actual in 0.0f64..12.0) {
        let subject = StudySubject {
            name: "X".into(),
            planned_hours: planned,
            actual_hours: actual,
        };
        let diff = actual - planned;
        let expected = if diff < -0.5 {
            FeedbackClass::Under
        } else if diff > 0.5 {
            FeedbackClass::Over
        } else {
            FeedbackClass::OnTarget
        };
        prop_assert_eq!(evaluate(&subject).class, expected);
    }
}
