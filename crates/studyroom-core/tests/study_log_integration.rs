//! Integration tests for the plan -> record -> feedback flow.

use studyroom_core::{
    evaluate_plan, generate, ActualEntries, ComparisonChart, FeedbackClass, Notification, Session,
    ValidationError,
};

#[test]
fn test_math_english_day() {
    let mut plan = generate(&["Math", "English"], 4.0).unwrap();
    assert_eq!(plan.subjects[0].planned_hours, 2.0);
    assert_eq!(plan.subjects[1].planned_hours, 2.0);

    plan.record_actual(&ActualEntries::from([(0, 1.0), (1, 3.0)]));

    let feedback = evaluate_plan(&plan);
    assert_eq!(feedback.len(), 2);
    assert_eq!(feedback[0].subject, "Math");
    assert_eq!(feedback[0].class, FeedbackClass::Under);
    assert_eq!(feedback[0].diff, -1.0);
    assert_eq!(feedback[1].subject, "English");
    assert_eq!(feedback[1].class, FeedbackClass::Over);
    assert_eq!(feedback[1].diff, 1.0);
}

#[test]
fn test_three_way_split_rounds() {
    let plan = generate(&["A", "B", "C"], 5.0).unwrap();
    assert!(plan.subjects.iter().all(|s| s.planned_hours == 1.67));
    let drift = (plan.total_planned() - 5.0).abs();
    assert!(drift <= 0.01 * 3.0 + 1e-9);
}

#[test]
fn test_invalid_input_produces_no_plan() {
    let empty: Vec<String> = Vec::new();
    assert!(matches!(
        generate(&empty, 4.0),
        Err(ValidationError::EmptyCollection(_))
    ));
    assert!(matches!(
        generate(&["Math"], 0.0),
        Err(ValidationError::InvalidValue { .. })
    ));

    let mut session = Session::default();
    let note = session.submit_plan("Goal", "", 4.0);
    assert!(note.is_error());
    assert!(session.plan().is_none());
}

#[test]
fn test_session_round_trip() {
    let mut session = Session::default();
    assert!(matches!(
        session.submit_plan("TOEIC 900", "Listening, Reading, Vocabulary", 6.0),
        Notification::Success(_)
    ));
    session.edit_actual(0, 2.0);
    session.edit_actual(1, 2.5);
    session.edit_actual(2, 0.75);
    session.save_actuals();
    session.rate(3).unwrap();

    let classes: Vec<_> = session.feedback().into_iter().map(|f| f.class).collect();
    assert_eq!(
        classes,
        [FeedbackClass::OnTarget, FeedbackClass::OnTarget, FeedbackClass::Under]
    );

    let chart: ComparisonChart = session.comparison_chart().unwrap();
    let names: Vec<_> = chart.points.iter().map(|p| p.subject.as_str()).collect();
    assert_eq!(names, ["Listening", "Reading", "Vocabulary"]);
    assert_eq!(session.plan().unwrap().goal.as_deref(), Some("TOEIC 900"));
}
