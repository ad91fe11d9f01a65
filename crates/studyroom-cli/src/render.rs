//! Plain-text rendering of core output.

use chrono::Local;
use studyroom_core::{
    ComparisonChart, FeedbackClass, FeedbackMessage, Notification, RingProgress, StudyPlan,
};

const BAR_WIDTH: usize = 30;
const RING_WIDTH: usize = 20;

pub fn notification(note: &Notification) -> String {
    match note {
        Notification::Success(m) => format!("[ok] {m}"),
        Notification::Error(m) => format!("[error] {m}"),
        Notification::Celebrate(m) => format!("*** {m} ***"),
    }
}

pub fn plan(plan: &StudyPlan) -> String {
    let day = plan.created_at.with_timezone(&Local).format("%Y-%m-%d");
    let mut out = format!("Study plan for {day}\n");
    if let Some(goal) = &plan.goal {
        out.push_str(&format!("Goal: {goal}\n"));
    }
    for (i, s) in plan.subjects.iter().enumerate() {
        out.push_str(&format!("  {}. {}: {} h\n", i + 1, s.name, s.planned_hours));
    }
    out
}

/// Actual hours as `#` bars with the planned value marked by `|`.
pub fn comparison(chart: &ComparisonChart) -> String {
    let max = chart.max_hours();
    let name_width = chart
        .points
        .iter()
        .map(|p| p.subject.chars().count())
        .max()
        .unwrap_or(0);
    let scale = |hours: f64| -> usize {
        if max <= 0.0 {
            0
        } else {
            ((hours / max) * BAR_WIDTH as f64).round() as usize
        }
    };

    let mut out = String::from("Planned (|) vs actual (#) hours\n");
    for p in &chart.points {
        let actual = scale(p.actual_hours);
        let planned = scale(p.planned_hours).min(BAR_WIDTH);
        let mut bar: Vec<char> = (0..=BAR_WIDTH)
            .map(|i| if i < actual { '#' } else { ' ' })
            .collect();
        bar[planned] = '|';
        out.push_str(&format!(
            "  {:<name_width$}  {}  {:.2} / {:.2}\n",
            p.subject,
            bar.into_iter().collect::<String>(),
            p.actual_hours,
            p.planned_hours,
        ));
    }
    out
}

pub fn feedback(messages: &[FeedbackMessage]) -> String {
    let mut out = String::from("Feedback\n");
    for fb in messages {
        let marker = match fb.class {
            FeedbackClass::Under => "-",
            FeedbackClass::OnTarget => "=",
            FeedbackClass::Over => "+",
        };
        out.push_str(&format!("  [{marker}] {} ({:+.2} h)\n", fb.message, fb.diff));
    }
    out
}

/// Ring progress flattened to a single line: elapsed share filled.
pub fn ring(ring: &RingProgress) -> String {
    let filled = ((1.0 - ring.fraction_remaining) * RING_WIDTH as f64).round() as usize;
    let filled = filled.min(RING_WIDTH);
    format!(
        "({}{}) {} remaining",
        "o".repeat(filled),
        ".".repeat(RING_WIDTH - filled),
        ring.label
    )
}
