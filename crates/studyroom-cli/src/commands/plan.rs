use clap::Subcommand;
use serde::Serialize;
use studyroom_core::{
    ComparisonChart, Config, FeedbackMessage, Notification, SatisfactionRating, Session, StudyPlan,
};

use crate::render;

#[derive(Subcommand)]
pub enum PlanAction {
    /// Split the daily hours evenly across subjects
    Generate {
        /// Study goal (e.g. "Pass the certification exam")
        #[arg(long)]
        goal: String,
        /// Comma-separated subjects (e.g. "Math, English, Science")
        #[arg(long)]
        subjects: String,
        /// Hours available today
        #[arg(long)]
        hours: Option<f64>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Generate a plan, record actual hours and print feedback
    Review {
        #[arg(long)]
        goal: String,
        #[arg(long)]
        subjects: String,
        #[arg(long)]
        hours: Option<f64>,
        /// Actual hours per subject, in subject order (repeatable)
        #[arg(long = "actual")]
        actual: Vec<f64>,
        /// Satisfaction with the day, 1-5
        #[arg(long)]
        rating: Option<u8>,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct Review<'a> {
    plan: &'a StudyPlan,
    chart: ComparisonChart,
    feedback: Vec<FeedbackMessage>,
    satisfaction: Option<SatisfactionRating>,
}

fn submit(
    session: &mut Session,
    goal: &str,
    subjects: &str,
    hours: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = session.config();
    let hours = config.clamp_daily_hours(hours.unwrap_or(config.plan.default_daily_hours));
    match session.submit_plan(goal, subjects, hours) {
        Notification::Error(message) => Err(message.into()),
        note => {
            eprintln!("{}", render::notification(&note));
            Ok(())
        }
    }
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(Config::load_or_default());

    match action {
        PlanAction::Generate {
            goal,
            subjects,
            hours,
            json,
        } => {
            submit(&mut session, &goal, &subjects, hours)?;
            let plan = session.plan().ok_or("no plan generated")?;
            if json {
                println!("{}", serde_json::to_string_pretty(plan)?);
            } else {
                print!("{}", render::plan(plan));
            }
        }
        PlanAction::Review {
            goal,
            subjects,
            hours,
            actual,
            rating,
            json,
        } => {
            submit(&mut session, &goal, &subjects, hours)?;
            for (index, value) in actual.into_iter().enumerate() {
                if session.edit_actual(index, value).is_none() {
                    let message =
                        format!("more actual values than subjects (extra #{})", index + 1);
                    return Err(message.into());
                }
            }
            eprintln!("{}", render::notification(&session.save_actuals()));
            if let Some(value) = rating {
                session.rate(value)?;
            }

            let plan = session.plan().ok_or("no plan generated")?;
            let chart = ComparisonChart::from_plan(plan);
            let feedback = session.feedback();
            if json {
                let review = Review {
                    plan,
                    chart,
                    feedback,
                    satisfaction: session.satisfaction(),
                };
                println!("{}", serde_json::to_string_pretty(&review)?);
            } else {
                print!("{}", render::plan(plan));
                println!();
                print!("{}", render::comparison(&chart));
                println!();
                print!("{}", render::feedback(&feedback));
                if let Some(r) = session.satisfaction() {
                    println!("Satisfaction: {}/{}", r.value(), SatisfactionRating::MAX);
                }
            }
        }
    }
    Ok(())
}
