//! Interactive session loop.
//!
//! One `Session` lives for the whole loop. Input lines and timer ticks are
//! multiplexed on a single task, so each event is handled to completion
//! before the next one is looked at. Ticks are only delivered while the
//! timer is running.

use studyroom_core::{Config, Notification, SatisfactionRating, Session};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::timer::tick_interval;
use crate::render;

const HELP: &str = "\
commands:
  plan <goal> | <subject, subject, ...> | <hours>   create a new plan
  show                                              print the current plan
  actual <n> <hours>                                stage actual hours for subject n
  save                                              commit staged actual hours
  feedback                                          feedback per subject
  chart                                             planned vs actual chart
  rate <1-5>                                        record satisfaction
  timer start|pause|stop|status|set <minutes>       focus timer
  help                                              this text
  quit                                              leave the session";

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Timer was started; restart the tick schedule.
    RestartTicks,
    Quit,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut session = Session::new(config.clone());
    let mut ticks = tick_interval(&config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Studyroom session. Type 'help' for commands.");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let (output, flow) = dispatch(&mut session, &line);
                if !output.is_empty() {
                    println!("{output}");
                }
                match flow {
                    Flow::Quit => break,
                    Flow::RestartTicks => ticks.reset(),
                    Flow::Continue => {}
                }
            }
            _ = ticks.tick(), if session.timer().is_running() => {
                if let Some(note) = session.tick() {
                    println!("{}", render::notification(&note));
                }
            }
        }
    }
    Ok(())
}

fn dispatch(session: &mut Session, line: &str) -> (String, Flow) {
    let line = line.trim();
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    tracing::debug!(command, "session command");

    match command {
        "" => (String::new(), Flow::Continue),
        "help" => (HELP.to_string(), Flow::Continue),
        "quit" | "exit" => (String::new(), Flow::Quit),
        "plan" => (plan(session, rest), Flow::Continue),
        "show" => match session.plan() {
            Some(plan) => (render::plan(plan), Flow::Continue),
            None => (no_plan(), Flow::Continue),
        },
        "actual" => (actual(session, rest), Flow::Continue),
        "save" => (render::notification(&session.save_actuals()), Flow::Continue),
        "feedback" => match session.plan() {
            Some(_) => (render::feedback(&session.feedback()), Flow::Continue),
            None => (no_plan(), Flow::Continue),
        },
        "chart" => match session.comparison_chart() {
            Some(chart) => (render::comparison(&chart), Flow::Continue),
            None => (no_plan(), Flow::Continue),
        },
        "rate" => (rate(session, rest), Flow::Continue),
        "timer" => timer(session, rest),
        other => (format!("unknown command '{other}', try 'help'"), Flow::Continue),
    }
}

fn no_plan() -> String {
    render::notification(&Notification::Error(studyroom_core::session::NO_PLAN.into()))
}

fn plan(session: &mut Session, args: &str) -> String {
    let mut fields = args.splitn(3, '|').map(str::trim);
    let goal = fields.next().unwrap_or("");
    let subjects = fields.next().unwrap_or("");
    let config = session.config();
    let hours = match fields.next() {
        Some(h) if !h.is_empty() => h.parse::<f64>().unwrap_or(f64::NAN),
        _ => config.plan.default_daily_hours,
    };
    // Unparseable hours stay NaN so the plan is rejected rather than clamped.
    let hours = if hours.is_nan() { hours } else { config.clamp_daily_hours(hours) };

    let note = session.submit_plan(goal, subjects, hours);
    match (note.is_error(), session.plan()) {
        (false, Some(p)) => format!("{}\n{}", render::notification(&note), render::plan(p)),
        _ => render::notification(&note),
    }
}

fn actual(session: &mut Session, args: &str) -> String {
    let mut parts = args.split_whitespace();
    let index = parts.next().and_then(|s| s.parse::<usize>().ok());
    let hours = parts.next().and_then(|s| s.parse::<f64>().ok());
    let (Some(index), Some(hours)) = (index, hours) else {
        return "usage: actual <n> <hours>".to_string();
    };
    if session.plan().is_none() {
        return no_plan();
    }
    match index.checked_sub(1).and_then(|i| session.edit_actual(i, hours)) {
        Some(staged) => format!("staged {staged} h for subject {index} (use 'save' to commit)"),
        None => format!("no subject #{index} in the current plan"),
    }
}

fn rate(session: &mut Session, args: &str) -> String {
    match args.parse::<u8>().map_err(|e| e.to_string()).and_then(|v| {
        session.rate(v).map_err(|e| e.to_string())
    }) {
        Ok(r) => format!("satisfaction recorded: {}/{}", r.value(), SatisfactionRating::MAX),
        Err(e) => render::notification(&Notification::Error(e)),
    }
}

fn timer(session: &mut Session, args: &str) -> (String, Flow) {
    let (sub, rest) = args.split_once(' ').unwrap_or((args, ""));
    match sub {
        "start" => match session.start_timer() {
            Some(_) => (
                format!("Focus mode started: {}", session.ring().label),
                Flow::RestartTicks,
            ),
            None => ("timer is already running or finished".into(), Flow::Continue),
        },
        "pause" => match session.pause_timer() {
            Some(_) => (format!("paused at {}", session.ring().label), Flow::Continue),
            None => ("timer is not running".into(), Flow::Continue),
        },
        "stop" | "reset" => {
            session.stop_timer();
            (format!("stopped, {}", render::ring(&session.ring())), Flow::Continue)
        }
        "status" | "" => (render::ring(&session.ring()), Flow::Continue),
        "set" => match rest.trim().parse::<u64>() {
            Ok(minutes) => match session.set_focus_minutes(minutes) {
                Ok(_) => (render::ring(&session.ring()), Flow::Continue),
                Err(e) => (
                    render::notification(&Notification::Error(e.to_string())),
                    Flow::Continue,
                ),
            },
            Err(_) => ("usage: timer set <minutes>".into(), Flow::Continue),
        },
        other => (format!("unknown timer command '{other}'"), Flow::Continue),
    }
}
