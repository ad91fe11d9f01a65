use std::io::Write;
use std::time::Duration;

use clap::Subcommand;
use studyroom_core::{Config, Session};
use tokio::time::MissedTickBehavior;

use crate::render;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run a focus countdown until it finishes or Ctrl-C
    Run {
        /// Focus length in minutes (defaults to timer.focus_minutes)
        #[arg(long)]
        minutes: Option<u64>,
        /// Only print the final result
        #[arg(long)]
        quiet: bool,
    },
    /// Print the timer state without running it
    Preview {
        #[arg(long)]
        minutes: Option<u64>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Tick source for the countdown: one tick per configured interval.
/// The first tick fires one full period after creation.
pub fn tick_interval(config: &Config) -> tokio::time::Interval {
    let period = Duration::from_millis(config.timer.tick_interval_ms.max(1));
    let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

pub async fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut session = Session::new(config.clone());

    match action {
        TimerAction::Preview { minutes, json } => {
            if let Some(m) = minutes {
                session.set_focus_minutes(m)?;
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&session.timer().snapshot())?);
            } else {
                println!("{}", render::ring(&session.ring()));
            }
        }
        TimerAction::Run { minutes, quiet } => {
            if let Some(m) = minutes {
                session.set_focus_minutes(m)?;
            }
            session.start_timer();
            println!("Focus mode started: {}", session.ring().label);

            let mut ticks = tick_interval(&config);
            let ctrl_c = tokio::signal::ctrl_c();
            tokio::pin!(ctrl_c);

            loop {
                tokio::select! {
                    _ = ticks.tick() => {
                        let done = session.tick();
                        if !quiet {
                            print!("\r{}", render::ring(&session.ring()));
                            std::io::stdout().flush()?;
                        }
                        if let Some(note) = done {
                            if !quiet {
                                println!();
                            }
                            println!("{}", render::notification(&note));
                            break;
                        }
                    }
                    _ = &mut ctrl_c => {
                        session.stop_timer();
                        tracing::info!("focus countdown interrupted");
                        println!();
                        println!("Focus mode stopped.");
                        break;
                    }
                }
            }
        }
    }
    Ok(())
}
