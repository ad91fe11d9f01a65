//! # Studyroom Core Library
//!
//! Business logic for the Studyroom study planner. The CLI binary is a thin
//! presentation layer over this crate: it collects input, delivers timer
//! ticks, and prints whatever the core hands back.
//!
//! ## Architecture
//!
//! - **Plan**: even split of a daily hour budget across subjects, plus the
//!   study log of actual hours committed through a form draft
//! - **Feedback**: threshold classification of actual vs planned hours
//! - **Timer**: a tick-driven countdown state machine; the caller is
//!   responsible for invoking `tick()` on a fixed cadence
//! - **Session**: the explicitly owned per-session state that event handlers
//!   thread through
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`StudyPlan`]: ordered subjects with planned and actual hours
//! - [`CountdownTimer`]: focus timer state machine
//! - [`Session`]: plan, pending form and timer for one interactive session
//! - [`Config`]: application configuration management

pub mod chart;
pub mod error;
pub mod events;
pub mod feedback;
pub mod plan;
pub mod session;
pub mod storage;
pub mod timer;

pub use chart::{ComparisonChart, ComparisonPoint, RingProgress};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use feedback::{evaluate, evaluate_plan, FeedbackClass, FeedbackMessage, SatisfactionRating};
pub use plan::{
    generate, parse_subjects, ActualEntries, ActualsDraft, HoursInput, StudyPlan, StudySubject,
};
pub use session::{Notification, Session};
pub use storage::Config;
pub use timer::{CountdownTimer, TimerState};
