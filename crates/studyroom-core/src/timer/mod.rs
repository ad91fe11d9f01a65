mod engine;

pub use engine::{format_mm_ss, CountdownTimer, TimerState, DEFAULT_TOTAL_SECS};
