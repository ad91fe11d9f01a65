pub mod config;
pub mod plan;
pub mod session;
pub mod timer;
