//! Logging utilities for the record store and analysis pipeline

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{log_operation_complete, log_operation_start, log_stage, log_warning};
