//! Logging utilities
//!
//! This module provides standardized logging functions for loading and
//! pipeline stages.

use std::path::Path;
use std::time::Duration;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file that was operated on
/// * `items` - Number of records processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    path: &Path,
    items: usize,
    elapsed: Option<Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!(
            "Successfully {} {} records from {} in {:?}",
            operation,
            items,
            path.display(),
            duration
        );
    } else {
        log::info!(
            "Successfully {} {} records from {}",
            operation,
            items,
            path.display()
        );
    }
}

/// Log one pipeline stage narrowing or summarising its input
///
/// # Arguments
/// * `stage` - Name of the stage
/// * `input` - Number of records entering the stage
/// * `output` - Number of records or result entries leaving it
pub fn log_stage(stage: &str, input: usize, output: usize) {
    log::debug!("{stage}: {input} in, {output} out");
}

/// Log a data-quality warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `path` - Optional path related to the warning
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{}: {}", message, path.display());
    } else {
        log::warn!("{message}");
    }
}
