use log::{debug, info, warn};

use crate::prelude::CascadeError;

const TARGET: &str = "rfcascade";

/// Thin wrapper over the `log` facade used by the cascade engine.
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }

    pub fn detail(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }

    pub fn record_rejection(&self, error: &CascadeError) {
        warn!(target: TARGET, "cascade rejected: {}", error);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
