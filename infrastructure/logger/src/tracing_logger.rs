use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use-case logging to `tracing` under the `catalog` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "catalog", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "catalog", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "catalog", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "catalog", "{}", message);
    }
}
