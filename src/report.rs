use std::sync::Mutex;
use tracing::{error, warn};

/// Sink for per-file warnings and recoverable errors raised while resolving,
/// renaming and copying. Implementations: `TracingReporter`, `MemoryReporter`.
pub trait Reporter {
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
}

/// Forwards messages to the installed tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn warn(&self, msg: &str) {
        warn!("{}", msg);
    }

    fn error(&self, msg: &str) {
        error!("{}", msg);
    }
}

/// Keeps every message in memory so tests can assert on them.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    warnings: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().map(|w| w.clone()).unwrap_or_default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl Reporter for MemoryReporter {
    fn warn(&self, msg: &str) {
        if let Ok(mut w) = self.warnings.lock() {
            w.push(msg.to_string());
        }
    }

    fn error(&self, msg: &str) {
        if let Ok(mut e) = self.errors.lock() {
            e.push(msg.to_string());
        }
    }
}
