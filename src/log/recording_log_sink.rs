use std::{
    fmt,
    panic::Location,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::log::{
    DEFAULT_NAMESPACE, log_level::LogLevel, log_record::LogRecord, log_sink::LogSink,
};

/// In-memory sink that keeps every call, for tests.
///
/// Throttled calls are recorded with their period and call site and are never
/// suppressed.
#[derive(Debug)]
pub struct RecordingLogSink {
    namespace: String,
    records: Mutex<Vec<LogRecord>>,
}

impl Default for RecordingLogSink {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl RecordingLogSink {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            records: Mutex::new(Vec::new()),
        }
    }

    // Poisoning is ignored; records stay readable after a panicking caller.
    fn guard(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every record captured so far, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.guard().clone()
    }

    /// Records rendered as `[<namespace>][<LEVEL>]: <message>`.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.guard()
            .iter()
            .map(|r| r.render(&self.namespace))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    pub fn clear(&self) {
        self.guard().clear();
    }
}

impl LogSink for RecordingLogSink {
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.guard().push(LogRecord::new(level, args.to_string()));
    }

    fn log_throttle(
        &self,
        level: LogLevel,
        period: f32,
        site: &'static Location<'static>,
        args: fmt::Arguments<'_>,
    ) {
        self.guard()
            .push(LogRecord::throttled(level, args.to_string(), period, site));
    }
}
