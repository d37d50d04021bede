use std::panic::Location;

use crate::log::log_level::LogLevel;

/// Represents a single captured log call.
///
/// Produced by [`RecordingLogSink`](crate::log::RecordingLogSink) so tests can
/// assert on what a component logged without touching process streams.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// The severity level of the call.
    pub level: LogLevel,
    /// The fully formatted message, without tag or line terminator.
    pub text: String,
    /// The period passed to a `*_throttle` call, `None` for immediate calls.
    pub throttle_period: Option<f32>,
    /// Call site of a `*_throttle` call.
    pub site: Option<&'static Location<'static>>,
}

impl LogRecord {
    /// Creates a record for a non-throttled call.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mavlog::log::{LogLevel, LogRecord};
    ///
    /// let rec = LogRecord::new(LogLevel::Info, "armed");
    /// assert_eq!(rec.throttle_period, None);
    /// ```
    pub fn new(level: LogLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            throttle_period: None,
            site: None,
        }
    }

    pub fn throttled(
        level: LogLevel,
        text: impl Into<String>,
        period: f32,
        site: &'static Location<'static>,
    ) -> Self {
        Self {
            level,
            text: text.into(),
            throttle_period: Some(period),
            site: Some(site),
        }
    }

    /// Renders the record the way a console sink with `namespace` would, minus the newline.
    #[must_use]
    pub fn render(&self, namespace: &str) -> String {
        format!("[{namespace}][{}]: {}", self.level.name(), self.text)
    }
}
