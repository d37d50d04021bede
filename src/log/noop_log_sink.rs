use std::{fmt, panic::Location};

use crate::log::{log_level::LogLevel, log_sink::LogSink};

/// Sink that discards every message, for components built without logging.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn log(&self, _level: LogLevel, _args: fmt::Arguments<'_>) {}

    #[inline]
    fn log_throttle(
        &self,
        _level: LogLevel,
        _period: f32,
        _site: &'static Location<'static>,
        _args: fmt::Arguments<'_>,
    ) {
    }
}
