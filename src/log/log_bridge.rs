use ::log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::log::{log_level::LogLevel, log_sink::LogSink};

/// Adapts a [`LogSink`] into a backend for the `log` crate facade.
///
/// `Trace` and `Debug` records become DEBUG; the remaining levels map one to one.
/// The facade has no FATAL, so nothing reaches that level through the bridge.
#[derive(Debug)]
pub struct LogBridge<S> {
    sink: S,
    filter: LevelFilter,
}

impl<S: LogSink> LogBridge<S> {
    pub fn new(sink: S, filter: LevelFilter) -> Self {
        Self { sink, filter }
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Installs `sink` as the process-wide `log` backend.
    ///
    /// # Errors
    ///
    /// Returns [`SetLoggerError`] if a logger was already installed.
    pub fn install(sink: S, filter: LevelFilter) -> Result<(), SetLoggerError>
    where
        S: 'static,
    {
        ::log::set_boxed_logger(Box::new(Self::new(sink, filter)))?;
        ::log::set_max_level(filter);
        Ok(())
    }
}

#[must_use]
pub fn map_level(level: Level) -> LogLevel {
    match level {
        Level::Trace | Level::Debug => LogLevel::Debug,
        Level::Info => LogLevel::Info,
        Level::Warn => LogLevel::Warn,
        Level::Error => LogLevel::Error,
    }
}

impl<S: LogSink> Log for LogBridge<S> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.sink.log(map_level(record.level()), *record.args());
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::RecordingLogSink;

    #[test]
    fn maps_facade_levels() {
        assert_eq!(map_level(Level::Trace), LogLevel::Debug);
        assert_eq!(map_level(Level::Debug), LogLevel::Debug);
        assert_eq!(map_level(Level::Info), LogLevel::Info);
        assert_eq!(map_level(Level::Warn), LogLevel::Warn);
        assert_eq!(map_level(Level::Error), LogLevel::Error);
    }

    #[test]
    fn forwards_records_at_or_above_filter() {
        let bridge = LogBridge::new(RecordingLogSink::default(), LevelFilter::Info);

        bridge.log(
            &Record::builder()
                .args(format_args!("skipped {}", 1))
                .level(Level::Debug)
                .build(),
        );
        bridge.log(
            &Record::builder()
                .args(format_args!("heading {}", 270))
                .level(Level::Warn)
                .build(),
        );

        assert_eq!(bridge.sink().lines(), ["[mavrosflight][WARN]: heading 270"]);
    }

    #[test]
    fn off_filter_disables_everything() {
        let bridge = LogBridge::new(RecordingLogSink::default(), LevelFilter::Off);
        bridge.log(
            &Record::builder()
                .args(format_args!("x"))
                .level(Level::Error)
                .build(),
        );
        assert!(bridge.sink().is_empty());
    }
}
