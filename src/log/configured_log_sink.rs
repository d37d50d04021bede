use std::{fmt, panic::Location};

use crate::{
    config::LogConfig,
    log::{
        console_log_sink::ConsoleLogSink, log_level::LogLevel, log_sink::LogSink,
        throttled_log_sink::ThrottledLogSink,
    },
};

/// Console sink built from a [`LogConfig`], throttled or not.
#[derive(Debug)]
pub enum ConfiguredLogSink {
    Plain(ConsoleLogSink),
    Throttled(ThrottledLogSink<ConsoleLogSink>),
}

impl ConfiguredLogSink {
    #[must_use]
    pub fn from_config(config: &LogConfig) -> Self {
        let console = ConsoleLogSink::from_config(config);
        if config.enforce_throttle {
            Self::Throttled(ThrottledLogSink::new(console))
        } else {
            Self::Plain(console)
        }
    }
}

impl LogSink for ConfiguredLogSink {
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        match self {
            Self::Plain(s) => s.log(level, args),
            Self::Throttled(s) => s.log(level, args),
        }
    }

    fn log_throttle(
        &self,
        level: LogLevel,
        period: f32,
        site: &'static Location<'static>,
        args: fmt::Arguments<'_>,
    ) {
        match self {
            Self::Plain(s) => s.log_throttle(level, period, site, args),
            Self::Throttled(s) => s.log_throttle(level, period, site, args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_variant_from_enforce_throttle() {
        let mut config = LogConfig::default();
        assert!(matches!(
            ConfiguredLogSink::from_config(&config),
            ConfiguredLogSink::Plain(_)
        ));

        config.enforce_throttle = true;
        config.min_level = LogLevel::Warn;
        match ConfiguredLogSink::from_config(&config) {
            ConfiguredLogSink::Throttled(s) => assert_eq!(s.inner().min_level(), LogLevel::Warn),
            other => panic!("expected Throttled, got: {:?}", other),
        }
    }
}
