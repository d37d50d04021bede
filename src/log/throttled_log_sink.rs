use std::{
    collections::HashMap,
    fmt,
    panic::Location,
    sync::{
        Mutex,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

use crate::log::{log_level::LogLevel, log_sink::LogSink};

/// Throttle key: `(level, file, line, column)`.
type SiteKey = (LogLevel, &'static str, u32, u32);

/// Wraps a sink and enforces the period of `*_throttle` calls.
///
/// A throttled call is dropped when the same call site last emitted at the
/// same level less than `period` seconds ago. Non-positive, NaN or infinite periods never suppress.
/// Non-throttled calls pass straight through.
///
/// The plain [`ConsoleLogSink`](crate::log::ConsoleLogSink) accepts a period
/// and ignores it; this wrapper is the opt-in fix and is only applied when
/// asked for (see [`LogConfig::enforce_throttle`](crate::config::LogConfig)).
#[derive(Debug)]
pub struct ThrottledLogSink<S> {
    inner: S,
    last_emit: Mutex<HashMap<SiteKey, Instant>>,
    suppressed: AtomicU64,
}

impl<S: LogSink> ThrottledLogSink<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            last_emit: Mutex::new(HashMap::new()),
            suppressed: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Number of throttled calls dropped so far.
    #[must_use]
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    /// Returns true when the call should be emitted, recording the emission time.
    fn admit(&self, level: LogLevel, period: f32, site: &'static Location<'static>) -> bool {
        if !(period.is_finite() && period > 0.0) {
            return true;
        }
        let window = Duration::try_from_secs_f32(period).unwrap_or(Duration::MAX);
        let key = (level, site.file(), site.line(), site.column());
        let now = Instant::now();

        // Poisoned state fails open.
        let Ok(mut last_emit) = self.last_emit.lock() else {
            return true;
        };
        match last_emit.get(&key) {
            Some(prev) if now.saturating_duration_since(*prev) < window => false,
            _ => {
                last_emit.insert(key, now);
                true
            }
        }
    }
}

impl<S: LogSink> LogSink for ThrottledLogSink<S> {
    #[inline]
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.inner.log(level, args);
    }

    fn log_throttle(
        &self,
        level: LogLevel,
        period: f32,
        site: &'static Location<'static>,
        args: fmt::Arguments<'_>,
    ) {
        if self.admit(level, period, site) {
            self.inner.log_throttle(level, period, site, args);
        } else {
            self.suppressed.fetch_add(1, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::RecordingLogSink;
    use std::thread;

    fn throttled() -> ThrottledLogSink<RecordingLogSink> {
        ThrottledLogSink::new(RecordingLogSink::default())
    }

    #[test]
    fn suppresses_repeat_from_same_site_within_period() {
        let sink = throttled();
        for _ in 0..5 {
            sink.warn_throttle(60.0, format_args!("baro stale"));
        }
        assert_eq!(sink.inner().len(), 1);
        assert_eq!(sink.suppressed(), 4);
    }

    #[test]
    fn distinct_sites_are_tracked_independently() {
        let sink = throttled();
        sink.info_throttle(60.0, format_args!("first site"));
        sink.info_throttle(60.0, format_args!("second site"));
        assert_eq!(sink.inner().len(), 2);
    }

    #[test]
    fn levels_from_one_site_are_throttled_separately() {
        let sink = throttled();
        for _ in 0..2 {
            for level in LogLevel::ALL {
                crate::sink_log_throttle!(sink, level, 60.0, "same site {}", level);
            }
        }
        assert_eq!(sink.inner().len(), 5);
        assert_eq!(sink.suppressed(), 5);
        let levels: Vec<LogLevel> = sink.inner().records().iter().map(|r| r.level).collect();
        assert_eq!(levels, LogLevel::ALL.to_vec());
    }

    #[test]
    fn zero_negative_and_nan_periods_never_suppress() {
        let sink = throttled();
        for period in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            sink.error_throttle(period, format_args!("p={}", period));
            sink.error_throttle(period, format_args!("p={}", period));
        }
        assert_eq!(sink.inner().len(), 8);
        assert_eq!(sink.suppressed(), 0);
    }

    #[test]
    fn emits_again_once_period_elapses() {
        let sink = throttled();
        for _ in 0..2 {
            sink.debug_throttle(0.01, format_args!("imu"));
            thread::sleep(Duration::from_millis(100));
        }
        assert_eq!(sink.inner().len(), 2);
    }

    #[test]
    fn immediate_calls_pass_through() {
        let sink = throttled();
        sink.fatal(format_args!("a"));
        sink.fatal(format_args!("a"));
        assert_eq!(sink.into_inner().len(), 2);
    }

    #[test]
    fn forwards_period_to_inner_sink() {
        let sink = throttled();
        sink.info_throttle(3.0, format_args!("x"));
        assert_eq!(sink.inner().records()[0].throttle_period, Some(3.0));
    }
}
