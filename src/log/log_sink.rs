use std::{fmt, panic::Location, sync::Arc};

use crate::log::log_level::LogLevel;

/// Capability every logging backend provides.
///
/// Implementors supply [`log`](Self::log); every per-level entry point forwards
/// to it with no additional behavior. Callers take `S: LogSink` generically so
/// the call resolves at compile time.
///
/// Throttled calls go through [`log_throttle`](Self::log_throttle), which an
/// implementation *may* use to drop a message when the same call site emitted
/// within the last `period` seconds. The default implementation does not
/// enforce the period: it always emits.
///
/// No call reports failure. A sink that cannot write drops the message.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>);

    /// The site argument is the location of the `*_throttle` call that produced this message.
    fn log_throttle(
        &self,
        level: LogLevel,
        _period: f32,
        _site: &'static Location<'static>,
        args: fmt::Arguments<'_>,
    ) {
        self.log(level, args);
    }

    #[inline]
    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }
    #[inline]
    #[track_caller]
    fn debug_throttle(&self, period: f32, args: fmt::Arguments<'_>) {
        self.log_throttle(LogLevel::Debug, period, Location::caller(), args);
    }

    #[inline]
    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }
    #[inline]
    #[track_caller]
    fn info_throttle(&self, period: f32, args: fmt::Arguments<'_>) {
        self.log_throttle(LogLevel::Info, period, Location::caller(), args);
    }

    #[inline]
    fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warn, args);
    }
    #[inline]
    #[track_caller]
    fn warn_throttle(&self, period: f32, args: fmt::Arguments<'_>) {
        self.log_throttle(LogLevel::Warn, period, Location::caller(), args);
    }

    #[inline]
    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }
    #[inline]
    #[track_caller]
    fn error_throttle(&self, period: f32, args: fmt::Arguments<'_>) {
        self.log_throttle(LogLevel::Error, period, Location::caller(), args);
    }

    #[inline]
    fn fatal(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Fatal, args);
    }
    #[inline]
    #[track_caller]
    fn fatal_throttle(&self, period: f32, args: fmt::Arguments<'_>) {
        self.log_throttle(LogLevel::Fatal, period, Location::caller(), args);
    }
}

// Forwarding impls so a sink can be passed by reference or shared ownership.
// `log_throttle` is forwarded explicitly so wrapped throttling sinks keep working.

impl<S: LogSink + ?Sized> LogSink for &S {
    #[inline]
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        (**self).log(level, args);
    }
    #[inline]
    fn log_throttle(
        &self,
        level: LogLevel,
        period: f32,
        site: &'static Location<'static>,
        args: fmt::Arguments<'_>,
    ) {
        (**self).log_throttle(level, period, site, args);
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    #[inline]
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        (**self).log(level, args);
    }
    #[inline]
    fn log_throttle(
        &self,
        level: LogLevel,
        period: f32,
        site: &'static Location<'static>,
        args: fmt::Arguments<'_>,
    ) {
        (**self).log_throttle(level, period, site, args);
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    #[inline]
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        (**self).log(level, args);
    }
    #[inline]
    fn log_throttle(
        &self,
        level: LogLevel,
        period: f32,
        site: &'static Location<'static>,
        args: fmt::Arguments<'_>,
    ) {
        (**self).log_throttle(level, period, site, args);
    }
}
