use std::{
    fmt::{self, Write as _},
    io::{self, Write},
    sync::{Mutex, PoisonError},
};

use crate::{
    config::LogConfig,
    log::{
        DEFAULT_NAMESPACE,
        log_level::{LogLevel, Stream},
        log_sink::LogSink,
    },
};

/// Default sink: renders `[<namespace>][<LEVEL>]: <message>` on the console.
///
/// DEBUG and INFO lines go to the out stream, WARN, ERROR and FATAL to the err
/// stream. Both streams are injectable; [`ConsoleLogSink::stdio`] binds them to
/// the process stdout/stderr.
///
/// Throttled calls are **not** rate limited: the period is accepted and
/// discarded, and the message is emitted like its non-throttled counterpart.
/// Wrap the sink in [`ThrottledLogSink`](crate::log::ThrottledLogSink) to get
/// enforcement.
///
/// Each line is built in full and written with one `write_all` while the
/// stream's lock is held, so concurrent callers never interleave within a line.
/// Formatting and write failures are dropped silently.
#[derive(Debug)]
pub struct ConsoleLogSink<O = io::Stdout, E = io::Stderr> {
    namespace: String,
    min_level: LogLevel,
    out: Mutex<O>,
    err: Mutex<E>,
}

impl ConsoleLogSink {
    /// Console sink on stdout/stderr with the default `mavrosflight` namespace.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }

    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self::with_streams(namespace, io::stdout(), io::stderr())
    }

    /// Console sink on stdout/stderr using the configured namespace and minimum level.
    #[must_use]
    pub fn from_config(config: &LogConfig) -> Self {
        Self::new(config.namespace.clone()).with_min_level(config.min_level)
    }
}

impl Default for ConsoleLogSink {
    fn default() -> Self {
        Self::stdio()
    }
}

impl<O: Write + Send, E: Write + Send> ConsoleLogSink<O, E> {
    pub fn with_streams(namespace: impl Into<String>, out: O, err: E) -> Self {
        Self {
            namespace: namespace.into(),
            min_level: LogLevel::Debug,
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    /// Drops every message below `level`.
    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Consumes the sink and hands back its `(out, err)` streams.
    pub fn into_streams(self) -> (O, E) {
        (
            self.out.into_inner().unwrap_or_else(PoisonError::into_inner),
            self.err.into_inner().unwrap_or_else(PoisonError::into_inner),
        )
    }

    fn write_line(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if level < self.min_level {
            return;
        }

        let mut line = String::with_capacity(self.namespace.len() + 64);
        // A Display impl that fails leaves nothing worth printing.
        if writeln!(line, "[{}][{}]: {}", self.namespace, level.name(), args).is_err() {
            return;
        }

        match level.stream() {
            Stream::Stdout => write_locked(&self.out, &line),
            Stream::Stderr => write_locked(&self.err, &line),
        }
    }
}

fn write_locked<W: Write>(stream: &Mutex<W>, line: &str) {
    let mut w = stream.lock().unwrap_or_else(PoisonError::into_inner);
    let _ = w.write_all(line.as_bytes());
    let _ = w.flush();
}

impl<O: Write + Send, E: Write + Send> LogSink for ConsoleLogSink<O, E> {
    #[inline]
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.write_line(level, args);
    }
}
