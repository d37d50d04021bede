//! Leveled logging macros over any [`LogSink`](crate::log::LogSink).
//!
//! ```rust
//! use mavlog::{log::RecordingLogSink, sink_info, sink_warn_throttle};
//!
//! let sink = RecordingLogSink::default();
//! sink_info!(sink, "{}={}", "alt", 120);
//! sink_warn_throttle!(sink, 1.0, "battery at {:.1} V", 10.9);
//! ```
//!
//! # Feature Flags
//! Levels are controlled by cargo features, each implying the next:
//! `log-debug`, `log-info`, `log-warn`, `log-error`, `log-fatal`.
//!
//! If a feature is disabled, the corresponding macros expand to `()`, removing
//! all formatting overhead at compile time.

// ============================================================================
// 1. GENERIC INTERNAL MACROS
// ============================================================================
// Called through the trait path so callers don't need `LogSink` in scope.

#[macro_export]
macro_rules! sink_log {
    ($sink:expr, $lvl:expr, $($arg:tt)+) => {{
        $crate::log::LogSink::log(&$sink, $lvl, ::core::format_args!($($arg)+));
    }};
}

#[macro_export]
macro_rules! sink_log_throttle {
    ($sink:expr, $lvl:expr, $period:expr, $($arg:tt)+) => {{
        $crate::log::LogSink::log_throttle(
            &$sink,
            $lvl,
            $period,
            ::core::panic::Location::caller(),
            ::core::format_args!($($arg)+),
        );
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! sink_debug          { ($sink:expr, $($arg:tt)+)               => { $crate::sink_log!($sink, $crate::log::LogLevel::Debug, $($arg)+) } }
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! sink_debug_throttle { ($sink:expr, $period:expr, $($arg:tt)+) => { $crate::sink_log_throttle!($sink, $crate::log::LogLevel::Debug, $period, $($arg)+) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! sink_debug {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! sink_debug_throttle {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! sink_info          { ($sink:expr, $($arg:tt)+)               => { $crate::sink_log!($sink, $crate::log::LogLevel::Info, $($arg)+) } }
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! sink_info_throttle { ($sink:expr, $period:expr, $($arg:tt)+) => { $crate::sink_log_throttle!($sink, $crate::log::LogLevel::Info, $period, $($arg)+) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! sink_info {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! sink_info_throttle {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARN ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! sink_warn          { ($sink:expr, $($arg:tt)+)               => { $crate::sink_log!($sink, $crate::log::LogLevel::Warn, $($arg)+) } }
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! sink_warn_throttle { ($sink:expr, $period:expr, $($arg:tt)+) => { $crate::sink_log_throttle!($sink, $crate::log::LogLevel::Warn, $period, $($arg)+) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! sink_warn {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! sink_warn_throttle {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! sink_error          { ($sink:expr, $($arg:tt)+)               => { $crate::sink_log!($sink, $crate::log::LogLevel::Error, $($arg)+) } }
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! sink_error_throttle { ($sink:expr, $period:expr, $($arg:tt)+) => { $crate::sink_log_throttle!($sink, $crate::log::LogLevel::Error, $period, $($arg)+) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! sink_error {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! sink_error_throttle {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- FATAL ----------------------
// Always on unless `log-fatal` itself is turned off.
#[cfg(feature = "log-fatal")]
#[macro_export]
macro_rules! sink_fatal          { ($sink:expr, $($arg:tt)+)               => { $crate::sink_log!($sink, $crate::log::LogLevel::Fatal, $($arg)+) } }
#[cfg(feature = "log-fatal")]
#[macro_export]
macro_rules! sink_fatal_throttle { ($sink:expr, $period:expr, $($arg:tt)+) => { $crate::sink_log_throttle!($sink, $crate::log::LogLevel::Fatal, $period, $($arg)+) } }

#[cfg(not(feature = "log-fatal"))]
#[macro_export]
macro_rules! sink_fatal {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-fatal"))]
#[macro_export]
macro_rules! sink_fatal_throttle {
    ($($arg:tt)*) => {
        ()
    };
}


#[cfg(all(test, not(feature = "log-debug")))]
mod disabled_tests {
    use crate::log::RecordingLogSink;

    #[test]
    fn disabled_debug_macros_expand_to_nothing() {
        let sink = RecordingLogSink::default();
        sink_debug!(sink, "x");
        sink_debug_throttle!(sink, 1.0, "x={}", 5);
        assert!(sink.is_empty());
    }
}
