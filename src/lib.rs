//! mavlog provides leveled logging for the MAVLink/ROSflight bridge.
//!
//! Components log through the [`log::LogSink`] capability, taken as a generic
//! parameter so every call resolves statically. The default backend,
//! [`log::ConsoleLogSink`], writes `[<namespace>][<LEVEL>]: <message>` lines
//! to stdout (DEBUG, INFO) and stderr (WARN, ERROR, FATAL).
//!
//! ```rust
//! use mavlog::log::{ConsoleLogSink, LogSink};
//!
//! fn arm<S: LogSink>(log: &S, throttle: f32) {
//!     log.info(format_args!("arming with throttle {:.2}", throttle));
//! }
//!
//! arm(&ConsoleLogSink::stdio(), 0.0);
//! ```

/// INI configuration and the typed `[Logging]` view.
pub mod config;
/// Log sinks, levels and the leveled macros.
pub mod log;
