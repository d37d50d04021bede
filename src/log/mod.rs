pub mod configured_log_sink;
pub mod console_log_sink;
pub mod log_bridge;
pub mod log_level;
pub mod log_macros;
pub mod log_record;
pub mod log_sink;
pub mod noop_log_sink;
pub mod recording_log_sink;
pub mod throttled_log_sink;

pub use configured_log_sink::ConfiguredLogSink;
pub use console_log_sink::ConsoleLogSink;
pub use log_bridge::LogBridge;
pub use log_level::{LogLevel, Stream};
pub use log_record::LogRecord;
pub use log_sink::LogSink;
pub use noop_log_sink::NoopLogSink;
pub use recording_log_sink::RecordingLogSink;
pub use throttled_log_sink::ThrottledLogSink;

/// Namespace written by sinks that are not given one.
pub const DEFAULT_NAMESPACE: &str = "mavrosflight";
