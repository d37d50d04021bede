use std::sync::Arc;

use log::LevelFilter;
use mavlog::log::{LogBridge, RecordingLogSink};

// Single test: the `log` backend can only be installed once per process.
#[test]
fn bridge_installs_once_and_receives_facade_records() {
    let sink = Arc::new(RecordingLogSink::new("rosflight_io"));
    LogBridge::install(Arc::clone(&sink), LevelFilter::Info).unwrap();

    log::trace!("dropped");
    log::debug!("dropped too");
    log::info!("param {} = {}", "RC_TYPE", 1);
    log::error!("serial port closed");

    assert_eq!(
        sink.lines(),
        [
            "[rosflight_io][INFO]: param RC_TYPE = 1",
            "[rosflight_io][ERROR]: serial port closed",
        ]
    );

    assert!(LogBridge::install(RecordingLogSink::default(), LevelFilter::Debug).is_err());
}
