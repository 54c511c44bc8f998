//! Log output emitted by the run-and-report wrapper.
//!
//! `logtest` installs a process-wide logger, so this file holds a single test
//! to keep records from other tests out of the capture.

use fb2k_release_common::CallReport;
use log::Level;
use logtest::Logger;

#[test]
fn failures_are_logged_at_error_level() {
    let mut logger = Logger::start();
    let report = CallReport::new(
        "Packing component",
        "Packing component: success",
        "Packing component: failure!",
    );

    let mut out = Vec::new();
    let ok: Result<(), String> = report.run(&mut out, || Ok(()));
    assert!(ok.is_ok());
    let failed: Result<(), String> = report.run(&mut out, || Err("missing LICENSE".to_owned()));
    assert!(failed.is_err());

    let mut saw_success = false;
    let mut saw_failure = false;
    while let Some(record) = logger.pop() {
        let message = record.args().to_string();
        if record.level() == Level::Info && message == "Packing component: success" {
            saw_success = true;
        }
        if record.level() == Level::Error
            && message.contains("Packing component: failure!")
            && message.contains("missing LICENSE")
        {
            saw_failure = true;
        }
    }

    assert!(saw_success, "expected the success message at info level");
    assert!(saw_failure, "expected the failure and its cause at error level");
}
