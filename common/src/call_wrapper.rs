//! Start/success/failure reporting around a fallible task.
//!
//! Both release tools announce what they are about to do, run a single task
//! to completion, and finish with either a success line or the error followed
//! by a failure line. [`CallReport`] captures the three messages once so the
//! binaries only supply the task closure.

use log::{error, info};
use std::fmt::Display;
use std::io::Write;

/// The three messages written around a reported task.
///
/// # Example
///
/// ```
/// use fb2k_release_common::CallReport;
///
/// let report = CallReport::new("Packing", "Packing: success", "Packing: failure!");
/// let mut out = Vec::new();
/// let result: Result<u8, String> = report.run(&mut out, || Ok(7));
///
/// assert_eq!(result, Ok(7));
/// assert_eq!(String::from_utf8(out).unwrap(), "Packing\nPacking: success\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallReport<'a> {
    start: &'a str,
    success: &'a str,
    failure: &'a str,
}

impl<'a> CallReport<'a> {
    /// Create a report from its start, success, and failure messages.
    #[must_use]
    pub const fn new(start: &'a str, success: &'a str, failure: &'a str) -> Self {
        Self {
            start,
            success,
            failure,
        }
    }

    /// Message written before the task runs.
    #[must_use]
    pub const fn start(&self) -> &'a str {
        self.start
    }

    /// Message written after the task succeeds.
    #[must_use]
    pub const fn success(&self) -> &'a str {
        self.success
    }

    /// Message written after the task fails.
    #[must_use]
    pub const fn failure(&self) -> &'a str {
        self.failure
    }

    /// Run `task`, reporting its progress to `out`.
    ///
    /// The task's result is returned unchanged so callers can still inspect
    /// the value or the error. On failure the error's display form is written
    /// before the failure message.
    ///
    /// # Errors
    ///
    /// Returns whatever error `task` returns.
    pub fn run<T, E, F>(&self, out: &mut dyn Write, task: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: Display,
    {
        info!("{}", self.start);
        write_line(out, self.start);

        let result = task();
        match &result {
            Ok(_) => {
                info!("{}", self.success);
                write_line(out, self.success);
            }
            Err(err) => {
                error!("{}: {err}", self.failure);
                write_line(out, err);
                write_line(out, self.failure);
            }
        }
        result
    }
}

/// Process exit status for a reported task: `0` on success, `1` on failure.
#[must_use]
pub const fn exit_code<T, E>(result: &Result<T, E>) -> i32 {
    if result.is_ok() { 0 } else { 1 }
}

fn write_line(out: &mut dyn Write, message: impl Display) {
    if writeln!(out, "{message}").is_err() {
        // Best-effort reporting; ignore write failures.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn report() -> CallReport<'static> {
        CallReport::new("Doing work", "Doing work: success", "Doing work: failure!")
    }

    fn output_text(out: Vec<u8>) -> String {
        String::from_utf8(out).expect("report output is UTF-8")
    }

    #[rstest]
    fn success_writes_start_then_success(report: CallReport<'static>) {
        let mut out = Vec::new();
        let result: Result<&str, String> = report.run(&mut out, || Ok("done"));

        assert_eq!(result, Ok("done"));
        assert_eq!(output_text(out), "Doing work\nDoing work: success\n");
    }

    #[rstest]
    fn failure_writes_error_before_failure_message(report: CallReport<'static>) {
        let mut out = Vec::new();
        let result: Result<(), String> = report.run(&mut out, || Err("disk on fire".to_owned()));

        assert_eq!(result, Err("disk on fire".to_owned()));
        assert_eq!(
            output_text(out),
            "Doing work\ndisk on fire\nDoing work: failure!\n"
        );
    }

    #[rstest]
    fn task_runs_exactly_once(report: CallReport<'static>) {
        let mut calls = 0;
        let mut out = Vec::new();
        let result: Result<(), String> = report.run(&mut out, || {
            calls += 1;
            Ok(())
        });

        assert!(result.is_ok());
        assert_eq!(calls, 1);
    }

    #[rstest]
    #[case::success(Ok(()), 0)]
    #[case::failure(Err("boom"), 1)]
    fn exit_code_reflects_outcome(#[case] result: Result<(), &str>, #[case] expected: i32) {
        assert_eq!(exit_code(&result), expected);
    }

    #[test]
    fn accessors_return_messages() {
        let report = CallReport::new("a", "b", "c");
        assert_eq!(
            (report.start(), report.success(), report.failure()),
            ("a", "b", "c")
        );
    }
}
