//! The event contract a test-execution harness drives a reporter through.

use crate::identity::TestIdentity;

/// Receiver for test lifecycle events.
///
/// A test-execution engine owns the run loop and calls into this trait in
/// execution order: [`start_run`](TestResultSink::start_run) once, then per
/// test [`start_test`](TestResultSink::start_test), exactly one `add_*`
/// outcome call, [`stop_test`](TestResultSink::stop_test), and finally
/// [`stop_run`](TestResultSink::stop_run). Calls are sequential and never
/// overlap; a sink holds no locks and schedules nothing of its own.
pub trait TestResultSink {
    type Error;

    fn start_run(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn start_test(&mut self, test: &TestIdentity) -> Result<(), Self::Error>;

    fn stop_test(&mut self, test: &TestIdentity) -> Result<(), Self::Error>;

    fn add_success(&mut self, test: &TestIdentity) -> Result<(), Self::Error>;

    /// An assertion mismatch, with the failure text the harness captured.
    fn add_failure(&mut self, test: &TestIdentity, msg: &str) -> Result<(), Self::Error>;

    /// An uncaught non-assertion error.
    fn add_error(&mut self, test: &TestIdentity, msg: &str) -> Result<(), Self::Error>;

    /// A skipped test; `reason` may be empty.
    fn add_skip(&mut self, test: &TestIdentity, reason: &str) -> Result<(), Self::Error>;

    fn add_expected_failure(&mut self, test: &TestIdentity, msg: &str) -> Result<(), Self::Error>;

    fn add_unexpected_success(&mut self, test: &TestIdentity) -> Result<(), Self::Error>;

    fn stop_run(&mut self) -> Result<(), Self::Error>;
}
