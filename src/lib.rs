//! A group-buffered test result reporter.
//!
//! A test-execution harness drives a [`TestResultSink`] with lifecycle events
//! in execution order. The [`GroupBufferedReporter`](reporter::GroupBufferedReporter)
//! implementation holds the
//! result lines of the currently running test group back until the group is
//! complete, then emits them with the result column aligned, preceded by a
//! group header. Below the detailed verbosity threshold it falls back to a
//! one-glyph-per-test progress stream.

pub mod identity;
pub mod outcome;
pub mod reporter;
pub mod token;

mod sink;
pub use sink::*;

mod tally;
pub use tally::*;

pub mod prelude {
    pub use std::borrow::Cow;

    pub use crate::{
        identity::{GroupKey, TestIdentity},
        outcome::TestOutcome,
        reporter::{ColorSetting, GroupBufferedReporter, SupportsColor},
        sink::TestResultSink,
        tally::RunTally,
    };
}
