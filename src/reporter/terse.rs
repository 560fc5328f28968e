//! The one-glyph-per-test progress mode used at or below the detailed
//! verbosity threshold. No buffering, no group headers, no alignment.

use std::io;

use crate::outcome::TestOutcome;

/// Progress glyph for a completed test.
pub fn progress_glyph(outcome: &TestOutcome) -> &'static str {
    match outcome {
        TestOutcome::Passed => ".",
        TestOutcome::Failed => "F",
        TestOutcome::Errored => "E",
        TestOutcome::Skipped { .. } => "s",
        TestOutcome::ExpectedFailure => "x",
        TestOutcome::UnexpectedSuccess => "u",
    }
}

pub(crate) fn write_progress<W: io::Write>(
    target: &mut W,
    outcome: &TestOutcome,
) -> io::Result<()> {
    write!(target, "{}", progress_glyph(outcome))?;
    target.flush()
}
