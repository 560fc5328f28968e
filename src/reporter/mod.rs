//! The group-buffered reporter.

use std::{borrow::Cow, io};

use crate::{
    identity::TestIdentity, outcome::TestOutcome, sink::TestResultSink, tally::RunTally,
    token::OutcomeToken,
};

pub mod color;
pub mod terse;

pub use color::{ColorSetting, SupportsColor};

use color::codes::{GREEN, RED, RESET};

/// Verbosity above which results are buffered, grouped and aligned.
const DETAILED_THRESHOLD: u8 = 1;

/// A [`TestResultSink`] that buffers the result lines of the currently
/// running test group and emits them aligned once the group is complete.
///
/// In detailed mode (verbosity above 1) each completed test becomes a
/// buffered [`OutcomeToken`]. When a test from a different group starts, or
/// the run ends, the buffer is flushed: the result column is padded to the
/// longest label in the group and every line is written in completion order.
/// At verbosity 1 the reporter writes one progress glyph per test instead,
/// and at verbosity 0 nothing at all. Aggregate counts are kept in a
/// [`RunTally`] in every mode.
///
/// All configuration is injected at construction and fixed for the
/// reporter's lifetime.
#[derive(Debug)]
pub struct GroupBufferedReporter<W: io::Write> {
    target: W,
    verbosity: u8,
    color_setting: ColorSetting,
    buffer: Vec<OutcomeToken>,
    last_seen: Option<TestIdentity>,
    tally: RunTally,
}

impl Default for GroupBufferedReporter<io::Stdout> {
    fn default() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: io::Write> GroupBufferedReporter<W> {
    pub fn new(target: W) -> Self {
        Self {
            target,
            verbosity: 2,
            color_setting: ColorSetting::default(),
            buffer: Vec::new(),
            last_seen: None,
            tally: RunTally::new(),
        }
    }

    pub fn with_target<WithTarget: io::Write>(
        self,
        target: WithTarget,
    ) -> GroupBufferedReporter<WithTarget> {
        GroupBufferedReporter {
            target,
            verbosity: self.verbosity,
            color_setting: self.color_setting,
            buffer: self.buffer,
            last_seen: self.last_seen,
            tally: self.tally,
        }
    }

    pub fn with_verbosity(self, verbosity: u8) -> Self {
        Self { verbosity, ..self }
    }

    pub fn with_color_setting(self, color_setting: impl Into<ColorSetting>) -> Self {
        Self {
            color_setting: color_setting.into(),
            ..self
        }
    }

    /// Aggregate counts recorded so far.
    pub fn tally(&self) -> &RunTally {
        &self.tally
    }

    fn detailed(&self) -> bool {
        self.verbosity > DETAILED_THRESHOLD
    }

    fn group_changed(&self, test: &TestIdentity) -> bool {
        match &self.last_seen {
            None => true,
            Some(previous) => previous.group_key() != test.group_key(),
        }
    }
}

impl<W: io::Write + SupportsColor> GroupBufferedReporter<W> {
    /// Return whether this reporter will currently emit colored output.
    pub fn use_color(&self) -> bool {
        match self.color_setting {
            ColorSetting::Automatic => self.target.supports_color(),
            ColorSetting::Always => true,
            ColorSetting::Never => false,
        }
    }

    fn write_group_header(&mut self, test: &TestIdentity) -> io::Result<()> {
        writeln!(self.target)?;
        writeln!(self.target, "*** [{}] ***", test.group_key())?;
        self.target.flush()
    }

    /// Render and emit all buffered tokens in completion order, then clear
    /// the buffer. A no-op on an empty buffer.
    fn flush_buffer(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let use_color = self.use_color();
        let result_max_len = self
            .buffer
            .iter()
            .map(|token| token.label.len())
            .max()
            .unwrap_or(0);

        for token in self.buffer.drain(..) {
            match (token.ok, use_color) {
                (true, true) => write!(self.target, "{GREEN}O{RESET}")?,
                (true, false) => write!(self.target, "O")?,
                (false, true) => write!(self.target, "{RED}X{RESET}")?,
                (false, false) => write!(self.target, "X")?,
            }
            writeln!(
                self.target,
                " - {:<result_max_len$} ... {}",
                token.label, token.detail,
            )?;
        }

        self.target.flush()
    }

    fn record_outcome(&mut self, test: &TestIdentity, outcome: TestOutcome) -> io::Result<()> {
        self.tally.record(&outcome);

        if self.detailed() {
            self.buffer.push(OutcomeToken::new(test, &outcome));
            return Ok(());
        }
        if self.verbosity == 0 {
            return Ok(());
        }
        terse::write_progress(&mut self.target, &outcome)
    }
}

impl<W: io::Write + SupportsColor> TestResultSink for GroupBufferedReporter<W> {
    type Error = io::Error;

    fn start_test(&mut self, test: &TestIdentity) -> io::Result<()> {
        if self.group_changed(test) && self.detailed() {
            self.flush_buffer()?;
            self.write_group_header(test)?;
        }
        self.tally.record_start();
        Ok(())
    }

    fn stop_test(&mut self, test: &TestIdentity) -> io::Result<()> {
        self.last_seen = Some(test.clone());
        Ok(())
    }

    fn add_success(&mut self, test: &TestIdentity) -> io::Result<()> {
        self.record_outcome(test, TestOutcome::Passed)
    }

    fn add_failure(&mut self, test: &TestIdentity, _msg: &str) -> io::Result<()> {
        self.record_outcome(test, TestOutcome::Failed)
    }

    fn add_error(&mut self, test: &TestIdentity, _msg: &str) -> io::Result<()> {
        self.record_outcome(test, TestOutcome::Errored)
    }

    fn add_skip(&mut self, test: &TestIdentity, reason: &str) -> io::Result<()> {
        let reason = (!reason.is_empty()).then(|| Cow::Owned(reason.to_owned()));
        self.record_outcome(test, TestOutcome::Skipped { reason })
    }

    fn add_expected_failure(&mut self, test: &TestIdentity, _msg: &str) -> io::Result<()> {
        self.record_outcome(test, TestOutcome::ExpectedFailure)
    }

    fn add_unexpected_success(&mut self, test: &TestIdentity) -> io::Result<()> {
        self.record_outcome(test, TestOutcome::UnexpectedSuccess)
    }

    fn stop_run(&mut self) -> io::Result<()> {
        match self.detailed() {
            true => self.flush_buffer(),
            false => Ok(()),
        }
    }
}
