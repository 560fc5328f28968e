//! Buffered result lines awaiting a group flush.

use std::fmt::Display;

use crate::{identity::TestIdentity, outcome::TestOutcome};

/// Separator between detail segments of a joined detail.
pub const DETAIL_SEPARATOR: &str = " - ";

/// Detail column of a result line.
///
/// Most lines carry the qualified test name alone; a skip with a non-empty
/// reason carries the name plus the reason as separate segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    Single(String),
    Joined(Vec<String>),
}

impl Display for Detail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Detail::Single(info) => f.write_str(info),
            Detail::Joined(segments) => f.write_str(&segments.join(DETAIL_SEPARATOR)),
        }
    }
}

/// One formatted result line, buffered until its group is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeToken {
    /// Whether this outcome counts as good for status coloring.
    pub ok: bool,
    /// Result word, padded to the group-wide column width on flush.
    pub label: &'static str,
    pub detail: Detail,
}

impl OutcomeToken {
    pub fn new(test: &TestIdentity, outcome: &TestOutcome) -> Self {
        let info = test.qualified();
        let detail = match outcome {
            TestOutcome::Skipped {
                reason: Some(reason),
            } if !reason.is_empty() => {
                Detail::Joined(vec![info, format!("skip_reason = ({reason})")])
            }
            _ => Detail::Single(info),
        };

        Self {
            ok: outcome.is_good(),
            label: outcome.label(),
            detail,
        }
    }
}
