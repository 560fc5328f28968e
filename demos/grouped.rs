use std::io;

use tidytest::prelude::*;

enum Outcome {
    Pass,
    Fail(&'static str),
    Raise(&'static str),
    Skip(&'static str),
    ExpectedFail(&'static str),
    UnexpectedPass,
}

// A scripted run; a real harness would deliver these events as tests execute.
const RUN: &[((&str, &str, &str), Outcome)] = &[
    (("demo", "Add", "test_1"), Outcome::Pass),
    (("demo", "Add", "test_2"), Outcome::Pass),
    (("demo", "Minus", "test_1"), Outcome::Pass),
    (("demo", "Minus", "test_2"), Outcome::Pass),
    (("demo", "Several", "test_ok"), Outcome::Pass),
    (("demo", "Several", "test_fail"), Outcome::Fail("1 != 0")),
    (("demo", "Several", "test_raise"), Outcome::Raise("ValueError: Oops")),
    (
        ("demo", "Several", "test_skip"),
        Outcome::Skip("it can be skipped"),
    ),
    (
        ("demo", "Several", "test_can_be_failed"),
        Outcome::ExpectedFail("1 != 0"),
    ),
    (
        ("demo", "Several", "test_should_be_failed"),
        Outcome::UnexpectedPass,
    ),
];

fn main() -> io::Result<()> {
    let mut reporter = GroupBufferedReporter::default().with_verbosity(2);

    reporter.start_run()?;
    for ((namespace, group, name), outcome) in RUN {
        let test = TestIdentity::new(*namespace, *group, *name);
        reporter.start_test(&test)?;
        match outcome {
            Outcome::Pass => reporter.add_success(&test)?,
            Outcome::Fail(msg) => reporter.add_failure(&test, msg)?,
            Outcome::Raise(msg) => reporter.add_error(&test, msg)?,
            Outcome::Skip(reason) => reporter.add_skip(&test, reason)?,
            Outcome::ExpectedFail(msg) => reporter.add_expected_failure(&test, msg)?,
            Outcome::UnexpectedPass => reporter.add_unexpected_success(&test)?,
        }
        reporter.stop_test(&test)?;
    }
    reporter.stop_run()?;

    let tally = reporter.tally();
    println!();
    println!(
        "ran {} tests, successful: {}",
        tally.tests_run,
        tally.was_successful()
    );

    Ok(())
}
