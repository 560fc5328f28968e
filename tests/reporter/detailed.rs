use pretty_assertions::assert_eq;

use crate::lib::{Event, ident, render};

#[test]
fn aligns_result_column_to_longest_label() {
    let events = [
        Event::Pass(ident("demo", "Alpha", "t1")),
        Event::Fail(ident("demo", "Alpha", "t2"), "1 != 2"),
        Event::Skip(ident("demo", "Alpha", "t3"), "slow"),
    ];

    let (output, _) = render(&events, 2);
    assert_eq!(
        output,
        "\n\
         *** [demo.Alpha] ***\n\
         O - ok      ... demo.Alpha.t1()\n\
         X - FAIL    ... demo.Alpha.t2()\n\
         O - skipped ... demo.Alpha.t3() - skip_reason = (slow)\n"
    );
}

#[test]
fn group_change_flushes_previous_group_before_new_header() {
    let events = [
        Event::Pass(ident("math", "Add", "t1")),
        Event::Pass(ident("math", "Add", "t2")),
        Event::Fail(ident("math", "Minus", "t1"), "2 - 1 != 0"),
    ];

    let (output, _) = render(&events, 2);
    assert_eq!(
        output,
        "\n\
         *** [math.Add] ***\n\
         O - ok ... math.Add.t1()\n\
         O - ok ... math.Add.t2()\n\
         \n\
         *** [math.Minus] ***\n\
         X - FAIL ... math.Minus.t1()\n"
    );
}

#[test]
fn namespace_change_alone_is_a_group_change() {
    let events = [
        Event::Pass(ident("alpha", "Same", "t1")),
        Event::Pass(ident("beta", "Same", "t1")),
    ];

    let (output, _) = render(&events, 2);
    assert_eq!(
        output,
        "\n\
         *** [alpha.Same] ***\n\
         O - ok ... alpha.Same.t1()\n\
         \n\
         *** [beta.Same] ***\n\
         O - ok ... beta.Same.t1()\n"
    );
}

#[test]
fn column_width_covers_all_six_labels() {
    let events = [
        Event::ExpectedFail(ident("ns", "G", "a"), "known issue"),
        Event::UnexpectedPass(ident("ns", "G", "b")),
        Event::Error(ident("ns", "G", "c"), "ValueError: oops"),
    ];

    let (output, _) = render(&events, 2);
    assert_eq!(
        output,
        "\n\
         *** [ns.G] ***\n\
         O - expected fail   ... ns.G.a()\n\
         X - UNEXPECTED PASS ... ns.G.b()\n\
         X - EXCEPTION       ... ns.G.c()\n"
    );
}

#[test]
fn empty_skip_reason_renders_a_single_segment() {
    let events = [Event::Skip(ident("ns", "G", "quiet"), "")];

    let (output, _) = render(&events, 2);
    assert_eq!(
        output,
        "\n\
         *** [ns.G] ***\n\
         O - skipped ... ns.G.quiet()\n"
    );
}

#[test]
fn run_without_events_writes_nothing() {
    let (output, _) = render(&[], 2);
    assert_eq!(output, "");
}

#[test]
fn lines_keep_completion_order() {
    let events = [
        Event::Fail(ident("ns", "G", "first"), ""),
        Event::Pass(ident("ns", "G", "second")),
        Event::Error(ident("ns", "G", "third"), ""),
        Event::Pass(ident("ns", "G", "fourth")),
    ];

    let (output, _) = render(&events, 2);
    let lines: Vec<&str> = output.lines().skip(2).collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with("ns.G.first()"));
    assert!(lines[1].ends_with("ns.G.second()"));
    assert!(lines[2].ends_with("ns.G.third()"));
    assert!(lines[3].ends_with("ns.G.fourth()"));
}
