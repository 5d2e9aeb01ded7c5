//! Short scenarios, one behavior each.

use intergalactic_runtime::SessionConfig;

use crate::{run, run_with_config};

#[test]
fn teach_then_ask() {
    let responses = run("glob is I\nhow much is glob ?\n");
    assert_eq!(responses, vec!["glob is 1"]);
}

#[test]
fn rate_then_credits() {
    let input = "\
glob is I
prok is V
glob glob Silver is 34 credits
how many credits is glob Silver ?
";
    assert_eq!(run(input), vec!["glob silver is 17.00 Credits"]);
}

#[test]
fn undefined_symbol_in_comparison() {
    let responses = run("is pish smaller than glob ?\n");
    assert_eq!(
        responses,
        vec!["pish unit is not defined in the intergalactic database"]
    );
}

#[test]
fn blank_line_ends_the_session() {
    let input = "glob is I\n\nhow much is glob ?\n";
    assert!(run(input).is_empty());
}

#[test]
fn whitespace_only_line_is_not_blank() {
    let input = "glob is I\n   \t\nhow much is glob ?\n";
    assert_eq!(
        run(input),
        vec!["i have no idea what are you talking about", "glob is 1"]
    );
}

#[test]
fn crlf_blank_line_ends_the_session() {
    let input = "glob is I\r\n\r\nhow much is glob ?\r\n";
    assert!(run(input).is_empty());
}

#[test]
fn blank_lines_skipped_when_configured() {
    let input = "glob is I\n\nhow much is glob ?\n";
    let config = SessionConfig::new().with_stop_at_blank_line(false);
    assert_eq!(run_with_config(input, config), vec!["glob is 1"]);
}

#[test]
fn errors_do_not_stop_the_session() {
    let input = "\
what is this thing
glob is I
how much is glob glob glob glob ?
how much is glob glob glob ?
";
    assert_eq!(
        run(input),
        vec![
            "i have no idea what are you talking about",
            "requested number is in invalid format",
            "glob glob glob is 3",
        ]
    );
}

#[test]
fn input_case_is_folded() {
    let input = "GLOB is i\nHow Much Is Glob ?\n";
    assert_eq!(run(input), vec!["glob is 1"]);
}

#[test]
fn later_teaching_overrides_earlier() {
    let input = "glob is I\nglob is X\nhow much is glob ?\n";
    assert_eq!(run(input), vec!["glob is 10"]);
}

#[test]
fn credits_query_for_unknown_currency() {
    let input = "glob is I\nhow many credits is glob Iron ?\n";
    assert_eq!(
        run(input),
        vec!["iron currency is not defined in the intergalactic database"]
    );
}

#[test]
fn credits_literal_must_be_a_number() {
    let input = "glob is I\nglob Silver is many credits\n";
    assert_eq!(run(input), vec!["credits is not a number"]);
}

#[test]
fn rate_from_zero_quantity() {
    let responses = run("silver is worth 34 credits\n");
    assert_eq!(responses, vec!["cannot derive a rate from a zero quantity"]);
}

#[test]
fn precision_applies_to_credits() {
    let input = "\
glob is I
pish is X
pish pish Iron is 3910 credits
how many credits is glob Iron ?
";
    let config = SessionConfig::new().with_precision(1);
    assert_eq!(
        run_with_config(input, config),
        vec!["glob iron is 195.5 Credits"]
    );
}

#[test]
fn crlf_line_endings() {
    let input = "glob is I\r\nhow much is glob ?\r\n";
    assert_eq!(run(input), vec!["glob is 1"]);
}
