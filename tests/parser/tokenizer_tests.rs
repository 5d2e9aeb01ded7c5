//! Tokenizer tests.

use intergalactic_parser::tokenizer::{Line, normalize, tokenize};

#[test]
fn question_mark_without_space() {
    assert_eq!(normalize("how much is glob?"), "how much is glob");
}

#[test]
fn question_mark_with_space() {
    assert_eq!(normalize("how much is glob ?"), "how much is glob");
}

#[test]
fn only_one_question_mark_group_is_stripped() {
    assert_eq!(normalize("is it ?? "), "is it ??");
}

#[test]
fn whitespace_only_line_is_empty() {
    let line = Line::new("   \t  ");
    assert!(line.text.is_empty());
    assert!(line.tokens.is_empty());
}

#[test]
fn tabs_separate_words() {
    assert_eq!(tokenize("glob\tis\tI"), vec!["glob", "is", "I"]);
}
