//! Import tests for Linger format (Linger → IR)

use crate::common::load_fixture;
use ibex_babel::formats::linger::parse_linger;
use ibex_babel::ir::Answer;
use ibex_babel::ConvertError;

#[test]
fn test_fixture_items_in_source_order() {
    let items = parse_linger(&load_fixture("three-items.txt")).unwrap();

    let labels: Vec<_> = items.iter().map(|item| item.header.label()).collect();
    assert_eq!(labels, vec!["exp_a", "exp_b", "filler_x"]);

    let lines: Vec<_> = items.iter().map(|item| item.line).collect();
    assert_eq!(lines, vec![1, 5, 8]);
}

#[test]
fn test_fixture_questions() {
    let items = parse_linger(&load_fixture("three-items.txt")).unwrap();

    assert_eq!(items[0].questions.len(), 1);
    assert_eq!(items[0].questions[0].correct, Answer::Yes);
    assert!(items[1].questions.is_empty());
    assert_eq!(items[2].questions[0].text, "Did the cat sleep?");
    assert_eq!(items[2].questions[0].correct, Answer::No);
}

#[test]
fn test_segments_of_two_item_fixture() {
    let items = parse_linger(&load_fixture("two-items.txt")).unwrap();

    assert_eq!(items.len(), 2);
    for item in &items {
        assert_eq!(item.segments, vec!["The", "dog", "ran."]);
    }
}

#[test]
fn test_malformed_fixture_reports_offending_line() {
    let err = parse_linger(&load_fixture("malformed-answer.txt")).unwrap_err();

    assert_eq!(
        err,
        ConvertError::Parse {
            line: 7,
            content: "? Did the cat sleep? perhaps".to_string(),
            message: "unknown answer 'perhaps' (expected Y, Yes, N or No)".to_string(),
        }
    );
    assert!(err.to_string().starts_with("parse error at line 7: "));
}

#[test]
fn test_windows_line_endings() {
    let items = parse_linger("# exp 1 a\r\nThe dog ran.\r\n? Did it run? N\r\n").unwrap();

    assert_eq!(items[0].segments, vec!["The", "dog", "ran."]);
    assert_eq!(items[0].questions[0].correct, Answer::No);
}
