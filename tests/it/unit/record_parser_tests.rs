//! Unit tests for the record parser.

use crate::helpers::{HEADER, record};
use userview::{FormatError, clean_field, parse_file, parse_line};

#[test]
fn test_valid_lines_return_cleaned_fields() {
    let cases = [
        (
            "1,John,Doe,john@test.com,Male,192.168.1.1",
            ["1", "John", "Doe", "john@test.com", "Male", "192.168.1.1"],
        ),
        (
            "2;Jane;Doe;jane@test.com;Female;192.168.1.2",
            ["2", "Jane", "Doe", "jane@test.com", "Female", "192.168.1.2"],
        ),
        (
            "3, Bob , Smith , bob@test.com , Male , 192.168.1.3 ",
            ["3", "Bob", "Smith", "bob@test.com", "Male", "192.168.1.3"],
        ),
        (
            "\t4,Eve\r,Adams,eve@test.com,Female,10.1.1.1\r\n",
            ["4", "Eve", "Adams", "eve@test.com", "Female", "10.1.1.1"],
        ),
    ];

    for (line, expected) in cases {
        assert_eq!(parse_line(line), Ok(record(expected)), "line: {line:?}");
    }
}

#[test]
fn test_invalid_lines_fail() {
    assert!(matches!(parse_line(""), Err(FormatError::EmptyLine)));
    assert!(matches!(
        parse_line("1,John,Doe"),
        Err(FormatError::TooFewFields { required: 6, actual: 3 })
    ));
}

#[test]
fn test_empty_email_message() {
    let err = parse_line("1,John,Doe,,Male,192.168.1.1").unwrap_err();
    assert_eq!(err, FormatError::EmptyEmail);
    assert!(err.to_string().contains("email must not be empty"));
}

#[test]
fn test_whitespace_only_email_is_empty() {
    let err = parse_line("1,John,Doe, \t ,Male,192.168.1.1").unwrap_err();
    assert_eq!(err, FormatError::EmptyEmail);
}

#[test]
fn test_clean_field_strips_controls_then_trims() {
    assert_eq!(clean_field(" test "), "test");
    assert_eq!(clean_field("test\t"), "test");
    assert_eq!(clean_field("test\r\n"), "test");
    assert_eq!(clean_field("\u{0}t\u{1b}e\u{7f}st"), "test");
}

#[test]
fn test_delimiter_inside_value_splits() {
    // No quoting: a comma in a name shifts the remaining fields
    let parsed = parse_line("1,Doe, John,john@test.com,Male,1.1.1.1").unwrap();
    assert_eq!(parsed.first_name, "Doe");
    assert_eq!(parsed.last_name, "John");
    assert_eq!(parsed.email, "john@test.com");
}

#[test]
fn test_end_to_end_lines() {
    let lines = [
        "header",
        "1,John,Doe,j@x.com,M,1.1.1.1",
        "2;Jane;Doe;jane@x.com;F;2.2.2.2",
        "bad,line",
    ];
    let outcome = parse_file(lines);

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].line_number, 4);
    assert_eq!(
        outcome.errors[0].message(),
        "expected at least 6 fields, found 2"
    );
}

#[test]
fn test_one_bad_line_does_not_abort() {
    let lines = vec![
        HEADER.to_string(),
        ",no,id,x@y.z,M,1.1.1.1".to_string(),
        "5,Ok,Line,ok@y.z,F,5.5.5.5".to_string(),
        "6,No,Email,,F,6.6.6.6".to_string(),
        "7,Also,Ok,also@y.z,M,7.7.7.7".to_string(),
    ];
    let outcome = parse_file(&lines);

    let record_ids: Vec<&str> = outcome.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(record_ids, vec!["5", "7"]);

    let errors: Vec<(usize, FormatError)> = outcome
        .errors
        .iter()
        .map(|e| (e.line_number, e.error.clone()))
        .collect();
    assert_eq!(
        errors,
        vec![(2, FormatError::EmptyId), (4, FormatError::EmptyEmail)]
    );
}
