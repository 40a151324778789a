//! Integration tests for the structural error taxonomy.

use json_nano::{parse_json, JsonError, ParseError, Token};
use rstest::rstest;

fn parse_err(input: &str) -> ParseError {
    match parse_json(input) {
        Err(JsonError::Parse(err)) => err,
        other => panic!("expected a parse error for {:?}, got {:?}", input, other),
    }
}

#[test]
fn duplicate_keys_are_rejected_not_overwritten() {
    assert_eq!(
        parse_err(r#"{"key": "value1", "key": "value2"}"#),
        ParseError::DuplicateKey("key".to_string())
    );
    assert_eq!(
        parse_err("{\"k\":1,\"k\":2}"),
        ParseError::DuplicateKey("k".to_string())
    );
}

#[test]
fn duplicate_keys_at_different_levels_are_fine() {
    assert!(parse_json(r#"{"k": {"k": 1}}"#).is_ok());
    assert!(parse_json(r#"[{"k": 1}, {"k": 2}]"#).is_ok());
}

#[rstest]
#[case(r#"{1: 2}"#)]
#[case(r#"{true: 1}"#)]
#[case(r#"{[]: 1}"#)]
fn object_keys_must_be_strings(#[case] input: &str) {
    assert_eq!(parse_err(input), ParseError::ExpectedString);
}

#[rstest]
#[case(r#"{"a" 1}"#)]
#[case(r#"{"a", 1}"#)]
#[case(r#"{"a" "b"}"#)]
fn missing_colon_after_key(#[case] input: &str) {
    assert_eq!(parse_err(input), ParseError::ExpectedColon);
}

#[rstest]
#[case(r#"{"a": 1 "b": 2}"#)]
#[case(r#"{"a": 1 :}"#)]
fn object_pairs_must_be_separated(#[case] input: &str) {
    assert_eq!(parse_err(input), ParseError::InvalidObjectFormat);
}

#[rstest]
#[case("[1 2]")]
#[case("[1 :]")]
fn array_elements_must_be_separated(#[case] input: &str) {
    assert_eq!(parse_err(input), ParseError::InvalidArrayFormat);
}

#[rstest]
#[case("1.5")]
#[case("3.14")]
#[case("1e10")]
#[case("1.2.3")]
#[case("1e")]
#[case("-")]
#[case(".")]
#[case("--1")]
fn non_integer_numbers_fail_at_parse_time(#[case] input: &str) {
    assert_eq!(
        parse_err(input),
        ParseError::InvalidNumber(input.to_string())
    );
}

#[test]
fn integer_overflow_is_invalid_number() {
    assert_eq!(
        parse_err("9223372036854775808"),
        ParseError::InvalidNumber("9223372036854775808".to_string())
    );
}

#[test]
fn leading_punctuation_is_unexpected() {
    assert_eq!(
        parse_err(":"),
        ParseError::UnexpectedToken(Token::Colon)
    );
    assert_eq!(
        parse_err("}"),
        ParseError::UnexpectedToken(Token::RightBrace)
    );
    assert_eq!(
        parse_err(",1"),
        ParseError::UnexpectedToken(Token::Comma)
    );
}

#[test]
fn empty_input_is_unexpected_end() {
    assert_eq!(parse_err(""), ParseError::UnexpectedEndOfInput);
    assert_eq!(parse_err("   "), ParseError::UnexpectedEndOfInput);
}

#[test]
fn trailing_tokens_after_top_level_value_are_ignored() {
    // The parser stops after one complete value; leftovers are not checked.
    assert!(parse_json("null null").is_ok());
    assert!(parse_json("[] {}").is_ok());
    assert!(parse_json("1 ]").is_ok());
}
