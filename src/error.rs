//! Error types for tokenization and parsing
//!
//! Every failure is terminal for the current call: there is no recovery, no
//! partial result, and no retry. Callers get a distinct, inspectable error
//! kind carrying any offending character or text.

use std::fmt;

use crate::lexer::Token;

/// Errors produced while scanning raw text into tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that cannot begin any token
    InvalidCharacter(char),
    /// End of input reached inside a string, before the closing quote
    UnterminatedString,
    /// A backslash with no character following it
    InvalidEscape,
    /// A `t`/`f`/`n` that does not begin the exact keyword; carries the
    /// keyword that was expected
    InvalidLiteral(&'static str),
    /// More `{` than `}` once the scan completed
    UnmatchedOpenBrace,
    /// More `[` than `]` once the scan completed
    UnmatchedOpenBracket,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::InvalidCharacter(c) => write!(f, "invalid character: '{}'", c),
            LexError::UnterminatedString => write!(f, "unterminated string"),
            LexError::InvalidEscape => write!(f, "invalid escape sequence"),
            LexError::InvalidLiteral(keyword) => write!(f, "invalid token for '{}'", keyword),
            LexError::UnmatchedOpenBrace => write!(f, "unmatched opening curly brace"),
            LexError::UnmatchedOpenBracket => write!(f, "unmatched opening square bracket"),
        }
    }
}

impl std::error::Error for LexError {}

/// Errors produced while descending over the token sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token that cannot begin a value
    UnexpectedToken(Token),
    /// The cursor ran past the end of the token sequence
    UnexpectedEndOfInput,
    /// An object key position held something other than a string
    ExpectedString,
    /// An object key was not followed by `:`
    ExpectedColon,
    /// The same key appeared twice in one object
    DuplicateKey(String),
    /// A key/value pair was followed by something other than `,` or `}`
    InvalidObjectFormat,
    /// An array element was followed by something other than `,` or `]`
    InvalidArrayFormat,
    /// A number token whose text is not a valid signed 64-bit integer
    InvalidNumber(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken(token) => write!(f, "unexpected token: {}", token),
            ParseError::UnexpectedEndOfInput => write!(f, "no more tokens to parse"),
            ParseError::ExpectedString => write!(f, "expected a string key"),
            ParseError::ExpectedColon => write!(f, "expected ':' after object key"),
            ParseError::DuplicateKey(key) => write!(f, "duplicate key found: {}", key),
            ParseError::InvalidObjectFormat => write!(f, "invalid object format"),
            ParseError::InvalidArrayFormat => write!(f, "invalid array format"),
            ParseError::InvalidNumber(text) => write!(f, "invalid number: {}", text),
        }
    }
}

impl std::error::Error for ParseError {}

/// Either stage of the pipeline can fail; `parse_json` surfaces both
/// through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    Lex(LexError),
    Parse(ParseError),
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonError::Lex(err) => write!(f, "lex error: {}", err),
            JsonError::Parse(err) => write!(f, "parse error: {}", err),
        }
    }
}

impl std::error::Error for JsonError {}

impl From<LexError> for JsonError {
    fn from(err: LexError) -> Self {
        JsonError::Lex(err)
    }
}

impl From<ParseError> for JsonError {
    fn from(err: ParseError) -> Self {
        JsonError::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_offending_text() {
        assert_eq!(
            LexError::InvalidCharacter('%').to_string(),
            "invalid character: '%'"
        );
        assert_eq!(
            LexError::InvalidLiteral("true").to_string(),
            "invalid token for 'true'"
        );
        assert_eq!(
            ParseError::DuplicateKey("id".to_string()).to_string(),
            "duplicate key found: id"
        );
        assert_eq!(
            ParseError::InvalidNumber("1.2.3".to_string()).to_string(),
            "invalid number: 1.2.3"
        );
    }

    #[test]
    fn json_error_wraps_both_stages() {
        let lex: JsonError = LexError::UnterminatedString.into();
        assert_eq!(lex, JsonError::Lex(LexError::UnterminatedString));

        let parse: JsonError = ParseError::ExpectedString.into();
        assert_eq!(parse.to_string(), "parse error: expected a string key");
    }
}
