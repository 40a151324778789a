//! Core tokenization pipeline
//!
//! Raw scanning is handled entirely by the logos-derived [`Token`]. This
//! module drives the scan, turns logos failures into the distinct
//! [`LexError`] kinds by re-inspecting the source at the failure position,
//! and checks the bracket depth counters once the scan completes.

use logos::Logos;

use crate::error::LexError;
use crate::lexer::tokens::Token;

/// Tokenize JSON text into a flat token sequence.
///
/// A failure never yields a partial token list. Extra closing brackets are
/// not a lexical error: the depth counters are only checked for unmatched
/// openers, and a negative count passes. The parser surfaces an excess
/// closer as a structural error instead.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Token::lexer(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => return Err(classify_failure(&input[lexer.span().start..])),
        }
    }

    if lexer.extras.braces > 0 {
        return Err(LexError::UnmatchedOpenBrace);
    }
    if lexer.extras.brackets > 0 {
        return Err(LexError::UnmatchedOpenBracket);
    }

    Ok(tokens)
}

/// Classify a scan failure from the source text at the position where the
/// failing token began.
fn classify_failure(rest: &str) -> LexError {
    match rest.chars().next() {
        Some('"') => string_failure(rest),
        Some('t') => LexError::InvalidLiteral("true"),
        Some('f') => LexError::InvalidLiteral("false"),
        Some('n') => LexError::InvalidLiteral("null"),
        Some(other) => LexError::InvalidCharacter(other),
        None => LexError::UnterminatedString,
    }
}

/// A string can only fail to scan by hitting end-of-input. A lone `\` as
/// the final character is an escape with nothing to escape; anything else
/// is an unterminated string.
fn string_failure(rest: &str) -> LexError {
    let mut chars = rest.chars().skip(1);
    while let Some(c) = chars.next() {
        if c == '\\' && chars.next().is_none() {
            return LexError::InvalidEscape;
        }
    }
    LexError::UnterminatedString
}
