//! # json-nano
//!
//! A minimal JSON front end: a lexer that turns raw text into a flat token
//! sequence, and a recursive-descent parser that turns that sequence into a
//! dynamically-typed [`Value`] tree.
//!
//! The pipeline is strictly two-stage. [`tokenize`] scans characters into
//! [`Token`]s and knows nothing about grammar; [`parse_json`] runs the
//! tokenizer and then descends over the token sequence with a single cursor
//! and one token of lookahead. The parser never touches raw characters.
//!
//! Deliberate limitations: numbers are converted as signed 64-bit integers
//! only (fractional and exponent forms lex as a single token but are rejected
//! at parse time), string escape sequences are carried verbatim rather than
//! decoded, and errors carry an error kind but no source position.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod value;

pub use error::{JsonError, LexError, ParseError};
pub use lexer::{tokenize, Token};
pub use parser::parse_json;
pub use value::Value;
