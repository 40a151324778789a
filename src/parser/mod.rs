//! Parser module for the JSON token sequence
//!
//! Recursive descent with one production per value shape. A single cursor
//! walks the token sequence with one token of lookahead and never
//! backtracks; the parser depends only on the tokens, not on the lexer.

pub mod api;
#[allow(clippy::module_inception)]
pub mod parser;

pub use api::parse_json;
pub use parser::parse;
