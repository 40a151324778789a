//! Lexer module for JSON text
//!
//! Tokenization is a single left-to-right scan with two pieces:
//! 1. Core token recognition using the logos-derived [`Token`] enum
//! 2. The [`tokenize`] pipeline, which drives the lexer, classifies scan
//!    failures into [`crate::error::LexError`] kinds, and applies the
//!    end-of-input unmatched-opener check
//!
//! Whitespace is skipped during the scan and never appears in the output.
//! The lexer owns no grammar knowledge; bracket bookkeeping is limited to
//! two running depth counters carried through the scan.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::tokenize;
pub use tokens::Token;
