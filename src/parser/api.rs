//! Public entry point composing the lexer and parser

use crate::error::JsonError;
use crate::lexer::tokenize;
use crate::parser::parser::parse;
use crate::value::Value;

/// Parse JSON text into a [`Value`] tree.
///
/// Runs [`tokenize`] over the input and hands the token sequence to the
/// recursive-descent parser. Each call is independent: no state is shared
/// across calls and the returned tree is owned entirely by the caller.
pub fn parse_json(input: &str) -> Result<Value, JsonError> {
    let tokens = tokenize(input)?;
    let value = parse(&tokens)?;
    Ok(value)
}
