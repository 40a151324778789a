//! Recursive-descent parser implementation

use std::collections::HashMap;

use crate::error::ParseError;
use crate::lexer::Token;
use crate::value::Value;

/// Parse a token sequence into a value tree.
///
/// The cursor is not required to consume the whole sequence: tokens after a
/// complete top-level value are silently ignored.
pub fn parse(tokens: &[Token]) -> Result<Value, ParseError> {
    Parser::new(tokens).parse_value()
}

/// Cursor into the token sequence. One token of lookahead, no backtracking.
struct Parser<'t> {
    tokens: &'t [Token],
    position: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Parser { tokens, position: 0 }
    }

    /// Look at the next token without consuming it
    fn peek(&self) -> Result<&'t Token, ParseError> {
        self.tokens
            .get(self.position)
            .ok_or(ParseError::UnexpectedEndOfInput)
    }

    /// Consume and return the next token
    fn consume(&mut self) -> Result<&'t Token, ParseError> {
        let token = self.peek()?;
        self.position += 1;
        Ok(token)
    }

    /// One production per value shape, dispatched on the peeked token
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek()? {
            Token::LeftBrace => self.parse_object(),
            Token::LeftBracket => self.parse_array(),
            Token::String(text) => {
                self.position += 1;
                Ok(Value::String(text.clone()))
            }
            Token::Number(text) => {
                self.position += 1;
                text.parse::<i64>()
                    .map(Value::Integer)
                    .map_err(|_| ParseError::InvalidNumber(text.clone()))
            }
            Token::True => {
                self.position += 1;
                Ok(Value::Boolean(true))
            }
            Token::False => {
                self.position += 1;
                Ok(Value::Boolean(false))
            }
            Token::Null => {
                self.position += 1;
                Ok(Value::Null)
            }
            other => Err(ParseError::UnexpectedToken(other.clone())),
        }
    }

    /// `{` already peeked. Keys are unique; a repeat is a hard error, not
    /// an overwrite. A trailing comma before `}` is accepted.
    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.consume()?;
        let mut object = HashMap::new();

        loop {
            if self.peek()? == &Token::RightBrace {
                self.consume()?;
                return Ok(Value::Object(object));
            }

            let key = self.parse_string()?;
            if object.contains_key(&key) {
                return Err(ParseError::DuplicateKey(key));
            }
            if self.consume()? != &Token::Colon {
                return Err(ParseError::ExpectedColon);
            }
            let value = self.parse_value()?;
            object.insert(key, value);

            match self.peek()? {
                Token::Comma => {
                    self.consume()?;
                }
                Token::RightBrace => {}
                _ => return Err(ParseError::InvalidObjectFormat),
            }
        }
    }

    /// `[` already peeked. Elements keep source order; a trailing comma
    /// before `]` is accepted.
    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.consume()?;
        let mut array = Vec::new();

        loop {
            if self.peek()? == &Token::RightBracket {
                self.consume()?;
                return Ok(Value::Array(array));
            }

            array.push(self.parse_value()?);

            match self.peek()? {
                Token::Comma => {
                    self.consume()?;
                }
                Token::RightBracket => {}
                _ => return Err(ParseError::InvalidArrayFormat),
            }
        }
    }

    /// Object key position: anything but a string token is an error
    fn parse_string(&mut self) -> Result<String, ParseError> {
        match self.consume()? {
            Token::String(text) => Ok(text.clone()),
            _ => Err(ParseError::ExpectedString),
        }
    }
}
