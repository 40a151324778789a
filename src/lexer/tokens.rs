//! Token definitions for the JSON lexer
//!
//! The token set is defined with the logos derive macro. String and number
//! tokens carry their source text verbatim: escape sequences are not decoded
//! and numbers are not validated here. Grammar-level meaning is left
//! entirely to the parser.

use logos::Logos;

/// Running bracket depth, carried through one scan in the lexer extras.
///
/// `{` and `[` increment, `}` and `]` decrement, independently per bracket
/// kind. [`super::tokenize`] checks for unmatched openers once the scan
/// completes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Depth {
    pub braces: i64,
    pub brackets: i64,
}

/// All tokens the JSON lexer can produce
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(extras = Depth)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    #[token("{", |lex| lex.extras.braces += 1)]
    LeftBrace,

    #[token("}", |lex| lex.extras.braces -= 1)]
    RightBrace,

    #[token("[", |lex| lex.extras.brackets += 1)]
    LeftBracket,

    #[token("]", |lex| lex.extras.brackets -= 1)]
    RightBracket,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[token("true")]
    True,

    #[token("false")]
    False,

    #[token("null")]
    Null,

    /// Quoted string. The payload is the text between the quotes, copied
    /// verbatim: a `\` and the character after it both land in the payload
    /// undecoded, so source `\n` stays a two-character sequence.
    #[regex(r#""([^"\\]|\\[\s\S])*""#, |lex| {
        let slice = lex.slice();
        slice[1..slice.len() - 1].to_owned()
    })]
    String(String),

    /// Maximal run of characters from `{0-9, '-', '.', 'e'}`, kept
    /// verbatim. The run is permissively greedy (`1.2.3` and `1e` are
    /// single tokens); validity is deferred to integer conversion in the
    /// parser.
    #[regex(r"[0-9.e-]+", |lex| lex.slice().to_owned())]
    Number(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::LeftBrace => f.write_str("{"),
            Token::RightBrace => f.write_str("}"),
            Token::LeftBracket => f.write_str("["),
            Token::RightBracket => f.write_str("]"),
            Token::Colon => f.write_str(":"),
            Token::Comma => f.write_str(","),
            Token::True => f.write_str("true"),
            Token::False => f.write_str("false"),
            Token::Null => f.write_str("null"),
            Token::String(text) => write!(f, "\"{}\"", text),
            Token::Number(text) => f.write_str(text),
        }
    }
}
