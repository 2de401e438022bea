//! Tokens of the literal syntax.

use logos::Logos;

/// Tokens recognized in a literal.
///
/// Quoted strings keep their quotes; unescaping happens in the parser so that
/// a bad escape can be reported with a precise span.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'s> {
    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(",")]
    Comma,

    #[regex(
        r"-?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?",
        |lex| lex.slice().parse::<f64>().ok()
    )]
    Number(f64),

    #[token("NaN", |_| f64::NAN)]
    #[token("Infinity", |_| f64::INFINITY)]
    #[token("-Infinity", |_| f64::NEG_INFINITY)]
    Special(f64),

    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),

    #[token("null")]
    Null,

    #[token("undefined")]
    Undefined,

    #[regex(r#""(?:[^"\\]|\\.)*""#, |lex| lex.slice())]
    #[regex(r#"'(?:[^'\\]|\\.)*'"#, |lex| lex.slice())]
    Str(&'s str),

    /// A bare word that is not a keyword.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice(), priority = 1)]
    Word(&'s str),
}

impl Token<'_> {
    /// Short description used in "expected ..., found ..." messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Token::LBracket => "'['",
            Token::RBracket => "']'",
            Token::Comma => "','",
            Token::Number(_) | Token::Special(_) => "a number",
            Token::Bool(_) => "a boolean",
            Token::Null => "null",
            Token::Undefined => "undefined",
            Token::Str(_) => "a string",
            Token::Word(_) => "an identifier",
        }
    }
}
