//! Parser for value literals.
//!
//! The literal syntax covers what is needed to write sequences by hand:
//! numbers (including `NaN`, `Infinity` and `-Infinity`), single or double
//! quoted strings, `true`, `false`, `null`, `undefined`, and arrays of these
//! nested to any depth, with an optional trailing comma.
//!
//! ```
//! use bumpalo::Bump;
//! use seqkit_core::parser::parse_literal;
//!
//! let arena = Bump::new();
//! let value = parse_literal(&arena, r#"[1, "two", [null, NaN]]"#).unwrap();
//! assert_eq!(format!("{:?}", value), r#"[1, "two", [null, NaN]]"#);
//! ```

pub mod lexer;

use crate::{String, ToString, Vec, format, values::Value};
use bumpalo::Bump;
use core::{fmt, ops::Range};
use lexer::Token;
use logos::{Logos, SpannedIter};

/// Byte range of a piece of source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span(start..end)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span(range)
    }
}

/// A literal that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
    /// The whole text that was being parsed.
    pub source: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}..{}", self.message, self.span.0.start, self.span.0.end)
    }
}

impl core::error::Error for ParseError {}

/// Default maximum nesting depth for array literals.
pub const DEFAULT_MAX_PARSE_DEPTH: usize = 500;

/// Parse a single literal, allocating strings and arrays in `arena`.
///
/// Arrays may nest up to [`DEFAULT_MAX_PARSE_DEPTH`] levels.
pub fn parse_literal<'a>(arena: &'a Bump, src: &str) -> Result<Value<'a>, ParseError> {
    parse_literal_with_max_depth(arena, src, DEFAULT_MAX_PARSE_DEPTH)
}

/// Parse a single literal, rejecting arrays nested deeper than `max_depth`.
pub fn parse_literal_with_max_depth<'a>(
    arena: &'a Bump,
    src: &str,
    max_depth: usize,
) -> Result<Value<'a>, ParseError> {
    let mut parser = Parser {
        arena,
        src,
        tokens: Token::lexer(src).spanned(),
        peeked: None,
        depth: 0,
        max_depth,
    };
    let value = parser.value()?;
    match parser.next()? {
        None => Ok(value),
        Some((token, span)) => Err(parser.error(
            format!("expected end of input, found {}", token.describe()),
            span,
        )),
    }
}

type Spanned<'s> = (Token<'s>, Range<usize>);

struct Parser<'a, 's> {
    arena: &'a Bump,
    src: &'s str,
    tokens: SpannedIter<'s, Token<'s>>,
    peeked: Option<Spanned<'s>>,
    depth: usize,
    max_depth: usize,
}

impl<'a, 's> Parser<'a, 's> {
    fn error(&self, message: String, span: Range<usize>) -> ParseError {
        ParseError {
            message,
            span: Span(span),
            source: self.src.to_string(),
        }
    }

    fn end_of_input(&self) -> Range<usize> {
        self.src.len()..self.src.len()
    }

    fn next(&mut self) -> Result<Option<Spanned<'s>>, ParseError> {
        if let Some(peeked) = self.peeked.take() {
            return Ok(Some(peeked));
        }
        match self.tokens.next() {
            None => Ok(None),
            Some((Ok(token), span)) => Ok(Some((token, span))),
            Some((Err(()), span)) => {
                let text = &self.src[span.clone()];
                let message = if text.starts_with(['"', '\'']) {
                    "unterminated string".to_string()
                } else {
                    format!("unexpected character '{}'", text)
                };
                Err(self.error(message, span))
            }
        }
    }

    fn peek(&mut self) -> Result<Option<&Spanned<'s>>, ParseError> {
        if self.peeked.is_none() {
            self.peeked = self.next()?;
        }
        Ok(self.peeked.as_ref())
    }

    fn value(&mut self) -> Result<Value<'a>, ParseError> {
        let Some((token, span)) = self.next()? else {
            return Err(self.error(
                "expected a value, found end of input".to_string(),
                self.end_of_input(),
            ));
        };
        match token {
            Token::Number(n) | Token::Special(n) => Ok(Value::number(n)),
            Token::Bool(b) => Ok(Value::bool(b)),
            Token::Null => Ok(Value::Null),
            Token::Undefined => Ok(Value::Undefined),
            Token::Str(quoted) => {
                let text = self.unescape(quoted, span.start)?;
                Ok(Value::str(self.arena, &text))
            }
            Token::LBracket => {
                if self.depth >= self.max_depth {
                    return Err(self.error(
                        format!("array nesting exceeds maximum of {} levels", self.max_depth),
                        span,
                    ));
                }
                self.depth += 1;
                let array = self.array_rest(span.start);
                self.depth -= 1;
                array
            }
            Token::Word(word) => Err(self.error(format!("unknown literal '{}'", word), span)),
            other => Err(self.error(
                format!("expected a value, found {}", other.describe()),
                span,
            )),
        }
    }

    /// Elements after an opening `[` at `open`.
    fn array_rest(&mut self, open: usize) -> Result<Value<'a>, ParseError> {
        let mut items = Vec::new();
        loop {
            if matches!(self.peek()?, Some((Token::RBracket, _))) {
                self.next()?;
                break;
            }
            items.push(self.value()?);
            match self.next()? {
                Some((Token::Comma, _)) => {}
                Some((Token::RBracket, _)) => break,
                Some((token, span)) => {
                    return Err(self.error(
                        format!("expected ',' or ']', found {}", token.describe()),
                        span,
                    ));
                }
                None => {
                    return Err(self.error("unclosed array".to_string(), open..open + 1));
                }
            }
        }
        tracing::trace!(len = items.len(), "parsed array literal");
        Ok(Value::array(self.arena, &items))
    }

    /// Strip the quotes and resolve escapes. `offset` is where the quoted
    /// text starts in the source.
    fn unescape(&self, quoted: &str, offset: usize) -> Result<String, ParseError> {
        let body = &quoted[1..quoted.len() - 1];
        let mut out = String::with_capacity(body.len());
        let mut chars = body.char_indices();
        while let Some((_, c)) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            let Some((at, escaped)) = chars.next() else {
                break;
            };
            out.push(match escaped {
                'n' => '\n',
                't' => '\t',
                'r' => '\r',
                '0' => '\0',
                '\\' | '"' | '\'' => escaped,
                other => {
                    // `at` is relative to the body, which starts after the quote
                    let start = offset + at;
                    return Err(self.error(
                        format!("unknown escape sequence '\\{}'", other),
                        start..start + 1 + other.len_utf8(),
                    ));
                }
            });
        }
        Ok(out)
    }
}
