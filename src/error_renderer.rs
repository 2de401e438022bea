//! Error rendering using ariadne
//!
//! Parse errors are rendered as a labelled snippet of the literal that failed
//! to parse. Every other error has no source text to point at and is rendered
//! as a headline with its code, followed by any help lines.

use crate::{Error, ParseError};
use ariadne::{Color, Label, Report, ReportKind, Source};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The name shown for the parsed text. Defaults to `<input>`.
    pub filename: Option<&'a str>,
    /// The character set to use for rendering.
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Render an error to stderr using the default config.
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use seqkit::{Error, RenderConfig, render_error_to};
///
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&Error::EmptyReduceNoSeed, &mut buf, &config).unwrap();
/// let output = String::from_utf8(buf).unwrap();
/// assert!(output.starts_with("[E003] Error: Reduce of empty array with no initial value"));
/// ```
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    match error {
        Error::Parse(parse) => render_parse_error(error.code(), parse, writer, config),
        other => {
            writeln!(writer, "[{}] Error: {}", other.code(), other)?;
            for help in other.help() {
                writeln!(writer, "  help: {}", help)?;
            }
            Ok(())
        }
    }
}

fn render_parse_error(
    code: &str,
    error: &ParseError,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let filename = config.filename.unwrap_or("<input>");
    let span = error.span.0.clone();

    let charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(charset);

    Report::build(ReportKind::Error, (filename, span.clone()))
        .with_config(ariadne_config)
        .with_code(code)
        .with_message(&error.message)
        .with_label(
            Label::new((filename, span))
                .with_message(&error.message)
                .with_color(Color::Red),
        )
        .finish()
        .write((filename, Source::from(error.source.as_str())), &mut *writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;
    use expect_test::{Expect, expect};

    const UNICODE_CONFIG: RenderConfig = RenderConfig {
        color: false,
        filename: Some("test.txt"),
        charset: CharSet::Unicode,
    };

    const ASCII_CONFIG: RenderConfig = RenderConfig {
        color: false,
        filename: Some("test.txt"),
        charset: CharSet::Ascii,
    };

    fn render(error: &Error, config: &RenderConfig) -> String {
        let mut buf = Vec::new();
        render_error_to(error, &mut buf, config).unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn check_parse_error(source: &str, config: &RenderConfig, expected: Expect) {
        let arena = Bump::new();
        let error: Error = match crate::parse_literal(&arena, source) {
            Err(e) => e.into(),
            Ok(value) => panic!("expected a parse error for {source:?}, got {value:?}"),
        };
        expected.assert_eq(&render(&error, config));
    }

    #[test]
    fn test_parse_error_unicode() {
        check_parse_error(
            "[1, $]",
            &UNICODE_CONFIG,
            expect![[r#"
                [E008] Error: unexpected character '$'
                   ╭─[ test.txt:1:5 ]
                   │
                 1 │ [1, $]
                   │     ┬  
                   │     ╰── unexpected character '$'
                ───╯
            "#]],
        );
    }

    #[test]
    fn test_parse_error_ascii() {
        check_parse_error(
            "[1, $]",
            &ASCII_CONFIG,
            expect![[r#"
                [E008] Error: unexpected character '$'
                   ,-[ test.txt:1:5 ]
                   |
                 1 | [1, $]
                   |     |  
                   |     `-- unexpected character '$'
                ---'
            "#]],
        );
    }

    #[test]
    fn test_parse_error_wide_span() {
        check_parse_error(
            r#""a\qb""#,
            &UNICODE_CONFIG,
            expect![[r#"
                [E008] Error: unknown escape sequence '\q'
                   ╭─[ test.txt:1:3 ]
                   │
                 1 │ "a\qb"
                   │   ─┬  
                   │    ╰── unknown escape sequence '\q'
                ───╯
            "#]],
        );
    }

    #[test]
    fn test_error_without_source() {
        let error = Error::InvalidReceiver {
            operation: "Array.map",
            found: "null",
        };
        expect![[r#"
            [E001] Error: Array.map called on null
              help: pass an array as the first argument
        "#]]
        .assert_eq(&render(&error, &UNICODE_CONFIG));
    }

    #[test]
    fn test_thrown_error_has_no_help() {
        let error = Error::Thrown("boom".to_string());
        expect![[r#"
            [E009] Error: uncaught error: boom
        "#]]
        .assert_eq(&render(&error, &ASCII_CONFIG));
    }
}
