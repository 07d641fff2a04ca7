//! Token definitions for the configuration object-literal grammar
//!
//! The tokens are defined using the logos derive macro. The grammar is
//! deliberately minimal: structural punctuation, quoted strings, the three
//! JavaScript literals that matter (`null`, `true`, `false`), identifiers,
//! and a catch-all fragment for everything else. Comments and whitespace are
//! skipped at the lexer level so the scanner never sees them.

use logos::Logos;
use std::ops::Range;

/// All tokens the configuration scanner can see.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*(?:[^*]|\*+[^*/])*\*+/")]
pub enum Token {
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,

    #[token("null")]
    Null,
    #[token("true")]
    True,
    #[token("false")]
    False,

    /// Quoted string with the quote style erased (single, double, or
    /// template-literal backticks).
    #[regex(r#""(?:[^"\\]|\\.)*""#, |lex| unquote(lex.slice()))]
    #[regex(r"'(?:[^'\\]|\\.)*'", |lex| unquote(lex.slice()))]
    #[regex(r"`(?:[^`\\]|\\.)*`", |lex| unquote(lex.slice()))]
    Str(String),

    /// Bare identifier (also covers object keys written without quotes).
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*", |lex| lex.slice().to_string(), priority = 3)]
    Ident(String),

    /// Anything else that is not structural: numbers, operators, spread
    /// markers. Kept as source text and only ever re-emitted verbatim.
    #[regex(r#"[^\s{}\[\]():,'"`/]+"#, |lex| lex.slice().to_string(), priority = 1)]
    Fragment(String),
}

/// Strip the outer quotes and resolve simple escape sequences.
fn unquote(slice: &str) -> String {
    let inner = &slice[1..slice.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Tokenize source text with byte ranges.
///
/// Unrecognized bytes are skipped rather than surfaced; the scanner's
/// balance checks catch input that is structurally broken.
pub fn tokenize(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
