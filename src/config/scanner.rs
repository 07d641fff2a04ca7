//! Recursive-descent scanner for the configuration object literal
//!
//! Scans the token stream into a [`ConfigValue`] tree. The grammar is
//! minimal on purpose: objects, arrays, strings, `null`, booleans, and
//! balanced bare expressions. Anything expression-shaped (function calls,
//! arrow functions, spreads, arithmetic) is consumed as one balanced run and
//! kept as raw source text, so nested braces and commas inside call
//! parentheses never split an entry.
//!
//! The scanner is deliberately tolerant: stray commas are skipped, shorthand
//! and spread entries become opaque object entries, and a missing value reads
//! as `null`. Only structural imbalance (an unterminated object or array) is
//! an error, because at that point the outer literal cannot be delimited at
//! all.

use crate::config::tokens::{tokenize, Token};
use crate::config::value::ConfigValue;
use crate::error::ExtractError;
use std::ops::Range;

/// Scan one object literal from the start of `source`.
///
/// `source` must begin at the opening brace. Returns the scanned tree and the
/// byte offset one past the matching closing brace.
pub fn scan_object_literal(source: &str) -> Result<(ConfigValue, usize), ExtractError> {
    let mut scanner = Scanner::new(source);
    let value = scanner.parse_object()?;
    Ok((value, scanner.end_offset()))
}

struct Scanner<'a> {
    src: &'a str,
    tokens: Vec<(Token, Range<usize>)>,
    pos: usize,
    last_end: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Scanner {
            src,
            tokens: tokenize(src),
            pos: 0,
            last_end: 0,
        }
    }

    fn end_offset(&self) -> usize {
        self.last_end
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn peek_second(&self) -> Option<&Token> {
        self.tokens.get(self.pos + 1).map(|(t, _)| t)
    }

    fn current_span(&self) -> Range<usize> {
        self.tokens
            .get(self.pos)
            .map(|(_, s)| s.clone())
            .unwrap_or(self.src.len()..self.src.len())
    }

    fn bump(&mut self) -> Option<Token> {
        let (token, span) = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        self.last_end = span.end;
        Some(token)
    }

    fn error(&self, message: &str) -> ExtractError {
        ExtractError::Scan {
            message: message.to_string(),
            offset: self.current_span().start,
        }
    }

    fn parse_object(&mut self) -> Result<ConfigValue, ExtractError> {
        if !matches!(self.peek(), Some(Token::LBrace)) {
            return Err(self.error("expected '{'"));
        }
        self.bump();

        let mut entries = Vec::new();
        loop {
            match self.peek() {
                None => return Err(self.error("unterminated object")),
                Some(Token::RBrace) => {
                    self.bump();
                    break;
                }
                Some(Token::Comma) => {
                    self.bump();
                }
                Some(Token::Ident(_) | Token::Str(_))
                    if self.peek_second() == Some(&Token::Colon) =>
                {
                    let key = match self.bump() {
                        Some(Token::Ident(k)) | Some(Token::Str(k)) => k,
                        _ => unreachable!("peeked an identifier or string"),
                    };
                    self.bump(); // ':'
                    let value = self.parse_value()?;
                    entries.push((key, value));
                }
                Some(_) => {
                    // Spread entries and shorthand properties survive as
                    // opaque entries; the extraction never looks inside them.
                    let start = self.current_span().start;
                    let text = self.raw_run(start)?;
                    if text.is_empty() {
                        return Err(self.error("unexpected token in object"));
                    }
                    entries.push((text, ConfigValue::Null));
                }
            }
        }
        Ok(ConfigValue::Object(entries))
    }

    fn parse_array(&mut self) -> Result<ConfigValue, ExtractError> {
        self.bump(); // '['
        let mut items = Vec::new();
        loop {
            match self.peek() {
                None => return Err(self.error("unterminated array")),
                Some(Token::RBracket) => {
                    self.bump();
                    break;
                }
                Some(Token::Comma) => {
                    self.bump();
                }
                Some(_) => items.push(self.parse_value()?),
            }
        }
        Ok(ConfigValue::Array(items))
    }

    fn parse_value(&mut self) -> Result<ConfigValue, ExtractError> {
        match self.peek() {
            None => Err(self.error("expected value")),
            Some(Token::LBrace) => self.parse_object(),
            Some(Token::LBracket) => self.parse_array(),
            // A dangling `key:` before a closer reads as null.
            Some(Token::RBrace | Token::RBracket) => Ok(ConfigValue::Null),
            Some(Token::RParen) => Err(self.error("unexpected ')'")),
            Some(Token::Null | Token::True | Token::False | Token::Str(_)) => {
                let start = self.current_span().start;
                let token = self.bump().expect("peeked a token");
                if self.at_expression_end() {
                    Ok(match token {
                        Token::Null => ConfigValue::Null,
                        Token::True => ConfigValue::Bool(true),
                        Token::False => ConfigValue::Bool(false),
                        Token::Str(s) => ConfigValue::String(s),
                        _ => unreachable!("matched above"),
                    })
                } else {
                    // The literal continues into a larger expression, e.g.
                    // `'a' + suffix`. Keep the whole run as raw text.
                    let text = self.raw_run(start)?;
                    Ok(ConfigValue::Raw(text))
                }
            }
            Some(_) => {
                let start = self.current_span().start;
                let text = self.raw_run(start)?;
                if text.is_empty() {
                    Ok(ConfigValue::Null)
                } else {
                    Ok(ConfigValue::Raw(text))
                }
            }
        }
    }

    fn at_expression_end(&self) -> bool {
        matches!(
            self.peek(),
            None | Some(Token::Comma | Token::RBrace | Token::RBracket)
        )
    }

    /// Consume tokens until the expression that began at byte `start` ends at
    /// bracket depth zero, returning the trimmed source slice.
    fn raw_run(&mut self, start: usize) -> Result<String, ExtractError> {
        let mut depth = 0usize;
        let mut end = self.last_end.max(start);
        loop {
            match self.peek() {
                None => {
                    if depth > 0 {
                        return Err(self.error("unterminated expression"));
                    }
                    break;
                }
                Some(Token::Comma | Token::RBrace | Token::RBracket | Token::RParen)
                    if depth == 0 =>
                {
                    break;
                }
                Some(Token::LBrace | Token::LBracket | Token::LParen) => {
                    depth += 1;
                    self.bump();
                    end = self.last_end;
                }
                Some(Token::RBrace | Token::RBracket | Token::RParen) => {
                    depth -= 1;
                    self.bump();
                    end = self.last_end;
                }
                Some(_) => {
                    self.bump();
                    end = self.last_end;
                }
            }
        }
        Ok(self.src[start..end].trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> ConfigValue {
        scan_object_literal(source).unwrap().0
    }

    #[test]
    fn test_scan_flat_object() {
        let value = scan(r#"{ darkMode: 'class', important: true }"#);
        assert_eq!(value.get("darkMode").unwrap().as_str(), Some("class"));
        assert_eq!(value.get("important"), Some(&ConfigValue::Bool(true)));
    }

    #[test]
    fn test_scan_nested_objects_preserve_order() {
        let value = scan(r#"{ screens: { sm: '640px', md: '768px', lg: '1024px' } }"#);
        let screens = value.get("screens").unwrap().as_object().unwrap();
        let names: Vec<&str> = screens.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["sm", "md", "lg"]);
    }

    #[test]
    fn test_scan_trailing_comma() {
        let value = scan("{ a: 'x', }");
        assert_eq!(value.get("a").unwrap().as_str(), Some("x"));
    }

    #[test]
    fn test_scan_call_expression_survives_commas() {
        let value = scan(r#"{ plugins: [require("@tailwindcss/typography"), daisyui] }"#);
        let plugins = value.get("plugins").unwrap().as_array().unwrap();
        assert_eq!(
            plugins[0],
            ConfigValue::Raw("require(\"@tailwindcss/typography\")".to_string())
        );
        assert_eq!(plugins[1], ConfigValue::Raw("daisyui".to_string()));
    }

    #[test]
    fn test_scan_call_with_embedded_comma() {
        let value = scan(r#"{ plugins: [plugin(one, two)] }"#);
        let plugins = value.get("plugins").unwrap().as_array().unwrap();
        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0], ConfigValue::Raw("plugin(one, two)".to_string()));
    }

    #[test]
    fn test_scan_arrow_function_value_is_raw() {
        let value = scan(r#"{ typography: ({ theme }) => ({ css: {} }) }"#);
        match value.get("typography").unwrap() {
            ConfigValue::Raw(text) => assert!(text.starts_with("({ theme })")),
            other => panic!("expected raw value, got {other:?}"),
        }
    }

    #[test]
    fn test_scan_spread_entry_is_opaque() {
        let value = scan(r#"{ ...defaults, theme: {} }"#);
        let entries = value.as_object().unwrap();
        assert_eq!(entries[0].0, "...defaults");
        assert!(value.get("theme").is_some());
    }

    #[test]
    fn test_scan_null_and_quoted_keys() {
        let value = scan(r#"{ maxWidth: null, '2xl': '1536px' }"#);
        assert_eq!(value.get("maxWidth"), Some(&ConfigValue::Null));
        assert_eq!(value.get("2xl").unwrap().as_str(), Some("1536px"));
    }

    #[test]
    fn test_scan_reports_end_offset() {
        let source = "{ a: 'x' } satisfies Config";
        let (_, end) = scan_object_literal(source).unwrap();
        assert_eq!(&source[..end], "{ a: 'x' }");
    }

    #[test]
    fn test_scan_unterminated_object_fails() {
        let err = scan_object_literal("{ a: { b: 'x' }").unwrap_err();
        match err {
            ExtractError::Scan { message, .. } => assert!(message.contains("unterminated")),
            other => panic!("expected scan error, got {other:?}"),
        }
    }

    #[test]
    fn test_scan_bare_number_value() {
        let value = scan("{ columns: 3 }");
        assert_eq!(value.get("columns"), Some(&ConfigValue::Raw("3".to_string())));
    }
}
