//! Error types for the conversion pipeline
//!
//! Two severities exist. Fatal errors mean the outer config object could not
//! be located or delimited at all; they abort extraction. Everything below
//! that level (a malformed sub-field, an unrecognized theme entry) degrades
//! to a documented default and is reported through the warnings channel
//! instead of an error.

use std::fmt;

/// Error that can occur while extracting the configuration object.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// The default-export-with-marker anchor is absent from the source.
    AnchorNotFound,
    /// The outer object literal could not be scanned (unbalanced brackets,
    /// unterminated input).
    Scan { message: String, offset: usize },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::AnchorNotFound => write!(f, "Could not find Tailwind config object"),
            ExtractError::Scan { message, offset } => {
                write!(f, "config object scan failed at byte {offset}: {message}")
            }
        }
    }
}

impl std::error::Error for ExtractError {}

/// Error surfaced at the conversion boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Configuration extraction failed.
    Config(ExtractError),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Config(err) => write!(f, "Failed to parse Tailwind config: {err}"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Config(err) => Some(err),
        }
    }
}

impl From<ExtractError> for ConvertError {
    fn from(err: ExtractError) -> Self {
        ConvertError::Config(err)
    }
}
