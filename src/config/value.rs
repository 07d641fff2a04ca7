//! The value tree produced by the configuration scanner
//!
//! `ConfigValue` is the intermediate representation between the scan and the
//! field extraction: objects and arrays keep their source order, strings have
//! their quote style erased, and anything the minimal grammar does not model
//! (call expressions, numbers, spreads) survives as a `Raw` source slice.

use std::fmt;

/// A scanned configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    String(String),
    /// Object entries in source order. Duplicate keys are kept; lookups
    /// resolve to the last occurrence, matching JavaScript semantics.
    Object(Vec<(String, ConfigValue)>),
    Array(Vec<ConfigValue>),
    /// A bare expression kept as balanced source text, e.g.
    /// `require("@tailwindcss/typography")` or `640`.
    Raw(String),
}

impl ConfigValue {
    /// Look up a key in an object value. Last occurrence wins.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        match self {
            ConfigValue::Object(entries) => {
                entries.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    /// Walk a chain of object keys.
    pub fn get_path(&self, path: &[&str]) -> Option<&ConfigValue> {
        let mut current = self;
        for key in path {
            current = current.get(key)?;
        }
        Some(current)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[(String, ConfigValue)]> {
        match self {
            ConfigValue::Object(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Bridge into a JSON value for serde-based shape validation.
    ///
    /// `Raw` text becomes a number when it parses as one, otherwise a string;
    /// duplicate object keys collapse to the last occurrence.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ConfigValue::Null => serde_json::Value::Null,
            ConfigValue::Bool(b) => serde_json::Value::Bool(*b),
            ConfigValue::String(s) => serde_json::Value::String(s.clone()),
            ConfigValue::Raw(text) => match text.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
                Some(number) => serde_json::Value::Number(number),
                None => serde_json::Value::String(text.clone()),
            },
            ConfigValue::Array(items) => {
                serde_json::Value::Array(items.iter().map(ConfigValue::to_json).collect())
            }
            ConfigValue::Object(entries) => {
                let mut map = serde_json::Map::new();
                for (key, value) in entries {
                    map.insert(key.clone(), value.to_json());
                }
                serde_json::Value::Object(map)
            }
        }
    }
}

/// Renders the value back as compact JavaScript-ish source text. Used for the
/// opaque preservation of fields the extraction does not model.
impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => write!(f, "null"),
            ConfigValue::Bool(b) => write!(f, "{b}"),
            ConfigValue::String(s) => write!(f, "\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")),
            ConfigValue::Raw(text) => write!(f, "{text}"),
            ConfigValue::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            ConfigValue::Object(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " {key}: {value}")?;
                }
                write!(f, " }}")
            }
        }
    }
}
