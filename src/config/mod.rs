//! Configuration extraction
//!
//! Turns the JavaScript-like `tailwind.config` source into a best-effort
//! structured record. The scan produces a [`ConfigValue`] tree; extraction
//! navigates the tree for the fields the conversion consumes and preserves
//! everything else opaquely. Absence of a field means "not configured",
//! never an error.

pub mod extract;
pub mod scanner;
pub mod tokens;
pub mod value;

pub use value::ConfigValue;

use serde::Deserialize;

/// Ordered key/value map as deserialized from the daisyUI sub-object.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// The structured record extracted from a v3 configuration object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedConfig {
    pub theme: Option<ThemeConfig>,
    pub plugins: Vec<PluginRef>,
    pub daisyui: Option<DaisyConfig>,
    /// Top-level keys the conversion does not model, kept as raw source text.
    pub extra: Vec<(String, String)>,
}

impl ParsedConfig {
    /// Whether any plugin descriptor mentions the given needle.
    pub fn has_plugin(&self, needle: &str) -> bool {
        self.plugins.iter().any(|p| p.name.contains(needle))
    }
}

/// Theme data the conversion consumes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeConfig {
    /// Breakpoint name to CSS length, in source order.
    pub screens: Vec<(String, String)>,
    /// The `extend.typography.DEFAULT.css` subtree, kept as the scanned
    /// value so nesting and entry order survive.
    pub typography_css: Option<ConfigValue>,
}

/// A plugin list entry. At minimum a name; call expressions keep their full
/// source text (`require("@tailwindcss/typography")`).
#[derive(Debug, Clone, PartialEq)]
pub struct PluginRef {
    pub name: String,
}

impl PluginRef {
    pub fn new(name: impl Into<String>) -> Self {
        PluginRef { name: name.into() }
    }
}

/// daisyUI settings, deserialized from the scanned sub-object bridged to
/// JSON. Unknown keys are ignored; a shape that does not deserialize at all
/// falls back to [`DaisyConfig::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DaisyConfig {
    pub themes: DaisyThemes,
    #[serde(rename = "darkTheme")]
    pub dark_theme: Option<String>,
}

impl Default for DaisyConfig {
    fn default() -> Self {
        DaisyConfig {
            themes: DaisyThemes::Enabled(true),
            dark_theme: None,
        }
    }
}

/// The `themes` setting: a blanket switch or an explicit list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DaisyThemes {
    Enabled(bool),
    List(Vec<ThemeEntry>),
}

/// One entry of an explicit theme list: a built-in theme name, or a custom
/// inline theme written as a single-key `name -> variables` record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ThemeEntry {
    Name(String),
    Custom(JsonMap),
}

impl ThemeEntry {
    /// The theme name this entry contributes to the theme list.
    pub fn name(&self) -> Option<&str> {
        match self {
            ThemeEntry::Name(name) => Some(name),
            ThemeEntry::Custom(map) => map.keys().next().map(String::as_str),
        }
    }

    /// For custom inline themes, the name and its variable mapping.
    pub fn custom_variables(&self) -> Option<(&str, &JsonMap)> {
        match self {
            ThemeEntry::Custom(map) => {
                let (name, value) = map.iter().next()?;
                Some((name.as_str(), value.as_object()?))
            }
            ThemeEntry::Name(_) => None,
        }
    }
}
