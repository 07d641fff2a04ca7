//! Output formatting knobs
//!
//! Mirrors the shape of the emitted CSS rather than the conversion semantics:
//! nothing here changes what gets converted, only how it is laid out.

use serde::Deserialize;

/// Knobs for the emitted v4 stylesheet.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// One level of indentation inside emitted blocks.
    pub indent: String,
    /// Emit `/* ... */` banners before non-empty output sections.
    pub section_banners: bool,
    /// Theme names treated as dark variants when no explicit dark theme is
    /// configured.
    pub dark_theme_fallbacks: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            indent: "  ".to_string(),
            section_banners: true,
            dark_theme_fallbacks: vec!["dark".to_string(), "night".to_string()],
        }
    }
}

impl ConvertOptions {
    /// Indentation repeated to the given depth.
    pub fn indent_to(&self, depth: usize) -> String {
        self.indent.repeat(depth)
    }
}
