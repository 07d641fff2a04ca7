//! Anchor location and field extraction
//!
//! The outer object literal is located by its anchor (a default-export
//! assignment annotated with the `satisfies Config` marker), scanned into a
//! value tree, and navigated for the fields the conversion consumes. The
//! asymmetry is deliberate: a missing anchor is the one fatal failure, while
//! every inner field that does not match its expected shape degrades to a
//! default and a warning.

use crate::config::scanner::scan_object_literal;
use crate::config::value::ConfigValue;
use crate::config::{DaisyConfig, ParsedConfig, PluginRef, ThemeConfig};
use crate::error::ExtractError;
use crate::report::Warnings;
use once_cell::sync::Lazy;
use regex::Regex;

static ANCHOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"export\s+default\s*\{").unwrap());

static TYPE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*satisfies\s+Config\b").unwrap());

/// Extract the structured record from configuration source text.
pub fn extract_config(source: &str, warnings: &mut Warnings) -> Result<ParsedConfig, ExtractError> {
    let anchor = ANCHOR.find(source).ok_or(ExtractError::AnchorNotFound)?;
    let brace = anchor.end() - 1;

    let (root, end) = scan_object_literal(&source[brace..]).map_err(|err| match err {
        ExtractError::Scan { message, offset } => ExtractError::Scan {
            message,
            offset: offset + brace,
        },
        other => other,
    })?;

    if !TYPE_MARKER.is_match(&source[brace + end..]) {
        return Err(ExtractError::AnchorNotFound);
    }

    tracing::debug!(config = %root, "scanned config object");

    let entries = root
        .as_object()
        .expect("scanning an object literal yields an object");

    let parsed = ParsedConfig {
        theme: extract_theme(&root, warnings),
        plugins: extract_plugins(&root, warnings),
        daisyui: extract_daisyui(&root, warnings),
        extra: entries
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "theme" | "plugins" | "daisyui"))
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect(),
    };
    Ok(parsed)
}

fn extract_theme(root: &ConfigValue, warnings: &mut Warnings) -> Option<ThemeConfig> {
    let theme = root.get("theme")?;
    if theme.as_object().is_none() {
        warnings.push("theme is not an object literal; it was skipped");
        return None;
    }

    let mut out = ThemeConfig::default();

    match theme.get("screens") {
        None => {}
        Some(ConfigValue::Object(entries)) => {
            for (name, value) in entries {
                match value {
                    ConfigValue::String(s) => out.screens.push((name.clone(), s.clone())),
                    ConfigValue::Raw(text) => out.screens.push((name.clone(), text.clone())),
                    _ => warnings.push(format!(
                        "screens entry '{name}' is not a plain length; it was skipped"
                    )),
                }
            }
        }
        Some(_) => warnings.push("theme.screens is not an object literal; it was skipped"),
    }

    // Prose overrides normally live under extend, but tolerate the
    // un-extended spelling as well.
    let typography = theme
        .get_path(&["extend", "typography"])
        .or_else(|| theme.get("typography"));
    if let Some(typography) = typography {
        match typography.get_path(&["DEFAULT", "css"]) {
            Some(css @ ConfigValue::Object(_)) => out.typography_css = Some(css.clone()),
            _ => warnings.push(
                "typography overrides are not an object literal; the plugin keeps its defaults",
            ),
        }
    }

    Some(out)
}

fn extract_daisyui(root: &ConfigValue, warnings: &mut Warnings) -> Option<DaisyConfig> {
    let value = root.get("daisyui")?;
    match serde_json::from_value::<DaisyConfig>(value.to_json()) {
        Ok(config) => {
            tracing::debug!(?config, "daisyui settings");
            Some(config)
        }
        Err(err) => {
            warnings.push(format!(
                "daisyui settings could not be parsed ({err}); falling back to themes: true"
            ));
            Some(DaisyConfig::default())
        }
    }
}

fn extract_plugins(root: &ConfigValue, warnings: &mut Warnings) -> Vec<PluginRef> {
    match root.get("plugins") {
        None => Vec::new(),
        Some(ConfigValue::Array(items)) => items
            .iter()
            .filter_map(|item| {
                let name = match item {
                    ConfigValue::String(s) => s.clone(),
                    ConfigValue::Raw(text) => text.clone(),
                    other => other.to_string(),
                };
                let name = name.trim().to_string();
                if name.is_empty() {
                    None
                } else {
                    Some(PluginRef::new(name))
                }
            })
            .collect(),
        Some(_) => {
            warnings.push("plugins is not an array; it was skipped");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DaisyThemes;

    const SAMPLE: &str = r#"
import type { Config } from 'tailwindcss';

export default {
    content: ['./src/**/*.{html,js,svelte,ts}'],
    theme: {
        screens: {
            sm: '640px',
            md: '768px',
            lg: '1024px',
            xl: '1280px',
            '2xl': '1536px'
        },
        extend: {
            typography: {
                DEFAULT: {
                    css: {
                        maxWidth: null,
                        img: {
                            margin: '0'
                        }
                    }
                }
            }
        }
    },
    plugins: [require('@tailwindcss/typography'), require('daisyui')],
    daisyui: {
        themes: ['light', 'dark', 'cupcake'],
        darkTheme: 'dark'
    }
} satisfies Config;
"#;

    #[test]
    fn test_extract_screens_in_order() {
        let mut warnings = Warnings::new();
        let parsed = extract_config(SAMPLE, &mut warnings).unwrap();

        let theme = parsed.theme.unwrap();
        let names: Vec<&str> = theme.screens.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["sm", "md", "lg", "xl", "2xl"]);
        assert_eq!(theme.screens[0].1, "640px");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_extract_typography_subtree() {
        let mut warnings = Warnings::new();
        let parsed = extract_config(SAMPLE, &mut warnings).unwrap();

        let css = parsed.theme.unwrap().typography_css.unwrap();
        assert_eq!(css.get("maxWidth"), Some(&ConfigValue::Null));
        assert_eq!(
            css.get_path(&["img", "margin"]).and_then(ConfigValue::as_str),
            Some("0")
        );
    }

    #[test]
    fn test_extract_plugins_and_daisyui() {
        let mut warnings = Warnings::new();
        let parsed = extract_config(SAMPLE, &mut warnings).unwrap();

        assert!(parsed.has_plugin("typography"));
        assert!(parsed.has_plugin("daisyui"));

        let daisy = parsed.daisyui.unwrap();
        assert_eq!(daisy.dark_theme.as_deref(), Some("dark"));
        match daisy.themes {
            DaisyThemes::List(entries) => assert_eq!(entries.len(), 3),
            other => panic!("expected a theme list, got {other:?}"),
        }
    }

    #[test]
    fn test_extract_preserves_unknown_keys() {
        let mut warnings = Warnings::new();
        let parsed = extract_config(SAMPLE, &mut warnings).unwrap();

        assert_eq!(parsed.extra.len(), 1);
        assert_eq!(parsed.extra[0].0, "content");
        assert!(parsed.extra[0].1.contains("./src/**/*.{html,js,svelte,ts}"));
    }

    #[test]
    fn test_missing_anchor_is_fatal() {
        let mut warnings = Warnings::new();
        let err = extract_config("module.exports = { theme: {} }", &mut warnings).unwrap_err();
        assert_eq!(err, ExtractError::AnchorNotFound);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_missing_type_marker_is_fatal() {
        let mut warnings = Warnings::new();
        let err = extract_config("export default { theme: {} };", &mut warnings).unwrap_err();
        assert_eq!(err, ExtractError::AnchorNotFound);
    }

    #[test]
    fn test_malformed_daisyui_degrades_with_warning() {
        let source = r#"
export default {
    daisyui: { themes: "everything" }
} satisfies Config;
"#;
        let mut warnings = Warnings::new();
        let parsed = extract_config(source, &mut warnings).unwrap();

        assert_eq!(parsed.daisyui, Some(DaisyConfig::default()));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_function_typography_degrades_with_warning() {
        let source = r#"
export default {
    theme: { extend: { typography: ({ theme }) => ({}) } }
} satisfies Config;
"#;
        let mut warnings = Warnings::new();
        let parsed = extract_config(source, &mut warnings).unwrap();

        assert!(parsed.theme.unwrap().typography_css.is_none());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_non_string_screen_entry_is_skipped() {
        let source = r#"
export default {
    theme: { screens: { sm: '640px', print: { raw: 'print' } } }
} satisfies Config;
"#;
        let mut warnings = Warnings::new();
        let parsed = extract_config(source, &mut warnings).unwrap();

        assert_eq!(parsed.theme.unwrap().screens, vec![("sm".to_string(), "640px".to_string())]);
        assert_eq!(warnings.len(), 1);
    }
}
