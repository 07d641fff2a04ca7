//! daisyUI plugin block emitter
//!
//! Emits the `@plugin "daisyui"` declaration from extracted settings, plus a
//! `@theme` custom-property block for every custom inline theme. Theme-list
//! tagging: the first entry is the default, the detected dark variant is the
//! preferred-dark, everything else follows untagged in source order.

use crate::config::{DaisyConfig, DaisyThemes, ThemeEntry};
use crate::emit::theme::normalize_color;
use crate::options::ConvertOptions;
use crate::report::Warnings;

/// Emit the daisyUI plugin declaration and any custom theme blocks.
pub fn convert_daisyui(
    config: &DaisyConfig,
    options: &ConvertOptions,
    warnings: &mut Warnings,
) -> Vec<String> {
    tracing::debug!(?config, "emitting daisyui plugin block");

    let indent = options.indent_to(1);
    let mut lines = vec!["@plugin \"daisyui\" {".to_string()];

    match &config.themes {
        DaisyThemes::Enabled(true) => {
            lines.push(format!(
                "{indent}themes: light --default, dark --prefersdark;"
            ));
        }
        DaisyThemes::Enabled(false) => {}
        DaisyThemes::List(entries) => {
            let names = entry_names(entries, warnings);
            if let Some(line) = theme_list_line(&names, config.dark_theme.as_deref(), options) {
                lines.push(format!("{indent}{line}"));
            }
        }
    }

    lines.push("}".to_string());

    if let DaisyThemes::List(entries) = &config.themes {
        for entry in entries {
            let Some((_, vars)) = entry.custom_variables() else {
                continue;
            };
            lines.push(String::new());
            lines.push("@theme {".to_string());
            for (key, value) in vars {
                if key == "name" || key == "parent" {
                    continue;
                }
                let text = scalar_text(value);
                if key.starts_with("--") || key == "font-family" {
                    lines.push(format!("{indent}{key}: {text};"));
                } else {
                    lines.push(format!(
                        "{indent}--color-{key}: {};",
                        normalize_color(&text)
                    ));
                }
            }
            lines.push("}".to_string());
        }
    }

    lines
}

fn entry_names(entries: &[ThemeEntry], warnings: &mut Warnings) -> Vec<String> {
    entries
        .iter()
        .filter_map(|entry| {
            let name = entry.name();
            if name.is_none() {
                warnings.push("daisyui theme entry has no name; it was skipped");
            }
            name.map(str::to_string)
        })
        .collect()
}

fn theme_list_line(
    names: &[String],
    dark_theme: Option<&str>,
    options: &ConvertOptions,
) -> Option<String> {
    let default = names.first()?;
    let dark = dark_theme.map(str::to_string).or_else(|| {
        names
            .iter()
            .find(|name| options.dark_theme_fallbacks.iter().any(|f| f == *name))
            .cloned()
    });

    let mut parts = vec![format!("{default} --default")];
    if let Some(dark) = &dark {
        if dark != default {
            parts.push(format!("{dark} --prefersdark"));
        }
    }
    for name in names.iter().skip(1) {
        if Some(name.as_str()) != dark.as_deref() {
            parts.push(name.clone());
        }
    }

    Some(format!("themes: {};", parts.join(", ")))
}

fn scalar_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JsonMap;

    fn list(config: serde_json::Value) -> DaisyConfig {
        serde_json::from_value(config).unwrap()
    }

    #[test]
    fn test_blanket_themes_emit_canned_pair() {
        let mut warnings = Warnings::new();
        let lines = convert_daisyui(
            &DaisyConfig::default(),
            &ConvertOptions::default(),
            &mut warnings,
        );
        assert_eq!(
            lines,
            vec![
                "@plugin \"daisyui\" {",
                "  themes: light --default, dark --prefersdark;",
                "}",
            ]
        );
    }

    #[test]
    fn test_disabled_themes_emit_empty_block() {
        let mut warnings = Warnings::new();
        let config = list(serde_json::json!({ "themes": false }));
        let lines = convert_daisyui(&config, &ConvertOptions::default(), &mut warnings);
        assert_eq!(lines, vec!["@plugin \"daisyui\" {", "}"]);
    }

    #[test]
    fn test_theme_list_dark_found_by_fallback_search() {
        let mut warnings = Warnings::new();
        let config = list(serde_json::json!({ "themes": ["light", "dark", "cupcake"] }));
        let lines = convert_daisyui(&config, &ConvertOptions::default(), &mut warnings);
        assert_eq!(
            lines[1],
            "  themes: light --default, dark --prefersdark, cupcake;"
        );
    }

    #[test]
    fn test_theme_list_explicit_dark_theme() {
        let mut warnings = Warnings::new();
        let config = list(serde_json::json!({
            "themes": ["light", "night", "cupcake"],
            "darkTheme": "night"
        }));
        let lines = convert_daisyui(&config, &ConvertOptions::default(), &mut warnings);
        assert_eq!(
            lines[1],
            "  themes: light --default, night --prefersdark, cupcake;"
        );
    }

    #[test]
    fn test_theme_list_without_dark_variant() {
        let mut warnings = Warnings::new();
        let config = list(serde_json::json!({ "themes": ["pastel", "cupcake"] }));
        let lines = convert_daisyui(&config, &ConvertOptions::default(), &mut warnings);
        assert_eq!(lines[1], "  themes: pastel --default, cupcake;");
    }

    #[test]
    fn test_custom_theme_emits_variable_block() {
        let mut warnings = Warnings::new();
        let config = list(serde_json::json!({
            "themes": [
                "light",
                {
                    "corporate": {
                        "primary": "#4b6bfb",
                        "base-100": "oklch(0.98 0.01 250)",
                        "font-family": "Inter",
                        "--rounded-box": "0.5rem",
                        "name": "corporate"
                    }
                }
            ]
        }));
        let lines = convert_daisyui(&config, &ConvertOptions::default(), &mut warnings);

        assert_eq!(lines[1], "  themes: light --default, corporate;");
        let block_start = lines.iter().position(|l| l == "@theme {").unwrap();
        assert_eq!(
            &lines[block_start..],
            &[
                "@theme {",
                "  --color-primary: #4b6bfb;",
                "  --color-base-100: oklch(0.98 0.01 250);",
                "  font-family: Inter;",
                "  --rounded-box: 0.5rem;",
                "}",
            ]
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_nameless_custom_entry_warns() {
        let mut warnings = Warnings::new();
        let config = DaisyConfig {
            themes: DaisyThemes::List(vec![
                ThemeEntry::Name("light".to_string()),
                ThemeEntry::Custom(JsonMap::new()),
            ]),
            dark_theme: None,
        };
        let lines = convert_daisyui(&config, &ConvertOptions::default(), &mut warnings);

        assert_eq!(lines[1], "  themes: light --default;");
        assert_eq!(warnings.len(), 1);
    }
}
