//! Typography plugin block emitter
//!
//! Generates the `@plugin "@tailwindcss/typography"` declaration from the
//! `extend.typography.DEFAULT.css` overrides. A null value resets the
//! property (`initial`), a nested mapping becomes a one-level block, and
//! everything else is a flat declaration. Property keys are emitted
//! kebab-cased.

use super::kebab_case;
use crate::config::ConfigValue;
use crate::options::ConvertOptions;

/// Plugin identifier as it appears in both plugin lists and emitted output.
pub const TYPOGRAPHY_PLUGIN: &str = "@tailwindcss/typography";

/// Emit the typography plugin declaration.
///
/// With no overrides the bare loading directive is emitted; with overrides a
/// configuring block is generated from them, in source order.
pub fn convert_typography(css: Option<&ConfigValue>, options: &ConvertOptions) -> Vec<String> {
    let entries = match css {
        Some(ConfigValue::Object(entries)) if !entries.is_empty() => entries,
        _ => return vec![format!("@plugin \"{TYPOGRAPHY_PLUGIN}\";")],
    };

    let indent = options.indent_to(1);
    let inner = options.indent_to(2);
    let mut lines = vec![format!("@plugin \"{TYPOGRAPHY_PLUGIN}\" {{")];

    for (key, value) in entries {
        match value {
            ConfigValue::Null => {
                lines.push(format!("{indent}{}: initial;", kebab_case(key)));
            }
            ConfigValue::String(s) if s == "null" => {
                lines.push(format!("{indent}{}: initial;", kebab_case(key)));
            }
            ConfigValue::Object(nested) => {
                lines.push(format!("{indent}{} {{", kebab_case(key)));
                for (nested_key, nested_value) in nested {
                    lines.push(format!(
                        "{inner}{}: {};",
                        kebab_case(nested_key),
                        declaration_text(nested_value)
                    ));
                }
                lines.push(format!("{indent}}}"));
            }
            other => {
                lines.push(format!(
                    "{indent}{}: {};",
                    kebab_case(key),
                    declaration_text(other)
                ));
            }
        }
    }

    lines.push("}".to_string());
    lines
}

fn declaration_text(value: &ConfigValue) -> String {
    match value {
        ConfigValue::Null => "initial".to_string(),
        ConfigValue::String(s) => s.clone(),
        ConfigValue::Raw(text) => text.clone(),
        ConfigValue::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
