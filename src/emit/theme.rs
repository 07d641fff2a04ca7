//! Theme conversion: breakpoints and color values

use crate::stylesheet::mine::rewrite_color_vars;

/// One `@custom-media` declaration per screen entry, in source order.
pub fn convert_screens(screens: &[(String, String)]) -> Vec<String> {
    screens
        .iter()
        .map(|(name, value)| format!("@custom-media --{name} (min-width: {value});"))
        .collect()
}

/// Narrow color compatibility shim.
///
/// Values already written as a plain perceptual color function pass through
/// unchanged, so re-converting converted output is a no-op. Legacy
/// `oklch(var(--X))` references are rewritten to their v4 variable form.
/// Anything else (hex, named colors) is left alone.
pub fn normalize_color(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.starts_with("oklch(") && !trimmed.contains("var(") {
        return trimmed.to_string();
    }
    rewrite_color_vars(trimmed)
}
