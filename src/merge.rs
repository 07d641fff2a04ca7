//! Fixed-order assembly of the final stylesheet
//!
//! Output order is fixed: passthrough imports, the single framework import,
//! base layer, custom media queries, components layer, plugin blocks.
//! Content with no v4 counterpart (utilities bucket, lines preceding the
//! first marker) is dropped, and the drop is reported as a warning.

use crate::config::ParsedConfig;
use crate::emit::{convert_daisyui, convert_screens, convert_typography};
use crate::options::ConvertOptions;
use crate::report::{ConversionResult, Warnings};
use crate::stylesheet::{mine_base, mine_components, BaseRules, SectionedCss};

/// Assemble the final output from extracted and sectioned inputs.
pub fn merge(
    config: &ParsedConfig,
    css: &SectionedCss,
    options: &ConvertOptions,
    mut warnings: Warnings,
) -> ConversionResult {
    let mut parts: Vec<String> = Vec::new();

    // Imports that do not load the framework itself pass through first.
    let passthrough: Vec<String> = css
        .imports
        .iter()
        .filter(|line| !line.contains("tailwindcss/"))
        .cloned()
        .collect();
    if !passthrough.is_empty() {
        parts.extend(passthrough);
        parts.push(String::new());
    }

    banner(&mut parts, options, "/* Import Tailwind */");
    parts.push("@import \"tailwindcss\";".to_string());
    parts.push(String::new());

    let base = build_base_layer(&mine_base(&SectionedCss::joined(&css.base)), options);
    if !base.is_empty() {
        banner(&mut parts, options, "/* Base layer */");
        parts.extend(base);
        parts.push(String::new());
    }

    let media = config
        .theme
        .as_ref()
        .map(|theme| convert_screens(&theme.screens))
        .unwrap_or_default();
    if !media.is_empty() {
        banner(&mut parts, options, "/* Custom media queries */");
        parts.extend(media);
        parts.push(String::new());
    }

    let components = component_map(mine_components(&SectionedCss::joined(&css.components)));
    if !components.is_empty() {
        banner(&mut parts, options, "/* Components */");
        parts.push("@layer components {".to_string());
        for (class, body) in &components {
            parts.push(format!("{}.{class} {{", options.indent_to(1)));
            for line in body.lines() {
                parts.push(format!("{}{}", options.indent_to(2), line.trim()));
            }
            parts.push(format!("{}}}", options.indent_to(1)));
        }
        parts.push("}".to_string());
        parts.push(String::new());
    }

    let typography = config.has_plugin("typography");
    if typography || config.daisyui.is_some() {
        banner(&mut parts, options, "/* Plugin configurations */");
        if typography {
            let overrides = config
                .theme
                .as_ref()
                .and_then(|theme| theme.typography_css.as_ref());
            parts.extend(convert_typography(overrides, options));
            parts.push(String::new());
        }
        if let Some(daisy) = &config.daisyui {
            parts.extend(convert_daisyui(daisy, options, &mut warnings));
            parts.push(String::new());
        }
    }

    let dropped_utilities = SectionedCss::significant_lines(&css.utilities);
    if dropped_utilities > 0 {
        warnings.push(format!(
            "{dropped_utilities} utilities-layer line(s) have no v4 counterpart and were dropped"
        ));
    }
    let dropped_custom = SectionedCss::significant_lines(&css.custom);
    if dropped_custom > 0 {
        warnings.push(format!(
            "{dropped_custom} line(s) preceding the first section marker were dropped"
        ));
    }

    let text = parts.join("\n");
    ConversionResult::success(format!("{}\n", text.trim_end()), warnings)
}

fn banner(parts: &mut Vec<String>, options: &ConvertOptions, text: &str) {
    if options.section_banners {
        parts.push(text.to_string());
    }
}

fn build_base_layer(rules: &BaseRules, options: &ConvertOptions) -> Vec<String> {
    if rules.is_empty() {
        return Vec::new();
    }

    let indent = options.indent_to(1);
    let inner = options.indent_to(2);
    let mut lines = vec!["@layer base {".to_string()];

    let mut block = |selector: &str, body: &str, lines: &mut Vec<String>| {
        lines.push(format!("{indent}{selector} {{"));
        for line in body.lines() {
            lines.push(format!("{inner}{}", line.trim()));
        }
        lines.push(format!("{indent}}}"));
    };

    if let Some(html) = &rules.html {
        block("html", html, &mut lines);
    }
    if let Some(selection) = &rules.selection {
        block("::selection", selection, &mut lines);
    }
    if !rules.scrollbar_root.is_empty() {
        lines.push(format!("{indent}* {{"));
        for decl in &rules.scrollbar_root {
            lines.push(format!("{inner}{decl}"));
        }
        lines.push(format!("{indent}}}"));
    }
    if let Some(track) = &rules.scrollbar_track {
        block("::-webkit-scrollbar-track", track, &mut lines);
    }
    if let Some(thumb) = &rules.scrollbar_thumb {
        block("::-webkit-scrollbar-thumb", thumb, &mut lines);
    }

    lines.push("}".to_string());
    lines
}

/// Components keyed by class name: first-seen position, later body wins.
fn component_map(mined: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut map: Vec<(String, String)> = Vec::new();
    for (class, body) in mined {
        if let Some(slot) = map.iter_mut().find(|(existing, _)| *existing == class) {
            slot.1 = body;
        } else {
            map.push((class, body));
        }
    }
    map
}
