//! Per-section structural mining
//!
//! Pattern extraction over a section's joined text. The matchers are
//! single-level: `[^}]*` bodies mean a nested rule block will be mis-split.
//! That is a known limitation of the source format being mined (flat
//! utility-era stylesheets), not something this module tries to fix with a
//! real CSS parser.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HTML_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"html\s*\{([^}]*)\}").unwrap());

static SELECTION_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"::selection\s*\{([^}]*)\}").unwrap());

static SCROLLBAR_STAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\s*\{[^}]*scrollbar[^}]*\}").unwrap());

static SCROLLBAR_DECL: Lazy<Regex> = Lazy::new(|| Regex::new(r"scrollbar[^;]+;").unwrap());

static SCROLLBAR_TRACK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"::-webkit-scrollbar-track\s*\{([^}]*)\}").unwrap());

static SCROLLBAR_THUMB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"::-webkit-scrollbar-thumb\s*\{([^}]*)\}").unwrap());

static COMPONENT_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.([A-Za-z0-9_-]+)\s*\{([^}]*)\}").unwrap());

static LEGACY_COLOR_VAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"oklch\(var\(--([A-Za-z0-9-]+)\)\)").unwrap());

/// Base-layer rules mined from the base bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseRules {
    pub html: Option<String>,
    pub selection: Option<String>,
    /// Scrollbar declarations found in a `* { ... }` rule, one per entry.
    pub scrollbar_root: Vec<String>,
    pub scrollbar_track: Option<String>,
    pub scrollbar_thumb: Option<String>,
}

impl BaseRules {
    pub fn is_empty(&self) -> bool {
        self.html.is_none()
            && self.selection.is_none()
            && self.scrollbar_root.is_empty()
            && self.scrollbar_track.is_none()
            && self.scrollbar_thumb.is_none()
    }
}

/// Mine base-layer rules out of joined base-section text.
///
/// Selection and scrollbar bodies go through the legacy color rewrite; the
/// html body is kept verbatim.
pub fn mine_base(text: &str) -> BaseRules {
    let mut rules = BaseRules::default();

    if let Some(caps) = HTML_RULE.captures(text) {
        rules.html = Some(caps[1].trim().to_string());
    }
    if let Some(caps) = SELECTION_RULE.captures(text) {
        rules.selection = Some(rewrite_color_vars(caps[1].trim()));
    }
    if let Some(star) = SCROLLBAR_STAR.find(text) {
        rules.scrollbar_root = SCROLLBAR_DECL
            .find_iter(star.as_str())
            .map(|decl| rewrite_color_vars(decl.as_str()))
            .collect();
    }
    if let Some(caps) = SCROLLBAR_TRACK.captures(text) {
        rules.scrollbar_track = Some(rewrite_color_vars(caps[1].trim()));
    }
    if let Some(caps) = SCROLLBAR_THUMB.captures(text) {
        rules.scrollbar_thumb = Some(rewrite_color_vars(caps[1].trim()));
    }

    rules
}

/// Mine `.class { ... }` pairs out of joined components-section text, in
/// match order. Bodies go through the legacy color rewrite.
pub fn mine_components(text: &str) -> Vec<(String, String)> {
    COMPONENT_RULE
        .captures_iter(text)
        .map(|caps| {
            (
                caps[1].to_string(),
                rewrite_color_vars(caps[2].trim()),
            )
        })
        .collect()
}

/// Rewrite legacy component-library color references.
///
/// `oklch(var(--X))` becomes `var(--color-X)`, with the two-letter daisyUI
/// shorthands expanded to their semantic names. Values already in plain
/// `oklch(...)` functional form do not match and pass through unchanged.
pub fn rewrite_color_vars(text: &str) -> String {
    LEGACY_COLOR_VAR
        .replace_all(text, |caps: &Captures| {
            format!("var(--color-{})", expand_shorthand(&caps[1]))
        })
        .into_owned()
}

fn expand_shorthand(name: &str) -> &str {
    match name {
        "p" => "primary",
        "pc" => "primary-content",
        "s" => "secondary",
        "sc" => "secondary-content",
        "a" => "accent",
        "ac" => "accent-content",
        "n" => "neutral",
        "nc" => "neutral-content",
        "b1" => "base-100",
        "b2" => "base-200",
        "b3" => "base-300",
        "bc" => "base-content",
        other => other,
    }
}
