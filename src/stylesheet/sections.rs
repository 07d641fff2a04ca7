//! Single-pass line classifier
//!
//! Walks the stylesheet top to bottom keeping a current-section state.
//! `@import` lines always land in the imports bucket; a line containing one
//! of the three framework sub-import markers switches the state without
//! being copied anywhere; every other line lands in the active bucket,
//! which is "custom" until a marker has been seen.

/// Marker substring that starts the base section.
pub const BASE_MARKER: &str = "@tailwindcss/base";
/// Marker substring that starts the components section.
pub const COMPONENTS_MARKER: &str = "@tailwindcss/components";
/// Marker substring that starts the utilities section.
pub const UTILITIES_MARKER: &str = "@tailwindcss/utilities";

/// Stylesheet lines partitioned by section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionedCss {
    pub imports: Vec<String>,
    pub base: Vec<String>,
    pub components: Vec<String>,
    pub utilities: Vec<String>,
    pub custom: Vec<String>,
}

impl SectionedCss {
    /// Lines of a bucket joined back into one text for structural mining.
    pub fn joined(lines: &[String]) -> String {
        lines.join("\n")
    }

    /// Count of non-blank lines in a bucket.
    pub fn significant_lines(lines: &[String]) -> usize {
        lines.iter().filter(|l| !l.trim().is_empty()).count()
    }
}

#[derive(Clone, Copy)]
enum Section {
    Base,
    Components,
    Utilities,
    Custom,
}

/// Classify stylesheet lines into sections. Never fails.
pub fn sectionize(source: &str) -> SectionedCss {
    let mut out = SectionedCss::default();
    let mut current = Section::Custom;

    for line in source.split('\n') {
        if line.starts_with("@import") {
            out.imports.push(line.to_string());
        } else if line.contains(BASE_MARKER) {
            current = Section::Base;
        } else if line.contains(COMPONENTS_MARKER) {
            current = Section::Components;
        } else if line.contains(UTILITIES_MARKER) {
            current = Section::Utilities;
        } else {
            let bucket = match current {
                Section::Base => &mut out.base,
                Section::Components => &mut out.components,
                Section::Utilities => &mut out.utilities,
                Section::Custom => &mut out.custom,
            };
            bucket.push(line.to_string());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imports_only() {
        let css = "@import url('https://fonts.example/inter.css');\n@import 'tailwindcss/base';";
        let sections = sectionize(css);

        assert_eq!(sections.imports.len(), 2);
        assert!(sections.base.is_empty());
        assert!(sections.components.is_empty());
        assert!(sections.utilities.is_empty());
        assert!(sections.custom.is_empty());
    }

    #[test]
    fn test_markers_switch_without_being_copied() {
        let css = "\
/* @tailwindcss/base */
html { scroll-behavior: smooth; }
/* @tailwindcss/components */
.btn { color: red; }
/* @tailwindcss/utilities */
.sr-only { position: absolute; }";
        let sections = sectionize(css);

        assert_eq!(sections.base, vec!["html { scroll-behavior: smooth; }"]);
        assert_eq!(sections.components, vec![".btn { color: red; }"]);
        assert_eq!(sections.utilities, vec![".sr-only { position: absolute; }"]);
        assert!(sections.custom.is_empty());
        assert!(sections.imports.is_empty());
    }

    #[test]
    fn test_lines_before_any_marker_are_custom() {
        let css = ":root { --brand: teal; }\n/* @tailwindcss/base */\nbody {}";
        let sections = sectionize(css);

        assert_eq!(sections.custom, vec![":root { --brand: teal; }"]);
        assert_eq!(sections.base, vec!["body {}"]);
    }

    #[test]
    fn test_import_wins_over_marker_substring() {
        // An import line mentioning a marker still lands in imports; the
        // section state is untouched.
        let css = "@import '@tailwindcss/base';\nhtml {}";
        let sections = sectionize(css);

        assert_eq!(sections.imports.len(), 1);
        assert_eq!(sections.custom, vec!["html {}"]);
        assert!(sections.base.is_empty());
    }

    #[test]
    fn test_empty_input_has_single_custom_line() {
        let sections = sectionize("");
        assert_eq!(sections.custom, vec![""]);
    }

    #[test]
    fn test_significant_lines_ignores_blanks() {
        let lines = vec![String::new(), "  ".to_string(), ".a {}".to_string()];
        assert_eq!(SectionedCss::significant_lines(&lines), 1);
    }
}
