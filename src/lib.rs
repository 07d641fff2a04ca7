//! Tailwind v3 → v4 conversion pipeline
//!
//!     This crate converts a Tailwind CSS v3 JavaScript configuration object and its
//!     companion stylesheet into the v4 CSS-first syntax (`@import "tailwindcss"`,
//!     `@custom-media`, `@plugin`, `@theme`, `@layer`).
//!
//! Architecture
//!
//!     The pipeline is a chain of pure functions, leaves first:
//!
//!     - config: scans the JavaScript-like object literal into a value tree and
//!       extracts the fields the conversion cares about (theme screens, typography
//!       overrides, plugin list, daisyUI settings). Everything else is preserved
//!       opaquely.
//!     - stylesheet: classifies stylesheet lines into sections by directive
//!       markers, then mines structural rules (base styles, component classes)
//!       out of each section's text.
//!     - emit: turns extracted data into v4 declarations (custom media queries,
//!       plugin blocks, theme variable blocks).
//!     - merge: assembles the final output in a fixed section order and owns the
//!       error boundary.
//!
//!     The file structure:
//!     .
//!     ├── error.rs            # ExtractError / ConvertError
//!     ├── options.rs          # output formatting knobs
//!     ├── report.rs           # ConversionResult and warning collection
//!     ├── config
//!     │   ├── tokens.rs       # logos lexer for the object-literal grammar
//!     │   ├── scanner.rs      # recursive-descent scanner -> ConfigValue
//!     │   ├── value.rs        # ConfigValue tree
//!     │   └── extract.rs      # anchor location + field extraction
//!     ├── stylesheet
//!     │   ├── sections.rs     # single-pass line classifier
//!     │   └── mine.rs         # per-section structural mining + color rewrite
//!     ├── emit
//!     │   ├── theme.rs        # screens -> @custom-media
//!     │   ├── typography.rs   # typography @plugin block
//!     │   └── daisyui.rs      # daisyUI @plugin block + @theme blocks
//!     └── merge.rs            # fixed-order assembly
//!
//!     This is a pure lib: it powers file- and CLI-level wrappers but is shell
//!     agnostic. No code here reads files, prints to std streams, or touches env
//!     vars; diagnostics go through the `tracing` facade and no subscriber is
//!     installed.
//!
//! Fidelity
//!
//!     The input grammar is deliberately minimal. This is not a JavaScript or CSS
//!     parser; it recognizes the shapes the v3 configuration convention produces
//!     (object literals, arrays, strings, `null`, bare expressions) and treats
//!     anything else as opaque pass-through text. Failures inside individual
//!     sub-fields degrade to documented defaults and surface as warnings; only a
//!     config whose outer object cannot be located at all is a hard error.

pub mod config;
pub mod emit;
pub mod error;
pub mod merge;
pub mod options;
pub mod report;
pub mod stylesheet;

pub use config::extract::extract_config;
pub use config::{DaisyConfig, DaisyThemes, ParsedConfig, PluginRef, ThemeConfig, ThemeEntry};
pub use error::{ConvertError, ExtractError};
pub use options::ConvertOptions;
pub use report::{ConversionResult, Warnings};
pub use stylesheet::{sectionize, SectionedCss};

/// Convert a v3 configuration source and stylesheet source into v4 CSS.
///
/// This is the top-level entry point and the only place where extraction
/// failures become user-visible: a fatal error is converted into a single
/// `errors` entry with empty `css`, while degraded sub-parses accumulate in
/// `warnings` alongside a normal result.
pub fn convert(config_source: &str, css_source: &str, options: &ConvertOptions) -> ConversionResult {
    let mut warnings = Warnings::new();
    let config = match extract_config(config_source, &mut warnings) {
        Ok(config) => config,
        Err(err) => {
            let err = ConvertError::Config(err);
            return ConversionResult::failure(format!("Conversion error: {err}"), warnings);
        }
    };
    let sections = sectionize(css_source);
    merge::merge(&config, &sections, options, warnings)
}

/// Convert from an already-structured configuration record.
///
/// The record is stringified into the anchored literal form and fed through the
/// same extraction path as raw source text, so both entry points share one set
/// of semantics.
pub fn convert_structured(
    config: &serde_json::Value,
    css_source: &str,
    options: &ConvertOptions,
) -> ConversionResult {
    let rendered = serde_json::to_string_pretty(config).expect("JSON value serializes");
    let source = format!("export default {rendered} satisfies Config;");
    convert(&source, css_source, options)
}
