//! Conversion outcome and warning collection
//!
//! Every best-effort fallback in the pipeline is routed through [`Warnings`]
//! so callers can observe degradation instead of silently receiving defaults.

use serde::Serialize;

/// The output artifact of a conversion.
///
/// If `errors` is non-empty the conversion failed and `css` is empty; the two
/// are never both meaningfully populated. `warnings` may accompany either
/// outcome.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionResult {
    pub css: String,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ConversionResult {
    /// A successful conversion with the given output text.
    pub fn success(css: String, warnings: Warnings) -> Self {
        ConversionResult {
            css,
            warnings: warnings.into_vec(),
            errors: Vec::new(),
        }
    }

    /// A failed conversion. The output text is voided; warnings collected up
    /// to the failure are kept.
    pub fn failure(message: impl Into<String>, warnings: Warnings) -> Self {
        ConversionResult {
            css: String::new(),
            warnings: warnings.into_vec(),
            errors: vec![message.into()],
        }
    }

    /// Whether the conversion produced usable output.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Ordered collector for non-fatal findings.
#[derive(Debug, Default)]
pub struct Warnings {
    entries: Vec<String>,
}

impl Warnings {
    pub fn new() -> Self {
        Warnings::default()
    }

    /// Record a warning. Also mirrored to the `tracing` facade so embedders
    /// with a subscriber see degradation as it happens.
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.entries.push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}
