//! Stylesheet sectioning and structural mining
//!
//! Two clearly separated stages: a stateful single-pass line classifier that
//! buckets every line by the nearest preceding directive marker
//! ([`sections`]), and per-bucket pattern extraction over each bucket's
//! joined text ([`mine`]). The classifier never tracks braces; the miners
//! are naive single-level matchers by design.

pub mod mine;
pub mod sections;

pub use mine::{mine_base, mine_components, rewrite_color_vars, BaseRules};
pub use sections::{sectionize, SectionedCss};
