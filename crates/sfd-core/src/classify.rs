//! Classify a (MIME type, extension) pair into a [`Category`].
//!
//! Precedence, first match wins:
//! 1. `text/html` or an `html`/`htm` extension is always Web, ahead of any
//!    table entry, so generic text types never swallow markup.
//! 2. Exact MIME table match.
//! 3. Extension table match (extension compared lowercase).
//! 4. Other.

use crate::category::Category;
use crate::tables::{category_for_extension, category_for_mime};
use serde::Serialize;

const HTML_MIME: &str = "text/html";
const HTML_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// Which precedence rule produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    WebOverride,
    Mime,
    Extension,
    Fallback,
    /// Category supplied by the caller rather than looked up.
    Preset,
}

/// Classify by MIME type and extension. Never fails; unknown input is Other.
///
/// `mime` must be a bare token (`text/html`, not `text/html; charset=utf-8`);
/// it is matched exactly, without case folding.
pub fn classify(mime: &str, extension: &str) -> Category {
    classify_explained(mime, extension).0
}

/// Same as [`classify`], also reporting which rule decided.
pub fn classify_explained(mime: &str, extension: &str) -> (Category, MatchRule) {
    let ext = extension.to_ascii_lowercase();

    if mime == HTML_MIME || HTML_EXTENSIONS.contains(&ext.as_str()) {
        return (Category::Web, MatchRule::WebOverride);
    }
    if let Some(category) = category_for_mime(mime) {
        return (category, MatchRule::Mime);
    }
    if let Some(category) = category_for_extension(&ext) {
        return (category, MatchRule::Extension);
    }
    (Category::Other, MatchRule::Fallback)
}
