//! Inline markup substitution.
//!
//! A fixed, order-sensitive chain of text rewrites shared by every block-level
//! pass: triple emphasis before double before single (three asterisks contain
//! two, which contain one — widest pattern must consume first), then code
//! spans, images, links, and trailing-double-space hard breaks.
//!
//! Two entry points exist because blocks have different formatting contracts:
//!
//! - [`format`]: the full chain, used for list items and heading display text.
//! - [`format_final`]: the catch-all pass the pipeline runs over text no
//!   earlier pass touched. Identical except for the single-emphasis pattern,
//!   which must not re-match asterisks that already belong to a rendered
//!   `<strong>` pair — `\*([^*]+)\*` cannot cross a remaining `**`.
//!
//! Table cells use only [`format_cell`] (bold/italic; code, links and images
//! are deliberately not applied inside cells).

use regex::Regex;
use std::sync::LazyLock;

static BOLD_ITALIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*\*(.*?)\*\*\*").expect("bold-italic pattern is valid")
});
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("italic pattern is valid"));
static ITALIC_REMAINDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("italic remainder pattern is valid"));
static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("code span pattern is valid"));
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("image pattern is valid"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid"));
static HARD_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m) {2}$").expect("hard break pattern is valid"));

/// Escape the three HTML metacharacters. Used for verbatim code bodies.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Full inline formatting for list items and heading display text.
pub fn format(text: &str) -> String {
    let result = BOLD_ITALIC.replace_all(text, "<strong><em>$1</em></strong>");
    let result = BOLD.replace_all(&result, "<strong>$1</strong>");
    let result = ITALIC.replace_all(&result, "<em>$1</em>");
    let result = CODE_SPAN.replace_all(&result, "<code>$1</code>");
    let result = IMAGE.replace_all(&result, r#"<img src="$2" alt="$1">"#);
    let result = LINK.replace_all(&result, r#"<a href="$2">$1</a>"#);
    HARD_BREAK.replace_all(&result, "<br>").into_owned()
}

/// Catch-all inline pass over the whole document, after every block pass ran.
///
/// Skips the hard-break rewrite (paragraph grouping inspects trailing spaces
/// itself) and uses the remainder-safe single-emphasis pattern.
pub fn format_final(text: &str) -> String {
    let result = BOLD_ITALIC.replace_all(text, "<strong><em>$1</em></strong>");
    let result = BOLD.replace_all(&result, "<strong>$1</strong>");
    let result = ITALIC_REMAINDER.replace_all(&result, "<em>$1</em>");
    let result = CODE_SPAN.replace_all(&result, "<code>$1</code>");
    let result = IMAGE.replace_all(&result, r#"<img src="$2" alt="$1">"#);
    LINK.replace_all(&result, r#"<a href="$2">$1</a>"#)
        .into_owned()
}

/// Reduced inline pass for table cells: bold and italic only.
pub fn format_cell(text: &str) -> String {
    let result = BOLD.replace_all(text, "<strong>$1</strong>");
    ITALIC.replace_all(&result, "<em>$1</em>").into_owned()
}

/// Strip inline markup, leaving plain display text.
///
/// Used for collected heading text: the TOC wants `Setup`, not `**Setup**`.
pub fn strip_markup(text: &str) -> String {
    let result = BOLD_ITALIC.replace_all(text, "$1");
    let result = BOLD.replace_all(&result, "$1");
    let result = ITALIC.replace_all(&result, "$1");
    let result = CODE_SPAN.replace_all(&result, "$1");
    LINK.replace_all(&result, "$1").into_owned()
}
