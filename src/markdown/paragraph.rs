//! Paragraph grouping.
//!
//! The last structural pass. By this point every block construct is already
//! rendered HTML, so any line that is not blank, not the opening of a known
//! block element, and not a code placeholder is loose prose. Consecutive
//! prose lines merge into one `<p>`; a source line ending in two spaces gets
//! a `<br>` instead of ending the paragraph.

use super::code::PLACEHOLDER_PREFIX;
use regex::Regex;
use std::sync::LazyLock;

/// Opening tags that terminate a paragraph. Matching is on the trimmed line
/// start, case-insensitive.
static BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^<(h[1-6]|ul|ol|li|blockquote|pre|div|table|tr|th|td|hr|nav|header|footer|article|section)",
    )
    .expect("block tag pattern is valid")
});

/// Group loose prose lines into paragraphs, passing block lines through.
pub fn group(text: &str) -> String {
    let mut result: Vec<String> = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        let is_block = trimmed.is_empty()
            || BLOCK_TAG.is_match(trimmed)
            || trimmed.starts_with(PLACEHOLDER_PREFIX);

        if is_block {
            flush(&mut result, &mut paragraph);
            if !trimmed.is_empty() {
                result.push(trimmed.to_string());
            }
        } else if line.ends_with("  ") {
            paragraph.push(format!("{trimmed}<br>"));
        } else {
            paragraph.push(trimmed.to_string());
        }
    }
    flush(&mut result, &mut paragraph);

    result.join("\n")
}

/// Emit the open paragraph, if any. Empty paragraphs are never emitted.
fn flush(result: &mut Vec<String>, paragraph: &mut Vec<String>) {
    if !paragraph.is_empty() {
        result.push(format!("<p>{}</p>", paragraph.join("\n")));
        paragraph.clear();
    }
}
