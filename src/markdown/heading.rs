//! Heading rewriting and collection.
//!
//! Heading lines become `<hN id="...">` elements, and every heading is also
//! appended to a side-channel sequence (level, slug id, markup-stripped text)
//! that the sidebar TOC consumes later.
//!
//! Each line is tested against the four level markers deepest-first
//! (4 → 3 → 2 → 1): a shorter marker is a textual prefix of a longer one, so
//! testing `#` first would capture inside a `####` line. A single forward
//! scan keeps the collected sequence in document order across levels.
//!
//! Ids are not deduplicated — two headings with the same text produce the
//! same id. Known limitation, kept because published pages carry anchor
//! links that depend on the current ids.

use super::inline::{format, strip_markup};
use regex::Regex;
use std::sync::LazyLock;

/// A collected heading, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    /// Heading level, 1 through 4.
    pub level: u8,
    /// Slug id, also the `id` attribute of the rendered element.
    pub id: String,
    /// Display text with inline markup stripped.
    pub text: String,
}

static H4: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#### (.*)$").expect("h4 pattern is valid"));
static H3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^### (.*)$").expect("h3 pattern is valid"));
static H2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^## (.*)$").expect("h2 pattern is valid"));
static H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^# (.*)$").expect("h1 pattern is valid"));

/// Derive a URL/anchor-safe slug from heading text.
///
/// Pure and deterministic: lowercase, strip everything outside
/// letters/digits/underscore/whitespace/hyphen, collapse whitespace runs to
/// single hyphens, collapse repeated hyphens, trim boundary hyphens.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .collect();
    let hyphenated = kept.split_whitespace().collect::<Vec<_>>().join("-");

    let mut slug = String::with_capacity(hyphenated.len());
    for c in hyphenated.chars() {
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }
    slug.trim_matches('-').to_string()
}

/// Rewrite heading lines for all four levels, appending each to `headings`
/// in document order.
pub fn convert(text: &str, headings: &mut Vec<Heading>) -> String {
    let mut result: Vec<String> = Vec::new();

    'lines: for line in text.lines() {
        for (pattern, level) in [(&*H4, 4u8), (&*H3, 3), (&*H2, 2), (&*H1, 1)] {
            if let Some(caps) = pattern.captures(line) {
                let raw = &caps[1];
                let id = slugify(raw);
                headings.push(Heading {
                    level,
                    id: id.clone(),
                    text: strip_markup(raw),
                });
                result.push(format!("<h{level} id=\"{id}\">{}</h{level}>", format(raw)));
                continue 'lines;
            }
        }
        result.push(line.to_string());
    }

    result.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_deterministic() {
        assert_eq!(slugify("Getting Started"), slugify("Getting Started"));
        assert_eq!(slugify("Getting Started"), "getting-started");
    }

    #[test]
    fn slug_strips_punctuation() {
        assert_eq!(slugify("What's New? (2026)"), "whats-new-2026");
    }

    #[test]
    fn slug_collapses_whitespace_and_hyphens() {
        assert_eq!(slugify("a  b -- c"), "a-b-c");
    }

    #[test]
    fn slug_trims_boundary_hyphens() {
        assert_eq!(slugify("- leading and trailing -"), "leading-and-trailing");
    }

    #[test]
    fn heading_levels_render_with_ids() {
        let mut headings = Vec::new();
        let html = convert("## Setup\n#### Deep Detail", &mut headings);
        assert!(html.contains(r#"<h2 id="setup">Setup</h2>"#));
        assert!(html.contains(r#"<h4 id="deep-detail">Deep Detail</h4>"#));
    }

    #[test]
    fn deeper_marker_not_captured_by_shallower_pattern() {
        let mut headings = Vec::new();
        let html = convert("#### Four", &mut headings);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].level, 4);
        assert!(!html.contains("<h1"));
    }

    #[test]
    fn collection_preserves_document_order_across_levels() {
        let mut headings = Vec::new();
        convert("## First\n### Nested\n## Third", &mut headings);
        let texts: Vec<_> = headings.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, ["First", "Nested", "Third"]);
        let levels: Vec<_> = headings.iter().map(|h| h.level).collect();
        assert_eq!(levels, [2, 3, 2]);
    }

    #[test]
    fn collected_text_is_markup_stripped_but_display_is_formatted() {
        let mut headings = Vec::new();
        let html = convert("## **Bold** Title", &mut headings);
        assert_eq!(headings[0].text, "Bold Title");
        assert!(html.contains("<strong>Bold</strong> Title"));
    }

    #[test]
    fn duplicate_text_yields_duplicate_ids() {
        // Deliberately preserved behavior — no dedup suffixing.
        let mut headings = Vec::new();
        convert("## Notes\n## Notes", &mut headings);
        assert_eq!(headings[0].id, headings[1].id);
    }

    #[test]
    fn marker_without_space_is_not_a_heading() {
        let mut headings = Vec::new();
        let html = convert("##NoSpace", &mut headings);
        assert!(headings.is_empty());
        assert_eq!(html, "##NoSpace");
    }
}
