//! The markdown-to-HTML conversion pipeline.
//!
//! A fixed sequence of full-document passes, each consuming the text state
//! the previous pass left behind. Order is load-bearing:
//!
//! 1. Code extraction — verbatim regions become opaque placeholders before
//!    anything else can reinterpret their contents.
//! 2. Tables.
//! 3. Blockquotes (adjacent quoted paragraphs merge into one block).
//! 4. Headings, deepest marker first, collecting the TOC side channel.
//! 5. Horizontal rules.
//! 6. Unordered lists, then 7. ordered lists.
//! 8. Catch-all inline formatting over text no block pass touched.
//! 9. Paragraph grouping.
//! 10. Code restoration — after grouping, so placeholders are never wrapped
//!     in `<p>` tags.
//!
//! The pipeline is a pure function of the document text. It has no failure
//! mode: malformed markup degrades to best-effort output, never an error.

pub mod code;
pub mod heading;
pub mod inline;
pub mod list;
pub mod paragraph;
pub mod table;

pub use heading::Heading;

use code::CodeBlocks;
use regex::Regex;
use std::sync::LazyLock;

static BLOCKQUOTE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^>\s*(.*)$").expect("blockquote pattern is valid"));
static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^---$").expect("horizontal rule pattern is valid"));
static LEADING_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A# .*\n+").expect("leading title pattern is valid"));
static EXCESS_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("blank line pattern is valid"));

/// Result of one document conversion.
#[derive(Debug)]
pub struct Rendered {
    /// The full content HTML.
    pub html: String,
    /// Every heading in document order. The stripped leading title is not
    /// included (see [`strip_leading_title`]).
    pub headings: Vec<Heading>,
}

/// Remove the first `# Title` line (and following blank lines) from a
/// document. The title is rendered separately in the page header, so the
/// pipeline must never see or collect it.
pub fn strip_leading_title(markdown: &str) -> String {
    LEADING_TITLE.replace(markdown, "").into_owned()
}

/// Convert a markdown document to HTML, collecting headings along the way.
///
/// Expects newline-only line endings; normalizing `\r` is the caller's job.
pub fn convert(markdown: &str) -> Rendered {
    let mut headings = Vec::new();
    let mut blocks = CodeBlocks::default();

    let text = blocks.extract(markdown);
    let text = table::convert(&text);

    let text = BLOCKQUOTE_LINE
        .replace_all(&text, "<blockquote><p>$1</p></blockquote>")
        .replace("</blockquote>\n<blockquote>", "\n");

    let text = heading::convert(&text, &mut headings);
    let text = HORIZONTAL_RULE.replace_all(&text, "<hr>").into_owned();
    let text = list::convert_unordered(&text);
    let text = list::convert_ordered(&text);
    let text = inline::format_final(&text);
    let text = paragraph::group(&text);
    let text = blocks.restore(&text);

    let text = text.replace("<p></p>", "");
    let html = EXCESS_BLANK_LINES.replace_all(&text, "\n\n").into_owned();

    Rendered { html, headings }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_document_renders_every_block_kind() {
        let source = "\
## Section

Some *prose* here.

- item one
- item two

1. first
2. second

> a quote
> continued

| H |
|---|
| c |

---

```rust
let x = 1;
```

Closing paragraph.";
        let out = convert(source);
        assert!(out.html.contains(r#"<h2 id="section">Section</h2>"#));
        assert!(out.html.contains("<em>prose</em>"));
        assert!(out.html.contains("<ul>"));
        assert!(out.html.contains("<ol>"));
        assert!(out.html.contains("<blockquote>"));
        assert!(out.html.contains("<table>"));
        assert!(out.html.contains("<hr>"));
        assert!(out.html.contains("language-rust"));
        assert!(out.html.contains("<p>Closing paragraph.</p>"));
        assert_eq!(out.headings.len(), 1);
    }

    #[test]
    fn verbatim_isolation_end_to_end() {
        let source = "before\n\n```\n# heading\n**bold**\n- list\n| pipe |\n```\n\nafter";
        let out = convert(source);
        assert!(out.html.contains("# heading"));
        assert!(out.html.contains("**bold**"));
        assert!(out.html.contains("- list"));
        assert!(out.html.contains("| pipe |"));
        // Nothing inside the fence was interpreted.
        assert!(!out.html.contains("<h1"));
        assert!(!out.html.contains("<strong>"));
        assert!(!out.html.contains("<ul>"));
        assert!(!out.html.contains("<table>"));
        assert!(out.headings.is_empty());
    }

    #[test]
    fn placeholder_is_not_wrapped_in_paragraph() {
        let out = convert("```\nx\n```");
        assert!(!out.html.contains("<p><pre>"));
        assert!(!out.html.contains("<p>___CODEBLOCK"));
        assert!(out.html.contains("<pre><code"));
    }

    #[test]
    fn heading_sequence_matches_source_order_and_count() {
        let source = "# One\n\n## Two\n\n### Three\n\n## Four";
        let out = convert(source);
        let texts: Vec<_> = out.headings.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, ["One", "Two", "Three", "Four"]);
    }

    #[test]
    fn strip_leading_title_removes_only_the_first_h1() {
        let stripped = strip_leading_title("# Title\n\nBody\n\n# Another\n");
        assert!(stripped.starts_with("Body"));
        assert!(stripped.contains("# Another"));
    }

    #[test]
    fn strip_leading_title_ignores_mid_document_h1() {
        let source = "intro\n\n# Not Leading\n";
        assert_eq!(strip_leading_title(source), source);
    }

    #[test]
    fn adjacent_blockquote_lines_merge() {
        let out = convert("> one\n> two");
        assert_eq!(out.html.matches("<blockquote>").count(), 1);
        assert_eq!(out.html.matches("</blockquote>").count(), 1);
        assert!(out.html.contains("<p>one</p>"));
        assert!(out.html.contains("<p>two</p>"));
    }

    #[test]
    fn table_separator_round_trip() {
        let out = convert("| A | B |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |");
        assert_eq!(out.html.matches("<tr>").count(), 3);
        assert_eq!(out.html.matches("<th>").count(), 2);
        assert_eq!(out.html.matches("<td>").count(), 4);
    }

    #[test]
    fn list_boundary_three_items() {
        let out = convert("intro\n\n- a\n- b\n- c\n\noutro");
        assert_eq!(out.html.matches("<ul>").count(), 1);
        assert_eq!(out.html.matches("<li>").count(), 3);
    }

    #[test]
    fn inline_precedence_through_the_pipeline() {
        let out = convert("***bold-italic***");
        assert!(out.html.contains("<strong><em>bold-italic</em></strong>"));
        assert!(!out.html.contains('*'));
    }

    #[test]
    fn unterminated_fence_degrades_without_error() {
        let out = convert("```rust\nfn broken() {");
        // Best-effort: the opening fence never matched, so the text flows
        // through the prose passes instead.
        assert!(!out.html.is_empty());
    }

    #[test]
    fn conversion_is_deterministic() {
        let source = "## Same\n\ntext `code` **bold**\n";
        let a = convert(source);
        let b = convert(source);
        assert_eq!(a.html, b.html);
        assert_eq!(a.headings, b.headings);
    }
}
