//! Unordered and ordered list passes.
//!
//! Two independent single-forward scans, each a two-state machine (outside /
//! inside a list) driven by a per-line predicate. A matching line opens or
//! continues the list; the first non-matching line closes it, as does end of
//! input. Nesting is not supported — an indented `- item` is still a
//! top-level item.
//!
//! The two predicates are deliberately asymmetric: unordered items may carry
//! leading whitespace, ordered items may not.

use super::inline::format;
use regex::Regex;
use std::sync::LazyLock;

static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*- (.*)$").expect("unordered item pattern is valid"));
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(.*)$").expect("ordered item pattern is valid"));

/// Convert runs of `- item` lines into `<ul>` blocks.
pub fn convert_unordered(text: &str) -> String {
    scan(text, &UNORDERED_ITEM, "ul")
}

/// Convert runs of `1. item` lines into `<ol>` blocks.
pub fn convert_ordered(text: &str) -> String {
    scan(text, &ORDERED_ITEM, "ol")
}

fn scan(text: &str, item: &Regex, tag: &str) -> String {
    let mut result: Vec<String> = Vec::new();
    let mut in_list = false;

    for line in text.lines() {
        if let Some(caps) = item.captures(line) {
            if !in_list {
                result.push(format!("<{tag}>"));
                in_list = true;
            }
            result.push(format!("<li>{}</li>", format(&caps[1])));
        } else {
            if in_list {
                result.push(format!("</{tag}>"));
                in_list = false;
            }
            result.push(line.to_string());
        }
    }

    if in_list {
        result.push(format!("</{tag}>"));
    }
    result.join("\n")
}
