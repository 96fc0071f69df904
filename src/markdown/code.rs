//! Verbatim code block extraction and restoration.
//!
//! Fenced code regions are lifted out of the document before any other pass
//! runs and swapped back in after paragraph grouping, so their bodies survive
//! every rewrite byte-for-byte (HTML-escaped). Extracted fragments live in an
//! arena indexed by the number embedded in each placeholder token.
//!
//! The four-backtick fence pattern runs before the three-backtick one: a
//! longer fence can legitimately contain three-backtick sequences in its
//! body (the classic "how to write a code fence" example), and matching the
//! short pattern first would cross-match into it.

use super::inline::escape_html;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Placeholder prefix. Paragraph grouping recognizes these lines and passes
/// them through unwrapped.
pub const PLACEHOLDER_PREFIX: &str = "___CODEBLOCK_";

static FENCE_LONG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"````(\w*)\n((?s).*?)````").expect("long fence pattern is valid")
});
static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(\w*)\n((?s).*?)```").expect("fence pattern is valid")
});

/// Arena of rendered `<pre><code>` fragments for one pipeline run.
#[derive(Debug, Default)]
pub struct CodeBlocks {
    fragments: Vec<String>,
}

impl CodeBlocks {
    /// Replace every fenced code region in `text` with a placeholder token
    /// and store its rendered fragment.
    pub fn extract(&mut self, text: &str) -> String {
        let pass_one = FENCE_LONG.replace_all(text, |caps: &Captures| self.stash(caps));
        FENCE
            .replace_all(&pass_one, |caps: &Captures| self.stash(caps))
            .into_owned()
    }

    fn stash(&mut self, caps: &Captures) -> String {
        let lang = match &caps[1] {
            "" => "plaintext",
            tag => tag,
        };
        let body = escape_html(caps[2].trim());
        let token = format!("{PLACEHOLDER_PREFIX}{}___", self.fragments.len());
        self.fragments
            .push(format!(r#"<pre><code class="language-{lang}">{body}</code></pre>"#));
        token
    }

    /// Substitute every placeholder with its stored fragment.
    ///
    /// Must run after paragraph grouping, so placeholders are never wrapped
    /// in `<p>` tags.
    pub fn restore(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (index, fragment) in self.fragments.iter().enumerate() {
            let token = format!("{PLACEHOLDER_PREFIX}{index}___");
            result = result.replacen(&token, fragment, 1);
        }
        result
    }

    /// Number of extracted blocks.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// True when no fenced regions were found.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
