//! CLI output formatting.
//!
//! Output is information-centric: the primary display for every article is
//! its identity (positional index plus title) with filesystem paths shown as
//! indented `Source:`/`Output:` context lines. This makes the output readable
//! as a content inventory while still letting users trace entries back to
//! specific files.
//!
//! ```text
//! Articles
//! 001 Getting Started
//!     Source: content/getting-started.md
//!     Output: dist/getting-started/index.html
//! 002 Work In Progress (draft)
//!     Source: content/wip.md
//!
//! 2 articles, 1 published
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::config::SiteConfig;
use crate::generate::BuildReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Human-readable byte count, one decimal above 1 KB.
fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

/// Format the article inventory for the `list` command.
pub fn format_list_output(site: &SiteConfig) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Articles".to_string());

    for (i, article) in site.articles.iter().enumerate() {
        let draft_marker = if article.published { "" } else { " (draft)" };
        lines.push(format!(
            "{} {}{}",
            format_index(i + 1),
            article.title,
            draft_marker
        ));
        lines.push(format!("    Source: {}", article.md_source));
        lines.push(format!("    Output: {}", article.html_output));
        if let Some(category) = &article.category {
            lines.push(format!("    Category: {}", category));
        }
    }

    let published = site.published().count();
    lines.push(String::new());
    lines.push(format!(
        "{} articles, {} published",
        site.articles.len(),
        published
    ));
    lines
}

/// Print list output to stdout.
pub fn print_list_output(site: &SiteConfig) {
    for line in format_list_output(site) {
        println!("{}", line);
    }
}

/// Format what a build would write, without writing anything.
pub fn format_dry_run_output(site: &SiteConfig) -> Vec<String> {
    let mut lines = Vec::new();
    let mut count = 0;

    for (i, article) in site.published().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            article.title,
            article.html_output
        ));
        count += 1;
    }

    lines.push(format!("Would build {} articles", count));
    lines
}

/// Print dry-run output to stdout.
pub fn print_dry_run_output(site: &SiteConfig) {
    for line in format_dry_run_output(site) {
        println!("{}", line);
    }
}

/// Format completed build reports.
pub fn format_build_output(reports: &[BuildReport]) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, report) in reports.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {} ({}, {} headings)",
            format_index(i + 1),
            report.id,
            report.output,
            format_size(report.bytes),
            report.headings
        ));
    }

    lines.push(format!("Built {} articles", reports.len()));
    lines
}

/// Print build output to stdout.
pub fn print_build_output(reports: &[BuildReport]) {
    for line in format_build_output(reports) {
        println!("{}", line);
    }
}
