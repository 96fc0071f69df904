//! Sidebar navigation fragment.
//!
//! Built from the heading sequence the pipeline collected plus the article's
//! link configuration. Three stacked sections, each optional: a back-link to
//! the parent page, the TOC, and a children list (flat or grouped). An
//! article that did not request a sidebar gets nothing.
//!
//! The TOC depth defaults shallow: an explicit `tocLevel` wins, otherwise
//! articles with a parent show two levels and root articles only one —
//! hub pages want a terse outline, leaf pages a fuller one.

use crate::config::{ArticleConfig, ChildLink};
use crate::markdown::Heading;
use maud::{Markup, html};
use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SidebarError {
    /// The configured `tocFilter` is not a valid regex. This is the one
    /// configured value that can fault; everything else degrades silently.
    #[error("invalid tocFilter pattern: {0}")]
    TocFilter(#[from] regex::Error),
}

/// Render the sidebar fragment, or `None` when the article didn't ask for
/// one.
pub fn render(
    article: &ArticleConfig,
    headings: &[Heading],
) -> Result<Option<Markup>, SidebarError> {
    if !article.has_sidebar() {
        return Ok(None);
    }

    let toc = toc_entries(article, headings)?;
    let children = article.children.as_deref().unwrap_or(&[]);
    let current_path = article.page_path();

    let markup = html! {
        aside .article-sidebar #articleSidebar {
            div .sidebar-inner {
                @if let Some(parent) = &article.parent {
                    a .sidebar-back href=(parent.url) { (parent.title) }
                }
                @if !toc.is_empty() {
                    div .sidebar-label { "CONTENTS" }
                    ul .sidebar-toc {
                        @for heading in &toc {
                            @let class = if heading.level == 1 { "toc-h1" } else { "toc-h2" };
                            li {
                                a href={ "#" (heading.id) } class=(class) {
                                    (heading.text)
                                }
                            }
                        }
                    }
                }
                @if !children.is_empty() {
                    @if children.iter().any(|c| c.group.is_some()) {
                        (grouped_children(children, &current_path))
                    } @else {
                        (flat_children(article, children, &current_path))
                    }
                }
            }
        }
    };
    Ok(Some(markup))
}

/// Filter the heading sequence down to what the TOC shows.
fn toc_entries(
    article: &ArticleConfig,
    headings: &[Heading],
) -> Result<Vec<Heading>, SidebarError> {
    let max_level = article
        .toc_level
        .unwrap_or(if article.parent.is_some() { 2 } else { 1 });

    let filter = match &article.toc_filter {
        Some(pattern) => Some(Regex::new(pattern)?),
        None => None,
    };

    Ok(headings
        .iter()
        .filter(|h| h.level <= max_level)
        .filter(|h| filter.as_ref().is_none_or(|re| re.is_match(&h.text)))
        .cloned()
        .collect())
}

/// Children list with labeled sub-lists. A `group` label on an entry opens a
/// new sub-list containing it and the following unlabeled entries.
fn grouped_children(children: &[ChildLink], current_path: &str) -> Markup {
    let mut sections: Vec<(Option<&str>, Vec<&ChildLink>)> = Vec::new();
    for child in children {
        match &child.group {
            Some(label) => sections.push((Some(label), vec![child])),
            None => match sections.last_mut() {
                Some((_, entries)) => entries.push(child),
                None => sections.push((None, vec![child])),
            },
        }
    }

    html! {
        @for (label, entries) in &sections {
            @if let Some(label) = label {
                div .sidebar-label { (label) }
            }
            ul .sidebar-links {
                @for child in entries {
                    (child_item(child, current_path))
                }
            }
        }
    }
}

/// Flat children list under a single label.
fn flat_children(article: &ArticleConfig, children: &[ChildLink], current_path: &str) -> Markup {
    let default_label = if article.parent.is_some() {
        "RELATED"
    } else {
        "DEEP DIVES"
    };
    let label = article.children_label.as_deref().unwrap_or(default_label);

    html! {
        div .sidebar-label { (label) }
        ul .sidebar-links {
            @for child in children {
                (child_item(child, current_path))
            }
        }
    }
}

fn child_item(child: &ChildLink, current_path: &str) -> Markup {
    let is_current = child.url == current_path;
    html! {
        li {
            a href=(child.url) class=[is_current.then_some("sidebar-current")] {
                (child.title)
            }
        }
    }
}
