//! Article configuration module.
//!
//! One JSON file (`content.config.json`) is the single source of truth for
//! the whole site: site-wide metadata plus an ordered list of articles. The
//! file is authored by hand, so loading is strict — required fields must be
//! present (absence is a config error, not a default) and validation catches
//! the cross-field mistakes serde cannot see, like duplicate article ids.
//!
//! ## Config File Shape
//!
//! ```json
//! {
//!   "siteUrl": "https://example.com",
//!   "siteName": "Example",
//!   "author": "A. Writer",
//!   "outputDir": "dist",
//!   "categories": ["guides"],
//!   "articles": [
//!     {
//!       "id": "getting-started",
//!       "published": true,
//!       "mdSource": "content/getting-started.md",
//!       "htmlOutput": "dist/getting-started/index.html",
//!       "title": "Getting Started",
//!       "description": "First steps.",
//!       "url": "https://example.com/getting-started/",
//!       "datePublished": "2026-01-15",
//!       "sidebar": true,
//!       "tocLevel": 2,
//!       "parent": { "title": "Guides", "url": "/guides/" },
//!       "children": [
//!         { "title": "Setup", "url": "/getting-started/setup/", "group": "BASICS" }
//!       ],
//!       "faqSchema": [
//!         { "question": "Why?", "answer": "Because." }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Everything not listed as required above is optional; the only defaulting
//! logic lives at the use sites (TOC depth in the sidebar, fence language in
//! the code pass).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site-wide configuration: the root of `content.config.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute site origin, prepended to site-relative asset URLs.
    pub site_url: String,
    /// Display name, appended to page titles.
    pub site_name: String,
    /// Author for meta tags and structured data.
    pub author: String,
    /// Root output directory (informational; each article carries its own
    /// output path).
    pub output_dir: String,
    /// Allowed category names. Articles may only reference these.
    pub categories: Vec<String>,
    /// All articles, published or not, in config order.
    pub articles: Vec<ArticleConfig>,
}

/// One article's metadata and build instructions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ArticleConfig {
    pub id: String,
    /// Unpublished articles are skipped by batch builds.
    pub published: bool,
    /// Path to the markdown source file.
    pub md_source: String,
    /// Path the rendered HTML is written to.
    pub html_output: String,
    pub title: String,
    /// Raw HTML title for the page header, when the plain title is not
    /// enough (e.g. a `<br>` or accent span). Escaping is the author's job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_alt: Option<String>,
    /// Canonical URL of the published page.
    pub url: String,
    /// ISO date, used for both created and modified timestamps.
    pub date_published: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Request the TOC sidebar for this article.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ChildLink>>,
    /// Label over the flat children list. Defaults at the use site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_label: Option<String>,
    /// Deepest heading level included in the TOC (explicit override).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toc_level: Option<u8>,
    /// Regex filter on heading text for TOC inclusion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toc_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq_schema: Option<Vec<FaqEntry>>,
}

impl ArticleConfig {
    /// Whether this article requested the sidebar.
    pub fn has_sidebar(&self) -> bool {
        self.sidebar == Some(true)
    }

    /// Site-relative path of the rendered page: the output path with a
    /// trailing `index.html` stripped. Used to mark the current entry in
    /// sidebar children lists.
    pub fn page_path(&self) -> String {
        let stripped = self
            .html_output
            .strip_suffix("index.html")
            .unwrap_or(&self.html_output);
        format!("/{stripped}")
    }
}

/// Back-link to the article's parent page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ParentLink {
    pub title: String,
    pub url: String,
}

/// One entry in the sidebar children list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChildLink {
    pub title: String,
    pub url: String,
    /// Opens a labeled sub-list containing this and following entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// A question/answer pair for the FAQPage structured-data block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl SiteConfig {
    /// Articles flagged for publication, in config order.
    pub fn published(&self) -> impl Iterator<Item = &ArticleConfig> {
        self.articles.iter().filter(|a| a.published)
    }

    /// Look an article up by id, published or not.
    pub fn article(&self, id: &str) -> Option<&ArticleConfig> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// Cross-field checks serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for article in &self.articles {
            if !seen.insert(article.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate article id: {}",
                    article.id
                )));
            }
            if let Some(category) = &article.category {
                if !self.categories.contains(category) {
                    return Err(ConfigError::Validation(format!(
                        "article {} references unknown category: {category}",
                        article.id
                    )));
                }
            }
            if article.toc_level == Some(0) {
                return Err(ConfigError::Validation(format!(
                    "article {}: tocLevel must be at least 1",
                    article.id
                )));
            }
        }
        Ok(())
    }
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: SiteConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
