//! Article building.
//!
//! The driver around the conversion core: read the markdown source, strip
//! the leading title (the page header shows it instead), run the pipeline,
//! assemble sidebar/schema/page, and write the result to the article's
//! configured output path.
//!
//! Each article build is independent and side-effect-free apart from its own
//! output file, so batch builds fan out across articles with rayon. The pass
//! sequence inside one document stays strictly sequential — each pass
//! consumes the text state the previous one produced.

use crate::config::{ArticleConfig, SiteConfig};
use crate::sidebar::SidebarError;
use crate::{markdown, page, schema, sidebar};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Sidebar(#[from] SidebarError),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("article not found: {0}")]
    UnknownArticle(String),
}

/// What one article build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub id: String,
    pub output: String,
    /// Size of the written HTML document in bytes.
    pub bytes: usize,
    /// Number of headings collected for the TOC.
    pub headings: usize,
}

/// Build a single article and write its HTML output.
pub fn build_article(article: &ArticleConfig, site: &SiteConfig) -> Result<BuildReport, BuildError> {
    let raw = fs::read_to_string(&article.md_source)?;
    // The core requires newline-only separators; normalize here.
    let markdown_source = raw.replace("\r\n", "\n").replace('\r', "\n");

    let body = markdown::strip_leading_title(&markdown_source);
    let rendered = markdown::convert(body.trim());

    let sidebar = sidebar::render(article, &rendered.headings)?;
    let schema = schema::render(article, site)?;
    let document = page::render(article, site, &rendered.html, sidebar, schema).into_string();

    let output_path = Path::new(&article.html_output);
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, &document)?;

    Ok(BuildReport {
        id: article.id.clone(),
        output: article.html_output.clone(),
        bytes: document.len(),
        headings: rendered.headings.len(),
    })
}

/// Build every published article, in parallel across articles.
pub fn build_published(site: &SiteConfig) -> Result<Vec<BuildReport>, BuildError> {
    site.published()
        .collect::<Vec<_>>()
        .par_iter()
        .map(|article| build_article(article, site))
        .collect()
}

/// Build one article by id, published or not.
pub fn build_by_id(site: &SiteConfig, id: &str) -> Result<BuildReport, BuildError> {
    let article = site
        .article(id)
        .ok_or_else(|| BuildError::UnknownArticle(id.to_string()))?;
    build_article(article, site)
}
