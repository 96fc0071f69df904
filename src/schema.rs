//! Schema.org structured data.
//!
//! Every article gets an `Article` JSON-LD block; articles with configured
//! FAQ entries get a second `FAQPage` block after it. Both are embedded as
//! `<script type="application/ld+json">` elements in the page head, Article
//! first.

use crate::config::{ArticleConfig, SiteConfig};
use maud::{Markup, PreEscaped, html};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value, json};

/// Build the Article JSON-LD object.
fn article_schema(article: &ArticleConfig, site: &SiteConfig) -> Value {
    // The parent page, when configured, anchors the article; otherwise the
    // site itself does.
    let is_part_of = match &article.parent {
        Some(parent) => json!({
            "@type": "Article",
            "url": format!("{}{}", site.site_url, parent.url),
        }),
        None => json!({
            "@type": "WebSite",
            "name": site.site_name,
            "url": site.site_url,
        }),
    };

    json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": article.title,
        "description": article.description,
        "url": article.url,
        "datePublished": article.date_published,
        "dateModified": article.date_published,
        "author": { "@type": "Person", "name": site.author, "url": site.site_url },
        "publisher": { "@type": "Person", "name": site.author },
        "keywords": article.keywords.clone().unwrap_or_default(),
        "isPartOf": is_part_of,
    })
}

/// Build the FAQPage JSON-LD object, if FAQ entries are configured.
fn faq_schema(article: &ArticleConfig) -> Option<Value> {
    let entries = article.faq_schema.as_ref()?;
    if entries.is_empty() {
        return None;
    }
    let questions: Vec<Value> = entries
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": { "@type": "Answer", "text": faq.answer },
            })
        })
        .collect();
    Some(json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    }))
}

/// Serialize with 4-space indentation, matching the published pages.
fn to_pretty(value: &Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Render the structured-data blocks for the page head.
pub fn render(article: &ArticleConfig, site: &SiteConfig) -> Result<Markup, serde_json::Error> {
    let article_json = to_pretty(&article_schema(article, site))?;
    let faq_json = match faq_schema(article) {
        Some(value) => Some(to_pretty(&value)?),
        None => None,
    };

    Ok(html! {
        script type="application/ld+json" { (PreEscaped(article_json)) }
        @if let Some(faq) = faq_json {
            script type="application/ld+json" { (PreEscaped(faq)) }
        }
    })
}
