//! Full-page assembly.
//!
//! Pure composition of the pieces the other modules produced: head metadata
//! (SEO tags, social preview cards, structured data), the page header, an
//! optional hero banner, the content/sidebar layout, and the behavior
//! script. Layout forks once on sidebar presence: a two-column layout with
//! overlay and toggle controls, or a plain single-column `main`.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolation is auto-escaped; `PreEscaped` appears exactly where raw
//! HTML is the contract — pipeline output, the configured `titleHtml`, the
//! JSON-LD payload, and the embedded script.

use crate::config::{ArticleConfig, SiteConfig};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Sidebar open/close and scroll-spy wiring, embedded at compile time.
const SIDEBAR_JS: &str = include_str!("../static/sidebar.js");

const HIGHLIGHT_CSS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/atom-one-dark.min.css";
const HIGHLIGHT_JS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js";

const HIGHLIGHT_INIT_JS: &str = "\
document.addEventListener('DOMContentLoaded', function() {
    document.querySelectorAll('pre code').forEach(function(block) {
        hljs.highlightElement(block);
    });
});";

/// Assemble the complete HTML document for one article.
pub fn render(
    article: &ArticleConfig,
    site: &SiteConfig,
    content_html: &str,
    sidebar: Option<Markup>,
    schema: Markup,
) -> Markup {
    let full_title = format!("{} — {}", article.title, site.site_name);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (full_title) }
                meta name="description" content=(article.description);
                meta name="author" content=(site.author);
                meta name="robots" content="index, follow";
                link rel="canonical" href=(article.url);

                meta property="og:type" content="article";
                meta property="og:url" content=(article.url);
                meta property="og:title" content=(full_title);
                meta property="og:description" content=(article.description);
                @if let Some(banner) = &article.banner_image {
                    meta property="og:image" content={ (site.site_url) (banner) };
                }
                meta property="og:site_name" content=(site.site_name);

                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:title" content=(full_title);
                meta name="twitter:description" content=(article.description);
                @if let Some(banner) = &article.banner_image {
                    meta name="twitter:image" content={ (site.site_url) (banner) };
                }

                (schema)

                link rel="stylesheet" href=(HIGHLIGHT_CSS_URL);
                script src=(HIGHLIGHT_JS_URL) {}

                link rel="stylesheet" href="/css/global.css";
                link rel="stylesheet" href="/css/article.css";
            }
            body {
                header {
                    h1 {
                        @if let Some(title_html) = &article.title_html {
                            (PreEscaped(title_html.as_str()))
                        } @else {
                            (article.title)
                        }
                    }
                    @if let Some(subtitle) = &article.subtitle {
                        p .subtitle { (subtitle) }
                    }
                }

                @if let Some(banner) = &article.banner_image {
                    @let alt = article.banner_alt.as_deref().unwrap_or(&article.title);
                    div .hero-banner role="img" aria-label=(alt)
                        style={ "background-image: url('" (banner) "')" } {}
                }

                (layout(content_html, sidebar.as_ref()))

                script {
                    (PreEscaped(HIGHLIGHT_INIT_JS))
                    @if sidebar.is_some() {
                        "\n"
                        (PreEscaped(SIDEBAR_JS))
                    }
                }
            }
        }
    }
}

/// The main content section: two-column with controls when a sidebar
/// exists, single-column otherwise.
fn layout(content_html: &str, sidebar: Option<&Markup>) -> Markup {
    let article_body = html! {
        article .article-content {
            (PreEscaped(content_html))
        }
    };

    match sidebar {
        Some(sidebar) => html! {
            div .article-layout {
                (sidebar)
                main { (article_body) }
            }
            div .sidebar-overlay #sidebarOverlay {}
            button .sidebar-toggle #sidebarToggle { "Contents" }
        },
        None => html! {
            main { (article_body) }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maud::html;

    fn site() -> SiteConfig {
        SiteConfig {
            site_url: "https://example.com".into(),
            site_name: "Example".into(),
            author: "A. Writer".into(),
            output_dir: "dist".into(),
            categories: vec![],
            articles: vec![],
        }
    }

    fn article() -> ArticleConfig {
        ArticleConfig {
            id: "test".into(),
            published: true,
            md_source: "content/test.md".into(),
            html_output: "dist/test/index.html".into(),
            title: "Test Article".into(),
            title_html: None,
            subtitle: None,
            description: "A description.".into(),
            banner_image: None,
            banner_alt: None,
            url: "https://example.com/test/".into(),
            date_published: "2026-02-10".into(),
            category: None,
            tags: None,
            keywords: None,
            sidebar: None,
            parent: None,
            children: None,
            children_label: None,
            toc_level: None,
            toc_filter: None,
            faq_schema: None,
        }
    }

    fn empty_schema() -> Markup {
        html! {}
    }

    #[test]
    fn document_skeleton() {
        let doc = render(&article(), &site(), "<p>Hi</p>", None, empty_schema()).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Test Article — Example</title>"));
        assert!(doc.contains(r#"<link rel="canonical" href="https://example.com/test/">"#));
        assert!(doc.contains("<p>Hi</p>"));
    }

    #[test]
    fn single_column_without_sidebar() {
        let doc = render(&article(), &site(), "<p>Hi</p>", None, empty_schema()).into_string();
        assert!(!doc.contains("article-layout"));
        assert!(!doc.contains("sidebar-toggle"));
        assert!(doc.contains("<main>"));
    }

    #[test]
    fn two_column_layout_with_sidebar() {
        let sidebar = html! { aside .article-sidebar { "nav" } };
        let doc = render(&article(), &site(), "<p>Hi</p>", Some(sidebar), empty_schema())
            .into_string();
        assert!(doc.contains("article-layout"));
        assert!(doc.contains("sidebarOverlay"));
        assert!(doc.contains("sidebarToggle"));
    }

    #[test]
    fn behavior_script_only_with_sidebar() {
        let plain = render(&article(), &site(), "", None, empty_schema()).into_string();
        assert!(!plain.contains("IntersectionObserver"));
        // Syntax highlighting init is unconditional.
        assert!(plain.contains("hljs.highlightElement"));

        let sidebar = html! { aside {} };
        let with = render(&article(), &site(), "", Some(sidebar), empty_schema()).into_string();
        assert!(with.contains("IntersectionObserver"));
    }

    #[test]
    fn social_image_tags_only_with_banner() {
        let plain = render(&article(), &site(), "", None, empty_schema()).into_string();
        assert!(!plain.contains("og:image"));
        assert!(!plain.contains("twitter:image"));

        let mut a = article();
        a.banner_image = Some("/img/banner.png".into());
        let with = render(&a, &site(), "", None, empty_schema()).into_string();
        assert!(with.contains(r#"property="og:image" content="https://example.com/img/banner.png""#));
        assert!(with.contains("twitter:image"));
        assert!(with.contains("hero-banner"));
    }

    #[test]
    fn hero_banner_alt_falls_back_to_title() {
        let mut a = article();
        a.banner_image = Some("/img/banner.png".into());
        let doc = render(&a, &site(), "", None, empty_schema()).into_string();
        assert!(doc.contains(r#"aria-label="Test Article""#));

        a.banner_alt = Some("Custom alt".into());
        let doc = render(&a, &site(), "", None, empty_schema()).into_string();
        assert!(doc.contains(r#"aria-label="Custom alt""#));
    }

    #[test]
    fn title_html_is_raw_plain_title_is_escaped() {
        let mut a = article();
        a.title = "<Fancy> & Plain".into();
        let doc = render(&a, &site(), "", None, empty_schema()).into_string();
        assert!(doc.contains("&lt;Fancy&gt; &amp; Plain"));

        a.title_html = Some("Fancy<br>Title".into());
        let doc = render(&a, &site(), "", None, empty_schema()).into_string();
        assert!(doc.contains("<h1>Fancy<br>Title</h1>"));
    }

    #[test]
    fn subtitle_rendered_when_present() {
        let mut a = article();
        a.subtitle = Some("A closer look".into());
        let doc = render(&a, &site(), "", None, empty_schema()).into_string();
        assert!(doc.contains(r#"<p class="subtitle">A closer look</p>"#));
    }

    #[test]
    fn schema_markup_lands_in_head() {
        let schema = html! { script type="application/ld+json" { "{}" } };
        let doc = render(&article(), &site(), "", None, schema).into_string();
        let head_end = doc.find("</head>").unwrap();
        let schema_at = doc.find("application/ld+json").unwrap();
        assert!(schema_at < head_end);
    }

    #[test]
    fn content_html_is_not_escaped() {
        let doc = render(
            &article(),
            &site(),
            "<h2 id=\"x\">Sec</h2><pre><code>a &lt; b</code></pre>",
            None,
            empty_schema(),
        )
        .into_string();
        assert!(doc.contains("<h2 id=\"x\">Sec</h2>"));
        assert!(doc.contains("a &lt; b"));
    }
}
