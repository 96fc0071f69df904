//! # mdpress
//!
//! A static article builder for content sites. A single JSON config file is
//! the data source: it declares every article (markdown source, output path,
//! SEO metadata, sidebar links), and each build converts the markdown to a
//! complete standalone HTML document.
//!
//! # Architecture: Per-Article Assembly
//!
//! Every article flows through the same four steps:
//!
//! ```text
//! 1. Convert    article.md   →  content HTML + heading list
//! 2. Sidebar    headings + config  →  navigation fragment (optional)
//! 3. Schema     config       →  JSON-LD structured data
//! 4. Page       all of the above  →  full HTML document
//! ```
//!
//! Articles are independent of each other, so batch builds run them in
//! parallel with rayon. Inside one article the conversion is a fixed
//! sequence of text passes over the whole document; the order is part of
//! the format's semantics and is documented in [`markdown`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Site config loading and validation from `content.config.json` |
//! | [`markdown`] | The conversion pipeline: markdown text to content HTML plus collected headings |
//! | [`sidebar`] | TOC and navigation-links fragment built from headings and config |
//! | [`schema`] | Schema.org Article and FAQPage JSON-LD blocks |
//! | [`page`] | Full-document assembly: head metadata, header, banner, layout, scripts |
//! | [`generate`] | The build driver: read, convert, assemble, write |
//! | [`output`] | CLI output formatting for list, dry-run, and build reports |
//!
//! # Design Decisions
//!
//! ## Hand-Built Pipeline Over a Markdown Library
//!
//! The conversion is a sequence of regex passes over the document rather
//! than a CommonMark parser. The supported dialect is deliberately small
//! and the pass sequence doubles as the heading side channel the sidebar
//! needs. A full parser would handle constructs this content never uses
//! while making the heading collection point less obvious.
//!
//! ## Maud Over Template Engines
//!
//! Page assembly uses [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system, rather than Handlebars or Tera:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped; raw HTML
//!   passes through `PreEscaped` at exactly the seams where raw HTML is the
//!   contract.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Config As the Single Source of Truth
//!
//! The markdown files carry only content. Everything else — titles,
//! descriptions, URLs, publish state, sidebar structure, FAQ data — lives
//! in the config file, so the whole site inventory is one reviewable JSON
//! document and a missing metadata field is a load error rather than a
//! silently degraded page.

pub mod config;
pub mod generate;
pub mod markdown;
pub mod output;
pub mod page;
pub mod schema;
pub mod sidebar;
