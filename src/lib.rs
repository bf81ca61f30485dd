//! SEO metadata resolution for static site pages.
//!
//! Given a page's front-matter attributes and the site's global
//! configuration, [`MetadataResolver`] derives a consistent set of
//! SEO-facing fields - display title, description, canonical URL, content
//! type, publication and modification dates, and pagination-aware title
//! variants - using layered fallback precedence. Every field is computed
//! at most once and cached for the lifetime of the resolver; one resolver
//! is constructed per page render.
//!
//! The resolver produces resolved *values*, not markup. String transforms,
//! date rendering and URL joining are injected through the [`filters`]
//! traits, so a templating host with its own filter pipeline can supply
//! them; [`Filters::standard`] covers hosts that have none.
//!
//! # Example
//!
//! ```
//! use seo_meta::{Filters, MetadataResolver, PageContext, SiteContext};
//! use serde_json::json;
//!
//! let page = PageContext::from_value(json!({
//!     "title": "Hello",
//!     "url": "/posts/hello/index.html",
//!     "date": "2024-01-15",
//! }));
//! let site = SiteContext::from_value(json!({ "title": "My Site" }));
//!
//! let resolver = MetadataResolver::new(
//!     &page,
//!     &site,
//!     None,
//!     "",
//!     Filters::standard("https://example.com"),
//! )?;
//!
//! assert_eq!(resolver.title(), Some("Hello | My Site"));
//! assert_eq!(resolver.canonical_url(), "https://example.com/posts/hello/");
//! assert_eq!(resolver.schema_type(), "BlogPosting");
//! # Ok::<(), seo_meta::ResolveError>(())
//! ```

pub mod author;
pub mod context;
pub mod error;
pub mod filters;
pub mod image;
mod json_ld;
pub mod resolver;

pub use author::AuthorResolver;
pub use context::{PageContext, PaginatorContext, SiteContext, SubMap};
pub use error::ResolveError;
pub use filters::{DateFormatter, Filters, TextFormatter, UrlResolver};
pub use image::ImageResolver;
pub use resolver::MetadataResolver;
