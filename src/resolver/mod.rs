//! Metadata resolution core.
//!
//! `MetadataResolver` is the **single entry point** for deriving SEO-facing
//! fields from a page's front matter and the site configuration: display
//! title, description, canonical URL, content type, dates, and the
//! structured sub-resolvers (author, image, JSON-LD).
//!
//! # Architecture
//!
//! ```text
//! PageContext ──┐
//! SiteContext ──┼──► MetadataResolver ──► title / description / name / ...
//! Paginator   ──┘         │
//!                         ├──► AuthorResolver
//!                         ├──► ImageResolver
//!                         └──► JSON-LD projection
//! ```
//!
//! One resolver is constructed per page render and bound to its context
//! snapshot. Every field is a pure function of the inputs and is computed
//! at most once; repeated reads return the cached value, including cached
//! absence. Instances are deliberately single-threaded (`OnceCell`), since
//! they are never shared across renders.

mod description;
mod fields;
mod title;

use crate::author::AuthorResolver;
use crate::context::{PageContext, PaginatorContext, SiteContext};
use crate::error::ResolveError;
use crate::filters::Filters;
use crate::image::ImageResolver;
use regex::Regex;
use serde_json::Value;
use std::cell::OnceCell;
use std::sync::LazyLock;
use tracing::debug;

/// Separator between a detail title and the site title.
pub(crate) const TITLE_SEPARATOR: &str = " | ";

/// Placeholder for the current page number in pagination messages.
pub const CURRENT_PLACEHOLDER: &str = "%current";

/// Placeholder for the total page count in pagination messages.
pub const TOTAL_PLACEHOLDER: &str = "%total";

/// Default pagination message in generic-title mode, prepended.
const PAGED_PREFIX_MESSAGE: &str = "Page %current of %total for";

/// Default pagination message in custom-title mode, appended.
const PAGED_SUFFIX_MESSAGE: &str = "(page %current of %total)";

/// Site root or an "about" index, with or without an explicit index file.
static HOMEPAGE_OR_ABOUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(about/)?(index\.html?)?$").unwrap());

/// Raw-text marker suppressing title generation for a page.
static TITLE_FALSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)title=false").unwrap());

/// Where a pagination marker attaches to a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    Before,
    After,
}

/// Per-field memo store. Each cell distinguishes "not yet computed" from
/// "computed as absent".
#[derive(Default)]
struct MemoCache {
    site_title: OnceCell<Option<String>>,
    site_tagline: OnceCell<Option<String>>,
    site_description: OnceCell<Option<String>>,
    page_title: OnceCell<Option<String>>,
    pagination_title: OnceCell<Option<String>>,
    subtitle_title: OnceCell<Option<String>>,
    title: OnceCell<Option<String>>,
    page_number: OnceCell<Option<String>>,
    display_title: OnceCell<bool>,
    description: OnceCell<Option<String>>,
    max_words: OnceCell<usize>,
    seo_name: OnceCell<Option<String>>,
    name: OnceCell<Option<String>>,
    schema_type: OnceCell<String>,
    links: OnceCell<Option<Value>>,
    logo: OnceCell<Option<String>>,
    canonical_url: OnceCell<String>,
    date_modified: OnceCell<Option<String>>,
    date_published: OnceCell<Option<String>>,
    lang: OnceCell<String>,
    locale: OnceCell<String>,
    author: OnceCell<AuthorResolver>,
    image: OnceCell<Option<ImageResolver>>,
    json_ld: OnceCell<Value>,
}

/// Resolves SEO metadata for a single page render.
pub struct MetadataResolver<'a> {
    page: &'a PageContext,
    site: &'a SiteContext,
    paginator: Option<PaginatorContext>,
    tag_text: &'a str,
    filters: Filters,
    cache: MemoCache,
}

impl<'a> MetadataResolver<'a> {
    /// Bind a resolver to one page's context snapshot.
    ///
    /// `tag_text` is the raw argument text of the invoking template tag;
    /// it only matters for the `title=false` suppression marker and may be
    /// empty.
    ///
    /// # Errors
    /// A site-supplied `seo_paginator_message` missing the `%current` or
    /// `%total` placeholder is a configuration error.
    pub fn new(
        page: &'a PageContext,
        site: &'a SiteContext,
        paginator: Option<PaginatorContext>,
        tag_text: &'a str,
        filters: Filters,
    ) -> Result<Self, ResolveError> {
        if let Some(template) = site.paginator_message() {
            let missing = [CURRENT_PLACEHOLDER, TOTAL_PLACEHOLDER]
                .into_iter()
                .find(|placeholder| !template.contains(placeholder));
            if let Some(placeholder) = missing {
                return Err(ResolveError::PaginatorMessage {
                    template,
                    placeholder,
                });
            }
        }

        debug!(
            custom_title = site.custom_title(),
            paged = paginator.is_some(),
            "metadata resolver created"
        );

        Ok(Self {
            page,
            site,
            paginator,
            tag_text,
            filters,
            cache: MemoCache::default(),
        })
    }

    /// Should a `<title>` tag be generated for this page?
    ///
    /// False when no title resolves, or when the page opted out via a
    /// `title=false` marker in the tag text.
    pub fn display_title(&self) -> bool {
        self.title().is_some()
            && *self
                .cache
                .display_title
                .get_or_init(|| !TITLE_FALSE.is_match(self.tag_text))
    }

    /// The page author sub-resolver.
    pub fn author(&self) -> &AuthorResolver {
        self.cache
            .author
            .get_or_init(|| AuthorResolver::new(self.page, self.site))
    }

    /// The page image sub-resolver; absent when no image path resolves.
    pub fn image(&self) -> Option<&ImageResolver> {
        self.cache
            .image
            .get_or_init(|| ImageResolver::resolve(self.page, self.filters.urls.as_ref()))
            .as_ref()
    }

    /// The JSON-LD structured-data projection over the resolved fields.
    pub fn json_ld(&self) -> &Value {
        self.cache
            .json_ld
            .get_or_init(|| crate::json_ld::build(self))
    }

    pub(crate) fn custom_title_mode(&self) -> bool {
        self.site.custom_title()
    }

    pub(crate) fn homepage_or_about(&self) -> bool {
        self.page
            .url()
            .is_some_and(|url| HOMEPAGE_OR_ABOUT.is_match(&url))
    }

    /// Run a raw value through the full display-text pipeline, collapsing
    /// empty results to absence.
    pub(crate) fn format_scalar(&self, value: Option<String>) -> Option<String> {
        let value = value?;
        let text = self.filters.text.as_ref();
        let formatted =
            text.escape_once(&text.normalize_whitespace(&text.strip_html(&text.markdownify(&value))));
        (!formatted.is_empty()).then_some(formatted)
    }

    /// The rendered pagination marker, active only past page 1.
    fn page_number(&self) -> Option<String> {
        self.cache
            .page_number
            .get_or_init(|| {
                let current = self.paginator?.page?;
                if current <= 1 {
                    return None;
                }
                let template = self.site.paginator_message().unwrap_or_else(|| {
                    let default = if self.custom_title_mode() {
                        PAGED_SUFFIX_MESSAGE
                    } else {
                        PAGED_PREFIX_MESSAGE
                    };
                    default.to_owned()
                });
                let total = self
                    .paginator
                    .and_then(|p| p.total_pages)
                    .map(|t| t.to_string())
                    .unwrap_or_default();
                Some(
                    template
                        .replace(CURRENT_PLACEHOLDER, &current.to_string())
                        .replace(TOTAL_PLACEHOLDER, &total),
                )
            })
            .clone()
    }

    /// Attach the pagination marker to a title with a single separating
    /// space; without an active marker the title passes through unchanged.
    pub(crate) fn add_page_number(
        &self,
        placement: Placement,
        title: Option<&str>,
    ) -> Option<String> {
        let Some(number) = self.page_number() else {
            return title.map(str::to_owned);
        };
        let title = title.unwrap_or_default();
        Some(match placement {
            Placement::Before => format!("{number} {title}"),
            Placement::After => format!("{title} {number}"),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
pub(crate) mod testutil {
    use super::*;
    use serde_json::Value;

    /// Build a resolver over leaked contexts (test-only, mirrors the
    /// `'static` binding a long-lived host would provide).
    pub fn resolver(page: Value, site: Value) -> MetadataResolver<'static> {
        resolver_with(page, site, None, "")
    }

    pub fn resolver_paged(
        page: Value,
        site: Value,
        paginator: PaginatorContext,
    ) -> MetadataResolver<'static> {
        resolver_with(page, site, Some(paginator), "")
    }

    pub fn resolver_with(
        page: Value,
        site: Value,
        paginator: Option<PaginatorContext>,
        tag_text: &'static str,
    ) -> MetadataResolver<'static> {
        let page: &'static PageContext = Box::leak(Box::new(PageContext::from_value(page)));
        let site: &'static SiteContext = Box::leak(Box::new(SiteContext::from_value(site)));
        MetadataResolver::new(
            page,
            site,
            paginator,
            tag_text,
            Filters::standard("https://example.com"),
        )
        .unwrap()
    }
}
