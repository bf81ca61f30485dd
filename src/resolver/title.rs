//! Title resolution chains.
//!
//! Two composition modes exist. Generic mode joins the page title and site
//! title; custom-title mode (site-wide toggle) prefers an explicit
//! `title_meta`, then pagination and subtitle variants, before falling back
//! to the page title. Precedence order here is a semantic contract, not
//! incidental structure.

use super::{MetadataResolver, Placement, TITLE_SEPARATOR};
use tracing::trace;

impl MetadataResolver<'_> {
    /// Formatted site title, from `site.title` or `site.name`.
    pub fn site_title(&self) -> Option<&str> {
        self.cache
            .site_title
            .get_or_init(|| self.format_scalar(self.site.title().or_else(|| self.site.name())))
            .as_deref()
    }

    /// Formatted site tagline.
    pub fn site_tagline(&self) -> Option<&str> {
        self.cache
            .site_tagline
            .get_or_init(|| self.format_scalar(self.site.tagline()))
            .as_deref()
    }

    /// Formatted site description.
    pub fn site_description(&self) -> Option<&str> {
        self.cache
            .site_description
            .get_or_init(|| self.format_scalar(self.site.description()))
            .as_deref()
    }

    /// Page title without the site title appended; falls back to the site
    /// title when the page has none.
    pub fn page_title(&self) -> Option<&str> {
        self.cache
            .page_title
            .get_or_init(|| {
                self.format_scalar(self.page.title())
                    .or_else(|| self.site_title().map(str::to_owned))
            })
            .as_deref()
    }

    /// Fully composed display title for the page.
    pub fn title(&self) -> Option<&str> {
        self.cache
            .title
            .get_or_init(|| {
                let title = if self.custom_title_mode() {
                    self.custom_title()
                } else {
                    let generic = self.generic_title();
                    self.add_page_number(Placement::Before, generic.as_deref())
                };
                trace!(?title, "resolved title");
                title
            })
            .as_deref()
    }

    fn tagline_or_description(&self) -> Option<&str> {
        self.site_tagline().or_else(|| self.site_description())
    }

    fn generic_title(&self) -> Option<String> {
        match (self.site_title(), self.page_title()) {
            (Some(site), Some(page)) if page != site => {
                Some(format!("{page}{TITLE_SEPARATOR}{site}"))
            }
            (Some(site), _) if self.site_description().is_some() => Some(format!(
                "{site}{TITLE_SEPARATOR}{}",
                self.tagline_or_description().unwrap_or_default()
            )),
            _ => self
                .page_title()
                .or_else(|| self.site_title())
                .map(str::to_owned),
        }
    }

    fn custom_title(&self) -> Option<String> {
        let Some(site_title) = self.site_title() else {
            // No site title to separate against: bare page title plus the
            // pagination suffix.
            return self.add_page_number(Placement::After, self.page_title());
        };
        self.detailed_title(site_title)
            .or_else(|| self.add_page_number(Placement::After, Some(site_title)))
    }

    /// `"{detail} | {site_title}"` for the first detail that resolves.
    fn detailed_title(&self, site_title: &str) -> Option<String> {
        let detail = self
            .format_scalar(self.page.title_meta())
            .or_else(|| {
                let paged = self.pagination_title()?;
                self.add_page_number(Placement::After, Some(paged))
            })
            .or_else(|| {
                let subtitled = self.subtitle_title()?;
                self.add_page_number(Placement::After, Some(subtitled))
            })
            .or_else(|| {
                let page = self.page_title()?;
                if page == site_title {
                    return None;
                }
                self.add_page_number(Placement::After, Some(page))
            })
            .or_else(|| {
                self.site_description()?;
                self.add_page_number(Placement::After, self.tagline_or_description())
            })?;
        Some(format!("{detail}{TITLE_SEPARATOR}{site_title}"))
    }

    /// Listing title for paginated collections, prefixed with "Blog – "
    /// unless it already names the blog or lacks a collection.
    pub(crate) fn pagination_title(&self) -> Option<&str> {
        self.cache
            .pagination_title
            .get_or_init(|| {
                if !self.page.has_pagination() {
                    return None;
                }
                let pagination = self.page.pagination();
                let title = self.format_scalar(pagination.scalar("title"));
                let collection = self.format_scalar(pagination.scalar("collection"));
                if title.as_deref() == Some("Blog") || collection.is_none() {
                    title
                } else {
                    Some(format!("Blog – {}", title.unwrap_or_default()))
                }
            })
            .as_deref()
    }

    /// `"{title} – {subtitle}"` when the page carries both.
    pub(crate) fn subtitle_title(&self) -> Option<&str> {
        self.cache
            .subtitle_title
            .get_or_init(|| {
                let title = self.page.title()?;
                let subtitle = self.page.subtitle()?;
                self.format_scalar(Some(format!("{title} – {subtitle}")))
            })
            .as_deref()
    }
}

// ============================================================================
// Tests
// ============================================================================
