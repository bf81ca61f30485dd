//! Scalar and structured field lookups: name, type, links, logo,
//! canonical URL, dates, and locale.

use super::MetadataResolver;
use crate::filters::url::percent_escape;
use serde_json::Value;

const DEFAULT_LANG: &str = "en_US";

impl MetadataResolver<'_> {
    /// Explicit per-page SEO name override, formatted.
    fn seo_name(&self) -> Option<&str> {
        self.cache
            .seo_name
            .get_or_init(|| {
                if !self.page.seo().truthy("name") {
                    return None;
                }
                self.format_scalar(self.page.seo().scalar("name"))
            })
            .as_deref()
    }

    /// Entity name for structured data. Only homepage and about pages fall
    /// back to the site's social name or title.
    pub fn name(&self) -> Option<&str> {
        self.cache
            .name
            .get_or_init(|| {
                if let Some(name) = self.seo_name() {
                    return Some(name.to_owned());
                }
                if !self.homepage_or_about() {
                    return None;
                }
                if self.site.social().truthy("name") {
                    self.format_scalar(self.site.social().scalar("name"))
                } else {
                    self.site_title().map(str::to_owned)
                }
            })
            .as_deref()
    }

    /// schema.org type: per-page override, else derived from the page kind.
    pub fn schema_type(&self) -> &str {
        self.cache.schema_type.get_or_init(|| {
            if let Some(explicit) = self.page.seo().scalar("type") {
                explicit
            } else if self.homepage_or_about() {
                "WebSite".to_owned()
            } else if self.page.date().is_some() {
                "BlogPosting".to_owned()
            } else {
                "WebPage".to_owned()
            }
        })
    }

    /// `sameAs` profile links; site-level social links apply only to the
    /// homepage and about pages.
    pub fn links(&self) -> Option<&Value> {
        self.cache
            .links
            .get_or_init(|| {
                if self.page.seo().truthy("links") {
                    return self.page.seo().raw("links").cloned();
                }
                if self.homepage_or_about() && self.site.social().truthy("links") {
                    return self.site.social().raw("links").cloned();
                }
                None
            })
            .as_ref()
    }

    /// Site logo as an absolute, percent-escaped URL.
    pub fn logo(&self) -> Option<&str> {
        self.cache
            .logo
            .get_or_init(|| {
                let logo = self.site.logo()?;
                let url = if self.filters.urls.is_absolute_url(&logo) {
                    logo
                } else {
                    self.filters.urls.absolute_url(&logo)
                };
                Some(percent_escape(&url))
            })
            .as_deref()
    }

    /// Canonical URL: the explicit non-empty `canonical_url`, else the
    /// page URL made absolute with any trailing `/index.html` collapsed
    /// to `/`.
    pub fn canonical_url(&self) -> &str {
        self.cache.canonical_url.get_or_init(|| {
            if let Some(canonical) = self.page.canonical_url().filter(|c| !c.is_empty()) {
                return canonical;
            }
            let url = self
                .filters
                .urls
                .absolute_url(&self.page.url().unwrap_or_default());
            match url.strip_suffix("/index.html") {
                Some(stem) => format!("{stem}/"),
                None => url,
            }
        })
    }

    /// Modification timestamp: per-page SEO override, else
    /// `last_modified_at`, else the publication date.
    pub fn date_modified(&self) -> Option<&str> {
        self.cache
            .date_modified
            .get_or_init(|| {
                let date = self
                    .page
                    .seo()
                    .scalar("date_modified")
                    .or_else(|| self.page.last_modified_at())
                    .or_else(|| self.page.date())?;
                self.filters.dates.to_xml_schema(&date)
            })
            .as_deref()
    }

    /// Publication timestamp from `page.date`.
    pub fn date_published(&self) -> Option<&str> {
        self.cache
            .date_published
            .get_or_init(|| self.filters.dates.to_xml_schema(&self.page.date()?))
            .as_deref()
    }

    /// Page language, `en_US` when neither page nor site declares one.
    pub fn lang(&self) -> &str {
        self.cache.lang.get_or_init(|| {
            self.page
                .lang()
                .or_else(|| self.site.lang())
                .unwrap_or_else(|| DEFAULT_LANG.to_owned())
        })
    }

    /// Locale with hyphens normalized to underscores; falls back to
    /// [`Self::lang`].
    pub fn locale(&self) -> &str {
        self.cache.locale.get_or_init(|| {
            self.page
                .locale()
                .or_else(|| self.site.locale())
                .unwrap_or_else(|| self.lang().to_owned())
                .replace('-', "_")
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::resolver::testutil::resolver;
    use serde_json::json;

    #[test]
    fn test_name_from_page_seo() {
        let resolver = resolver(
            json!({ "url": "/posts/a/", "seo": { "name": "Widgets Inc" } }),
            json!({}),
        );
        assert_eq!(resolver.name(), Some("Widgets Inc"));
    }

    #[test]
    fn test_name_social_on_about_page() {
        let resolver = resolver(
            json!({ "url": "/about/index.html" }),
            json!({ "title": "My Site", "social": { "name": "Widgets Inc" } }),
        );
        assert_eq!(resolver.name(), Some("Widgets Inc"));
    }

    #[test]
    fn test_name_site_title_on_homepage() {
        let resolver = resolver(json!({ "url": "/" }), json!({ "title": "My Site" }));
        assert_eq!(resolver.name(), Some("My Site"));
    }

    #[test]
    fn test_name_absent_off_homepage() {
        let resolver = resolver(
            json!({ "url": "/posts/a/" }),
            json!({ "title": "My Site", "social": { "name": "Widgets Inc" } }),
        );
        assert_eq!(resolver.name(), None);
    }

    #[test]
    fn test_type_explicit_override() {
        let resolver = resolver(json!({ "seo": { "type": "Organization" } }), json!({}));
        assert_eq!(resolver.schema_type(), "Organization");
    }

    #[test]
    fn test_type_website_on_homepage() {
        let resolver = resolver(json!({ "url": "/" }), json!({}));
        assert_eq!(resolver.schema_type(), "WebSite");
    }

    #[test]
    fn test_type_blog_posting_with_date() {
        let resolver = resolver(
            json!({ "url": "/posts/a/", "date": "2024-01-01" }),
            json!({}),
        );
        assert_eq!(resolver.schema_type(), "BlogPosting");
    }

    #[test]
    fn test_type_webpage_fallback() {
        let resolver = resolver(json!({ "url": "/posts/a/" }), json!({}));
        assert_eq!(resolver.schema_type(), "WebPage");
    }

    #[test]
    fn test_links_from_page_seo() {
        let resolver = resolver(
            json!({ "seo": { "links": ["https://example.com/me"] } }),
            json!({}),
        );
        assert_eq!(resolver.links(), Some(&json!(["https://example.com/me"])));
    }

    #[test]
    fn test_links_social_on_homepage_only() {
        let site = json!({ "social": { "links": ["https://twitter.com/me"] } });
        let on_home = resolver(json!({ "url": "/" }), site.clone());
        assert_eq!(
            on_home.links(),
            Some(&json!(["https://twitter.com/me"]))
        );

        let off_home = resolver(json!({ "url": "/posts/a/" }), site);
        assert_eq!(off_home.links(), None);
    }

    #[test]
    fn test_logo_relative_resolved_and_escaped() {
        let resolver = resolver(json!({}), json!({ "logo": "/img/site logo.png" }));
        assert_eq!(
            resolver.logo(),
            Some("https://example.com/img/site%20logo.png")
        );
    }

    #[test]
    fn test_logo_absolute_left_in_place() {
        let resolver = resolver(json!({}), json!({ "logo": "https://cdn.example.com/logo.png" }));
        assert_eq!(resolver.logo(), Some("https://cdn.example.com/logo.png"));
    }

    #[test]
    fn test_logo_absent() {
        let resolver = resolver(json!({}), json!({}));
        assert_eq!(resolver.logo(), None);
    }

    #[test]
    fn test_canonical_explicit() {
        let resolver = resolver(
            json!({ "canonical_url": "https://canonical.example.com/x/", "url": "/y/" }),
            json!({}),
        );
        assert_eq!(resolver.canonical_url(), "https://canonical.example.com/x/");
    }

    #[test]
    fn test_canonical_empty_falls_back() {
        let resolver = resolver(
            json!({ "canonical_url": "", "url": "/posts/index.html" }),
            json!({}),
        );
        assert_eq!(resolver.canonical_url(), "https://example.com/posts/");
    }

    #[test]
    fn test_canonical_keeps_plain_urls() {
        let resolver = resolver(json!({ "url": "/posts/hello/" }), json!({}));
        assert_eq!(resolver.canonical_url(), "https://example.com/posts/hello/");
    }

    #[test]
    fn test_canonical_root_index() {
        let resolver = resolver(json!({ "url": "/index.html" }), json!({}));
        assert_eq!(resolver.canonical_url(), "https://example.com/");
    }

    #[test]
    fn test_date_published() {
        let resolver = resolver(json!({ "date": "2024-01-15" }), json!({}));
        assert_eq!(resolver.date_published(), Some("2024-01-15T00:00:00+00:00"));
    }

    #[test]
    fn test_date_published_absent() {
        let resolver = resolver(json!({}), json!({}));
        assert_eq!(resolver.date_published(), None);
    }

    #[test]
    fn test_date_modified_precedence() {
        let resolver = resolver(
            json!({
                "seo": { "date_modified": "2024-03-01" },
                "last_modified_at": "2024-02-01",
                "date": "2024-01-01"
            }),
            json!({}),
        );
        assert_eq!(resolver.date_modified(), Some("2024-03-01T00:00:00+00:00"));

        let resolver = crate::resolver::testutil::resolver(
            json!({ "last_modified_at": "2024-02-01", "date": "2024-01-01" }),
            json!({}),
        );
        assert_eq!(resolver.date_modified(), Some("2024-02-01T00:00:00+00:00"));

        let resolver = crate::resolver::testutil::resolver(json!({ "date": "2024-01-01" }), json!({}));
        assert_eq!(resolver.date_modified(), Some("2024-01-01T00:00:00+00:00"));
    }

    #[test]
    fn test_date_modified_unparseable_is_absent() {
        let resolver = resolver(json!({ "last_modified_at": "whenever" }), json!({}));
        assert_eq!(resolver.date_modified(), None);
    }

    #[test]
    fn test_lang_fallback_chain() {
        assert_eq!(
            resolver(json!({ "lang": "de_DE" }), json!({ "lang": "fr_FR" })).lang(),
            "de_DE"
        );
        assert_eq!(resolver(json!({}), json!({ "lang": "fr_FR" })).lang(), "fr_FR");
        assert_eq!(resolver(json!({}), json!({})).lang(), "en_US");
    }

    #[test]
    fn test_locale_normalizes_hyphens() {
        let resolver = resolver(json!({ "locale": "en-GB" }), json!({}));
        assert_eq!(resolver.locale(), "en_GB");
    }

    #[test]
    fn test_locale_falls_back_to_lang() {
        let resolver = resolver(json!({ "lang": "pt-BR" }), json!({}));
        assert_eq!(resolver.locale(), "pt_BR");
    }
}
