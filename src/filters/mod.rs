//! Collaborator contracts required from the rendering host.
//!
//! The resolver never transforms text, renders dates or builds URLs on its
//! own; it calls through these traits. `Filters::standard` bundles the
//! implementations shipped with this crate, but a host with its own filter
//! pipeline can inject anything satisfying the traits.

pub mod date;
pub mod text;
pub mod url;

pub use date::XmlSchemaDates;
pub use text::StandardTextFormatter;
pub use url::SiteUrls;

/// String transforms applied to every display value.
pub trait TextFormatter {
    /// Render Markdown to HTML.
    fn markdownify(&self, input: &str) -> String;

    /// Remove HTML tags, comments, and script/style bodies.
    fn strip_html(&self, input: &str) -> String;

    /// Collapse whitespace runs to single spaces.
    fn normalize_whitespace(&self, input: &str) -> String;

    /// HTML-escape without double-escaping existing entities.
    fn escape_once(&self, input: &str) -> String;
}

/// ISO-8601 / XML-schema date rendering.
pub trait DateFormatter {
    /// Render a raw front-matter date as an XML-schema timestamp, or
    /// `None` when the input is not a recognizable date.
    fn to_xml_schema(&self, input: &str) -> Option<String>;
}

/// Site-relative URL resolution.
pub trait UrlResolver {
    /// Resolve a path against the site's base URL.
    fn absolute_url(&self, path: &str) -> String;

    /// True when the path already carries a scheme.
    fn is_absolute_url(&self, path: &str) -> bool;
}

/// The collaborator bundle a resolver is constructed with.
pub struct Filters {
    pub text: Box<dyn TextFormatter>,
    pub dates: Box<dyn DateFormatter>,
    pub urls: Box<dyn UrlResolver>,
}

impl Filters {
    /// The standard implementations: pulldown-cmark Markdown, regex HTML
    /// stripping, chrono dates, and base-URL joining.
    pub fn standard(base_url: impl Into<String>) -> Self {
        Self {
            text: Box::new(StandardTextFormatter),
            dates: Box::new(XmlSchemaDates),
            urls: Box::new(SiteUrls::new(base_url)),
        }
    }
}
