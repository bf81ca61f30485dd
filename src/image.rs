//! Page image sub-resolver.
//!
//! `page.image` is either a bare path string or a mapping with `path`,
//! `facebook`, `twitter`, `width`, `height` and `alt` keys. The resolved
//! path is absolute and percent-escaped. A page whose image carries no
//! usable path has no image at all.

use crate::context::PageContext;
use crate::filters::UrlResolver;
use crate::filters::url::percent_escape;
use serde_json::{Map, Value};

/// Resolved image data for one page.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    data: Map<String, Value>,
    path: String,
}

impl ImageResolver {
    /// Resolve the page image, if any path can be derived.
    pub fn resolve(page: &PageContext, urls: &dyn UrlResolver) -> Option<Self> {
        let data = match page.raw("image") {
            Some(Value::String(path)) if !path.is_empty() => {
                let mut map = Map::new();
                map.insert("path".to_owned(), Value::String(path.clone()));
                map
            }
            Some(Value::Object(map)) => map.clone(),
            _ => return None,
        };

        let raw_path = ["path", "facebook", "twitter"].iter().find_map(|key| {
            data.get(*key)
                .and_then(Value::as_str)
                .filter(|path| !path.is_empty())
        })?;

        let absolute = if urls.is_absolute_url(raw_path) {
            raw_path.to_owned()
        } else {
            urls.absolute_url(raw_path)
        };

        Some(Self {
            path: percent_escape(&absolute),
            data,
        })
    }

    /// Absolute, percent-escaped image URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn width(&self) -> Option<u64> {
        self.data.get("width").and_then(Value::as_u64)
    }

    pub fn height(&self) -> Option<u64> {
        self.data.get("height").and_then(Value::as_u64)
    }

    pub fn alt(&self) -> Option<&str> {
        self.data.get("alt").and_then(Value::as_str)
    }

    /// Any other image field carried through from the source mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

// ============================================================================
// Tests
// ============================================================================
