//! Page author sub-resolver.
//!
//! An author may appear as a mapping with author fields, or as a short
//! string reference that is looked up in the site's `data.authors` table.
//! Resolution order: `page.author`, first of `page.authors`, `site.author`.

use crate::context::{PageContext, SiteContext};
use serde_json::{Map, Value};

/// Resolved author data for one page.
#[derive(Debug, Clone)]
pub struct AuthorResolver {
    data: Map<String, Value>,
}

impl AuthorResolver {
    pub fn new(page: &PageContext, site: &SiteContext) -> Self {
        let reference = page
            .raw("author")
            .filter(|value| !blank(value))
            .cloned()
            .or_else(|| {
                page.raw("authors")
                    .and_then(Value::as_array)
                    .and_then(|authors| authors.first())
                    .filter(|value| !blank(value))
                    .cloned()
            })
            .or_else(|| site.raw("author").filter(|value| !blank(value)).cloned());

        let data = match reference {
            Some(Value::Object(map)) => map,
            Some(Value::String(name)) => author_entry(site, name),
            _ => Map::new(),
        };

        Self { data }
    }

    /// True when no author resolved at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn name(&self) -> Option<&str> {
        self.data.get("name").and_then(Value::as_str)
    }

    /// Twitter handle without a leading `@`; falls back to the name.
    pub fn twitter(&self) -> Option<String> {
        self.data
            .get("twitter")
            .and_then(Value::as_str)
            .or_else(|| self.name())
            .map(|handle| handle.replacen('@', "", 1))
    }

    pub fn url(&self) -> Option<&str> {
        self.data.get("url").and_then(Value::as_str)
    }

    /// Any other author field carried through from the source mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

/// Expand a string reference through `site.data.authors`; table fields win
/// over the synthesized name.
fn author_entry(site: &SiteContext, name: String) -> Map<String, Value> {
    let mut data = site
        .data_authors()
        .raw(&name)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();
    data.entry("name".to_owned())
        .or_insert_with(|| Value::String(name));
    data
}

/// Absent or empty-string author references fall through to the next
/// candidate.
fn blank(value: &Value) -> bool {
    matches!(value, Value::Null) || matches!(value, Value::String(s) if s.is_empty())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn author(page: Value, site: Value) -> AuthorResolver {
        AuthorResolver::new(
            &PageContext::from_value(page),
            &SiteContext::from_value(site),
        )
    }

    #[test]
    fn test_author_string() {
        let author = author(json!({ "author": "alice" }), json!({}));
        assert_eq!(author.name(), Some("alice"));
    }

    #[test]
    fn test_author_mapping() {
        let author = author(
            json!({ "author": { "name": "Alice", "twitter": "alice_rs" } }),
            json!({}),
        );
        assert_eq!(author.name(), Some("Alice"));
        assert_eq!(author.twitter(), Some("alice_rs".to_owned()));
    }

    #[test]
    fn test_author_data_table_lookup() {
        let author = author(
            json!({ "author": "alice" }),
            json!({ "data": { "authors": { "alice": { "twitter": "@alice_rs", "url": "https://alice.example.com" } } } }),
        );
        assert_eq!(author.name(), Some("alice"));
        assert_eq!(author.twitter(), Some("alice_rs".to_owned()));
        assert_eq!(author.url(), Some("https://alice.example.com"));
    }

    #[test]
    fn test_author_data_table_name_wins() {
        let author = author(
            json!({ "author": "alice" }),
            json!({ "data": { "authors": { "alice": { "name": "Alice Example" } } } }),
        );
        assert_eq!(author.name(), Some("Alice Example"));
    }

    #[test]
    fn test_authors_list_first() {
        let author = author(json!({ "authors": ["bob", "carol"] }), json!({}));
        assert_eq!(author.name(), Some("bob"));
    }

    #[test]
    fn test_author_beats_authors() {
        let author = author(
            json!({ "author": "alice", "authors": ["bob"] }),
            json!({}),
        );
        assert_eq!(author.name(), Some("alice"));
    }

    #[test]
    fn test_empty_author_falls_through() {
        let author = author(
            json!({ "author": "", "authors": ["bob"] }),
            json!({}),
        );
        assert_eq!(author.name(), Some("bob"));
    }

    #[test]
    fn test_site_author_fallback() {
        let author = author(json!({}), json!({ "author": "dana" }));
        assert_eq!(author.name(), Some("dana"));
    }

    #[test]
    fn test_twitter_falls_back_to_name() {
        let author = author(json!({ "author": "@eve" }), json!({}));
        assert_eq!(author.twitter(), Some("eve".to_owned()));
    }

    #[test]
    fn test_no_author() {
        let author = author(json!({}), json!({}));
        assert!(author.is_empty());
        assert_eq!(author.name(), None);
        assert_eq!(author.twitter(), None);
    }

    #[test]
    fn test_malformed_author_is_empty() {
        let author = author(json!({ "author": 7 }), json!({}));
        assert!(author.is_empty());
    }
}
