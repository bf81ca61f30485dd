//! Page, site and paginator input contexts.
//!
//! Contexts are read-only snapshots of front-matter-like data: arbitrary
//! nested JSON mappings in which unknown keys are ignored. The typed
//! accessors below enumerate every key the resolver recognizes, so the
//! resolution code never touches raw string keys outside this module.
//!
//! Scalar lookups follow host truthiness: `null` and `false` behave as if
//! the key were absent, while strings, numbers and `true` coerce to
//! strings. A sub-mapping lookup that finds a non-mapping value behaves as
//! an empty mapping ([`SubMap`] centralizes that rule).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Safe Sub-Mapping View
// ============================================================================

/// Borrowed view over an optional JSON mapping.
///
/// Lookups on a missing or non-mapping value all resolve to "absent",
/// never to an error.
#[derive(Debug, Clone, Copy)]
pub struct SubMap<'a>(Option<&'a Map<String, Value>>);

impl<'a> SubMap<'a> {
    /// Raw value under `key`, if any.
    pub fn raw(&self, key: &str) -> Option<&'a Value> {
        self.0.and_then(|map| map.get(key))
    }

    /// True when `key` holds a value other than `null` or `false`.
    pub fn truthy(&self, key: &str) -> bool {
        match self.raw(key) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(_) => true,
        }
    }

    /// Scalar under `key` coerced to a string; `null` and `false` count
    /// as absent.
    pub fn scalar(&self, key: &str) -> Option<String> {
        self.raw(key).and_then(coerce_scalar)
    }

    /// Unsigned integer under `key`.
    pub fn integer(&self, key: &str) -> Option<u64> {
        self.raw(key).and_then(Value::as_u64)
    }

    /// Sub-mapping under `key`; empty when missing or not a mapping.
    pub fn object(&self, key: &str) -> SubMap<'a> {
        SubMap(self.raw(key).and_then(Value::as_object))
    }
}

/// Coerce a JSON value to its string form, treating `null` and `false`
/// as absent. Mappings and arrays have no scalar form.
fn coerce_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_owned()),
        _ => None,
    }
}

// ============================================================================
// Page Context
// ============================================================================

/// Front-matter attributes of the page being rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageContext(Map<String, Value>);

impl PageContext {
    pub fn new(data: Map<String, Value>) -> Self {
        Self(data)
    }

    /// Build from any JSON value; non-mappings yield an empty context.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    fn root(&self) -> SubMap<'_> {
        SubMap(Some(&self.0))
    }

    /// Raw value under `key` (used by the author and image sub-resolvers).
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.root().raw(key)
    }

    pub fn title(&self) -> Option<String> {
        self.root().scalar("title")
    }

    pub fn title_meta(&self) -> Option<String> {
        self.root().scalar("title_meta")
    }

    pub fn subtitle(&self) -> Option<String> {
        self.root().scalar("subtitle")
    }

    pub fn description(&self) -> Option<String> {
        self.root().scalar("description")
    }

    pub fn excerpt(&self) -> Option<String> {
        self.root().scalar("excerpt")
    }

    pub fn url(&self) -> Option<String> {
        self.root().scalar("url")
    }

    pub fn canonical_url(&self) -> Option<String> {
        self.root().scalar("canonical_url")
    }

    pub fn date(&self) -> Option<String> {
        self.root().scalar("date")
    }

    pub fn last_modified_at(&self) -> Option<String> {
        self.root().scalar("last_modified_at")
    }

    pub fn lang(&self) -> Option<String> {
        self.root().scalar("lang")
    }

    pub fn locale(&self) -> Option<String> {
        self.root().scalar("locale")
    }

    pub fn seo_description_max_words(&self) -> Option<u64> {
        self.root().integer("seo_description_max_words")
    }

    /// True when the page carries any pagination value at all, even a
    /// malformed one.
    pub fn has_pagination(&self) -> bool {
        self.root().truthy("pagination")
    }

    /// The `pagination` sub-mapping (`title`, `collection`).
    pub fn pagination(&self) -> SubMap<'_> {
        self.root().object("pagination")
    }

    /// The per-page `seo` override sub-mapping (`name`, `type`,
    /// `date_modified`, `links`).
    pub fn seo(&self) -> SubMap<'_> {
        self.root().object("seo")
    }
}

// ============================================================================
// Site Context
// ============================================================================

/// Global site configuration as seen by the resolver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteContext(Map<String, Value>);

impl SiteContext {
    pub fn new(data: Map<String, Value>) -> Self {
        Self(data)
    }

    /// Build from any JSON value; non-mappings yield an empty context.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    fn root(&self) -> SubMap<'_> {
        SubMap(Some(&self.0))
    }

    /// Raw value under `key` (used by the author sub-resolver).
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.root().raw(key)
    }

    pub fn title(&self) -> Option<String> {
        self.root().scalar("title")
    }

    pub fn name(&self) -> Option<String> {
        self.root().scalar("name")
    }

    pub fn tagline(&self) -> Option<String> {
        self.root().scalar("tagline")
    }

    pub fn description(&self) -> Option<String> {
        self.root().scalar("description")
    }

    pub fn lang(&self) -> Option<String> {
        self.root().scalar("lang")
    }

    pub fn locale(&self) -> Option<String> {
        self.root().scalar("locale")
    }

    pub fn logo(&self) -> Option<String> {
        self.root().scalar("logo")
    }

    /// The site-wide custom-title toggle; only a literal `true` enables it.
    pub fn custom_title(&self) -> bool {
        matches!(self.raw("seo_custom_title"), Some(Value::Bool(true)))
    }

    /// Site-supplied pagination message template, if any.
    pub fn paginator_message(&self) -> Option<String> {
        self.root().scalar("seo_paginator_message")
    }

    /// The `social` sub-mapping (`name`, `links`).
    pub fn social(&self) -> SubMap<'_> {
        self.root().object("social")
    }

    /// The `data.authors` lookup table for string author references.
    pub fn data_authors(&self) -> SubMap<'_> {
        self.root().object("data").object("authors")
    }
}

// ============================================================================
// Paginator Context
// ============================================================================

/// Pagination state, present only while rendering a paged listing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PaginatorContext {
    /// Current page number, 1-based.
    pub page: Option<u32>,
    /// Total number of pages.
    pub total_pages: Option<u32>,
}

impl PaginatorContext {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self {
            page: Some(page),
            total_pages: Some(total_pages),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
