//! JSON-LD structured-data projection.
//!
//! Reads the already-resolved fields and shapes them into a schema.org
//! object. Members that resolve to nothing are omitted entirely rather
//! than serialized as null.

use crate::resolver::MetadataResolver;
use serde_json::{Map, Value, json};

pub(crate) fn build(resolver: &MetadataResolver<'_>) -> Value {
    let mut ld = Map::new();
    ld.insert("@context".to_owned(), json!("https://schema.org"));
    ld.insert("@type".to_owned(), json!(resolver.schema_type()));

    if let Some(name) = resolver.name() {
        ld.insert("name".to_owned(), json!(name));
    }
    if let Some(headline) = resolver.page_title() {
        ld.insert("headline".to_owned(), json!(headline));
    }
    if let Some(description) = resolver.description() {
        ld.insert("description".to_owned(), json!(description));
    }
    ld.insert("url".to_owned(), json!(resolver.canonical_url()));

    if let Some(published) = resolver.date_published() {
        ld.insert("datePublished".to_owned(), json!(published));
    }
    if let Some(modified) = resolver.date_modified() {
        ld.insert("dateModified".to_owned(), json!(modified));
    }
    if let Some(links) = resolver.links() {
        ld.insert("sameAs".to_owned(), links.clone());
    }

    if let Some(person) = author(resolver) {
        ld.insert("author".to_owned(), person);
    }
    if let Some(image) = image(resolver) {
        ld.insert("image".to_owned(), image);
    }
    if let Some(publisher) = publisher(resolver) {
        ld.insert("publisher".to_owned(), publisher);
    }
    if matches!(resolver.schema_type(), "BlogPosting" | "CreativeWork") {
        ld.insert(
            "mainEntityOfPage".to_owned(),
            json!({ "@type": "WebPage", "@id": resolver.canonical_url() }),
        );
    }

    Value::Object(ld)
}

fn author(resolver: &MetadataResolver<'_>) -> Option<Value> {
    let author = resolver.author();
    let name = author.name()?;
    let mut person = Map::new();
    let kind = author
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("Person");
    person.insert("@type".to_owned(), json!(kind));
    person.insert("name".to_owned(), json!(name));
    if let Some(url) = author.url() {
        person.insert("url".to_owned(), json!(url));
    }
    Some(Value::Object(person))
}

fn image(resolver: &MetadataResolver<'_>) -> Option<Value> {
    let image = resolver.image()?;
    Some(match (image.width(), image.height()) {
        (Some(width), Some(height)) => json!({
            "@type": "ImageObject",
            "url": image.path(),
            "width": width,
            "height": height,
        }),
        _ => json!(image.path()),
    })
}

fn publisher(resolver: &MetadataResolver<'_>) -> Option<Value> {
    let logo = resolver.logo()?;
    let mut publisher = Map::new();
    publisher.insert("@type".to_owned(), json!("Organization"));
    publisher.insert(
        "logo".to_owned(),
        json!({ "@type": "ImageObject", "url": logo }),
    );
    if let Some(name) = resolver.author().name() {
        publisher.insert("name".to_owned(), json!(name));
    }
    Some(Value::Object(publisher))
}

// ============================================================================
// Tests
// ============================================================================
