//! XML-schema date rendering.

use super::DateFormatter;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat};

/// Chrono-backed [`DateFormatter`].
///
/// Accepts the date shapes that show up in front matter: RFC 3339, the
/// common `YYYY-MM-DD HH:MM:SS` form with or without a zone, and bare
/// dates. Bare values are taken as UTC midnight.
pub struct XmlSchemaDates;

impl DateFormatter for XmlSchemaDates {
    fn to_xml_schema(&self, input: &str) -> Option<String> {
        parse(input.trim()).map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, false))
    }
}

fn parse(input: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S %z") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().fixed_offset());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().fixed_offset());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATES: XmlSchemaDates = XmlSchemaDates;

    #[test]
    fn test_bare_date() {
        assert_eq!(
            DATES.to_xml_schema("2024-01-15"),
            Some("2024-01-15T00:00:00+00:00".to_owned())
        );
    }

    #[test]
    fn test_rfc3339_keeps_offset() {
        assert_eq!(
            DATES.to_xml_schema("2017-01-01T12:00:00+02:00"),
            Some("2017-01-01T12:00:00+02:00".to_owned())
        );
    }

    #[test]
    fn test_rfc3339_zulu() {
        assert_eq!(
            DATES.to_xml_schema("2017-01-01T12:00:00Z"),
            Some("2017-01-01T12:00:00+00:00".to_owned())
        );
    }

    #[test]
    fn test_datetime_without_zone() {
        assert_eq!(
            DATES.to_xml_schema("2024-06-15 14:30:45"),
            Some("2024-06-15T14:30:45+00:00".to_owned())
        );
    }

    #[test]
    fn test_datetime_with_zone() {
        assert_eq!(
            DATES.to_xml_schema("2024-06-15 14:30:45 +0300"),
            Some("2024-06-15T14:30:45+03:00".to_owned())
        );
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(
            DATES.to_xml_schema(" 2024-01-15 "),
            Some("2024-01-15T00:00:00+00:00".to_owned())
        );
    }

    #[test]
    fn test_unparseable_is_none() {
        assert_eq!(DATES.to_xml_schema("yesterday"), None);
        assert_eq!(DATES.to_xml_schema(""), None);
        assert_eq!(DATES.to_xml_schema("2024-13-40"), None);
    }
}
