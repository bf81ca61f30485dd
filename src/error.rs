//! Resolver error types.

use thiserror::Error;

/// Metadata resolution errors.
///
/// Missing or malformed page data never errors; every lookup has a defined
/// fallback. The only fatal condition is a site configuration problem.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("paginator message `{template}` is missing the `{placeholder}` placeholder")]
    PaginatorMessage {
        template: String,
        placeholder: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginator_message_display() {
        let err = ResolveError::PaginatorMessage {
            template: "Page %current".to_owned(),
            placeholder: "%total",
        };
        let display = format!("{err}");
        assert!(display.contains("Page %current"));
        assert!(display.contains("%total"));
    }
}
