//! Description resolution and word-snippet truncation.

use super::MetadataResolver;

const DEFAULT_MAX_WORDS: usize = 100;

impl MetadataResolver<'_> {
    /// Meta description: page description, else excerpt, else the site
    /// description, truncated to the word budget.
    pub fn description(&self) -> Option<&str> {
        self.cache
            .description
            .get_or_init(|| {
                let value = self
                    .format_scalar(self.page.description().or_else(|| self.page.excerpt()))
                    .or_else(|| self.site_description().map(str::to_owned))?;
                Some(snippet(&value, self.description_max_words()))
            })
            .as_deref()
    }

    /// Word budget for the description, `page.seo_description_max_words`
    /// or 100.
    pub fn description_max_words(&self) -> usize {
        *self.cache.max_words.get_or_init(|| {
            self.page
                .seo_description_max_words()
                .map_or(DEFAULT_MAX_WORDS, |words| words as usize)
        })
    }
}

/// Keep at most `max_words` whitespace-separated tokens, single-spaced.
/// Anything shorter than the input gains a trailing ellipsis.
fn snippet(text: &str, max_words: usize) -> String {
    let truncated = text
        .split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ");
    if truncated.chars().count() < text.chars().count() {
        format!("{truncated}…")
    } else {
        truncated
    }
}

// ============================================================================
// Tests
// ============================================================================
