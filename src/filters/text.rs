//! Standard text transforms.
//!
//! Display values pass through markdownify → strip_html →
//! normalize_whitespace → escape_once before they reach any output field.

use super::TextFormatter;
use pulldown_cmark::{Parser, html};
use regex::Regex;
use std::sync::LazyLock;

/// Tags, comments, and script/style elements with their bodies.
static HTML_MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script.*?</script>|<style.*?</style>|<!--.*?-->|<.*?>").unwrap()
});

/// The filter implementations shipped with this crate.
pub struct StandardTextFormatter;

impl TextFormatter for StandardTextFormatter {
    fn markdownify(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len() * 3 / 2);
        html::push_html(&mut out, Parser::new(input));
        out
    }

    fn strip_html(&self, input: &str) -> String {
        HTML_MARKUP.replace_all(input, "").into_owned()
    }

    fn normalize_whitespace(&self, input: &str) -> String {
        input.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn escape_once(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for (idx, ch) in input.char_indices() {
            match ch {
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                '&' if !entity_follows(&input[idx + 1..]) => out.push_str("&amp;"),
                _ => out.push(ch),
            }
        }
        out
    }
}

/// True when `rest` continues an HTML entity: an alphabetic name or `#`
/// plus digits, terminated by `;`. Such ampersands stay unescaped.
fn entity_follows(rest: &str) -> bool {
    let bytes = rest.as_bytes();
    if bytes.first() == Some(&b'#') {
        let digits = bytes[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        digits > 0 && bytes.get(1 + digits) == Some(&b';')
    } else {
        let letters = bytes.iter().take_while(|b| b.is_ascii_alphabetic()).count();
        letters > 0 && bytes.get(letters) == Some(&b';')
    }
}
