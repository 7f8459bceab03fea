//! The page being audited: retrieval and a small query surface over its markup.
//!
//! Signal extractors only ever see a [`Document`]. The HTML-backed
//! implementation lives in [`html`]; tests use an in-memory fake.

pub mod fetch;
pub mod html;

#[cfg(test)]
pub mod fake;

use regex::Regex;

/// Snapshot of one element: its tag, attributes and text.
///
/// For `script` and `style` elements `text` is the raw content; for everything
/// else it is the visible text of the subtree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageElement {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub text: String,
}

impl PageElement {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

pub trait Document {
    /// Every element whose tag is one of `tags`, in document order.
    fn find_all(&self, tags: &[&str]) -> Vec<PageElement>;

    /// Visible text of the whole page.
    fn text(&self) -> String;

    /// First element among `tags` whose class attribute matches `pattern`.
    fn find_by_class(&self, tags: &[&str], pattern: &Regex) -> Option<PageElement> {
        self.find_all(tags).into_iter().find(|element| {
            element
                .attr("class")
                .map(|class| pattern.is_match(class))
                .unwrap_or(false)
        })
    }

    /// Elements of `tag` carrying `attr` with a value matching `pattern`.
    fn find_by_attr(&self, tag: &str, attr: &str, pattern: &Regex) -> Vec<PageElement> {
        self.find_all(&[tag])
            .into_iter()
            .filter(|element| {
                element
                    .attr(attr)
                    .map(|value| pattern.is_match(value))
                    .unwrap_or(false)
            })
            .collect()
    }
}
