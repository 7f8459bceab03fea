use super::{Document, PageElement};

/// In-memory [`Document`] for exercising extractors without parsing HTML.
#[derive(Debug, Default)]
pub struct FakeDocument {
    elements: Vec<PageElement>,
    text: Option<String>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> Self {
        self.elements.push(PageElement {
            tag: tag.to_string(),
            attrs: attrs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            text: text.to_string(),
        });
        self
    }

    /// Overrides the page text; by default it is the element texts joined
    /// with newlines.
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }
}

impl Document for FakeDocument {
    fn find_all(&self, tags: &[&str]) -> Vec<PageElement> {
        self.elements
            .iter()
            .filter(|element| tags.contains(&element.tag.as_str()))
            .cloned()
            .collect()
    }

    fn text(&self) -> String {
        match &self.text {
            Some(text) => text.clone(),
            None => self
                .elements
                .iter()
                .filter(|element| !matches!(element.tag.as_str(), "script" | "style"))
                .map(|element| element.text.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
