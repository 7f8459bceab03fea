use super::{Document, PageElement};
use scraper::{ElementRef, Html, Node};

/// Subtrees that never contribute to visible text.
const HIDDEN_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Elements whose own content is kept verbatim.
const RAW_TEXT_TAGS: [&str; 2] = ["script", "style"];

/// [`Document`] backed by an html5ever parse of the fetched markup.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    fn snapshot(element: ElementRef<'_>) -> PageElement {
        let tag = element.value().name().to_string();
        let text = if RAW_TEXT_TAGS.contains(&tag.as_str()) {
            element.text().collect::<String>()
        } else {
            let mut text = String::new();
            collect_visible_text(element, &mut text);
            text
        };
        PageElement {
            tag,
            attrs: element
                .value()
                .attrs()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            text,
        }
    }
}

impl Document for HtmlDocument {
    fn find_all(&self, tags: &[&str]) -> Vec<PageElement> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|element| tags.contains(&element.value().name()))
            .map(Self::snapshot)
            .collect()
    }

    fn text(&self) -> String {
        let mut text = String::new();
        collect_visible_text(self.html.root_element(), &mut text);
        text
    }
}

fn collect_visible_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(inner) if !HIDDEN_TAGS.contains(&inner.name()) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_visible_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}
