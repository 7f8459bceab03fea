use crate::page::Document;
use crate::types::signals::EntitySignals;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

// Runs of capitalised words. Coarse: sentence-initial words match too.
static ENTITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-z]+(?: [A-Z][a-z]+)*\b").expect("entity pattern is valid")
});

pub const MAX_EXAMPLES: usize = 10;

pub fn detect_entities(doc: &dyn Document) -> EntitySignals {
    let text = doc.text();
    let distinct: BTreeSet<&str> = ENTITY_PATTERN
        .find_iter(&text)
        .map(|found| found.as_str())
        .collect();

    EntitySignals {
        entities_found: distinct.len(),
        entity_examples: distinct
            .into_iter()
            .take(MAX_EXAMPLES)
            .map(str::to_string)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::fake::FakeDocument;

    #[test]
    fn capitalised_runs_are_deduplicated() {
        let doc = FakeDocument::new().with_text(
            "Ada Lovelace met Charles Babbage in London. Ada Lovelace wrote notes.",
        );
        let signals = detect_entities(&doc);
        assert_eq!(signals.entities_found, 3);
        assert_eq!(
            signals.entity_examples,
            vec!["Ada Lovelace", "Charles Babbage", "London"]
        );
    }

    #[test]
    fn examples_are_capped() {
        let names: Vec<String> = (b'A'..=b'L')
            .map(|letter| format!("{}name", letter as char))
            .collect();
        let doc = FakeDocument::new().with_text(&names.join(", "));
        let signals = detect_entities(&doc);
        assert_eq!(signals.entities_found, 12);
        assert_eq!(signals.entity_examples.len(), MAX_EXAMPLES);
    }

    #[test]
    fn lowercase_and_acronyms_do_not_match() {
        let doc = FakeDocument::new().with_text("plain text with NASA and x");
        assert_eq!(detect_entities(&doc).entities_found, 0);
    }
}
