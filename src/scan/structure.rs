use super::readability::flesch_reading_ease;
use crate::page::Document;
use crate::types::scoring::round1;
use crate::types::signals::StructureSignals;
use once_cell::sync::Lazy;
use regex::Regex;

static TLDR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(tl;?dr|summary|key takeaways)").expect("tldr pattern is valid")
});

static TOC_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)toc|table-of-contents").expect("toc pattern is valid"));

const TOC_CONTAINERS: [&str; 2] = ["div", "nav"];

pub fn detect_structure(doc: &dyn Document) -> StructureSignals {
    let text = doc.text();

    let paragraphs = doc.find_all(&["p"]);
    let avg_para_length = if paragraphs.is_empty() {
        0.0
    } else {
        let total_words: usize = paragraphs.iter().map(|p| p.word_count()).sum();
        total_words as f64 / paragraphs.len() as f64
    };

    let flesch = flesch_reading_ease(&text).unwrap_or_else(|| {
        tracing::debug!("reading ease unavailable, defaulting to 0");
        0.0
    });

    StructureSignals {
        has_tldr: TLDR_PATTERN.is_match(&text),
        has_toc: doc.find_by_class(&TOC_CONTAINERS, &TOC_CLASS).is_some(),
        avg_para_length: round1(avg_para_length),
        word_count: text.split_whitespace().count(),
        flesch_reading_ease: round1(flesch),
    }
}
