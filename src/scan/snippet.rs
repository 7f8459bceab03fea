use crate::page::Document;
use crate::types::signals::SnippetSignals;
use std::ops::RangeInclusive;

/// Word range of a paragraph an answer engine can lift verbatim.
pub const ANSWER_WORDS: RangeInclusive<usize> = 40..=60;

pub const FIRST_PARAGRAPH_POINTS: u32 = 30;
pub const LIST_POINTS: u32 = 25;
pub const TABLE_POINTS: u32 = 20;
pub const SHORT_PARAGRAPH_POINTS: u32 = 25;
pub const SHORT_PARAGRAPHS_NEEDED: usize = 3;
pub const MAX_SNIPPET_SCORE: u32 = 100;

pub fn detect_snippet(doc: &dyn Document) -> SnippetSignals {
    let paragraphs = doc.find_all(&["p"]);
    let first_para_words = paragraphs
        .first()
        .map(|paragraph| paragraph.word_count())
        .unwrap_or(0);
    let lists = doc.find_all(&["ul", "ol"]).len();
    let tables = doc.find_all(&["table"]).len();
    let short_paragraphs = paragraphs
        .iter()
        .filter(|paragraph| ANSWER_WORDS.contains(&paragraph.word_count()))
        .count();

    SnippetSignals {
        first_para_words,
        lists,
        tables,
        short_paragraphs,
        snippet_score: snippet_score(first_para_words, lists, tables, short_paragraphs),
    }
}

pub fn snippet_score(
    first_para_words: usize,
    lists: usize,
    tables: usize,
    short_paragraphs: usize,
) -> u32 {
    let mut score = 0;
    if ANSWER_WORDS.contains(&first_para_words) {
        score += FIRST_PARAGRAPH_POINTS;
    }
    if lists > 0 {
        score += LIST_POINTS;
    }
    if tables > 0 {
        score += TABLE_POINTS;
    }
    if short_paragraphs >= SHORT_PARAGRAPHS_NEEDED {
        score += SHORT_PARAGRAPH_POINTS;
    }
    score.min(MAX_SNIPPET_SCORE)
}
