use crate::page::Document;
use crate::types::signals::QuestionSignals;

pub const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

pub const QUESTION_WORDS: [&str; 12] = [
    "what", "why", "how", "when", "where", "who", "which", "can", "is", "are", "do", "does",
];

pub const MAX_EXAMPLES: usize = 5;

/// A heading reads as a question when it opens with an interrogative or
/// auxiliary word, or ends with `?`.
pub fn is_question_heading(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();
    normalized.ends_with('?')
        || QUESTION_WORDS
            .iter()
            .any(|word| normalized.starts_with(word))
}

pub fn detect_questions(doc: &dyn Document) -> QuestionSignals {
    let headings = doc.find_all(&HEADING_TAGS);
    let questions: Vec<String> = headings
        .iter()
        .filter(|heading| is_question_heading(&heading.text))
        .map(|heading| heading.text.trim().to_string())
        .collect();

    QuestionSignals {
        total_headings: headings.len(),
        question_headings: questions.len(),
        question_heading_examples: questions.into_iter().take(MAX_EXAMPLES).collect(),
    }
}
