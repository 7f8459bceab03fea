use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SchemaSignals {
    pub faq_present: bool,
    pub faq_count: usize,
    pub howto_present: bool,
    pub howto_count: usize,
    pub article_present: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuestionSignals {
    pub total_headings: usize,
    pub question_headings: usize,
    /// First five question-style headings in document order, trimmed.
    pub question_heading_examples: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SnippetSignals {
    pub first_para_words: usize,
    pub lists: usize,
    pub tables: usize,
    pub short_paragraphs: usize,
    /// 0..=100
    pub snippet_score: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructureSignals {
    pub has_tldr: bool,
    pub has_toc: bool,
    pub avg_para_length: f64,
    pub word_count: usize,
    pub flesch_reading_ease: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntitySignals {
    pub entities_found: usize,
    pub entity_examples: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrustSignals {
    pub has_author_meta: bool,
    pub has_date: bool,
    pub has_author_bio: bool,
    pub has_about_link: bool,
    pub has_contact_link: bool,
    pub has_sources: bool,
}

/// Everything the scoring stages read about one page. Built once by
/// `scan::discover` and only ever borrowed afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignalBundle {
    pub schema: SchemaSignals,
    pub questions: QuestionSignals,
    pub snippet: SnippetSignals,
    pub structure: StructureSignals,
    pub entities: EntitySignals,
    pub eeat: TrustSignals,
}
