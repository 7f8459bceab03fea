use crate::types::scoring::{EngineScores, ScoreBreakdown};
use crate::types::signals::SignalBundle;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Effort {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(skip)]
    pub id: String,
    pub priority: Priority,
    pub category: String,
    pub action: String,
    pub impact: String,
    pub effort: Effort,
}

impl Recommendation {
    pub fn new(
        id: &str,
        priority: Priority,
        category: &str,
        action: &str,
        impact: &str,
        effort: Effort,
    ) -> Self {
        Self {
            id: id.to_string(),
            priority,
            category: category.to_string(),
            action: action.to_string(),
            impact: impact.to_string(),
            effort,
        }
    }
}

pub const QUESTION_HEADINGS_CHECK: usize = 3;
pub const SNIPPET_READY_CHECK: u32 = 50;
pub const GOOD_READABILITY_CHECK: f64 = 60.0;

/// Pass/fail summary shown next to the score. Keys keep the labels the
/// dashboard expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickChecks {
    #[serde(rename = "FAQ Schema")]
    pub faq_schema: bool,
    #[serde(rename = "HowTo Schema")]
    pub howto_schema: bool,
    #[serde(rename = "Question Headings")]
    pub question_headings: bool,
    #[serde(rename = "Snippet Ready")]
    pub snippet_ready: bool,
    #[serde(rename = "Has TL;DR")]
    pub has_tldr: bool,
    #[serde(rename = "Good Readability")]
    pub good_readability: bool,
    #[serde(rename = "Author Info")]
    pub author_info: bool,
}

impl QuickChecks {
    pub fn from_signals(signals: &SignalBundle) -> Self {
        Self {
            faq_schema: signals.schema.faq_present,
            howto_schema: signals.schema.howto_present,
            question_headings: signals.questions.question_headings >= QUESTION_HEADINGS_CHECK,
            snippet_ready: signals.snippet.snippet_score >= SNIPPET_READY_CHECK,
            has_tldr: signals.structure.has_tldr,
            good_readability: signals.structure.flesch_reading_ease >= GOOD_READABILITY_CHECK,
            author_info: signals.eeat.has_author_meta,
        }
    }

    pub fn entries(&self) -> [(&'static str, bool); 7] {
        [
            ("FAQ Schema", self.faq_schema),
            ("HowTo Schema", self.howto_schema),
            ("Question Headings", self.question_headings),
            ("Snippet Ready", self.snippet_ready),
            ("Has TL;DR", self.has_tldr),
            ("Good Readability", self.good_readability),
            ("Author Info", self.author_info),
        ]
    }
}

/// The result of auditing one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub url: String,
    pub analyzed_at: DateTime<Utc>,
    pub aeo_score: u32,
    pub signals: SignalBundle,
    pub score_breakdown: ScoreBreakdown,
    pub engine_scores: EngineScores,
    pub recommendations: Vec<Recommendation>,
}

impl AuditReport {
    pub fn has_high_priority(&self) -> bool {
        self.recommendations
            .iter()
            .any(|recommendation| recommendation.priority == Priority::High)
    }

    pub fn quick_checks(&self) -> QuickChecks {
        QuickChecks::from_signals(&self.signals)
    }

    pub fn flatten(&self) -> FlatReport<'_> {
        let signals = &self.signals;
        FlatReport {
            url: &self.url,
            analyzed_at: self.analyzed_at,
            aeo_score: self.aeo_score,
            score_breakdown: &self.score_breakdown,
            engine_scores: &self.engine_scores,
            faq_schema_present: signals.schema.faq_present,
            faq_count: signals.schema.faq_count,
            howto_schema_present: signals.schema.howto_present,
            howto_count: signals.schema.howto_count,
            article_schema_present: signals.schema.article_present,
            total_headings: signals.questions.total_headings,
            question_headings: signals.questions.question_headings,
            question_heading_examples: &signals.questions.question_heading_examples,
            first_para_words: signals.snippet.first_para_words,
            lists: signals.snippet.lists,
            tables: signals.snippet.tables,
            short_paragraphs: signals.snippet.short_paragraphs,
            snippet_score: signals.snippet.snippet_score,
            has_tldr: signals.structure.has_tldr,
            has_toc: signals.structure.has_toc,
            avg_para_length: signals.structure.avg_para_length,
            word_count: signals.structure.word_count,
            flesch_reading_ease: signals.structure.flesch_reading_ease,
            entities_found: signals.entities.entities_found,
            entity_examples: &signals.entities.entity_examples,
            has_author_meta: signals.eeat.has_author_meta,
            has_date: signals.eeat.has_date,
            has_author_bio: signals.eeat.has_author_bio,
            has_about_link: signals.eeat.has_about_link,
            has_contact_link: signals.eeat.has_contact_link,
            has_sources: signals.eeat.has_sources,
            recommendations: &self.recommendations,
            aeo_checks: self.quick_checks(),
        }
    }
}

/// Single-level view of an [`AuditReport`] for consumers that do not want
/// nested signal records.
#[derive(Debug, Serialize)]
pub struct FlatReport<'a> {
    pub url: &'a str,
    pub analyzed_at: DateTime<Utc>,
    pub aeo_score: u32,
    pub score_breakdown: &'a ScoreBreakdown,
    pub engine_scores: &'a EngineScores,
    pub faq_schema_present: bool,
    pub faq_count: usize,
    pub howto_schema_present: bool,
    pub howto_count: usize,
    pub article_schema_present: bool,
    pub total_headings: usize,
    pub question_headings: usize,
    pub question_heading_examples: &'a [String],
    pub first_para_words: usize,
    pub lists: usize,
    pub tables: usize,
    pub short_paragraphs: usize,
    pub snippet_score: u32,
    pub has_tldr: bool,
    pub has_toc: bool,
    pub avg_para_length: f64,
    pub word_count: usize,
    pub flesch_reading_ease: f64,
    pub entities_found: usize,
    pub entity_examples: &'a [String],
    pub has_author_meta: bool,
    pub has_date: bool,
    pub has_author_bio: bool,
    pub has_about_link: bool,
    pub has_contact_link: bool,
    pub has_sources: bool,
    pub recommendations: &'a [Recommendation],
    pub aeo_checks: QuickChecks,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_ordering_follows_rank() {
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
        assert_eq!(Priority::Low.rank(), 2);
    }

    #[test]
    fn recommendation_serializes_priority_and_effort_labels() {
        let recommendation = Recommendation::new(
            "schema.faq",
            Priority::High,
            "Schema Markup",
            "Add FAQ schema",
            "Direct answers",
            Effort::Medium,
        );
        let value = serde_json::to_value(&recommendation).expect("should serialize");
        assert_eq!(value["priority"], "HIGH");
        assert_eq!(value["effort"], "Medium");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn quick_checks_apply_thresholds() {
        let mut signals = SignalBundle::default();
        signals.questions.question_headings = 3;
        signals.snippet.snippet_score = 49;
        signals.structure.flesch_reading_ease = 60.0;

        let checks = QuickChecks::from_signals(&signals);
        assert!(checks.question_headings);
        assert!(!checks.snippet_ready);
        assert!(checks.good_readability);
        assert!(!checks.faq_schema);
    }

    #[test]
    fn quick_checks_serialize_with_dashboard_labels() {
        let checks = QuickChecks::from_signals(&SignalBundle::default());
        let value = serde_json::to_value(checks).expect("should serialize");
        assert_eq!(value["Has TL;DR"], false);
        assert_eq!(value["Author Info"], false);
        assert_eq!(checks.entries().len(), 7);
    }
}
