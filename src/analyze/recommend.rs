use crate::scan::snippet::ANSWER_WORDS;
use crate::types::report::{Effort, Priority, Recommendation};
use crate::types::signals::SignalBundle;

pub const MIN_QUESTION_HEADINGS: usize = 3;
pub const MAX_AVG_PARAGRAPH_WORDS: f64 = 100.0;
pub const MIN_ENTITIES: usize = 10;

/// One recommendation and the condition that triggers it.
pub struct Rule {
    pub id: &'static str,
    pub priority: Priority,
    pub category: &'static str,
    pub action: &'static str,
    pub impact: &'static str,
    pub effort: Effort,
    pub applies: fn(&SignalBundle) -> bool,
}

impl Rule {
    pub fn recommendation(&self) -> Recommendation {
        Recommendation::new(
            self.id,
            self.priority,
            self.category,
            self.action,
            self.impact,
            self.effort,
        )
    }
}

fn missing_faq_schema(signals: &SignalBundle) -> bool {
    !signals.schema.faq_present
}

fn few_question_headings(signals: &SignalBundle) -> bool {
    signals.questions.question_headings < MIN_QUESTION_HEADINGS
}

fn first_paragraph_off_target(signals: &SignalBundle) -> bool {
    !ANSWER_WORDS.contains(&signals.snippet.first_para_words)
}

fn missing_author_meta(signals: &SignalBundle) -> bool {
    !signals.eeat.has_author_meta
}

fn howto_content_without_schema(signals: &SignalBundle) -> bool {
    !signals.schema.howto_present
        && signals
            .questions
            .question_heading_examples
            .iter()
            .any(|heading| heading.to_lowercase().contains("how"))
}

fn missing_lists(signals: &SignalBundle) -> bool {
    signals.snippet.lists == 0
}

fn missing_tldr(signals: &SignalBundle) -> bool {
    !signals.structure.has_tldr
}

fn long_paragraphs(signals: &SignalBundle) -> bool {
    signals.structure.avg_para_length > MAX_AVG_PARAGRAPH_WORDS
}

fn few_entities(signals: &SignalBundle) -> bool {
    signals.entities.entities_found < MIN_ENTITIES
}

fn missing_sources(signals: &SignalBundle) -> bool {
    !signals.eeat.has_sources
}

fn missing_toc(signals: &SignalBundle) -> bool {
    !signals.structure.has_toc
}

/// Rules in authoring order. Output is sorted by priority afterwards, so
/// order only matters between rules of the same priority.
pub const RULES: [Rule; 11] = [
    Rule {
        id: "schema.faq",
        priority: Priority::High,
        category: "Schema Markup",
        action: "Add FAQ schema markup to target 'People Also Ask' boxes",
        impact: "Critical for all answer engines - enables direct answer extraction",
        effort: Effort::Medium,
        applies: missing_faq_schema,
    },
    Rule {
        id: "content.question_headings",
        priority: Priority::High,
        category: "Content Structure",
        action: "Add more question-based headings (What, Why, How)",
        impact: "Improves discoverability in conversational AI searches",
        effort: Effort::Low,
        applies: few_question_headings,
    },
    Rule {
        id: "snippet.first_paragraph",
        priority: Priority::High,
        category: "Snippet Optimization",
        action: "Optimize first paragraph to 40-60 words for featured snippets",
        impact: "Increases chances of being selected as the primary answer",
        effort: Effort::Low,
        applies: first_paragraph_off_target,
    },
    Rule {
        id: "eeat.author",
        priority: Priority::Medium,
        category: "E-E-A-T",
        action: "Add author information and credentials",
        impact: "Builds trust signals, especially important for Claude and Perplexity",
        effort: Effort::Low,
        applies: missing_author_meta,
    },
    Rule {
        id: "schema.howto",
        priority: Priority::Medium,
        category: "Schema Markup",
        action: "Add HowTo schema for step-by-step content",
        impact: "Enhances visibility for process-oriented queries",
        effort: Effort::Medium,
        applies: howto_content_without_schema,
    },
    Rule {
        id: "format.lists",
        priority: Priority::Medium,
        category: "Content Format",
        action: "Add bulleted or numbered lists for better snippet visibility",
        impact: "Makes content easier to extract and cite",
        effort: Effort::Low,
        applies: missing_lists,
    },
    Rule {
        id: "content.tldr",
        priority: Priority::Medium,
        category: "Content Structure",
        action: "Add a TL;DR or summary section at the beginning",
        impact: "Provides quick answer extraction point",
        effort: Effort::Medium,
        applies: missing_tldr,
    },
    Rule {
        id: "readability.paragraphs",
        priority: Priority::Low,
        category: "Readability",
        action: "Break down paragraphs into shorter chunks (2-3 sentences)",
        impact: "Improves readability scores and scannability",
        effort: Effort::Medium,
        applies: long_paragraphs,
    },
    Rule {
        id: "semantic.entities",
        priority: Priority::Low,
        category: "Semantic SEO",
        action: "Include more relevant entities and topics for semantic richness",
        impact: "Helps with entity recognition, especially for Gemini",
        effort: Effort::High,
        applies: few_entities,
    },
    Rule {
        id: "eeat.sources",
        priority: Priority::Low,
        category: "E-E-A-T",
        action: "Add references and citations to external sources",
        impact: "Strengthens credibility and fact-checking",
        effort: Effort::Medium,
        applies: missing_sources,
    },
    Rule {
        id: "navigation.toc",
        priority: Priority::Low,
        category: "Navigation",
        action: "Add a table of contents for long-form content",
        impact: "Improves content navigation and structure signals",
        effort: Effort::Low,
        applies: missing_toc,
    },
];

pub fn recommendations(signals: &SignalBundle) -> Vec<Recommendation> {
    recommendations_with(signals, &RULES)
}

pub fn recommendations_with(signals: &SignalBundle, rules: &[Rule]) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = rules
        .iter()
        .filter(|rule| (rule.applies)(signals))
        .map(Rule::recommendation)
        .collect();
    recommendations.sort_by_key(|recommendation| recommendation.priority.rank());
    recommendations
}
