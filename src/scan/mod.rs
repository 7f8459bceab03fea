//! Signal extractors. Each reads the page independently and produces one
//! record of the [`SignalBundle`].

pub mod entities;
pub mod questions;
pub mod readability;
pub mod schema;
pub mod snippet;
pub mod structure;
pub mod trust;

use crate::page::Document;
use crate::types::signals::SignalBundle;

pub fn discover(doc: &dyn Document) -> SignalBundle {
    let bundle = SignalBundle {
        schema: schema::detect_schema(doc),
        questions: questions::detect_questions(doc),
        snippet: snippet::detect_snippet(doc),
        structure: structure::detect_structure(doc),
        entities: entities::detect_entities(doc),
        eeat: trust::detect_trust(doc),
    };
    tracing::debug!(
        faq = bundle.schema.faq_present,
        question_headings = bundle.questions.question_headings,
        snippet_score = bundle.snippet.snippet_score,
        word_count = bundle.structure.word_count,
        entities = bundle.entities.entities_found,
        "signals extracted"
    );
    bundle
}
