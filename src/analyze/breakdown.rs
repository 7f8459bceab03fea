use crate::types::scoring::{round1, ComponentScore, ScoreBreakdown};
use crate::types::signals::SignalBundle;

pub struct SchemaPoints {
    pub faq: f64,
    pub howto: f64,
    pub article: f64,
    pub max: f64,
}

pub struct QuestionPoints {
    pub per_heading: f64,
    pub max: f64,
}

pub struct SnippetPoints {
    pub scale: f64,
    pub max: f64,
}

pub struct StructurePoints {
    pub tldr: f64,
    pub toc: f64,
    pub readable: f64,
    pub readable_threshold: f64,
    pub max: f64,
}

pub struct EeatPoints {
    pub per_signal: f64,
    pub max: f64,
}

pub struct EntityPoints {
    pub rich_above: usize,
    pub rich: f64,
    pub some_above: usize,
    pub some: f64,
    pub max: f64,
}

pub struct Rubric {
    pub schema: SchemaPoints,
    pub questions: QuestionPoints,
    pub snippet: SnippetPoints,
    pub structure: StructurePoints,
    pub eeat: EeatPoints,
    pub entities: EntityPoints,
}

/// Point table for the six components. Maxima sum to 100.
pub const RUBRIC: Rubric = Rubric {
    schema: SchemaPoints {
        faq: 10.0,
        howto: 10.0,
        article: 5.0,
        max: 25.0,
    },
    questions: QuestionPoints {
        per_heading: 4.0,
        max: 20.0,
    },
    snippet: SnippetPoints {
        scale: 0.2,
        max: 20.0,
    },
    structure: StructurePoints {
        tldr: 5.0,
        toc: 5.0,
        readable: 5.0,
        readable_threshold: 60.0,
        max: 15.0,
    },
    eeat: EeatPoints {
        per_signal: 2.5,
        max: 10.0,
    },
    entities: EntityPoints {
        rich_above: 10,
        rich: 10.0,
        some_above: 5,
        some: 5.0,
        max: 10.0,
    },
};

fn points(flag: bool, value: f64) -> f64 {
    if flag {
        value
    } else {
        0.0
    }
}

pub fn schema_score(signals: &SignalBundle, rubric: &Rubric) -> ComponentScore {
    let table = &rubric.schema;
    let score = points(signals.schema.faq_present, table.faq)
        + points(signals.schema.howto_present, table.howto)
        + points(signals.schema.article_present, table.article);
    ComponentScore::new(score, table.max)
}

pub fn question_score(signals: &SignalBundle, rubric: &Rubric) -> ComponentScore {
    let table = &rubric.questions;
    let score = (signals.questions.question_headings as f64 * table.per_heading).min(table.max);
    ComponentScore::new(score, table.max)
}

pub fn snippet_score(signals: &SignalBundle, rubric: &Rubric) -> ComponentScore {
    let table = &rubric.snippet;
    let score = round1(signals.snippet.snippet_score as f64 * table.scale);
    ComponentScore::new(score, table.max)
}

pub fn structure_score(signals: &SignalBundle, rubric: &Rubric) -> ComponentScore {
    let table = &rubric.structure;
    let structure = &signals.structure;
    let score = points(structure.has_tldr, table.tldr)
        + points(structure.has_toc, table.toc)
        + points(
            structure.flesch_reading_ease >= table.readable_threshold,
            table.readable,
        );
    ComponentScore::new(score, table.max)
}

pub fn eeat_score(signals: &SignalBundle, rubric: &Rubric) -> ComponentScore {
    let table = &rubric.eeat;
    let eeat = &signals.eeat;
    let present = [
        eeat.has_author_meta,
        eeat.has_date,
        eeat.has_author_bio,
        eeat.has_sources,
    ]
    .iter()
    .filter(|flag| **flag)
    .count();
    ComponentScore::new(present as f64 * table.per_signal, table.max)
}

pub fn entity_score(signals: &SignalBundle, rubric: &Rubric) -> ComponentScore {
    let table = &rubric.entities;
    let found = signals.entities.entities_found;
    let score = if found > table.rich_above {
        table.rich
    } else if found > table.some_above {
        table.some
    } else {
        0.0
    };
    ComponentScore::new(score, table.max)
}

pub fn score_breakdown(signals: &SignalBundle) -> ScoreBreakdown {
    let rubric = &RUBRIC;
    ScoreBreakdown::new(
        schema_score(signals, rubric),
        question_score(signals, rubric),
        snippet_score(signals, rubric),
        structure_score(signals, rubric),
        eeat_score(signals, rubric),
        entity_score(signals, rubric),
    )
}
