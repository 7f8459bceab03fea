use crate::types::scoring::{round1, Component, Engine, EngineScore, EngineScores, ScoreBreakdown};

/// Multiplier per rubric component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentWeights {
    pub schema: f64,
    pub questions: f64,
    pub snippet: f64,
    pub structure: f64,
    pub eeat: f64,
    pub entities: f64,
}

impl ComponentWeights {
    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::Schema => self.schema,
            Component::Questions => self.questions,
            Component::Snippet => self.snippet,
            Component::Structure => self.structure,
            Component::Eeat => self.eeat,
            Component::Entities => self.entities,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineProfile {
    pub engine: Engine,
    pub weights: ComponentWeights,
    pub focus: &'static str,
}

pub const ENGINE_PROFILES: [EngineProfile; 4] = [
    EngineProfile {
        engine: Engine::ChatGpt,
        weights: ComponentWeights {
            schema: 1.2,
            questions: 1.1,
            snippet: 1.0,
            structure: 1.3,
            eeat: 0.9,
            entities: 1.0,
        },
        focus: "Prioritizes conversational structure and clear formatting",
    },
    EngineProfile {
        engine: Engine::Claude,
        weights: ComponentWeights {
            schema: 1.0,
            questions: 1.2,
            snippet: 1.0,
            structure: 1.4,
            eeat: 1.3,
            entities: 1.1,
        },
        focus: "Emphasizes content quality, trustworthiness, and natural language",
    },
    EngineProfile {
        engine: Engine::Gemini,
        weights: ComponentWeights {
            schema: 1.3,
            questions: 1.0,
            snippet: 1.2,
            structure: 1.0,
            eeat: 1.0,
            entities: 1.2,
        },
        focus: "Strong preference for structured data and entities",
    },
    EngineProfile {
        engine: Engine::Perplexity,
        weights: ComponentWeights {
            schema: 1.1,
            questions: 1.3,
            snippet: 1.2,
            structure: 1.0,
            eeat: 1.2,
            entities: 1.0,
        },
        focus: "Optimized for direct answers and source attribution",
    },
];

/// Weighted share of the weighted maximum, as a percentage. Raw component
/// scores are untouched; only their relative contribution changes.
pub fn weighted_score(breakdown: &ScoreBreakdown, weights: &ComponentWeights) -> f64 {
    let (weighted, weighted_max) = breakdown.iter().fold(
        (0.0, 0.0),
        |(weighted, weighted_max), (component, score)| {
            let weight = weights.get(component);
            (weighted + score.score * weight, weighted_max + score.max * weight)
        },
    );
    if weighted_max <= 0.0 {
        return 0.0;
    }
    round1(100.0 * weighted / weighted_max).clamp(0.0, 100.0)
}

pub fn engine_scores(breakdown: &ScoreBreakdown) -> EngineScores {
    engine_scores_with(breakdown, &ENGINE_PROFILES)
}

pub fn engine_scores_with(breakdown: &ScoreBreakdown, profiles: &[EngineProfile]) -> EngineScores {
    EngineScores(
        profiles
            .iter()
            .map(|profile| EngineScore {
                engine: profile.engine,
                score: weighted_score(breakdown, &profile.weights),
                focus: profile.focus,
            })
            .collect(),
    )
}
