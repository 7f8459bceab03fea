use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub type Score = f64;

/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rubric components, in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Schema,
    Questions,
    Snippet,
    Structure,
    Eeat,
    Entities,
}

impl Component {
    pub const ALL: [Component; 6] = [
        Component::Schema,
        Component::Questions,
        Component::Snippet,
        Component::Structure,
        Component::Eeat,
        Component::Entities,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Component::Schema => "schema",
            Component::Questions => "questions",
            Component::Snippet => "snippet",
            Component::Structure => "structure",
            Component::Eeat => "eeat",
            Component::Entities => "entities",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentScore {
    pub score: Score,
    pub max: Score,
}

impl ComponentScore {
    pub fn new(score: Score, max: Score) -> Self {
        Self {
            score: score.clamp(0.0, max),
            max,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub schema: ComponentScore,
    pub questions: ComponentScore,
    pub snippet: ComponentScore,
    pub structure: ComponentScore,
    pub eeat: ComponentScore,
    pub entities: ComponentScore,
    #[serde(skip)]
    pub total: u32,
}

impl ScoreBreakdown {
    pub fn new(
        schema: ComponentScore,
        questions: ComponentScore,
        snippet: ComponentScore,
        structure: ComponentScore,
        eeat: ComponentScore,
        entities: ComponentScore,
    ) -> Self {
        let mut breakdown = Self {
            schema,
            questions,
            snippet,
            structure,
            eeat,
            entities,
            total: 0,
        };
        let sum: Score = breakdown.iter().map(|(_, component)| component.score).sum();
        breakdown.total = sum.round().clamp(0.0, 100.0) as u32;
        breakdown
    }

    pub fn get(&self, component: Component) -> ComponentScore {
        match component {
            Component::Schema => self.schema,
            Component::Questions => self.questions,
            Component::Snippet => self.snippet,
            Component::Structure => self.structure,
            Component::Eeat => self.eeat,
            Component::Entities => self.entities,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Component, ComponentScore)> + '_ {
        Component::ALL
            .into_iter()
            .map(move |component| (component, self.get(component)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Engine {
    ChatGpt,
    Claude,
    Gemini,
    Perplexity,
}

impl Engine {
    pub fn name(self) -> &'static str {
        match self {
            Engine::ChatGpt => "ChatGPT",
            Engine::Claude => "Claude",
            Engine::Gemini => "Gemini",
            Engine::Perplexity => "Perplexity",
        }
    }
}

impl Serialize for Engine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineScore {
    #[serde(skip)]
    pub engine: Engine,
    pub score: Score,
    pub focus: &'static str,
}

/// Per-engine scores, serialized as an object keyed by engine name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineScores(pub Vec<EngineScore>);

impl EngineScores {
    pub fn get(&self, engine: Engine) -> Option<&EngineScore> {
        self.0.iter().find(|entry| entry.engine == engine)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EngineScore> {
        self.0.iter()
    }
}

impl Serialize for EngineScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(entry.engine.name(), entry)?;
        }
        map.end()
    }
}
