use crate::types::scoring::Score;
use serde::Serialize;

/// Probability bands matching the historical gauge segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Low,
    Moderate,
    High,
}

impl Band {
    pub fn for_probability(probability: Score) -> Band {
        if probability >= 66.0 {
            Band::High
        } else if probability >= 33.0 {
            Band::Moderate
        } else {
            Band::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Low => "low",
            Band::Moderate => "moderate",
            Band::High => "high",
        }
    }
}

/// One evaluated feature check: the observed count, the count it needed
/// to fire, and the weight it contributed if it did.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureHit {
    pub id: String,
    pub label: String,
    pub count: usize,
    pub required: usize,
    pub weight: f32,
    pub fired: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TextStats {
    pub chars: usize,
    pub words: usize,
    pub sentences: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredSentence {
    pub text: String,
    pub probability: Score,
}

#[derive(Debug, Clone, Serialize)]
pub struct GaugeReport {
    pub probability: Score,
    pub band: Band,
    pub features: Vec<FeatureHit>,
    pub stats: TextStats,
    pub keywords: Vec<KeywordCount>,
    pub flag_threshold: Score,
    pub flagged: Vec<ScoredSentence>,
}
