use crate::error::GaugeError;
use crate::types::scoring::{MatchMode, ScoreConfig};
use serde::Deserialize;

pub const DEFAULT_FLAG_THRESHOLD: f32 = 50.0;
pub const DEFAULT_LEXICON_DIR: &str = "lexicon";
pub const DEFAULT_BATCH_COLUMN: &str = "answer";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GaugeConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    pub scoring: Option<ScoringOverrides>,
    pub lexicon: Option<LexiconConfig>,
    pub batch: Option<BatchConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_profile")]
    pub name: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_profile(),
        }
    }
}

fn default_profile() -> String {
    "weighted".to_string()
}

/// Per-field overrides applied on top of the selected preset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringOverrides {
    pub total_weight: Option<f32>,
    pub comma_min_per_sentence: Option<usize>,
    pub comma_min_sentences: Option<usize>,
    pub comma_weight: Option<f32>,
    pub connective_min_count: Option<usize>,
    pub connective_weight: Option<f32>,
    pub long_sentence_min_words: Option<usize>,
    pub long_sentence_min_ratio: Option<f32>,
    pub long_sentence_weight: Option<f32>,
    pub word_class_min_count: Option<usize>,
    pub adverb_weight: Option<f32>,
    pub noun_weight: Option<f32>,
    pub verb_weight: Option<f32>,
    pub adjective_weight: Option<f32>,
    pub match_mode: Option<MatchMode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconConfig {
    pub dir: Option<String>,
    pub adverbs: Option<String>,
    pub nouns: Option<String>,
    pub verbs: Option<String>,
    pub adjectives: Option<String>,
    pub connectives: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchConfig {
    pub column: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    pub flag_threshold: Option<f32>,
}

impl GaugeConfig {
    /// Resolve the preset named by `profile.name`, apply `[scoring]`
    /// overrides, and validate the result.
    pub fn score_config(&self) -> Result<ScoreConfig, GaugeError> {
        let mut cfg = match self.profile.name.as_str() {
            "weighted" => ScoreConfig::weighted(),
            "equal" => ScoreConfig::equal(),
            other => {
                return Err(GaugeError::ConfigParse(format!(
                    "unsupported profile.name: {other}"
                )))
            }
        };

        if let Some(overrides) = &self.scoring {
            if let Some(value) = overrides.total_weight {
                cfg.total_weight = value;
            }
            if let Some(value) = overrides.comma_min_per_sentence {
                cfg.comma_min_per_sentence = value;
            }
            if let Some(value) = overrides.comma_min_sentences {
                cfg.comma_min_sentences = value;
            }
            if let Some(value) = overrides.comma_weight {
                cfg.comma_weight = value;
            }
            if let Some(value) = overrides.connective_min_count {
                cfg.connective_min_count = value;
            }
            if let Some(value) = overrides.connective_weight {
                cfg.connective_weight = value;
            }
            if let Some(value) = overrides.long_sentence_min_words {
                cfg.long_sentence_min_words = value;
            }
            if let Some(value) = overrides.long_sentence_min_ratio {
                cfg.long_sentence_min_ratio = value;
            }
            if let Some(value) = overrides.long_sentence_weight {
                cfg.long_sentence_weight = value;
            }
            if let Some(value) = overrides.word_class_min_count {
                cfg.word_class_min_count = value;
            }
            if let Some(value) = overrides.adverb_weight {
                cfg.adverb_weight = value;
            }
            if let Some(value) = overrides.noun_weight {
                cfg.noun_weight = value;
            }
            if let Some(value) = overrides.verb_weight {
                cfg.verb_weight = value;
            }
            if let Some(value) = overrides.adjective_weight {
                cfg.adjective_weight = value;
            }
            if let Some(value) = overrides.match_mode {
                cfg.match_mode = value;
            }
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn lexicon_dir(&self) -> &str {
        self.lexicon
            .as_ref()
            .and_then(|lexicon| lexicon.dir.as_deref())
            .unwrap_or(DEFAULT_LEXICON_DIR)
    }

    pub fn batch_column(&self) -> &str {
        self.batch
            .as_ref()
            .and_then(|batch| batch.column.as_deref())
            .unwrap_or(DEFAULT_BATCH_COLUMN)
    }

    pub fn flag_threshold(&self) -> f32 {
        self.report
            .as_ref()
            .and_then(|report| report.flag_threshold)
            .unwrap_or(DEFAULT_FLAG_THRESHOLD)
    }

    pub fn validate(&self) -> Result<(), GaugeError> {
        self.score_config()?;

        let threshold = self.flag_threshold();
        if !(0.0..=100.0).contains(&threshold) {
            return Err(GaugeError::ConfigParse(
                "report.flag_threshold must be between 0.0 and 100.0".to_string(),
            ));
        }

        Ok(())
    }
}
