use crate::error::GaugeError;
use serde::Deserialize;

pub type Score = f32;

/// How lexicon words and connectives are matched against the input.
///
/// `Substring` is the historical behavior: literal, case-sensitive,
/// overlapping substring counting, which also matches inside longer words.
/// `Token` restricts matches to whole alphanumeric tokens and is stricter;
/// multi-token lexicon entries never match in this mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    Substring,
    Token,
}

/// All thresholds and weights for the heuristic scorer. The two shipped
/// presets reproduce the two historical scoring variants; everything else
/// is a per-field override on top of a preset.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreConfig {
    /// Score denominator; fired weights are summed and divided by this.
    pub total_weight: f32,
    pub comma_min_per_sentence: usize,
    pub comma_min_sentences: usize,
    pub comma_weight: f32,
    pub connective_min_count: usize,
    pub connective_weight: f32,
    /// A sentence is "long" when its whitespace word count exceeds this.
    pub long_sentence_min_words: usize,
    pub long_sentence_min_ratio: f32,
    pub long_sentence_weight: f32,
    pub word_class_min_count: usize,
    pub adverb_weight: f32,
    pub noun_weight: f32,
    pub verb_weight: f32,
    pub adjective_weight: f32,
    pub match_mode: MatchMode,
}

impl ScoreConfig {
    /// 100-point table: 20 + 35 + 15 + 15 + 5 + 5 + 5.
    pub fn weighted() -> Self {
        Self {
            total_weight: 100.0,
            comma_min_per_sentence: 2,
            comma_min_sentences: 1,
            comma_weight: 20.0,
            connective_min_count: 2,
            connective_weight: 35.0,
            long_sentence_min_words: 20,
            long_sentence_min_ratio: 0.30,
            long_sentence_weight: 15.0,
            word_class_min_count: 2,
            adverb_weight: 15.0,
            noun_weight: 5.0,
            verb_weight: 5.0,
            adjective_weight: 5.0,
            match_mode: MatchMode::Substring,
        }
    }

    /// Seven equally weighted checks, one point each.
    pub fn equal() -> Self {
        Self {
            total_weight: 7.0,
            comma_weight: 1.0,
            connective_weight: 1.0,
            long_sentence_weight: 1.0,
            adverb_weight: 1.0,
            noun_weight: 1.0,
            verb_weight: 1.0,
            adjective_weight: 1.0,
            ..Self::weighted()
        }
    }

    pub fn weight_sum(&self) -> f32 {
        self.comma_weight
            + self.connective_weight
            + self.long_sentence_weight
            + self.adverb_weight
            + self.noun_weight
            + self.verb_weight
            + self.adjective_weight
    }

    pub fn validate(&self) -> Result<(), GaugeError> {
        if self.total_weight <= 0.0 {
            return Err(GaugeError::ConfigParse(
                "scoring.total_weight must be greater than 0".to_string(),
            ));
        }
        let sum = self.weight_sum();
        if (sum - self.total_weight).abs() > 0.001 {
            return Err(GaugeError::ConfigParse(format!(
                "scoring weights must sum to total_weight (found {:.3}, expected {:.3})",
                sum, self.total_weight
            )));
        }
        if !(0.0..=1.0).contains(&self.long_sentence_min_ratio) {
            return Err(GaugeError::ConfigParse(
                "scoring.long_sentence_min_ratio must be between 0.0 and 1.0".to_string(),
            ));
        }
        if self.comma_min_sentences == 0
            || self.connective_min_count == 0
            || self.word_class_min_count == 0
        {
            return Err(GaugeError::ConfigParse(
                "scoring occurrence thresholds must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self::weighted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_preset_sums_to_total() {
        let cfg = ScoreConfig::weighted();
        assert!((cfg.weight_sum() - cfg.total_weight).abs() < 0.001);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn equal_preset_sums_to_total() {
        let cfg = ScoreConfig::equal();
        assert!((cfg.weight_sum() - 7.0).abs() < 0.001);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_weight_sum_mismatch() {
        let cfg = ScoreConfig {
            comma_weight: 25.0,
            ..ScoreConfig::weighted()
        };
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("must sum to total_weight"));
    }

    #[test]
    fn validate_rejects_out_of_range_ratio() {
        let cfg = ScoreConfig {
            long_sentence_min_ratio: 1.5,
            ..ScoreConfig::weighted()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_occurrence_threshold() {
        let cfg = ScoreConfig {
            connective_min_count: 0,
            ..ScoreConfig::weighted()
        };
        assert!(cfg.validate().is_err());
    }
}
