pub mod features;
pub mod sentences;
pub mod stats;

use crate::lexicon::Lexicon;
use crate::types::report::{Band, FeatureHit, GaugeReport};
use crate::types::scoring::{Score, ScoreConfig};

pub use sentences::{score_sentences, split_sentences};

/// Evaluate every feature check against `text`. Pure over its inputs; the
/// same text, lexicon, and config always produce the same breakdown.
pub fn feature_breakdown(text: &str, lexicon: &Lexicon, config: &ScoreConfig) -> Vec<FeatureHit> {
    let sentence_list = sentences::split_sentences(text);

    let comma_count =
        features::comma_heavy_sentences(&sentence_list, config.comma_min_per_sentence);
    let connective_count =
        features::count_list_occurrences(text, &lexicon.connectives, config.match_mode);
    let long_count = features::long_sentences(&sentence_list, config.long_sentence_min_words);
    let long_fired = !sentence_list.is_empty()
        && long_count as f32 >= config.long_sentence_min_ratio * sentence_list.len() as f32;

    let mut hits = vec![
        FeatureHit {
            id: "comma_heavy".to_string(),
            label: "Comma-heavy sentences".to_string(),
            count: comma_count,
            required: config.comma_min_sentences,
            weight: config.comma_weight,
            fired: comma_count >= config.comma_min_sentences,
        },
        FeatureHit {
            id: "connective_density".to_string(),
            label: "Connective words".to_string(),
            count: connective_count,
            required: config.connective_min_count,
            weight: config.connective_weight,
            fired: connective_count >= config.connective_min_count,
        },
        FeatureHit {
            id: "long_sentences".to_string(),
            label: "Long sentences".to_string(),
            count: long_count,
            required: required_long_sentences(config.long_sentence_min_ratio, sentence_list.len()),
            weight: config.long_sentence_weight,
            fired: long_fired,
        },
    ];

    let word_classes: [(&str, &str, &[String], f32); 4] = [
        (
            "adverb_usage",
            "Adverb usage",
            &lexicon.adverbs,
            config.adverb_weight,
        ),
        (
            "noun_usage",
            "Noun usage",
            &lexicon.nouns,
            config.noun_weight,
        ),
        (
            "verb_usage",
            "Verb usage",
            &lexicon.verbs,
            config.verb_weight,
        ),
        (
            "adjective_usage",
            "Adjective usage",
            &lexicon.adjectives,
            config.adjective_weight,
        ),
    ];
    for (id, label, list, weight) in word_classes {
        let count = features::count_list_occurrences(text, list, config.match_mode);
        hits.push(FeatureHit {
            id: id.to_string(),
            label: label.to_string(),
            count,
            required: config.word_class_min_count,
            weight,
            fired: count >= config.word_class_min_count,
        });
    }

    for hit in &hits {
        tracing::debug!(feature = %hit.id, count = hit.count, fired = hit.fired, "feature evaluated");
    }

    hits
}

// Display-only: the smallest count that satisfies the ratio check.
fn required_long_sentences(ratio: f32, sentence_count: usize) -> usize {
    if sentence_count == 0 {
        return 0;
    }
    (ratio * sentence_count as f32 - 1e-6).ceil().max(0.0) as usize
}

/// AI-likelihood of `text` as a percentage in [0, 100].
pub fn score(text: &str, lexicon: &Lexicon, config: &ScoreConfig) -> Score {
    probability(&feature_breakdown(text, lexicon, config), config)
}

fn probability(features: &[FeatureHit], config: &ScoreConfig) -> Score {
    if config.total_weight <= 0.0 {
        return 0.0;
    }
    // fold with a +0.0 identity: Iterator::sum uses -0.0, which yields a
    // negative zero when nothing fires and renders as "-0.0%".
    let earned: f32 = features
        .iter()
        .filter(|hit| hit.fired)
        .map(|hit| hit.weight)
        .fold(0.0, |acc, weight| acc + weight);
    ((earned / config.total_weight) * 100.0).clamp(0.0, 100.0)
}

/// Full report: whole-text probability, feature breakdown, text stats,
/// keyword frequencies, and sentences at or above `flag_threshold`.
pub fn analyze(
    text: &str,
    lexicon: &Lexicon,
    config: &ScoreConfig,
    flag_threshold: Score,
) -> GaugeReport {
    let features = feature_breakdown(text, lexicon, config);
    let probability = probability(&features, config);

    GaugeReport {
        probability,
        band: Band::for_probability(probability),
        features,
        stats: stats::collect(text),
        keywords: stats::top_keywords(text, 5),
        flag_threshold,
        flagged: sentences::score_sentences(text, lexicon, config, flag_threshold),
    }
}

/// Independent per-row scoring; output order matches input order.
pub fn score_batch(rows: &[String], lexicon: &Lexicon, config: &ScoreConfig) -> Vec<Score> {
    rows.iter().map(|row| score(row, lexicon, config)).collect()
}
