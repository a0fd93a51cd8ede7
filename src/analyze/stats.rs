use super::sentences::split_sentences;
use crate::types::report::{KeywordCount, TextStats};
use std::collections::HashMap;

pub fn collect(text: &str) -> TextStats {
    TextStats {
        chars: text.chars().count(),
        words: text.split_whitespace().count(),
        sentences: split_sentences(text).len(),
    }
}

/// Most frequent lowercased alphanumeric words, ties broken by first
/// appearance.
pub fn top_keywords(text: &str, limit: usize) -> Vec<KeywordCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for raw in text.split(|c: char| !c.is_alphanumeric()) {
        if raw.is_empty() {
            continue;
        }
        let word = raw.to_lowercase();
        if !counts.contains_key(&word) {
            order.push(word.clone());
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    // Stable sort keeps first-appearance order within equal counts.
    order.sort_by_key(|word| std::cmp::Reverse(counts.get(word).copied().unwrap_or(0)));
    order
        .into_iter()
        .take(limit)
        .map(|word| KeywordCount {
            count: counts.get(&word).copied().unwrap_or(0),
            word,
        })
        .collect()
}
