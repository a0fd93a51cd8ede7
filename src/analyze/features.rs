use crate::types::scoring::MatchMode;

/// Count occurrences of `needle` in `text` under the given match mode.
///
/// Substring counting is literal, case-sensitive, and overlapping; it also
/// matches inside longer words. That imprecision is the historical contract
/// and is kept for score fidelity; `Token` is the stricter opt-in.
pub fn count_occurrences(text: &str, needle: &str, mode: MatchMode) -> usize {
    match mode {
        MatchMode::Substring => count_substring(text, needle),
        MatchMode::Token => count_tokens(text, needle),
    }
}

/// Sum of occurrence counts over a whole word list.
pub fn count_list_occurrences(text: &str, words: &[String], mode: MatchMode) -> usize {
    words
        .iter()
        .map(|word| count_occurrences(text, word, mode))
        .sum()
}

fn count_substring(text: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    // Advancing by one char past each match start keeps overlapping
    // matches countable and stays on char boundaries.
    let step = needle.chars().next().map(char::len_utf8).unwrap_or(1);
    let mut count = 0;
    let mut start = 0;
    while start <= text.len() {
        match text[start..].find(needle) {
            Some(pos) => {
                count += 1;
                start += pos + step;
            }
            None => break,
        }
    }
    count
}

fn count_tokens(text: &str, needle: &str) -> usize {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty() && *token == needle)
        .count()
}

/// Number of sentences containing at least `min_commas` commas.
pub fn comma_heavy_sentences(sentences: &[&str], min_commas: usize) -> usize {
    sentences
        .iter()
        .filter(|sentence| sentence.matches(',').count() >= min_commas)
        .count()
}

/// Number of sentences whose whitespace word count exceeds `min_words`.
pub fn long_sentences(sentences: &[&str], min_words: usize) -> usize {
    sentences
        .iter()
        .filter(|sentence| sentence.split_whitespace().count() > min_words)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_counting_is_overlapping() {
        assert_eq!(count_occurrences("aaaa", "aa", MatchMode::Substring), 3);
    }

    #[test]
    fn substring_counting_matches_inside_words() {
        // The known imprecision: "통해" matches inside "소통해야".
        assert_eq!(
            count_occurrences("소통해야 합니다", "통해", MatchMode::Substring),
            1
        );
    }

    #[test]
    fn substring_counting_is_case_sensitive() {
        assert_eq!(count_occurrences("However, however", "however", MatchMode::Substring), 1);
    }

    #[test]
    fn empty_needle_counts_zero() {
        assert_eq!(count_occurrences("anything", "", MatchMode::Substring), 0);
        assert_eq!(count_occurrences("anything", "", MatchMode::Token), 0);
    }

    #[test]
    fn token_counting_requires_whole_tokens() {
        assert_eq!(
            count_occurrences("소통해야 합니다", "통해", MatchMode::Token),
            0
        );
        assert_eq!(
            count_occurrences("통해 소통 통해", "통해", MatchMode::Token),
            2
        );
    }

    #[test]
    fn list_occurrences_sum_over_all_words() {
        let words = vec!["이는".to_string(), "통해".to_string()];
        let text = "이는 경험을 통해 얻었고 이는 중요합니다";
        assert_eq!(
            count_list_occurrences(text, &words, MatchMode::Substring),
            3
        );
    }

    #[test]
    fn comma_heavy_sentences_counts_only_qualifying() {
        let sentences = vec!["하나, 둘, 셋", "쉼표 없음", "넷, 다섯"];
        assert_eq!(comma_heavy_sentences(&sentences, 2), 1);
    }

    #[test]
    fn long_sentences_use_strict_word_count() {
        let five_words = "하나 둘 셋 넷 다섯";
        let six_words = "하나 둘 셋 넷 다섯 여섯";
        let sentences = vec![five_words, six_words];
        assert_eq!(long_sentences(&sentences, 5), 1);
    }
}
