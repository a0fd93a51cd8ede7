use crate::lexicon::Lexicon;
use crate::types::report::ScoredSentence;
use crate::types::scoring::{Score, ScoreConfig};

/// Split on sentence-terminal punctuation, trim, drop empties. A trailing
/// fragment without terminal punctuation is kept as its own sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Score each sentence independently and keep those at or above
/// `threshold`, in original order.
pub fn score_sentences(
    text: &str,
    lexicon: &Lexicon,
    config: &ScoreConfig,
    threshold: Score,
) -> Vec<ScoredSentence> {
    split_sentences(text)
        .into_iter()
        .map(|sentence| ScoredSentence {
            text: sentence.to_string(),
            probability: super::score(sentence, lexicon, config),
        })
        .filter(|scored| scored.probability >= threshold)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_handles_all_terminators_and_trailing_text() {
        let text = "첫 문장. 두 번째! 세 번째? 마지막 조각";
        let sentences = split_sentences(text);
        assert_eq!(sentences, vec!["첫 문장", "두 번째", "세 번째", "마지막 조각"]);
    }

    #[test]
    fn split_drops_empty_fragments() {
        assert!(split_sentences("...").is_empty());
        assert!(split_sentences("").is_empty());
        assert_eq!(split_sentences("문장.. 끝."), vec!["문장", "끝"]);
    }

    #[test]
    fn scored_sentences_are_verbatim_trimmed_substrings() {
        let text = "저는 프로젝트를 통해 성장했고, 이를 통해 배웠습니다.  짧은 문장!";
        let lexicon = Lexicon {
            connectives: Lexicon::builtin_connectives(),
            ..Lexicon::default()
        };
        let flagged = score_sentences(text, &lexicon, &ScoreConfig::weighted(), 0.0);
        for scored in &flagged {
            assert!(
                text.contains(&scored.text),
                "sentence {:?} should appear verbatim in the input",
                scored.text
            );
        }
    }

    #[test]
    fn duplicate_sentences_keep_their_multiplicity() {
        let text = "같은 문장. 같은 문장.";
        let lexicon = Lexicon::default();
        let flagged = score_sentences(text, &lexicon, &ScoreConfig::weighted(), 0.0);
        assert_eq!(flagged.len(), 2);
        assert_eq!(flagged[0].text, flagged[1].text);
    }

    #[test]
    fn order_follows_the_input() {
        let text = "가 문장. 나 문장. 다 문장.";
        let lexicon = Lexicon::default();
        let flagged = score_sentences(text, &lexicon, &ScoreConfig::weighted(), 0.0);
        let texts: Vec<&str> = flagged.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["가 문장", "나 문장", "다 문장"]);
    }

    #[test]
    fn threshold_filters_low_probability_sentences() {
        let lexicon = Lexicon {
            connectives: Lexicon::builtin_connectives(),
            ..Lexicon::default()
        };
        // First sentence fires the connective check twice over; second is plain.
        let text = "이는 좋은 결과였고, 이는 성과로, 이어졌습니다. 점심을 먹었다.";
        let all = score_sentences(text, &lexicon, &ScoreConfig::weighted(), 0.0);
        let flagged = score_sentences(text, &lexicon, &ScoreConfig::weighted(), 30.0);
        assert_eq!(all.len(), 2);
        assert_eq!(flagged.len(), 1);
        assert!(flagged[0].text.starts_with("이는"));
    }
}
