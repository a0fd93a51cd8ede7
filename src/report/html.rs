use crate::types::report::{GaugeReport, ScoredSentence};

const HIGHLIGHT_RGB: &str = "128, 92, 251";

/// Render the input with flagged sentences wrapped in highlight spans whose
/// opacity tracks the sentence probability. Sentences are substituted
/// longest-first so a short sentence never clobbers part of a longer match.
pub fn to_html(text: &str, report: &GaugeReport) -> String {
    let mut flagged: Vec<&ScoredSentence> = report.flagged.iter().collect();
    flagged.sort_by(|a, b| b.text.chars().count().cmp(&a.text.chars().count()));

    let mut highlighted = text.to_string();
    for scored in flagged {
        let span = format!(
            "<span style=\"background-color: rgba({HIGHLIGHT_RGB}, {:.2});\">{}</span>",
            scored.probability / 100.0,
            scored.text
        );
        highlighted = highlighted.replace(&scored.text, &span);
    }

    format!(
        "<div class=\"gauge-report\">\n\
         <p class=\"gauge-score\">AI-likelihood: {:.1}% ({})</p>\n\
         <p class=\"gauge-text\">{}</p>\n\
         </div>\n",
        report.probability,
        report.band.as_str(),
        highlighted
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::{Band, GaugeReport, TextStats};

    fn report_with_flagged(flagged: Vec<ScoredSentence>) -> GaugeReport {
        GaugeReport {
            probability: 55.0,
            band: Band::Moderate,
            features: vec![],
            stats: TextStats::default(),
            keywords: vec![],
            flag_threshold: 50.0,
            flagged,
        }
    }

    #[test]
    fn flagged_sentences_are_wrapped_in_spans() {
        let text = "이는 좋은 결과였습니다. 점심을 먹었다.";
        let report = report_with_flagged(vec![ScoredSentence {
            text: "이는 좋은 결과였습니다".to_string(),
            probability: 55.0,
        }]);

        let rendered = to_html(text, &report);
        assert!(rendered.contains("rgba(128, 92, 251, 0.55)"));
        assert!(rendered.contains("<span style="));
        assert!(rendered.contains("점심을 먹었다"));
        assert!(!rendered.contains("<span style=\"background-color: rgba(128, 92, 251, 0.55);\">점심을"));
    }

    #[test]
    fn longer_sentences_are_substituted_first() {
        let text = "짧은 문장 그리고 더 길어진 짧은 문장";
        let report = report_with_flagged(vec![
            ScoredSentence {
                text: "짧은 문장".to_string(),
                probability: 60.0,
            },
            ScoredSentence {
                text: "더 길어진 짧은 문장".to_string(),
                probability: 80.0,
            },
        ]);

        let rendered = to_html(text, &report);
        // The long sentence keeps one contiguous span even though the short
        // one is its substring.
        assert!(rendered.contains("0.80);\">더 길어진"));
    }

    #[test]
    fn no_flagged_sentences_leaves_text_untouched() {
        let text = "아무 일도 없었다.";
        let rendered = to_html(text, &report_with_flagged(vec![]));
        assert!(rendered.contains(text));
        assert!(!rendered.contains("<span"));
    }
}
