use crate::types::report::{GaugeReport, ScoredSentence};

pub fn to_markdown(report: &GaugeReport) -> String {
    let mut output = String::new();
    output.push_str("# Gauge Report\n\n");
    output.push_str(&format!(
        "AI-likelihood: {:.1}% ({})\n\n",
        report.probability,
        report.band.as_str()
    ));

    output.push_str("## Feature Checks\n\n");
    for feature in &report.features {
        output.push_str(&format!(
            "- [{}] {}: {} (needs {}, +{:.0})\n",
            if feature.fired { "x" } else { " " },
            feature.label,
            feature.count,
            feature.required,
            feature.weight
        ));
    }
    output.push('\n');

    output.push_str("## Text Stats\n\n");
    output.push_str(&format!(
        "- words: {}\n- chars: {}\n- sentences: {}\n\n",
        report.stats.words, report.stats.chars, report.stats.sentences
    ));

    output.push_str("## Keywords\n\n");
    if report.keywords.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for keyword in &report.keywords {
            output.push_str(&format!("- {}: {}\n", keyword.word, keyword.count));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "## Flagged Sentences (>= {:.0}%)\n\n",
        report.flag_threshold
    ));
    output.push_str(&sentence_list(&report.flagged));

    output
}

pub fn sentences_to_markdown(flagged: &[ScoredSentence]) -> String {
    let mut output = String::new();
    output.push_str("# Flagged Sentences\n\n");
    output.push_str(&sentence_list(flagged));
    output
}

fn sentence_list(flagged: &[ScoredSentence]) -> String {
    if flagged.is_empty() {
        return "- none\n".to_string();
    }
    let mut output = String::new();
    for scored in flagged {
        output.push_str(&format!(
            "- ({:.1}%) {}\n",
            scored.probability, scored.text
        ));
    }
    output
}
