pub mod filesystem;
pub mod loader;

use crate::types::config::GaugeConfig;
use std::path::Path;

pub const ADVERB_LIST: &str = "adverb_list.txt";
pub const NOUN_LIST: &str = "noun_list.txt";
pub const VERB_LIST: &str = "verb_list.txt";
pub const ADJECTIVE_LIST: &str = "adjective_list.txt";

/// Transition/conjunction terms used as a stylistic signal. Applied when no
/// connectives file is configured or the configured file is empty.
pub const DEFAULT_CONNECTIVES: [&str; 12] = [
    "시절",
    "맡았으며",
    "특히",
    "우선",
    "입사 후",
    "에서,",
    "이에 따라",
    "바탕으로",
    "저는",
    "고,",
    "이는",
    "통해",
];

/// Reference word lists, loaded once at startup and shared read-only by
/// every scoring call.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub adverbs: Vec<String>,
    pub nouns: Vec<String>,
    pub verbs: Vec<String>,
    pub adjectives: Vec<String>,
    pub connectives: Vec<String>,
}

impl Lexicon {
    /// Load all lists from the configured lexicon directory under `root`.
    /// Missing lists come back empty; the corresponding feature checks then
    /// simply never fire.
    pub fn load(root: &Path, config: Option<&GaugeConfig>) -> Lexicon {
        let defaults = GaugeConfig::default();
        let config = config.unwrap_or(&defaults);
        let dir = root.join(config.lexicon_dir());

        let names = config.lexicon.clone().unwrap_or_default();
        let adverbs = loader::load_named_list(&dir, names.adverbs.as_deref().unwrap_or(ADVERB_LIST));
        let nouns = loader::load_named_list(&dir, names.nouns.as_deref().unwrap_or(NOUN_LIST));
        let verbs = loader::load_named_list(&dir, names.verbs.as_deref().unwrap_or(VERB_LIST));
        let adjectives =
            loader::load_named_list(&dir, names.adjectives.as_deref().unwrap_or(ADJECTIVE_LIST));

        let connectives = match names.connectives.as_deref() {
            Some(name) => {
                let loaded = loader::load_named_list(&dir, name);
                if loaded.is_empty() {
                    Self::builtin_connectives()
                } else {
                    loaded
                }
            }
            None => Self::builtin_connectives(),
        };

        Lexicon {
            adverbs,
            nouns,
            verbs,
            adjectives,
            connectives,
        }
    }

    pub fn builtin_connectives() -> Vec<String> {
        DEFAULT_CONNECTIVES.iter().map(|s| s.to_string()).collect()
    }

    /// True when every part-of-speech list is empty (connectives always
    /// have at least the built-in fallback).
    pub fn word_classes_empty(&self) -> bool {
        self.adverbs.is_empty()
            && self.nouns.is_empty()
            && self.verbs.is_empty()
            && self.adjectives.is_empty()
    }
}
