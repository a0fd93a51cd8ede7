use super::filesystem::find_file;
use std::path::Path;

/// Read a newline-delimited word list: trimmed, non-empty lines in file
/// order. A missing or unreadable file yields an empty list and a logged
/// warning; it never fails the caller.
pub fn load_word_list(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                %err,
                "word list unavailable, continuing with an empty list"
            );
            Vec::new()
        }
    }
}

/// Load a list file by name from anywhere under the lexicon directory.
pub fn load_named_list(dir: &Path, name: &str) -> Vec<String> {
    match find_file(dir, name) {
        Some(path) => load_word_list(&path),
        None => {
            tracing::warn!(
                dir = %dir.display(),
                name,
                "word list not found, continuing with an empty list"
            );
            Vec::new()
        }
    }
}
