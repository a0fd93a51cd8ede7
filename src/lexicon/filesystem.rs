use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn list_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .collect()
}

/// Locate a file by name anywhere under `root`. Historical lexicon data
/// keeps the list files nested (e.g. `textmining/adverb_list.txt`), so a
/// flat join is not enough.
pub fn find_file(root: &Path, name: &str) -> Option<PathBuf> {
    list_files(root)
        .into_iter()
        .find(|path| path.file_name().and_then(|file| file.to_str()) == Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_file_descends_into_subdirectories() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("textmining")).expect("nested dir should create");
        fs::write(dir.path().join("textmining/adverb_list.txt"), "매우\n")
            .expect("list should write");

        let found = find_file(dir.path(), "adverb_list.txt");
        assert!(found.is_some());
        assert!(find_file(dir.path(), "missing.txt").is_none());
    }
}
