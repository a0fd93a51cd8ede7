use crate::error::{GaugeError, Result};
use crate::types::config::GaugeConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "gauge.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".gauge/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/gptgauge/config.toml";

/// Written by `gptgauge init`; must stay parseable as a valid GaugeConfig.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"[profile]
name = "weighted"

[lexicon]
dir = "lexicon"

[report]
flag_threshold = 50.0

# Per-feature overrides; weights must sum to total_weight.
# [scoring]
# total_weight = 100.0
# comma_weight = 20.0
# connective_weight = 35.0
# long_sentence_weight = 15.0
# adverb_weight = 15.0
# noun_weight = 5.0
# verb_weight = 5.0
# adjective_weight = 5.0
# match_mode = "substring"
"#;

pub fn load_config(root: &Path) -> Result<Option<GaugeConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<GaugeConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: GaugeConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| GaugeError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| GaugeError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
