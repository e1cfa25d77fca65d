use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::{detail::ParentLink, error::DetailError, form::FormRules};

pub const SETTINGS_FILE: &str = "campsite.toml";
const CONFIG_DIR_NAME: &str = "campsite-info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_path: PathBuf,
    pub parent_link: ParentLink,
    pub form_rules: FormRules,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/directory.json"),
            parent_link: ParentLink::default(),
            form_rules: FormRules::default(),
        }
    }
}

/// Defaults, then the first settings file found, then `APP__*` environment overrides.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Some(path) = settings_file_candidates().into_iter().find(|p| p.is_file()) {
        match fs::read_to_string(&path) {
            Ok(raw) => {
                if let Err(err) = apply_file(&mut settings, &raw) {
                    tracing::warn!(path = %path.display(), "ignoring settings file: {err}");
                }
            }
            Err(err) => tracing::warn!(path = %path.display(), "unreadable settings file: {err}"),
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings
}

fn settings_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![Path::new(SETTINGS_FILE).to_path_buf()];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE));
    }
    candidates
}

/// Applies a flat `key = value` TOML table. Unknown keys are ignored.
pub fn apply_file(settings: &mut Settings, raw: &str) -> Result<(), DetailError> {
    let table = toml::from_str::<HashMap<String, toml::Value>>(raw)?;
    for (key, value) in table {
        let value = match value {
            toml::Value::String(v) => v,
            toml::Value::Integer(v) => v.to_string(),
            toml::Value::Boolean(v) => v.to_string(),
            other => {
                tracing::warn!(key = %key, "unsupported settings value {other}");
                continue;
            }
        };
        apply_value(settings, &key, &value);
    }
    check_author_bounds(settings);
    Ok(())
}

pub fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    const KEYS: [(&str, &str); 6] = [
        ("APP__DATA_PATH", "data_path"),
        ("APP__PARENT_LINK", "parent_link"),
        ("APP__PARENT_LABEL", "parent_label"),
        ("APP__AUTHOR_MIN_LEN", "author_min_len"),
        ("APP__AUTHOR_MAX_LEN", "author_max_len"),
        ("APP__REQUIRE_BODY", "require_body"),
    ];

    for (var, key) in KEYS {
        if let Some(value) = lookup(var) {
            apply_value(settings, key, &value);
        }
    }
    check_author_bounds(settings);
}

fn apply_value(settings: &mut Settings, key: &str, value: &str) {
    match key {
        "data_path" => settings.data_path = PathBuf::from(value),
        "parent_link" => settings.parent_link.target = value.to_string(),
        "parent_label" => settings.parent_link.label = value.to_string(),
        "author_min_len" => match value.trim().parse::<usize>() {
            Ok(parsed) => settings.form_rules.author_min_len = parsed,
            Err(_) => tracing::warn!(key, value, "ignoring non-numeric setting"),
        },
        "author_max_len" => match value.trim().parse::<usize>() {
            Ok(parsed) => settings.form_rules.author_max_len = parsed,
            Err(_) => tracing::warn!(key, value, "ignoring non-numeric setting"),
        },
        "require_body" => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => settings.form_rules.require_body = true,
            "0" | "false" | "no" => settings.form_rules.require_body = false,
            _ => tracing::warn!(key, value, "ignoring non-boolean setting"),
        },
        _ => tracing::debug!(key, "unknown setting"),
    }
}

fn check_author_bounds(settings: &mut Settings) {
    let rules = &mut settings.form_rules;
    if rules.author_min_len > rules.author_max_len {
        tracing::warn!(
            min = rules.author_min_len,
            max = rules.author_max_len,
            "author length bounds are inverted; using defaults"
        );
        let defaults = FormRules::default();
        rules.author_min_len = defaults.author_min_len;
        rules.author_max_len = defaults.author_max_len;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
