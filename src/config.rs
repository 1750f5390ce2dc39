use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::ModelDraft;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read config \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to reserialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// A custom model declared in the configuration.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CustomModel {
    pub id: String,
    /// Replace an existing model with the same identifier.
    #[serde(rename = "override", default)]
    pub override_existing: bool,
    #[serde(flatten)]
    pub draft: ModelDraft,
}

#[derive(Deserialize, Serialize, Default, Debug)]
pub struct Config {
    /// The number of suggestions shown when a model is not found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion_limit: Option<usize>,
    #[serde(default)]
    pub models: Vec<CustomModel>,
}

/// A configuration along with where it came from.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub path: Option<PathBuf>,
    pub config: Config,
    /// Dotted paths of keys which are not part of the configuration format.
    pub extraneous_keys: Vec<String>,
}

fn get_config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME");

    if let Some(home) = home {
        let home = PathBuf::from(home);

        const USER_PATHS: [&str; 2] = [".config/omnai/config.toml", ".omnai.toml"];

        for &path in USER_PATHS.iter() {
            let fullpath = home.join(path);

            if fullpath.exists() {
                return Some(fullpath);
            }
        }
    }

    let system_config = PathBuf::from("/etc/omnai.toml");

    if system_config.exists() {
        Some(system_config)
    } else {
        None
    }
}

pub fn parse_config(raw_config: &str) -> Result<Config, Error> {
    Ok(toml::de::from_str(raw_config)?)
}

fn extraneous_keys_helper(
    path: &mut Vec<String>,
    user_value: &toml::Value,
    config_value: &toml::Value,
    found: &mut Vec<String>,
) {
    match (user_value, config_value) {
        (toml::Value::Table(user_table), toml::Value::Table(config_table)) => {
            for (user_key, user_value) in user_table {
                path.push(user_key.clone());

                match config_table.get(user_key) {
                    Some(config_value) => {
                        extraneous_keys_helper(path, user_value, config_value, found)
                    }
                    None => found.push(path.join(".")),
                }

                path.pop();
            }
        }
        (toml::Value::Array(user_array), toml::Value::Array(config_array)) => {
            for (i, (user_value, config_value)) in
                user_array.iter().zip(config_array.iter()).enumerate()
            {
                path.push(i.to_string());

                extraneous_keys_helper(path, user_value, config_value, found);

                path.pop();
            }
        }
        _ => {}
    }
}

/// Returns the keys present in `raw_config` which did not survive deserialization
/// into `config`.
pub fn extraneous_keys(config: &Config, raw_config: &str) -> Result<Vec<String>, Error> {
    let user_config: toml::Table = toml::de::from_str(raw_config)?;

    let config: toml::Table = {
        let serialized_config = toml::ser::to_string(config)?;

        toml::de::from_str(&serialized_config)?
    };

    let mut path = Vec::new();
    let mut found = Vec::new();

    extraneous_keys_helper(
        &mut path,
        &toml::Value::Table(user_config),
        &toml::Value::Table(config),
        &mut found,
    );

    Ok(found)
}

fn read_config_at(path: &Path) -> Result<LoadedConfig, Error> {
    let raw_config = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_config(&raw_config)?;

    let extraneous_keys = extraneous_keys(&config, &raw_config)?;

    Ok(LoadedConfig {
        path: Some(path.to_path_buf()),
        config,
        extraneous_keys,
    })
}

/// Read the configuration at `config`, or search the default locations when no
/// path is given. A missing configuration yields the defaults.
pub fn read_config(config: Option<PathBuf>) -> Result<LoadedConfig, Error> {
    let config_path = config.or_else(get_config_path);

    match config_path {
        Some(path) => read_config_at(&path),
        None => Ok(LoadedConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostTier, SpeedTier};
    use std::io::Write;

    const CONFIG: &str = r#"
suggestion_limit = 3

[[models]]
id = "my-model"
engine = "ollama"
model = "custom:latest"
cost = "free"
speed = "very-fast"
best_for = ["testing"]

[[models]]
id = "gpt-4o"
engine = "opencode"
model = "openai/gpt-4o"
override = true
"#;

    #[test]
    fn parses_custom_models() {
        let config = parse_config(CONFIG).unwrap();

        assert_eq!(config.suggestion_limit, Some(3));
        assert_eq!(config.models.len(), 2);

        let first = &config.models[0];
        assert_eq!(first.id, "my-model");
        assert!(!first.override_existing);
        assert_eq!(first.draft.cost, CostTier::Free);
        assert_eq!(first.draft.speed, SpeedTier::VeryFast);
        assert_eq!(first.draft.best_for, ["testing"]);

        assert!(config.models[1].override_existing);
    }

    #[test]
    fn rejects_models_without_engine() {
        let result = parse_config(
            r#"
[[models]]
id = "my-model"
model = "custom:latest"
"#,
        );

        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn reports_extraneous_keys() {
        let raw = r#"
editor = "vim"

[[models]]
id = "my-model"
engine = "ollama"
model = "custom:latest"
colour = "blue"
"#;
        let config = parse_config(raw).unwrap();

        let found = extraneous_keys(&config, raw).unwrap();

        assert_eq!(found, ["editor", "models.0.colour"]);
    }

    #[test]
    fn no_extraneous_keys_in_valid_config() {
        let config = parse_config(CONFIG).unwrap();

        assert!(extraneous_keys(&config, CONFIG).unwrap().is_empty());
    }

    #[test]
    fn reads_config_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();

        let loaded = read_config(Some(file.path().to_path_buf())).unwrap();

        assert_eq!(loaded.path.as_deref(), Some(file.path()));
        assert_eq!(loaded.config.models.len(), 2);
        assert!(loaded.extraneous_keys.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = read_config(Some(dir.path().join("missing.toml")));

        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
