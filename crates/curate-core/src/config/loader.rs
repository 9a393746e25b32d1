//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::Config;
use super::validation::validate_config;

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()).into());
    }

    let format = if path.extension().is_some_and(|e| e == "toml") {
        "TOML"
    } else {
        "YAML"
    };
    info!(path = %path.display(), format, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config: Config = if format == "TOML" {
        toml::from_str(&content).map_err(ConfigError::TomlError)?
    } else {
        serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?
    };

    validate_config(&config)?;
    debug!(path = %path.display(), "config loaded and validated");
    Ok(config)
}

/// Find configuration file in directory or parent directories.
///
/// At each directory level the search checks `<dir>/<name>` and then
/// `<dir>/.github/<name>`. The first match wins.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in config_file_names() {
            let config_path = current.join(name);
            if config_path.exists() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }

            let github_path = current.join(".github").join(name);
            if github_path.exists() {
                info!(path = %github_path.display(), "found config file in .github/");
                return Some(github_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load configuration or use defaults.
///
/// A config file that exists but fails to parse or validate is still an
/// error; only a missing file falls back to defaults.
pub fn load_config_or_default(dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    match find_config(dir) {
        Some(path) => {
            let config = load_config(&path)?;
            Ok((config, Some(path)))
        }
        None => {
            warn!(dir = %dir.display(), "no config found, using defaults");
            Ok((Config::default(), None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CurateError;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("curate.toml");
        std::fs::write(&config_path, "input = \"log.json\"").unwrap();

        let found = find_config(temp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_prefers_toml_over_yaml() {
        let temp = TempDir::new().unwrap();
        let toml_path = temp.path().join("curate.toml");
        let yaml_path = temp.path().join("curate.yaml");
        std::fs::write(&toml_path, "input = \"log.json\"").unwrap();
        std::fs::write(&yaml_path, "input: log.json").unwrap();

        let found = find_config(temp.path()).unwrap();
        assert_eq!(found, toml_path);
    }

    #[test]
    fn test_find_config_in_github_dir() {
        let temp = TempDir::new().unwrap();
        let github_dir = temp.path().join(".github");
        std::fs::create_dir_all(&github_dir).unwrap();
        let config_path = github_dir.join("curate.yaml");
        std::fs::write(&config_path, "input: log.json").unwrap();

        let found = find_config(temp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(".curate.toml");
        std::fs::write(&config_path, "output = \"NEWS.md\"").unwrap();
        let nested = temp.path().join("docs").join("release");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config(&nested);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_load_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("curate.toml");
        std::fs::write(
            &config_path,
            "output = \"NEWS.md\"\n\n[document]\ntitle = \"Acme Updates\"\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.output, PathBuf::from("NEWS.md"));
        assert_eq!(config.document.title, "Acme Updates");
        assert_eq!(config.document.unreleased_heading, "Recent Updates");
    }

    #[test]
    fn test_load_config_yaml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("curate.yaml");
        std::fs::write(
            &config_path,
            "filter:\n  extra_bot_markers:\n    - renovate\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.filter.extra_bot_markers, vec!["renovate".to_string()]);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let err = load_config(&temp.path().join("curate.toml")).unwrap_err();
        assert!(matches!(err, CurateError::Config(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_config_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let (config, path) = load_config_or_default(temp.path()).unwrap();
        assert!(path.is_none());
        assert_eq!(config.filter.min_message_length, 8);
    }

    #[test]
    fn test_load_config_or_default_rejects_invalid_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("curate.toml"), "[document]\ntitle = \"\"\n").unwrap();

        assert!(load_config_or_default(temp.path()).is_err());
    }
}
