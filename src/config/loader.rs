//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `gradebook.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};

use super::AppConfig;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "gradebook.toml";

/// Environment variable overriding the config file path.
pub const CONFIG_ENV_VAR: &str = "GRADEBOOK_CONFIG";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  parse_config(&content)
    .with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_or_default(path: &str) -> Result<AppConfig> {
  if Path::new(path).exists() {
    load_config(path)
  } else {
    Ok(AppConfig::default())
  }
}

/// Parse and validate TOML config text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content).context("Failed to parse TOML")?;
  validate_config(&config)?;
  Ok(config)
}

/// Pick the config path: first CLI argument, then the env var, then the default.
pub fn resolve_path(cli_arg: Option<String>, env_value: Option<String>) -> String {
  cli_arg
    .or(env_value)
    .filter(|p| !p.trim().is_empty())
    .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.persistence.data_file.trim().is_empty(),
    "persistence.data_file must not be empty"
  );

  let level = config.app.log_level.to_ascii_lowercase();
  anyhow::ensure!(
    LOG_LEVELS.contains(&level.as_str()),
    "app.log_level must be one of {LOG_LEVELS:?}, got {:?}",
    config.app.log_level
  );

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn test_missing_file_gives_defaults() {
    let config = load_or_default("definitely-not-here.toml").unwrap();
    assert_eq!(config.persistence.data_file, "students.json");
    assert_eq!(config.app.log_level, "warn");
  }

  #[test]
  fn test_parse_full_config() {
    let config = parse_config(
      r#"
        [app]
        name = "school"
        log_level = "DEBUG"

        [persistence]
        data_file = "data/students.jsonl"
      "#,
    )
    .unwrap();
    assert_eq!(config.app.name, "school");
    assert_eq!(config.persistence.data_file, "data/students.jsonl");
  }

  #[test]
  fn test_partial_config_uses_defaults() {
    let config = parse_config("[persistence]\ndata_file = \"x.json\"\n").unwrap();
    assert_eq!(config.app.name, "gradebook");
    assert_eq!(config.persistence.data_file, "x.json");
  }

  #[test]
  fn test_rejects_empty_data_file() {
    assert!(parse_config("[persistence]\ndata_file = \"  \"\n").is_err());
  }

  #[test]
  fn test_rejects_unknown_log_level() {
    assert!(parse_config("[app]\nlog_level = \"loud\"\n").is_err());
  }

  #[test]
  fn test_resolve_path_precedence() {
    assert_eq!(
      resolve_path(Some("a.toml".into()), Some("b.toml".into())),
      "a.toml"
    );
    assert_eq!(resolve_path(None, Some("b.toml".into())), "b.toml");
    assert_eq!(resolve_path(None, None), DEFAULT_CONFIG_PATH);
  }
}
