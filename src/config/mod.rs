//! Configuration Module - TOML-based Gradebook Configuration
//!
//! Loads and validates configuration from `gradebook.toml`.
//! Every field has a default, so running without a config file works.

pub mod loader;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Application identity and logging.
  #[serde(default)]
  pub app: AppSection,
  /// Where students are stored.
  #[serde(default)]
  pub persistence: PersistenceConfig,
}

/// Application identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
  /// Human-readable application name.
  #[serde(default = "default_name")]
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

/// Persistence configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PersistenceConfig {
  /// JSON Lines file holding one student per line.
  #[serde(default = "default_data_file")]
  pub data_file: String,
}

impl Default for AppSection {
  fn default() -> Self {
    Self {
      name: default_name(),
      log_level: default_log_level(),
    }
  }
}

impl Default for PersistenceConfig {
  fn default() -> Self {
    Self {
      data_file: default_data_file(),
    }
  }
}

// Default value functions for serde

fn default_name() -> String {
  "gradebook".to_string()
}

// Logs share the terminal with the menu, so keep them quiet by default.
fn default_log_level() -> String {
  "warn".to_string()
}

fn default_data_file() -> String {
  "students.json".to_string()
}
