//! Book configuration module.
//!
//! Handles loading and validating `config.toml` from the diary root.
//! Configuration is optional: stock defaults apply when no file exists,
//! and user files are sparse — they only need the keys they override.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! chapter_prefix = "diary_"  # folder prefix stripped from chapter titles
//! extension = "txt"          # entry file extension for --source discovery
//!
//! [document]
//! title = "Diary"            # title page heading
//! author = ""                # author line (empty = omitted)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Book configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the
/// values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BookConfig {
    /// Folder-name prefix stripped when deriving chapter titles.
    /// Empty disables stripping.
    pub chapter_prefix: String,
    /// Entry file extension (without the dot) collected when scanning
    /// a diary root with `--source`.
    pub extension: String,
    /// Title page settings.
    pub document: DocumentConfig,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            chapter_prefix: "diary_".to_string(),
            extension: "txt".to_string(),
            document: DocumentConfig::default(),
        }
    }
}

/// Title page settings emitted into the LaTeX front matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentConfig {
    /// Heading for `\title` on the generated title page.
    pub title: String,
    /// `\author` line below the title. Empty omits the line.
    pub author: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: "Diary".to_string(),
            author: String::new(),
        }
    }
}

impl BookConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extension.is_empty() {
            return Err(ConfigError::Validation(
                "extension must not be empty".into(),
            ));
        }
        if self.extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "extension must not include the leading dot".into(),
            ));
        }
        Ok(())
    }
}

/// Load `config.toml` from `root`, falling back to stock defaults when
/// the file does not exist.
pub fn load_config(root: &Path) -> Result<BookConfig, ConfigError> {
    let path = root.join("config.toml");
    if !path.exists() {
        return Ok(BookConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    let config: BookConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and
/// explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# diary-book Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the diary root (next to the chapter folders).
# Unknown keys will cause an error.

# Folder-name prefix stripped when deriving chapter titles.
# "diary_long_example/" becomes the chapter "Long Example"; folders
# without the prefix keep their name as-is. Empty disables stripping.
chapter_prefix = "diary_"

# Entry file extension (without the dot) collected when scanning a
# diary root with --source. Explicitly listed files are always taken.
extension = "txt"

# ---------------------------------------------------------------------------
# Title page
# ---------------------------------------------------------------------------
[document]
# Heading for the generated title page.
title = "Diary"

# Author line below the title. Leave empty to omit.
author = ""
"##
}
