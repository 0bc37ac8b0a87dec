//! # Campus Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for Campus, handling loading,
//! merging, and validation of configuration data. Only the outer surfaces are
//! configurable (the chatbot's display name and random seed, the grade book's
//! subject list and maximum mark); the chatbot's rule table is fixed.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit path given with `--config` or `CAMPUS_CONFIG`
//! 2. Project-specific `.campus.toml` in current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```rust
//! let cfg = config::load_config(args.config.as_deref())?;
//! let bot_name = &cfg.chat.bot_name;
//! let subjects = &cfg.grades.subjects;
//! ```
//!
use crate::core::error::{CampusError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The resolved configuration every command reads. Built from the merged
/// `ConfigLayer`s with defaults filled in.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub chat: ChatConfig,
    pub grades: GradesConfig,
}

/// Settings for `campus chat`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    /// Name printed in front of every reply.
    pub bot_name: String,
    /// Fixed seed for reply selection. Entropy is used when absent.
    pub seed: Option<u64>,
}

/// Settings for `campus grades`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradesConfig {
    /// Subjects a mark is collected for, in prompt order.
    pub subjects: Vec<String>,
    /// Highest mark a single subject accepts.
    pub max_mark: f64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            seed: None,
        }
    }
}

impl Default for GradesConfig {
    fn default() -> Self {
        Self {
            subjects: default_subjects(),
            max_mark: default_max_mark(),
        }
    }
}

/// One configuration file as written on disk. Every field is optional so a
/// layer only overrides what it actually sets.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConfigLayer {
    #[serde(default)]
    chat: ChatLayer,
    #[serde(default)]
    grades: GradesLayer,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ChatLayer {
    bot_name: Option<String>,
    seed: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct GradesLayer {
    subjects: Option<Vec<String>>,
    max_mark: Option<f64>,
}

impl ConfigLayer {
    /// Fills every unset field with its default.
    fn resolve(self) -> Config {
        Config {
            chat: ChatConfig {
                bot_name: self.chat.bot_name.unwrap_or_else(default_bot_name),
                seed: self.chat.seed,
            },
            grades: GradesConfig {
                subjects: self.grades.subjects.unwrap_or_else(default_subjects),
                max_mark: self.grades.max_mark.unwrap_or_else(default_max_mark),
            },
        }
    }
}

fn default_bot_name() -> String {
    "ChatBot".to_string()
}
fn default_subjects() -> Vec<String> {
    ["Math", "Science", "English", "History", "Computer Science"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_max_mark() -> f64 {
    100.0
}

const PROJECT_CONFIG_FILENAME: &str = ".campus.toml";

/// Loads, merges and validates the configuration.
///
/// `explicit` is the `--config` argument (or `CAMPUS_CONFIG`). When given, the
/// file must exist; the other sources are still read and sit underneath it.
pub fn load_config(explicit: Option<&str>) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let explicit_config = match explicit {
        Some(raw) => {
            let path = PathBuf::from(shellexpand::tilde(raw).into_owned());
            info!("Loading configuration from: {}", path.display());
            Some(load_config_from_path(&path)?)
        }
        None => None,
    };

    let merged = merge_layers(user_config.unwrap_or_default(), project_config);
    let merged = merge_layers(merged, explicit_config).resolve();
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

fn load_user_config() -> Result<Option<ConfigLayer>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Campus", "campus") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigLayer>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.campus.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.campus.toml`.
/// The search stops at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Overlays `overlay` on `base`. Any field the overlay sets wins, even when
/// it sets the default value.
fn merge_layers(base: ConfigLayer, overlay: Option<ConfigLayer>) -> ConfigLayer {
    let Some(overlay) = overlay else {
        return base;
    };
    ConfigLayer {
        chat: ChatLayer {
            bot_name: overlay.chat.bot_name.or(base.chat.bot_name),
            seed: overlay.chat.seed.or(base.chat.seed),
        },
        grades: GradesLayer {
            subjects: overlay.grades.subjects.or(base.grades.subjects),
            max_mark: overlay.grades.max_mark.or(base.grades.max_mark),
        },
    }
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.chat.bot_name.trim().is_empty() {
        return Err(anyhow!(CampusError::Config(
            "chat.bot_name cannot be empty.".to_string()
        )));
    }
    if config.grades.subjects.is_empty() {
        return Err(anyhow!(CampusError::Config(
            "grades.subjects must list at least one subject.".to_string()
        )));
    }
    if let Some(pos) = config
        .grades
        .subjects
        .iter()
        .position(|s| s.trim().is_empty())
    {
        return Err(anyhow!(CampusError::Config(format!(
            "grades.subjects entry {} is blank.",
            pos + 1
        ))));
    }
    if !config.grades.max_mark.is_finite() || config.grades.max_mark <= 0.0 {
        return Err(anyhow!(CampusError::Config(format!(
            "grades.max_mark must be a positive number, got {}.",
            config.grades.max_mark
        ))));
    }
    info!("Configuration validation successful.");
    Ok(())
}
