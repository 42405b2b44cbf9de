//! YAML configuration file support for NearDup.
//!
//! Lets callers keep the fingerprinting parameters in one file and load them
//! at runtime instead of hard-coding them next to the pipeline call.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # NearDup configuration
//! version: "1.0"
//! name: "essay-dedup"
//!
//! perceptual:
//!   version: 1
//!   shingle_size: 5
//!   num_hashes: 500
//!   hash_range: 1000
//!   hash_family: polynomial   # or "seeded"
//!   seed: 17297687000019483309
//! ```
//!
//! Every field except `version` may be omitted and falls back to the same
//! defaults as [`PerceptualConfig::default`].

use std::fs;
use std::path::Path;

use perceptual::{HashFamilyKind, PerceptualConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NearDupConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Shingling and signature parameters
    #[serde(default)]
    pub perceptual: PerceptualYamlConfig,
}

impl NearDupConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: NearDupConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.perceptual.validate()
    }

    /// Pipeline configuration described by this file.
    pub fn perceptual_config(&self) -> PerceptualConfig {
        PerceptualConfig::from(&self.perceptual)
    }
}

impl Default for NearDupConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            perceptual: PerceptualYamlConfig::default(),
        }
    }
}

/// Perceptual fingerprinting YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerceptualYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_shingle_size")]
    pub shingle_size: usize,

    #[serde(default = "default_num_hashes")]
    pub num_hashes: usize,

    #[serde(default = "default_hash_range")]
    pub hash_range: u32,

    #[serde(default)]
    pub hash_family: HashFamilyKind,

    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl PerceptualYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        PerceptualConfig::from(self)
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("perceptual: {e}")))
    }
}

impl Default for PerceptualYamlConfig {
    fn default() -> Self {
        PerceptualYamlConfig::from(&PerceptualConfig::default())
    }
}

impl From<&PerceptualYamlConfig> for PerceptualConfig {
    fn from(yaml: &PerceptualYamlConfig) -> Self {
        PerceptualConfig {
            version: yaml.version,
            shingle_size: yaml.shingle_size,
            num_hashes: yaml.num_hashes,
            hash_range: yaml.hash_range,
            hash_family: yaml.hash_family,
            seed: yaml.seed,
        }
    }
}

impl From<&PerceptualConfig> for PerceptualYamlConfig {
    fn from(cfg: &PerceptualConfig) -> Self {
        PerceptualYamlConfig {
            version: cfg.version,
            shingle_size: cfg.shingle_size,
            num_hashes: cfg.num_hashes,
            hash_range: cfg.hash_range,
            hash_family: cfg.hash_family,
            seed: cfg.seed,
        }
    }
}

fn default_version() -> u32 {
    PerceptualConfig::default().version
}

fn default_shingle_size() -> usize {
    PerceptualConfig::default().shingle_size
}

fn default_num_hashes() -> usize {
    PerceptualConfig::default().num_hashes
}

fn default_hash_range() -> u32 {
    PerceptualConfig::default().hash_range
}

fn default_seed() -> u64 {
    PerceptualConfig::default().seed
}
