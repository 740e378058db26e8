use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::domain::track::UNKNOWN_ARTIST;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub version: u32,
    pub http: HttpConfig,
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub normalizer: NormalizerConfig,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.to_string_lossy()))?;
        toml::from_str(&contents).with_context(|| "Failed to parse config TOML")
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub bind_addr: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// extra radio candidates requested on top of the limit
    #[serde(default = "default_overfetch")]
    pub overfetch: usize,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_overfetch() -> usize {
    10
}

/// Defaults and upper bounds for the number of returned tracks
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LimitsConfig {
    pub similar_default: usize,
    pub similar_max: usize,
    pub search_default: usize,
    pub search_max: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            similar_default: 25,
            similar_max: 100,
            search_default: 5,
            search_max: 50,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("limit must be between 1 and {max}")]
pub struct InvalidLimit {
    pub max: usize,
}

impl LimitsConfig {
    pub fn similar(&self, requested: Option<usize>) -> Result<usize, InvalidLimit> {
        bounded(requested, self.similar_default, self.similar_max)
    }

    pub fn search(&self, requested: Option<usize>) -> Result<usize, InvalidLimit> {
        bounded(requested, self.search_default, self.search_max)
    }
}

fn bounded(requested: Option<usize>, default: usize, max: usize) -> Result<usize, InvalidLimit> {
    match requested {
        None => Ok(default),
        Some(n) if (1..=max).contains(&n) => Ok(n),
        Some(_) => Err(InvalidLimit { max }),
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NormalizerConfig {
    /// artist name for records without one
    pub unknown_artist: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            unknown_artist: UNKNOWN_ARTIST.to_string(),
        }
    }
}
