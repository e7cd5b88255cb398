use anyhow::{Context as _, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::algorithm::LcsAlgorithm;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmChoice {
    /// Exact LCS, linear auxiliary space.
    Hirschberg,
    /// Greedy candidate chains; faster, approximate when tokens repeat.
    Candidates,
}

impl AlgorithmChoice {
    pub fn convert(&self) -> LcsAlgorithm {
        match self {
            AlgorithmChoice::Hirschberg => LcsAlgorithm::Hirschberg,
            AlgorithmChoice::Candidates => LcsAlgorithm::Candidates,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Raw script dump.
    Debug,
    /// One stream, deletions and insertions inline.
    Unified,
    /// Old and new views on separate lines, blank-padded to stay aligned.
    Side,
    /// HTML fragment with escaped token text.
    Html,
}

/// Defaults read from the config file; command-line arguments win over
/// every field.
#[derive(Default, Deserialize)]
pub struct Config {
    pub algorithm: Option<AlgorithmChoice>,
    pub mode: Option<OutputMode>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tokdiff").join("tokdiff.toml"))
}

/// Loads the config file, or the defaults when none exists. An explicitly
/// given path must exist; the default location is optional.
pub fn load(explicit_path: Option<&Path>) -> Result<Config> {
    let path = match explicit_path {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path().filter(|path| path.exists()),
    };
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing config file {}", path.display()))
}
