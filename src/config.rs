// src/config.rs
//! Local settings from `hypernym.toml` plus command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{HypernymError, Result};

pub const CONFIG_FILE: &str = "hypernym.toml";

/// On-disk layout of `hypernym.toml`. Every section and field is optional.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct HypernymToml {
    #[serde(default)]
    pub dataset: DatasetSection,
    #[serde(default)]
    pub selection: SelectionSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSection {
    #[serde(default)]
    pub root: Option<PathBuf>,
    #[serde(default)]
    pub info: Option<PathBuf>,
    #[serde(default = "default_split")]
    pub split: String,
}

impl Default for DatasetSection {
    fn default() -> Self {
        Self {
            root: None,
            info: None,
            split: default_split(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectionSection {
    #[serde(default = "default_balanced")]
    pub balanced: bool,
}

impl Default for SelectionSection {
    fn default() -> Self {
        Self {
            balanced: default_balanced(),
        }
    }
}

fn default_split() -> String {
    "train".to_string()
}

const fn default_balanced() -> bool {
    true
}

/// Effective settings after the local file and command-line overrides are
/// merged. Command-line values win.
#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_root: Option<PathBuf>,
    pub info_dir: Option<PathBuf>,
    pub split: String,
    pub balanced: bool,
    pub verbose: bool,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self {
            dataset_root: None,
            info_dir: None,
            split: default_split(),
            balanced: default_balanced(),
            verbose: false,
        }
    }

    /// Loads `hypernym.toml` from the working directory when present. A
    /// missing file is not an error; an unreadable or malformed one is.
    ///
    /// # Errors
    /// [`HypernymError::Io`] when the file exists but cannot be read;
    /// [`HypernymError::Config`] when it does not parse.
    pub fn load() -> Result<Self> {
        let mut config = Self::new();
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| HypernymError::Io {
                source: e,
                path: path.to_path_buf(),
            })?;
            config.apply_toml(parse_toml(&content)?);
        }
        Ok(config)
    }

    /// Parses config file content and folds it in.
    ///
    /// # Errors
    /// [`HypernymError::Config`] when the content does not parse.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        self.apply_toml(parse_toml(content)?);
        Ok(())
    }

    fn apply_toml(&mut self, toml: HypernymToml) {
        if toml.dataset.root.is_some() {
            self.dataset_root = toml.dataset.root;
        }
        if toml.dataset.info.is_some() {
            self.info_dir = toml.dataset.info;
        }
        self.split = toml.dataset.split;
        self.balanced = toml.selection.balanced;
    }

    /// Folds command-line overrides over the file-derived settings.
    pub fn apply_cli(&mut self, dataset: Option<PathBuf>, info: Option<PathBuf>, verbose: bool) {
        if let Some(root) = dataset {
            self.dataset_root = Some(root);
        }
        if let Some(dir) = info {
            self.info_dir = Some(dir);
        }
        if verbose {
            self.verbose = true;
        }
    }

    /// Both dataset paths must be known before a taxonomy can be built.
    ///
    /// # Errors
    /// [`HypernymError::Config`] naming the missing setting.
    pub fn require_paths(&self) -> Result<(&Path, &Path)> {
        let root = self.dataset_root.as_deref().ok_or_else(|| {
            HypernymError::Config(
                "no dataset root; pass --dataset or set [dataset] root in hypernym.toml"
                    .to_string(),
            )
        })?;
        let info = self.info_dir.as_deref().ok_or_else(|| {
            HypernymError::Config(
                "no info directory; pass --info or set [dataset] info in hypernym.toml"
                    .to_string(),
            )
        })?;
        Ok((root, info))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_toml(content: &str) -> Result<HypernymToml> {
    toml::from_str(content).map_err(|e| HypernymError::Config(format!("{CONFIG_FILE}: {e}")))
}
