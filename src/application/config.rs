// ============================================================
// Layer 2 — Application Configuration
// ============================================================
// Every setting a run needs, in one serialisable struct.
//
// Resolution order (later wins):
//   1. AppConfig::default()
//   2. --config <file.json>   (AppConfig::load, missing fields
//                              fall back to the defaults)
//   3. individual CLI flags   (applied by the CLI layer)
//
// The effective settings are written to <saves>/settings.json
// on every command that touches the saves directory.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::nlp::stemmer::AUTO_STEMMER;
use crate::pipeline::steps::FilterOptions;

/// File name of the settings snapshot inside the saves directory
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub docs_dir:          String,
    pub saves_dir:         String,
    pub results_dir:       String,
    pub vocabulary:        String,
    pub tags:              Vec<String>,
    /// `auto`, `porter` or a Snowball language for filter_stem
    pub stemmer:           String,
    /// Minimum number of distinct documents a common word must appear in
    pub criterion:         usize,
    pub top_k:             usize,
    /// Base name of the report files
    pub results_file_name: String,
    pub checkpointing:     bool,
    pub debug:             bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            docs_dir:          "data".to_string(),
            saves_dir:         "saves".to_string(),
            results_dir:       "results".to_string(),
            vocabulary:        "english".to_string(),
            tags:              vec!["NN".to_string(), "NNS".to_string()],
            stemmer:           AUTO_STEMMER.to_string(),
            criterion:         6,
            top_k:             10,
            results_file_name: "results".to_string(),
            checkpointing:     true,
            debug:             false,
        }
    }
}

impl AppConfig {
    /// Read settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config '{}'", path.display()))?;
        let config = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config file '{}'", path.display()))?;
        tracing::debug!("Loaded settings from '{}'", path.display());
        Ok(config)
    }

    /// Write the settings to `<saves>/settings.json`.
    pub fn save(&self) -> Result<PathBuf> {
        let dir = PathBuf::from(&self.saves_dir);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create saves directory '{}'", dir.display()))?;

        let path = dir.join(SETTINGS_FILE);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).with_context(|| format!("Cannot write '{}'", path.display()))?;
        Ok(path)
    }

    /// The criterion must be between 1 and the number of input documents.
    pub fn validate_criterion(&self, document_count: usize) -> Result<()> {
        if self.criterion == 0 {
            bail!("The criterion must be at least 1.");
        }
        if self.criterion > document_count {
            bail!(
                "The criterion ({}) must not be greater than the total number of input files ({}).",
                self.criterion,
                document_count
            );
        }
        Ok(())
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::new(self.vocabulary.clone(), self.tags.iter().cloned())
    }

    pub fn docs_path(&self) -> PathBuf {
        PathBuf::from(&self.docs_dir)
    }

    pub fn saves_path(&self) -> PathBuf {
        PathBuf::from(&self.saves_dir)
    }

    pub fn results_path(&self) -> PathBuf {
        PathBuf::from(&self.results_dir)
    }
}
