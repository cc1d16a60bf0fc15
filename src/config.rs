use std::fs;

use anyhow::Context;
use logit_reg::{Dataset, FitConfig};
use serde::Deserialize;

use crate::data;

/// A CSV dataset on disk.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DatasetConfig {
    pub path: String,
    pub x_size: usize,
}

/// Everything a run can be configured with, every field is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    /// Where to read the samples from, the watermelon dataset when missing.
    pub dataset: Option<DatasetConfig>,
    pub fit: FitConfig,
    /// Where to write the decision boundary as CSV, only for two features.
    pub boundary_path: Option<String>,
}

impl RunConfig {
    /// Loads a `RunConfig` from a JSON file.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("cannot read config '{path}'"))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).context("invalid config JSON")
    }

    /// Resolves the dataset this run trains on.
    pub fn dataset(&self) -> anyhow::Result<Dataset> {
        match &self.dataset {
            Some(DatasetConfig { path, x_size }) => data::load_csv(path, *x_size),
            None => Ok(data::watermelon()?),
        }
    }
}
