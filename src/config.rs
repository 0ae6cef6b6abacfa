//! Pipeline settings, optionally loaded from a YAML file.
//!
//! ```yaml
//! missing_markers: extended
//! preview_rows: 5
//! ```

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::predicates::MissingMarkers;

pub const DEFAULT_PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub missing_markers: MissingMarkers,
    pub preview_rows: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            missing_markers: MissingMarkers::default(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl PipelineConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Opening configuration file {path:?}"))?;
        Self::from_yaml(&raw).with_context(|| format!("Parsing configuration file {path:?}"))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(mut self, markers: Option<MissingMarkers>, rows: Option<usize>) -> Self {
        if let Some(markers) = markers {
            self.missing_markers = markers;
        }
        if let Some(rows) = rows {
            self.preview_rows = rows;
        }
        self
    }
}
