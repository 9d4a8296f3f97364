//! Shared configuration types for CLI commands

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result,
    flattener::{FlattenOptions, ShowVariations},
    orientation::AutoRotateCropPrefs,
};

/// Diagram configuration, loadable from a JSON file.
///
/// Command-line flags override whatever the file sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Options handed to the flattener
    pub flatten: FlattenOptions,

    /// Rotate or flip the record before flattening
    pub auto_rotate: Option<AutoRotateCropPrefs>,

    /// Emit JSON instead of text
    pub json: bool,
}

impl DiagramConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a configuration file. Unknown fields are ignored.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config: DiagramConfig = serde_json::from_str(&text)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded diagram config");
        Ok(config)
    }

    /// Write the configuration as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|source| Error::Io {
            operation: format!("write config {}", path.display()),
            source,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.flatten.show_variations != ShowVariations::Never
            && self.flatten.ignore_labels
        {
            return Err(Error::InvalidConfiguration {
                message: "variation labels cannot be shown when labels are ignored".to_string(),
            });
        }
        Ok(())
    }
}
