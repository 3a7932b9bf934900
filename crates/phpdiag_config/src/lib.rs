pub mod ignore;
pub mod reporter;

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use serde_json::Value;

pub use ignore::{get_ignore_patterns, ignore_patterns_from_value};
pub use reporter::{LogReporter, Reporter};

/// Name of the configuration file looked up at the workspace root
pub const CONFIG_FILE_NAME: &str = "intelephense.json";

/// Parsed `intelephense.json` of a workspace
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    path: Utf8PathBuf,
    settings: Value,
}

impl Config {
    pub fn new(path: impl Into<Utf8PathBuf>, settings: Value) -> Self {
        Self {
            path: path.into(),
            settings,
        }
    }

    /// Location of the config file for `workspace`
    pub fn path_in(workspace: &Utf8Path) -> Utf8PathBuf {
        workspace.join(CONFIG_FILE_NAME)
    }

    /// Reads and parses the workspace config.
    ///
    /// Returns `Ok(None)` when there is no regular file at
    /// [`Config::path_in`], which includes a directory of that name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read and
    /// [`ConfigError::Parse`] if it is not valid JSON.
    pub fn try_load(workspace: &Utf8Path) -> Result<Option<Self>, ConfigError> {
        let path = Self::path_in(workspace);
        if !path.is_file() {
            debug!("No config file at {path}");
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let settings = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        debug!("Loaded config from {path}");
        Ok(Some(Self { path, settings }))
    }

    /// Loads the workspace config, treating any failure like a missing file.
    ///
    /// Failures are passed to `reporter` as warnings instead of being
    /// returned.
    pub fn load(workspace: &Utf8Path, reporter: &impl Reporter) -> Option<Self> {
        match Self::try_load(workspace) {
            Ok(cfg) => cfg,
            Err(e) => {
                reporter.warn(&e.to_string());
                None
            }
        }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// The JSON document exactly as parsed
    pub fn settings(&self) -> &Value {
        &self.settings
    }

    /// Glob patterns from the `ignore` field, see [`ignore_patterns_from_value`]
    pub fn ignore_patterns(&self) -> Vec<String> {
        ignore_patterns_from_value(&self.settings)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        source: serde_json::Error,
    },
}
