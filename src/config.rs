//! Data folder configuration.
//!
//! The only setting is the folder holding the four status files. It can be
//! given directly, through the `ORGANIZER_DATA_FOLDER` environment variable,
//! or in a JSON document:
//!
//! ```json
//! { "data_folder": "notes/tasks" }
//! ```
//!
//! Relative folders are resolved against the current working directory, and
//! a missing or empty folder means the current working directory itself.

use crate::task::adapters::file::FileTaskStore;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming the data folder.
pub const DATA_FOLDER_ENV: &str = "ORGANIZER_DATA_FOLDER";

/// Errors raised while building an [`OrganizerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The current working directory could not be determined.
    #[error("current directory is unavailable: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// A path is not valid UTF-8.
    #[error("path is not valid UTF-8: {0}")]
    NonUtf8Path(String),

    /// The configuration file could not be read.
    #[error("failed to read configuration {path}: {source}")]
    Read {
        /// Configuration file path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The configuration document is not valid JSON for this schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    data_folder: Option<String>,
}

/// Resolved organizer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizerConfig {
    data_folder: Utf8PathBuf,
}

impl OrganizerConfig {
    /// Builds a configuration for `folder`, resolved against the current
    /// working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the working directory is unavailable or
    /// not valid UTF-8.
    pub fn new(folder: impl AsRef<Utf8Path>) -> Result<Self, ConfigError> {
        Ok(Self::resolve_against(folder.as_ref(), &current_dir()?))
    }

    /// Builds a configuration for `folder`, resolved against `base`.
    #[must_use]
    pub fn resolve_against(folder: &Utf8Path, base: &Utf8Path) -> Self {
        let data_folder = if folder.as_str().is_empty() {
            base.to_path_buf()
        } else if folder.is_absolute() {
            folder.to_path_buf()
        } else {
            base.join(folder)
        };
        Self { data_folder }
    }

    /// Reads the data folder from [`DATA_FOLDER_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the working directory is unavailable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(std::env::var(DATA_FOLDER_ENV).ok())
    }

    /// Builds a configuration from an optional environment value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the working directory is unavailable.
    pub fn from_env_value(value: Option<String>) -> Result<Self, ConfigError> {
        Self::new(value.unwrap_or_default())
    }

    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents, or another
    /// [`ConfigError`] when the working directory is unavailable.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Self::new(raw.data_folder.unwrap_or_default())
    }

    /// Loads a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, or the
    /// errors of [`OrganizerConfig::from_json_str`].
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let read_error = |source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| read_error(std::io::Error::other("path must include a file name")))?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));

        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let contents = dir.read_to_string(file_name).map_err(read_error)?;
        Self::from_json_str(&contents)
    }

    /// Returns the resolved data folder.
    #[must_use]
    pub fn data_folder(&self) -> &Utf8Path {
        &self.data_folder
    }

    /// Creates a file store rooted at the data folder.
    #[must_use]
    pub fn store(&self) -> FileTaskStore {
        FileTaskStore::new(self.data_folder.clone())
    }
}

fn current_dir() -> Result<Utf8PathBuf, ConfigError> {
    let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
    Utf8PathBuf::try_from(cwd)
        .map_err(|err| ConfigError::NonUtf8Path(err.into_path_buf().display().to_string()))
}
