use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::StatzError;

/// How strictly a reference directory path is checked when defined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathValidation {
    /// Path must name an existing directory
    #[default]
    ExistingDirectory,
    /// Only the empty path is rejected
    NonEmpty,
}

/// A validated reference directory path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDirectory {
    path: PathBuf,
}

impl ReferenceDirectory {
    pub fn new(path: impl Into<PathBuf>, validation: PathValidation) -> Result<Self, StatzError> {
        let path = path.into();

        if path.as_os_str().is_empty() {
            return Err(StatzError::InvalidPath {
                path: String::new(),
                reason: "path is empty",
            });
        }

        if validation == PathValidation::ExistingDirectory && !path.is_dir() {
            return Err(StatzError::InvalidPath {
                path: path.display().to_string(),
                reason: "not a directory",
            });
        }

        Ok(ReferenceDirectory { path })
    }

    /// The path exactly as it was defined
    pub fn path(&self) -> &Path {
        &self.path
    }
}
