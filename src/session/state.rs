use std::path::{Path, PathBuf};

use super::reference::{PathValidation, ReferenceDirectory};
use crate::error::StatzError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Lifecycle {
    #[default]
    Uninitialized,
    Initialized {
        reference: Option<ReferenceDirectory>,
    },
    Finalized,
}

/// Engine session: lifecycle plus at most one reference directory
///
/// ```text
/// Uninitialized -> Initialized(undefined) -> Initialized(defined) -> Finalized
///                                     redefine loops back ^
/// ```
///
/// `initialize` is accepted again after `finalize`. The queries
/// [`is_defined`](Self::is_defined) and [`get`](Self::get) report nothing
/// defined outside the initialized state; mutating operations fail with
/// [`StatzError::NotInitialized`].
#[derive(Debug, Clone, Default)]
pub struct Session {
    lifecycle: Lifecycle,
    validation: PathValidation,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validation(validation: PathValidation) -> Self {
        Session {
            lifecycle: Lifecycle::Uninitialized,
            validation,
        }
    }

    /// Enter the initialized state with no reference directory
    pub fn initialize(&mut self) -> Result<(), StatzError> {
        if self.is_initialized() {
            return Err(StatzError::AlreadyInitialized);
        }
        self.lifecycle = Lifecycle::Initialized { reference: None };
        log::debug!("Session initialized");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Initialized { .. })
    }

    /// Whether a reference directory is currently defined
    pub fn is_defined(&self) -> bool {
        self.reference().is_some()
    }

    /// Set the reference directory; the last definition wins
    pub fn define(&mut self, path: impl Into<PathBuf>) -> Result<(), StatzError> {
        let validation = self.validation;
        let Lifecycle::Initialized { reference } = &mut self.lifecycle else {
            return Err(StatzError::NotInitialized {
                operation: "define",
            });
        };

        let directory = ReferenceDirectory::new(path, validation)?;
        log::debug!("Reference directory defined: {}", directory.path().display());
        *reference = Some(directory);
        Ok(())
    }

    /// Owned copy of the defined reference directory
    pub fn get(&self) -> Option<PathBuf> {
        self.reference().map(|r| r.path().to_path_buf())
    }

    /// Clear all state; always leaves nothing defined
    pub fn finalize(&mut self) {
        self.lifecycle = Lifecycle::Finalized;
        log::debug!("Session finalized");
    }

    /// Fail unless the session is initialized
    pub fn ensure_initialized(&self, operation: &'static str) -> Result<(), StatzError> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(StatzError::NotInitialized { operation })
        }
    }

    pub fn reference_path(&self) -> Option<&Path> {
        self.reference().map(ReferenceDirectory::path)
    }

    fn reference(&self) -> Option<&ReferenceDirectory> {
        match &self.lifecycle {
            Lifecycle::Initialized { reference } => reference.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
