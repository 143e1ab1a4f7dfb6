//! Type-safe builder for `CaseStoreConfig` using the typestate pattern
//!
//! `build()` is only available once the base directory has been set.

use anyhow::{Result, anyhow};
use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::CaseStoreConfig;
use crate::utils::DEFAULT_FILE_MODE;

/// Highest value accepted as a permission mode
const MAX_FILE_MODE: u32 = 0o7777;

// Type states for the builder
pub struct WithBaseDir;

pub struct CaseStoreConfigBuilder<State = ()> {
    pub(crate) base_dir: Option<PathBuf>,
    pub(crate) file_mode: u32,
    pub(crate) skip_empty_cases: bool,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for CaseStoreConfigBuilder<()> {
    fn default() -> Self {
        Self {
            base_dir: None,
            file_mode: DEFAULT_FILE_MODE,
            skip_empty_cases: true,
            _phantom: PhantomData,
        }
    }
}

impl CaseStoreConfig {
    /// Create a builder for configuring a `CaseStoreConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> CaseStoreConfigBuilder<()> {
        CaseStoreConfigBuilder::default()
    }
}

impl CaseStoreConfigBuilder<()> {
    pub fn base_dir(self, dir: impl Into<PathBuf>) -> CaseStoreConfigBuilder<WithBaseDir> {
        CaseStoreConfigBuilder {
            base_dir: Some(dir.into()),
            file_mode: self.file_mode,
            skip_empty_cases: self.skip_empty_cases,
            _phantom: PhantomData,
        }
    }
}

// Build method only available when all required fields are set
impl CaseStoreConfigBuilder<WithBaseDir> {
    pub fn build(self) -> Result<CaseStoreConfig> {
        if self.file_mode > MAX_FILE_MODE {
            return Err(anyhow!(
                "file_mode {:#o} is not a permission mode (max {MAX_FILE_MODE:#o})",
                self.file_mode
            ));
        }

        let base_dir = self
            .base_dir
            .ok_or_else(|| anyhow!("base_dir is required"))?;

        // Relative paths are resolved once so a later chdir cannot move the store
        let base_dir = if base_dir.is_absolute() {
            base_dir
        } else {
            std::env::current_dir()
                .map_err(|e| anyhow!("Failed to get current directory: {e}"))?
                .join(base_dir)
        };

        Ok(CaseStoreConfig {
            base_dir,
            file_mode: self.file_mode,
            skip_empty_cases: self.skip_empty_cases,
        })
    }
}
