//! Getter methods for `CaseStoreConfig`

use std::path::PathBuf;

use super::types::CaseStoreConfig;

impl CaseStoreConfig {
    #[must_use]
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    #[must_use]
    pub fn file_mode(&self) -> u32 {
        self.file_mode
    }

    #[must_use]
    pub fn skip_empty_cases(&self) -> bool {
        self.skip_empty_cases
    }
}
