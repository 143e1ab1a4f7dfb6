//! Core configuration type for the test case store

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::DEFAULT_FILE_MODE;

/// Main configuration struct for case file storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStoreConfig {
    /// Project directory the `tests/cases` tree lives in.
    ///
    /// **INVARIANT:** Always an absolute path (normalized in builder).
    pub(crate) base_dir: PathBuf,

    /// Permission bits applied to every written case file (unix only).
    ///
    /// Default: `0o644`
    pub(crate) file_mode: u32,

    /// Leave case files whose six sections are all empty out of listings.
    ///
    /// Such files appear when a crawl recorded a URL without any request
    /// data, or while another process is still replacing the file.
    ///
    /// Default: true
    pub(crate) skip_empty_cases: bool,
}

impl Default for CaseStoreConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            file_mode: DEFAULT_FILE_MODE,
            skip_empty_cases: true,
        }
    }
}
