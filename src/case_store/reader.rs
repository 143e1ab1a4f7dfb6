//! Enumerating the cases recorded for a URL

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{CaseStoreError, CaseStoreResult};
use super::parser::{CaseFileParser, ParsedCase};
use super::path_mapper;
use super::types::TestCase;
use crate::config::CaseStoreConfig;
use crate::utils::CASE_FILE_EXTENSION;

/// Lists case files below a base directory.
#[derive(Debug, Clone)]
pub struct CaseFileReader {
    base_dir: PathBuf,
    skip_empty_cases: bool,
}

impl CaseFileReader {
    #[must_use]
    pub fn new(config: &CaseStoreConfig) -> Self {
        Self {
            base_dir: config.base_dir().clone(),
            skip_empty_cases: config.skip_empty_cases(),
        }
    }

    /// All cases recorded for exactly `url`, ordered by file name.
    ///
    /// Only the directory `url` maps to is scanned; cases recorded for
    /// longer URLs below it are not included. An empty `url`, a URL that
    /// was never recorded and a URL no case can be written for (no host,
    /// not absolute, `..` segments) all yield an empty list. Files that
    /// cannot be read are treated as empty, which also covers a file
    /// replaced mid-scan.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory listing itself fails.
    pub fn list(&self, url: &str) -> CaseStoreResult<Vec<TestCase>> {
        if url.is_empty() {
            return Ok(Vec::new());
        }

        let directory = match path_mapper::resolve_case_dir(&self.base_dir, url) {
            Ok(directory) => directory,
            Err(e @ (CaseStoreError::InvalidUrl { .. } | CaseStoreError::UnsafePath { .. })) => {
                log::debug!("No cases can exist for {url}: {e}");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };
        if !directory.is_dir() {
            log::debug!("No case directory for {url} at {}", directory.display());
            return Ok(Vec::new());
        }

        let mut cases = Vec::new();
        for file in case_files_in(&directory)? {
            let parsed = read_case(&file);

            if self.skip_empty_cases && parsed.is_empty() {
                log::debug!("Skipping empty case file {}", file.display());
                continue;
            }

            let stem = file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            cases.push(parsed.into_test_case(url, &stem));
        }

        Ok(cases)
    }
}

/// Parse `file`, treating a read failure as an empty case.
fn read_case(file: &Path) -> ParsedCase {
    CaseFileParser::parse(file).unwrap_or_else(|e| {
        log::warn!("Treating unreadable case file as empty: {e}");
        ParsedCase::default()
    })
}

/// Case files directly inside `directory`, sorted by path.
fn case_files_in(directory: &Path) -> CaseStoreResult<Vec<PathBuf>> {
    let entries = fs::read_dir(directory).map_err(|e| CaseStoreError::io(directory, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| CaseStoreError::io(directory, e))?.path();
        let is_case_file = path
            .extension()
            .is_some_and(|ext| ext == CASE_FILE_EXTENSION);
        if is_case_file && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
