//! Case file creation
//!
//! Builds the sectioned file content, creates the directory chain for the
//! case and writes the file through a temp file in the target directory, so
//! a concurrent reader sees either the old file or the new one.

use chrono::{DateTime, Utc};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::errors::{CaseStoreError, CaseStoreResult};
use super::path_mapper;
use super::section::{SectionName, render_section};
use super::types::{CaseData, WriteOutcome};
use crate::config::CaseStoreConfig;
use crate::utils::{CASE_FILE_MARKER, GENERATOR_HOMEPAGE, GENERATOR_NAME, GENERATOR_VERSION};

/// RFC 1123 date as used in HTTP headers, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
const RFC1123_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Render the full text of a case file.
///
/// Sections are always written in the same order, each followed by a blank
/// line except the last one.
#[must_use]
pub fn render_case_file(
    url: &str,
    name: &str,
    data: &CaseData,
    generated_at: DateTime<Utc>,
) -> String {
    let mut content = String::new();

    content.push_str(&format!("; {CASE_FILE_MARKER}\n"));
    content.push_str(&format!(
        "; generated by {GENERATOR_NAME} v{GENERATOR_VERSION} ({GENERATOR_HOMEPAGE}) at {}\n",
        generated_at.format(RFC1123_FORMAT)
    ));
    content.push_str(&format!("; url = {url}\n"));
    content.push_str(&format!("; id = {name}\n"));
    content.push('\n');

    for (index, section) in SectionName::ALL.into_iter().enumerate() {
        content.push_str(&format!("[{}]\n", section.tag()));
        content.push_str(&render_section(data.section(section)));
        if index + 1 < SectionName::ALL.len() {
            content.push('\n');
        }
    }

    content
}

/// Writes case files below a base directory.
#[derive(Debug, Clone)]
pub struct CaseFileWriter {
    base_dir: PathBuf,
    file_mode: u32,
}

impl CaseFileWriter {
    #[must_use]
    pub fn new(config: &CaseStoreConfig) -> Self {
        Self {
            base_dir: config.base_dir().clone(),
            file_mode: config.file_mode(),
        }
    }

    /// Persist a case, replacing any file already recorded under the same
    /// `(url, name)`.
    ///
    /// An empty `url`, an empty `name` or `data` without sections is not an
    /// error: nothing is written and `WriteOutcome::Skipped` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be derived from `url`/`name` or
    /// if creating a directory or writing the file fails.
    pub fn create(&self, url: &str, name: &str, data: &CaseData) -> CaseStoreResult<WriteOutcome> {
        self.create_at(url, name, data, Utc::now())
    }

    /// Same as [`create`](Self::create), then runs `on_done`.
    ///
    /// `on_done` runs after a write and after a skip, but not when the call
    /// fails.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create).
    pub fn create_then<F>(
        &self,
        url: &str,
        name: &str,
        data: &CaseData,
        on_done: F,
    ) -> CaseStoreResult<WriteOutcome>
    where
        F: FnOnce(),
    {
        let outcome = self.create(url, name, data)?;
        on_done();
        Ok(outcome)
    }

    /// Same as [`create`](Self::create) with a fixed header timestamp.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create).
    pub fn create_at(
        &self,
        url: &str,
        name: &str,
        data: &CaseData,
        generated_at: DateTime<Utc>,
    ) -> CaseStoreResult<WriteOutcome> {
        if url.is_empty() || name.is_empty() || data.is_empty() {
            log::debug!("Skipping case write (url: {url:?}, name: {name:?}): nothing to record");
            return Ok(WriteOutcome::Skipped);
        }

        let case_path = path_mapper::resolve(&self.base_dir, url, name)?;
        let content = render_case_file(url, name, data, generated_at);

        let created_dirs = ensure_directory_chain(&case_path.directory)?;
        write_case_file(&case_path.directory, &case_path.file, &content, self.file_mode)?;

        log::debug!("Wrote case file {}", case_path.file.display());

        Ok(WriteOutcome::Written {
            path: case_path.file,
            created_dirs,
        })
    }
}

/// Create every missing directory of `directory`, outermost first.
///
/// Returns the directories that were actually created. A directory that
/// appears concurrently between the check and the create is accepted.
fn ensure_directory_chain(directory: &Path) -> CaseStoreResult<Vec<PathBuf>> {
    let mut created = Vec::new();
    let mut current = PathBuf::new();

    for component in directory.components() {
        current.push(component);
        if current.is_dir() {
            continue;
        }

        match fs::create_dir(&current) {
            Ok(()) => {
                log::debug!("Created case directory {}", current.display());
                created.push(current.clone());
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists && current.is_dir() => {}
            Err(e) => return Err(CaseStoreError::io(&current, e)),
        }
    }

    Ok(created)
}

fn write_case_file(directory: &Path, file: &Path, content: &str, mode: u32) -> CaseStoreResult<()> {
    let mut temp_file =
        NamedTempFile::new_in(directory).map_err(|e| CaseStoreError::io(directory, e))?;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| CaseStoreError::io(temp_file.path(), e))?;

    set_mode(temp_file.as_file(), mode).map_err(|e| CaseStoreError::io(temp_file.path(), e))?;

    temp_file
        .persist(file)
        .map_err(|e| CaseStoreError::Persist {
            path: file.to_path_buf(),
            source: e.error,
        })?;

    Ok(())
}

#[cfg(unix)]
fn set_mode(file: &fs::File, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_file: &fs::File, _mode: u32) -> std::io::Result<()> {
    Ok(())
}
