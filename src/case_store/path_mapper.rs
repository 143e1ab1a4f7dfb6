//! Mapping of `(base_dir, url, name)` onto case file locations
//!
//! Layout: `<base_dir>/tests/cases/<sanitized-origin>[/<url-remainder>]/<name>.tst`.
//! The mapping is pure: no filesystem access happens here.

use std::path::{Component, Path, PathBuf};
use url::Url;

use super::errors::{CaseStoreError, CaseStoreResult};
use crate::utils::{
    CASE_FILE_EXTENSION, TEST_CASE_DIRECTORY, origin_of, sanitize_origin, url_remainder,
};

/// Directory and file a case is stored at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasePath {
    pub directory: PathBuf,
    pub file: PathBuf,
}

/// Directory holding every case recorded for `url`.
///
/// # Errors
///
/// Returns `InvalidUrl` when `url` does not parse or has no host, and
/// `UnsafePath` when its remainder contains a `..` segment.
pub fn resolve_case_dir(base_dir: &Path, url: &str) -> CaseStoreResult<PathBuf> {
    let parsed = Url::parse(url).map_err(|e| CaseStoreError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    let origin = origin_of(&parsed).ok_or_else(|| CaseStoreError::InvalidUrl {
        url: url.to_string(),
        reason: "no host".to_string(),
    })?;

    let mut directory = base_dir
        .join(TEST_CASE_DIRECTORY)
        .join(sanitize_origin(&origin));

    let remainder = url_remainder(&parsed);
    if !remainder.is_empty() {
        let remainder_path = Path::new(remainder);
        if remainder_path
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(CaseStoreError::UnsafePath {
                component: remainder.to_string(),
                context: format!("URL '{url}'"),
            });
        }
        directory.push(remainder_path);
    }

    Ok(directory)
}

/// Full location of case `name` recorded for `url`.
///
/// # Errors
///
/// Everything [`resolve_case_dir`] reports, plus `UnsafePath` when `name`
/// contains a path separator or is `.`/`..`.
pub fn resolve(base_dir: &Path, url: &str, name: &str) -> CaseStoreResult<CasePath> {
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(CaseStoreError::UnsafePath {
            component: name.to_string(),
            context: "case name".to_string(),
        });
    }

    let directory = resolve_case_dir(base_dir, url)?;
    let file = directory.join(format!("{name}.{CASE_FILE_EXTENSION}"));

    Ok(CasePath { directory, file })
}
