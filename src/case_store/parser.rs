//! Reading a single case file back into memory

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::errors::{CaseStoreError, CaseStoreResult};
use super::section::CaseSections;
use super::types::TestCase;
use crate::ini::{IniDocument, parse_ini};

/// Content of one case file.
///
/// `url` and `name` come from the header comments and are `None` when the
/// file has no such lines (or does not exist).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCase {
    pub url: Option<String>,
    pub name: Option<String>,
    pub sections: CaseSections,
}

impl ParsedCase {
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_document(&parse_ini(text))
    }

    #[must_use]
    pub fn from_document(document: &IniDocument) -> Self {
        let mut url = None;
        let mut name = None;

        for comment in &document.comments {
            let Some((key, value)) = comment.split_once('=') else {
                continue;
            };
            match key.trim() {
                "url" => url = Some(value.trim().to_string()),
                "id" => name = Some(value.trim().to_string()),
                _ => {}
            }
        }

        Self {
            url,
            name,
            sections: CaseSections::from_document(document),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Turn into a [`TestCase`], filling gaps from the caller's context.
    #[must_use]
    pub fn into_test_case(self, fallback_url: &str, fallback_name: &str) -> TestCase {
        TestCase {
            url: self.url.unwrap_or_else(|| fallback_url.to_string()),
            name: self.name.unwrap_or_else(|| fallback_name.to_string()),
            sections: self.sections,
        }
    }
}

pub struct CaseFileParser;

impl CaseFileParser {
    /// Parse the case file at `path`.
    ///
    /// A missing file is the normal state before a URL was ever recorded and
    /// yields an empty [`ParsedCase`]. Invalid UTF-8 is replaced rather than
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns `Io` for read failures other than the file not existing.
    pub fn parse(path: &Path) -> CaseStoreResult<ParsedCase> {
        match fs::read(path) {
            Ok(bytes) => Ok(ParsedCase::from_text(&String::from_utf8_lossy(&bytes))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ParsedCase::default()),
            Err(e) => Err(CaseStoreError::io(path, e)),
        }
    }
}
