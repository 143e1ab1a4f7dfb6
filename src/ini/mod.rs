//! Best-effort parser for INI-style sectioned text
//!
//! Understands `;` comment lines, `[SECTION]` headers and `key=value`
//! entries. Anything else is skipped, so parsing never fails.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static SECTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\[\s*(?P<name>[^\]]*?)\s*\]\s*$").expect("section regex is valid")
});

/// Key/value entries of a single section.
pub type IniSection = BTreeMap<String, String>;

/// Parsed representation of a sectioned text document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IniDocument {
    /// Entries that appear before the first section header.
    pub global: IniSection,
    pub sections: BTreeMap<String, IniSection>,
    /// Comment text in file order, without the comment marker.
    pub comments: Vec<String>,
}

impl IniDocument {
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.get(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.sections.values().all(BTreeMap::is_empty)
    }
}

/// Parse sectioned text into an [`IniDocument`].
///
/// Keys are trimmed, values are kept verbatim. A repeated key overwrites the
/// earlier value and a repeated section header merges into the existing
/// section.
#[must_use]
pub fn parse_ini(text: &str) -> IniDocument {
    let mut document = IniDocument::default();
    let mut current: Option<String> = None;

    for line in text.split(['\r', '\n']) {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(comment) = trimmed.strip_prefix(';') {
            document
                .comments
                .push(comment.strip_prefix(' ').unwrap_or(comment).to_string());
            continue;
        }

        if let Some(captures) = SECTION_REGEX.captures(line) {
            let name = captures["name"].to_string();
            document.sections.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        let target = match &current {
            Some(name) => document.sections.entry(name.clone()).or_default(),
            None => &mut document.global,
        };
        target.insert(key.to_string(), value.to_string());
    }

    document
}
