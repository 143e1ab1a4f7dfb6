//! The six fixed sections of a case file and their text rendering

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::ini::IniDocument;

/// Flat key/value entries of one section.
pub type SectionEntries = BTreeMap<String, String>;

/// Section of a case file.
///
/// Variant order is the order sections are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SectionName {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    Post,
    #[serde(rename = "COOKIE")]
    Cookie,
    #[serde(rename = "HTTP_HEADERS")]
    HttpHeaders,
    #[serde(rename = "CONFIRM")]
    Confirm,
    #[serde(rename = "PROMPT")]
    Prompt,
}

impl SectionName {
    pub const ALL: [SectionName; 6] = [
        SectionName::Get,
        SectionName::Post,
        SectionName::Cookie,
        SectionName::HttpHeaders,
        SectionName::Confirm,
        SectionName::Prompt,
    ];

    /// Tag used in the `[SECTION]` header on disk.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            SectionName::Get => "GET",
            SectionName::Post => "POST",
            SectionName::Cookie => "COOKIE",
            SectionName::HttpHeaders => "HTTP_HEADERS",
            SectionName::Confirm => "CONFIRM",
            SectionName::Prompt => "PROMPT",
        }
    }

    /// Key used by the crawler for this section in memory.
    ///
    /// Identical to [`tag`](Self::tag) except for headers, which the crawler
    /// hands over as `HEADER`.
    #[must_use]
    pub fn data_key(self) -> &'static str {
        match self {
            SectionName::HttpHeaders => "HEADER",
            other => other.tag(),
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.tag() == tag)
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Render entries as one `key=value` line each.
///
/// `None` and empty entries render as the empty string. Nothing is escaped:
/// a newline or `=` inside a key, or a newline inside a value, will not
/// survive a round trip.
#[must_use]
pub fn render_section(entries: Option<&SectionEntries>) -> String {
    let Some(entries) = entries else {
        return String::new();
    };

    let mut content = String::new();
    for (key, value) in entries {
        content.push_str(key);
        content.push('=');
        content.push_str(value);
        content.push('\n');
    }
    content
}

/// All six sections of a case, each always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<SectionName, SectionEntries>",
    into = "BTreeMap<SectionName, SectionEntries>"
)]
pub struct CaseSections(BTreeMap<SectionName, SectionEntries>);

impl From<BTreeMap<SectionName, SectionEntries>> for CaseSections {
    fn from(mut map: BTreeMap<SectionName, SectionEntries>) -> Self {
        for name in SectionName::ALL {
            map.entry(name).or_default();
        }
        Self(map)
    }
}

impl From<CaseSections> for BTreeMap<SectionName, SectionEntries> {
    fn from(sections: CaseSections) -> Self {
        sections.0
    }
}

impl Default for CaseSections {
    fn default() -> Self {
        Self(
            SectionName::ALL
                .into_iter()
                .map(|name| (name, SectionEntries::new()))
                .collect(),
        )
    }
}

impl CaseSections {
    /// Pick the six known sections out of a parsed document.
    ///
    /// Missing sections become empty, unknown ones are ignored.
    #[must_use]
    pub fn from_document(document: &IniDocument) -> Self {
        let mut sections = Self::default();
        for name in SectionName::ALL {
            if let Some(entries) = document.section(name.tag()) {
                sections.0.insert(name, entries.clone());
            }
        }
        sections
    }

    #[must_use]
    pub fn get(&self, name: SectionName) -> &SectionEntries {
        static EMPTY: SectionEntries = BTreeMap::new();
        self.0.get(&name).unwrap_or(&EMPTY)
    }

    pub fn get_mut(&mut self, name: SectionName) -> &mut SectionEntries {
        self.0.entry(name).or_default()
    }

    /// True when no section carries a single entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(SectionEntries::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionName, &SectionEntries)> {
        self.0.iter().map(|(name, entries)| (*name, entries))
    }
}
