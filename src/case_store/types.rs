//! In-memory shapes of a recorded case

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::section::{CaseSections, SectionEntries, SectionName};

/// Request data the crawler hands over for one case.
///
/// Field names follow the crawler's keys, so headers arrive as `HEADER`
/// even though they are written to the `HTTP_HEADERS` section. Unknown
/// keys are rejected; a `null` section counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseData {
    #[serde(rename = "GET", default, skip_serializing_if = "Option::is_none")]
    pub get: Option<SectionEntries>,
    #[serde(rename = "POST", default, skip_serializing_if = "Option::is_none")]
    pub post: Option<SectionEntries>,
    #[serde(rename = "COOKIE", default, skip_serializing_if = "Option::is_none")]
    pub cookie: Option<SectionEntries>,
    #[serde(rename = "HEADER", default, skip_serializing_if = "Option::is_none")]
    pub header: Option<SectionEntries>,
    #[serde(rename = "CONFIRM", default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<SectionEntries>,
    #[serde(rename = "PROMPT", default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<SectionEntries>,
}

impl CaseData {
    #[must_use]
    pub fn section(&self, name: SectionName) -> Option<&SectionEntries> {
        match name {
            SectionName::Get => self.get.as_ref(),
            SectionName::Post => self.post.as_ref(),
            SectionName::Cookie => self.cookie.as_ref(),
            SectionName::HttpHeaders => self.header.as_ref(),
            SectionName::Confirm => self.confirm.as_ref(),
            SectionName::Prompt => self.prompt.as_ref(),
        }
    }

    fn section_slot(&mut self, name: SectionName) -> &mut Option<SectionEntries> {
        match name {
            SectionName::Get => &mut self.get,
            SectionName::Post => &mut self.post,
            SectionName::Cookie => &mut self.cookie,
            SectionName::HttpHeaders => &mut self.header,
            SectionName::Confirm => &mut self.confirm,
            SectionName::Prompt => &mut self.prompt,
        }
    }

    /// Set a whole section, replacing anything already there.
    #[must_use]
    pub fn with_section<K, V>(
        mut self,
        name: SectionName,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        *self.section_slot(name) = Some(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// True when the crawler supplied no section at all.
    ///
    /// A section that is present but empty still counts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        SectionName::ALL
            .into_iter()
            .all(|name| self.section(name).is_none())
    }

    /// Sections with every missing one defaulted to empty.
    #[must_use]
    pub fn to_sections(&self) -> CaseSections {
        let mut sections = CaseSections::default();
        for name in SectionName::ALL {
            if let Some(entries) = self.section(name) {
                sections.get_mut(name).clone_from(entries);
            }
        }
        sections
    }
}

/// A case as reconstructed from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub url: String,
    pub name: String,
    pub sections: CaseSections,
}

/// What a call to the writer actually did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Empty URL, empty name or no sections: nothing touched on disk.
    Skipped,
    /// Case file written, with the directories that had to be created.
    Written {
        path: PathBuf,
        created_dirs: Vec<PathBuf>,
    },
}

impl WriteOutcome {
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, WriteOutcome::Skipped)
    }

    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            WriteOutcome::Written { path, .. } => Some(path),
            WriteOutcome::Skipped => None,
        }
    }
}
