//! Test utilities and helper functions for the test case store suite

use anyhow::Result;
use kodegen_tools_testcases::{CaseData, CaseStore, CaseStoreConfig, SectionName};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory to use as base directory
#[allow(dead_code)]
pub fn create_test_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a store rooted at `base_dir` with default settings
#[allow(dead_code)]
pub fn create_test_store(base_dir: &Path) -> CaseStore {
    let config = CaseStoreConfig::builder()
        .base_dir(base_dir.to_path_buf())
        .build()
        .expect("Failed to create test config");
    CaseStore::new(config)
}

/// Case data with every section set, only GET carrying an entry
#[allow(dead_code)]
pub fn login_case_data() -> CaseData {
    let none: [(&str, &str); 0] = [];
    CaseData::default()
        .with_section(SectionName::Get, [("a", "1")])
        .with_section(SectionName::Post, none)
        .with_section(SectionName::Cookie, none)
        .with_section(SectionName::HttpHeaders, none)
        .with_section(SectionName::Confirm, none)
        .with_section(SectionName::Prompt, none)
}

/// Case data with entries in every section
#[allow(dead_code)]
pub fn full_case_data() -> CaseData {
    CaseData::default()
        .with_section(SectionName::Get, [("q", "rust"), ("page", "2")])
        .with_section(SectionName::Post, [("user", "alice"), ("password", "s3cr3t")])
        .with_section(SectionName::Cookie, [("session", "abc123")])
        .with_section(
            SectionName::HttpHeaders,
            [("Accept", "text/html"), ("User-Agent", "crawler/1.0")],
        )
        .with_section(SectionName::Confirm, [("Delete this item?", "true")])
        .with_section(SectionName::Prompt, [("Your name", "Alice")])
}

/// Lists every path below `root`, sorted, for before/after comparisons
#[allow(dead_code)]
pub fn snapshot_tree(root: &Path) -> Vec<PathBuf> {
    fn walk(dir: &Path, out: &mut Vec<PathBuf>) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            out.push(path.clone());
            if path.is_dir() {
                walk(&path, out);
            }
        }
    }

    let mut paths = Vec::new();
    walk(root, &mut paths);
    paths.sort();
    paths
}
