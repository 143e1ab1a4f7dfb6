//! Builder methods available for all states
//!
//! This module contains methods that can be called on the builder
//! regardless of its current type state.

use super::builder::CaseStoreConfigBuilder;
use crate::utils::LEGACY_FILE_MODE;

impl<State> CaseStoreConfigBuilder<State> {
    /// Set the permission bits for written case files
    ///
    /// Only the lower twelve bits (`0o7777`) are meaningful; anything above
    /// is rejected by `build()`. Ignored on platforms without unix modes.
    #[must_use]
    pub fn file_mode(mut self, mode: u32) -> Self {
        self.file_mode = mode;
        self
    }

    /// Write case files as `rwxr-xr-x`, matching recordings made by older
    /// releases.
    #[must_use]
    pub fn legacy_file_mode(self) -> Self {
        self.file_mode(LEGACY_FILE_MODE)
    }

    #[must_use]
    pub fn skip_empty_cases(mut self, skip: bool) -> Self {
        self.skip_empty_cases = skip;
        self
    }
}
