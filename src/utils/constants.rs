//! Shared constants for the test case store
//!
//! Default values and fixed names used by the path mapper, the writer and
//! the reader, kept in one place to avoid magic strings.

use std::time::Duration;

/// Directory, relative to the base directory, that holds every case file.
///
/// Each URL origin gets its own sub-directory below this one.
pub const TEST_CASE_DIRECTORY: &str = "tests/cases";

/// Extension of a case file (without the leading dot).
pub const CASE_FILE_EXTENSION: &str = "tst";

/// First line of every case file.
pub const CASE_FILE_MARKER: &str = "Test Case File";

/// Name written into the `generated by` header line.
pub const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");

/// Version written into the `generated by` header line.
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project URL written into the `generated by` header line.
pub const GENERATOR_HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");

/// Default permission bits for written case files: `rw-r--r--`.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Permission bits used by earlier releases: `rwxr-xr-x`.
///
/// Case files are not executable, but existing tooling may compare modes
/// across recordings, so the old value stays selectable.
pub const LEGACY_FILE_MODE: u32 = 0o755;

/// Upper bound for blocking filesystem work scheduled from async code.
pub const BLOCKING_IO_TIMEOUT: Duration = Duration::from_secs(30);
