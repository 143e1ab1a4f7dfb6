//! Persistence of crawler test cases as sectioned `.tst` files

// Module declarations
mod errors;
pub mod parser;
pub mod path_mapper;
mod reader;
pub mod section;
mod store;
mod types;
pub mod writer;

// Re-export public API
pub use errors::{CaseStoreError, CaseStoreResult};
pub use parser::{CaseFileParser, ParsedCase};
pub use path_mapper::{CasePath, resolve, resolve_case_dir};
pub use reader::CaseFileReader;
pub use section::{CaseSections, SectionEntries, SectionName, render_section};
pub use store::CaseStore;
pub use types::{CaseData, TestCase, WriteOutcome};
pub use writer::{CaseFileWriter, render_case_file};
