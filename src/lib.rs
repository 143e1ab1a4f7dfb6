pub mod case_store;
pub mod config;
pub mod ini;
pub mod utils;

pub use case_store::{
    CaseData, CaseFileParser, CaseFileReader, CaseFileWriter, CasePath, CaseSections,
    CaseStore, CaseStoreError, CaseStoreResult, ParsedCase, SectionName, TestCase, WriteOutcome,
};
pub use config::CaseStoreConfig;
pub use ini::{IniDocument, parse_ini};
