//! `CaseStore` ties the writer, reader and parser to one configuration.
//!
//! The blocking operations are also offered as async methods that run on
//! tokio's blocking pool, bounded by `BLOCKING_IO_TIMEOUT`.

use std::path::Path;
use std::time::Duration;
use tokio::time::timeout;

use super::errors::{CaseStoreError, CaseStoreResult};
use super::parser::{CaseFileParser, ParsedCase};
use super::reader::CaseFileReader;
use super::types::{CaseData, TestCase, WriteOutcome};
use super::writer::CaseFileWriter;
use crate::config::CaseStoreConfig;
use crate::utils::BLOCKING_IO_TIMEOUT;

#[derive(Debug, Clone)]
pub struct CaseStore {
    writer: CaseFileWriter,
    reader: CaseFileReader,
}

impl CaseStore {
    #[must_use]
    pub fn new(config: CaseStoreConfig) -> Self {
        Self {
            writer: CaseFileWriter::new(&config),
            reader: CaseFileReader::new(&config),
        }
    }

    /// See [`CaseFileWriter::create`].
    ///
    /// # Errors
    ///
    /// Propagates writer failures.
    pub fn create(&self, url: &str, name: &str, data: &CaseData) -> CaseStoreResult<WriteOutcome> {
        self.writer.create(url, name, data)
    }

    /// See [`CaseFileWriter::create_then`].
    ///
    /// # Errors
    ///
    /// Propagates writer failures.
    pub fn create_then<F>(
        &self,
        url: &str,
        name: &str,
        data: &CaseData,
        on_done: F,
    ) -> CaseStoreResult<WriteOutcome>
    where
        F: FnOnce(),
    {
        self.writer.create_then(url, name, data, on_done)
    }

    /// See [`CaseFileReader::list`].
    ///
    /// # Errors
    ///
    /// Propagates reader failures.
    pub fn list(&self, url: &str) -> CaseStoreResult<Vec<TestCase>> {
        self.reader.list(url)
    }

    /// See [`CaseFileParser::parse`].
    ///
    /// # Errors
    ///
    /// Propagates parser failures.
    pub fn parse(&self, path: &Path) -> CaseStoreResult<ParsedCase> {
        CaseFileParser::parse(path)
    }

    /// Async variant of [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// Writer failures, plus `Join`/`Timeout` from the blocking task.
    pub async fn create_async(
        &self,
        url: String,
        name: String,
        data: CaseData,
    ) -> CaseStoreResult<WriteOutcome> {
        let writer = self.writer.clone();
        run_blocking("case write", BLOCKING_IO_TIMEOUT, move || {
            writer.create(&url, &name, &data)
        })
        .await
    }

    /// Async variant of [`list`](Self::list).
    ///
    /// # Errors
    ///
    /// Reader failures, plus `Join`/`Timeout` from the blocking task.
    pub async fn list_async(&self, url: String) -> CaseStoreResult<Vec<TestCase>> {
        let reader = self.reader.clone();
        run_blocking("case listing", BLOCKING_IO_TIMEOUT, move || reader.list(&url)).await
    }
}

async fn run_blocking<T, F>(
    operation: &'static str,
    limit: Duration,
    work: F,
) -> CaseStoreResult<T>
where
    F: FnOnce() -> CaseStoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    let blocking_task = tokio::task::spawn_blocking(work);

    match timeout(limit, blocking_task).await {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => Err(CaseStoreError::Join(e)),
        Err(_) => {
            log::warn!("{operation} timed out (timeout: {limit:?})");
            Err(CaseStoreError::Timeout {
                operation,
                after: limit,
            })
        }
    }
}
