//! Configuration module for the test case store
//!
//! This module provides the `CaseStoreConfig` struct and its type-safe builder
//! for configuring where and how case files are stored.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{CaseStoreConfigBuilder, WithBaseDir};
pub use types::CaseStoreConfig;
