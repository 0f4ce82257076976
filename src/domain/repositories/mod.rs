//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Testing
//!
//! See integration tests in `tests/record_store.rs` for usage examples.

pub mod record_store;

pub use record_store::{RecordStore, StoreSummary};

#[cfg(test)]
pub use record_store::MockRecordStore;
