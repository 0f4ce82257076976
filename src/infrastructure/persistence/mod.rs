//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with bound
//! parameters for every query.
//!
//! # Repositories
//!
//! - [`SqliteRecordStore`] - URL record storage, lookup and request counting

pub mod sqlite_record_store;

pub use sqlite_record_store::{SqliteRecordStore, StoreOptions};
