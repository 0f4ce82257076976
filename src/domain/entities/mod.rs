//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Creation inputs
//! live in a separate struct (`NewUrlRecord`) from the persisted form
//! (`UrlRecord`), which carries the store-assigned id and the counter.

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
