//! Utility functions shared across layers.
//!
//! - [`alias_generator`] - Random alias generation and reserved aliases

pub mod alias_generator;
