//! Shared state injected into every HTTP handler.

use std::sync::Arc;

use crate::application::services::AliasService;

/// Application state shared across handlers.
///
/// Cloning is cheap: the service sits behind an `Arc` and the store behind it
/// is type-erased, so tests can plug in any [`crate::domain::repositories::RecordStore`].
#[derive(Clone)]
pub struct AppState {
    pub alias_service: Arc<AliasService>,
}

impl AppState {
    pub fn new(alias_service: Arc<AliasService>) -> Self {
        Self { alias_service }
    }
}
