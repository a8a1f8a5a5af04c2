//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use catalog_core::{
    AdminSession, CatalogRepository, FavoriteKeying, FavoritesBook, FavoritesTracker,
    TextGenerationService,
};
use std::sync::Arc;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogRepository>,
    /// Per-profile favorites, sharing one write gate.
    pub favorites: FavoritesBook,
    pub session: AdminSession,
    /// `None` when no API key is configured; the AI endpoints then answer 503.
    pub text_generator: Option<Arc<dyn TextGenerationService>>,
    pub favorites_keying: FavoriteKeying,
}

impl AppState {
    pub fn favorites_for(&self, profile: &str) -> FavoritesTracker {
        self.favorites.for_profile(profile)
    }
}
