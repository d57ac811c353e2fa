//! Shared application state for axum handlers.

use std::sync::Arc;

use stayhub_app::ports::{HotelStore, MediaStore};
use stayhub_app::services::catalog_service::CatalogService;
use stayhub_app::services::gallery_service::GalleryService;

/// Application state shared across all axum handlers.
///
/// Generic over the store types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<S, M> {
    /// Hotel catalog CRUD service.
    pub catalog: Arc<CatalogService<S>>,
    /// Image upload service.
    pub gallery: Arc<GalleryService<S, M>>,
}

impl<S, M> Clone for AppState<S, M> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            gallery: Arc::clone(&self.gallery),
        }
    }
}

impl<S, M> AppState<S, M>
where
    S: HotelStore + Send + Sync + 'static,
    M: MediaStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(catalog: CatalogService<S>, gallery: GalleryService<S, M>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            gallery: Arc::new(gallery),
        }
    }
}
