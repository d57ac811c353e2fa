//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod hotels;
#[allow(clippy::missing_errors_doc)]
pub mod images;

use axum::Router;
use axum::routing::{get, post};

use stayhub_app::ports::{HotelStore, MediaStore};

use crate::state::AppState;

/// Build the API sub-router with the legacy route table.
pub fn routes<S, M>() -> Router<AppState<S, M>>
where
    S: HotelStore + Send + Sync + 'static,
    M: MediaStore + Send + Sync + 'static,
{
    Router::new()
        // Hotel catalog
        .route("/hotel", get(hotels::list::<S, M>).post(hotels::create::<S, M>))
        .route(
            "/hotel/{id}",
            get(hotels::get::<S, M>).put(hotels::update::<S, M>),
        )
        .route(
            "/hotel-details/{name}/{id}",
            get(hotels::get_by_slug_and_id::<S, M>),
        )
        // Image uploads
        .route("/images", post(images::upload::<S, M>))
}
