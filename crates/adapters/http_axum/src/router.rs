//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use stayhub_app::ports::{HotelStore, MediaStore};
use stayhub_domain::image::{MAX_IMAGE_BYTES, MAX_IMAGES_PER_UPLOAD};

use crate::state::AppState;

/// Request body cap: a full upload (10 files × 5 MiB) plus form overhead.
/// Per-file enforcement still happens in the upload handler; this only stops
/// unbounded bodies from being buffered.
const BODY_LIMIT: usize = MAX_IMAGES_PER_UPLOAD * MAX_IMAGE_BYTES + 1024 * 1024;

/// Build the top-level axum [`Router`].
///
/// Mounts the catalog and upload API at the root, serves uploaded files
/// statically under `/uploads`, and routes unmatched POSTs to the upload
/// handler (legacy catch-all). Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<S, M>(state: AppState<S, M>, uploads_dir: &Path) -> Router
where
    S: HotelStore + Send + Sync + 'static,
    M: MediaStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .fallback(crate::api::images::catch_all::<S, M>)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use stayhub_app::services::catalog_service::CatalogService;
    use stayhub_app::services::gallery_service::GalleryService;
    use stayhub_domain::error::StayHubError;
    use stayhub_domain::hotel::HotelRecord;

    #[derive(Clone)]
    struct StubStore;
    #[derive(Clone)]
    struct StubMedia;

    impl stayhub_app::ports::HotelStore for StubStore {
        async fn read_all(&self) -> Result<Vec<HotelRecord>, StayHubError> {
            Ok(vec![])
        }
        async fn write_all(&self, _hotels: Vec<HotelRecord>) -> Result<(), StayHubError> {
            Ok(())
        }
    }

    impl stayhub_app::ports::MediaStore for StubMedia {
        fn store_image(
            &self,
            hotel_id: &str,
            file_name: &str,
            _bytes: &[u8],
        ) -> impl Future<Output = Result<String, StayHubError>> + Send {
            let url = format!("/uploads/{hotel_id}/{file_name}");
            async move { Ok(url) }
        }
    }

    fn test_router() -> Router {
        let state = AppState::new(
            CatalogService::new(StubStore),
            GalleryService::new(StubStore, StubMedia),
        );
        build(state, Path::new("uploads"))
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_answer_list_with_legacy_created_status() {
        let response = test_router()
            .oneshot(Request::builder().uri("/hotel").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unmatched_get() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/no-such-route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_treat_unmatched_post_as_upload_request() {
        // Not a multipart form, so the catch-all answers as a failed upload.
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/no-such-route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
