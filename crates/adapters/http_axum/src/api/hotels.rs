//! JSON REST handlers for the hotel catalog.
//!
//! Response envelopes and status codes reproduce the legacy API surface,
//! including its quirks: the list endpoint answers `201`, and both list and
//! single-record responses arrive under a `hotel` key.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use stayhub_app::ports::{HotelStore, MediaStore};
use stayhub_domain::error::StayHubError;
use stayhub_domain::hotel::{HotelPatch, HotelRecord, NewHotel};

use crate::error::message_response;
use crate::state::AppState;

/// `{"message": …, "hotel": …}` success envelope; `hotel` carries a single
/// record or, on the list endpoint, the full array.
#[derive(Serialize)]
struct HotelEnvelope<T: Serialize> {
    message: &'static str,
    hotel: T,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Found(Vec<HotelRecord>),
    Failed,
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            // 201 on a read is a preserved legacy quirk.
            Self::Found(hotels) => (
                StatusCode::CREATED,
                Json(HotelEnvelope {
                    message: "Find all Hotels successfully",
                    hotel: hotels,
                }),
            )
                .into_response(),
            Self::Failed => {
                message_response(StatusCode::INTERNAL_SERVER_ERROR, "Error fetching hotels")
            }
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(HotelRecord),
    Rejected(String),
    Failed,
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(hotel) => (
                StatusCode::CREATED,
                Json(HotelEnvelope {
                    message: "Hotel added successfully",
                    hotel,
                }),
            )
                .into_response(),
            Self::Rejected(message) => message_response(StatusCode::BAD_REQUEST, &message),
            Self::Failed => {
                message_response(StatusCode::INTERNAL_SERVER_ERROR, "Error adding hotel")
            }
        }
    }
}

/// Possible responses from the single-record lookup endpoints.
pub enum GetResponse {
    Found(HotelRecord),
    NotFound,
    Failed,
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Found(hotel) => Json(HotelEnvelope {
                message: "Find this Hotel successfully",
                hotel,
            })
            .into_response(),
            Self::NotFound => message_response(StatusCode::NOT_FOUND, "Could not find this hotel"),
            Self::Failed => {
                message_response(StatusCode::INTERNAL_SERVER_ERROR, "Error fetching hotel")
            }
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Updated(HotelRecord),
    NotFound,
    Failed,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Updated(hotel) => Json(HotelEnvelope {
                message: "Hotel updated successfully",
                hotel,
            })
            .into_response(),
            Self::NotFound => message_response(StatusCode::NOT_FOUND, "This Hotel doesn't exist"),
            Self::Failed => {
                message_response(StatusCode::INTERNAL_SERVER_ERROR, "Error updating hotel")
            }
        }
    }
}

/// `GET /hotel`
pub async fn list<S, M>(State(state): State<AppState<S, M>>) -> ListResponse
where
    S: HotelStore + Send + Sync + 'static,
    M: MediaStore + Send + Sync + 'static,
{
    match state.catalog.list().await {
        Ok(hotels) => ListResponse::Found(hotels),
        Err(err) => {
            tracing::error!(error = %err, "failed to list hotels");
            ListResponse::Failed
        }
    }
}

/// `POST /hotel`
pub async fn create<S, M>(
    State(state): State<AppState<S, M>>,
    Json(payload): Json<NewHotel>,
) -> CreateResponse
where
    S: HotelStore + Send + Sync + 'static,
    M: MediaStore + Send + Sync + 'static,
{
    match state.catalog.create(payload).await {
        Ok(hotel) => CreateResponse::Created(hotel),
        Err(StayHubError::Validation(err)) => CreateResponse::Rejected(err.to_string()),
        Err(StayHubError::Conflict(err)) => CreateResponse::Rejected(err.to_string()),
        Err(err) => {
            tracing::error!(error = %err, "failed to create hotel");
            CreateResponse::Failed
        }
    }
}

/// `GET /hotel/{id}`
pub async fn get<S, M>(
    State(state): State<AppState<S, M>>,
    Path(id): Path<String>,
) -> GetResponse
where
    S: HotelStore + Send + Sync + 'static,
    M: MediaStore + Send + Sync + 'static,
{
    match state.catalog.get_by_id(&id).await {
        Ok(hotel) => GetResponse::Found(hotel),
        Err(StayHubError::NotFound(_)) => GetResponse::NotFound,
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch hotel");
            GetResponse::Failed
        }
    }
}

/// `GET /hotel-details/{name}/{id}`
pub async fn get_by_slug_and_id<S, M>(
    State(state): State<AppState<S, M>>,
    Path((name, id)): Path<(String, String)>,
) -> GetResponse
where
    S: HotelStore + Send + Sync + 'static,
    M: MediaStore + Send + Sync + 'static,
{
    match state.catalog.get_by_slug_and_id(&name, &id).await {
        Ok(hotel) => GetResponse::Found(hotel),
        Err(StayHubError::NotFound(_)) => GetResponse::NotFound,
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch hotel");
            GetResponse::Failed
        }
    }
}

/// `PUT /hotel/{id}`
pub async fn update<S, M>(
    State(state): State<AppState<S, M>>,
    Path(id): Path<String>,
    Json(patch): Json<HotelPatch>,
) -> UpdateResponse
where
    S: HotelStore + Send + Sync + 'static,
    M: MediaStore + Send + Sync + 'static,
{
    match state.catalog.update(&id, patch).await {
        Ok(hotel) => UpdateResponse::Updated(hotel),
        Err(StayHubError::NotFound(_)) => UpdateResponse::NotFound,
        Err(err) => {
            tracing::error!(error = %err, "failed to update hotel");
            UpdateResponse::Failed
        }
    }
}
