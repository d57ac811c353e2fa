//! Multipart image upload handler.
//!
//! The form carries one `hotel_id` text field and up to ten `images` file
//! fields. Both caps (10 files per request, 5 MiB per file) are enforced
//! while the form is parsed, before any disk write. Every parse or limit
//! failure answers `500 {"error": "Image upload failed"}` — a preserved
//! legacy quirk, not a 4xx — while a document fault after the files are on
//! disk answers with the distinct `"Failed to update hotel record"` body.

use axum::Json;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use stayhub_app::ports::{HotelStore, MediaStore};
use stayhub_domain::error::StayHubError;
use stayhub_domain::image::{DEFAULT_IMAGE_NAME, ImageUpload, MAX_IMAGES_PER_UPLOAD};

use crate::error::{message_response, upload_error_response};
use crate::state::AppState;

/// `{"message": …, "imageUrls": […]}` success envelope.
#[derive(Serialize)]
struct UploadBody {
    message: &'static str,
    #[serde(rename = "imageUrls")]
    image_urls: Vec<String>,
}

/// Possible responses from the upload endpoint.
pub enum UploadResponse {
    Uploaded(Vec<String>),
    HotelNotFound,
    UploadFailed,
    RecordUpdateFailed,
}

impl IntoResponse for UploadResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Uploaded(image_urls) => Json(UploadBody {
                message: "Images uploaded successfully",
                image_urls,
            })
            .into_response(),
            Self::HotelNotFound => message_response(StatusCode::NOT_FOUND, "Hotel not found"),
            Self::UploadFailed => {
                upload_error_response(StatusCode::INTERNAL_SERVER_ERROR, "Image upload failed")
            }
            Self::RecordUpdateFailed => upload_error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to update hotel record",
            ),
        }
    }
}

/// `POST /images`
pub async fn upload<S, M>(
    State(state): State<AppState<S, M>>,
    multipart: Multipart,
) -> UploadResponse
where
    S: HotelStore + Send + Sync + 'static,
    M: MediaStore + Send + Sync + 'static,
{
    handle_upload(&state, multipart).await
}

/// Fallback for unmatched paths.
///
/// The legacy app mounted its image router as a catch-all, so any unmatched
/// POST is treated as an upload request. Everything else is a plain 404.
pub async fn catch_all<S, M>(State(state): State<AppState<S, M>>, request: Request) -> Response
where
    S: HotelStore + Send + Sync + 'static,
    M: MediaStore + Send + Sync + 'static,
{
    if request.method() != Method::POST {
        return StatusCode::NOT_FOUND.into_response();
    }

    match Multipart::from_request(request, &()).await {
        Ok(multipart) => handle_upload(&state, multipart).await.into_response(),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "catch-all request is not a multipart form");
            UploadResponse::UploadFailed.into_response()
        }
    }
}

async fn handle_upload<S, M>(state: &AppState<S, M>, multipart: Multipart) -> UploadResponse
where
    S: HotelStore + Send + Sync + 'static,
    M: MediaStore + Send + Sync + 'static,
{
    let (hotel_id, files) = match collect_form(multipart).await {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match state.gallery.attach_images(&hotel_id, files).await {
        Ok(image_urls) => UploadResponse::Uploaded(image_urls),
        Err(StayHubError::NotFound(_)) => UploadResponse::HotelNotFound,
        Err(StayHubError::Media(err)) => {
            tracing::error!(error = %err, "failed to persist uploaded image");
            UploadResponse::UploadFailed
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to update hotel record after upload");
            UploadResponse::RecordUpdateFailed
        }
    }
}

/// Drain the multipart form into the `hotel_id` value and the buffered files,
/// enforcing the per-file and per-request caps as fields arrive.
async fn collect_form(mut multipart: Multipart) -> Result<(String, Vec<ImageUpload>), UploadResponse> {
    let mut hotel_id: Option<String> = None;
    let mut files: Vec<ImageUpload> = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                tracing::warn!(error = %err, "multipart parse failed");
                return Err(UploadResponse::UploadFailed);
            }
        };

        let name = field.name().map(ToOwned::to_owned);
        match name.as_deref() {
            Some("hotel_id") => match field.text().await {
                Ok(text) => hotel_id = Some(text),
                Err(err) => {
                    tracing::warn!(error = %err, "failed to read hotel_id field");
                    return Err(UploadResponse::UploadFailed);
                }
            },
            Some("images") => {
                if files.len() >= MAX_IMAGES_PER_UPLOAD {
                    tracing::warn!(limit = MAX_IMAGES_PER_UPLOAD, "too many files in upload");
                    return Err(UploadResponse::UploadFailed);
                }

                let file_name = field
                    .file_name()
                    .unwrap_or(DEFAULT_IMAGE_NAME)
                    .to_string();
                let bytes = match field.bytes().await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        tracing::warn!(error = %err, file = %file_name, "failed to read file field");
                        return Err(UploadResponse::UploadFailed);
                    }
                };

                let image = ImageUpload {
                    file_name,
                    bytes: bytes.to_vec(),
                };
                if !image.within_size_limit() {
                    tracing::warn!(file = %image.file_name, size = image.bytes.len(), "file exceeds size limit");
                    return Err(UploadResponse::UploadFailed);
                }
                files.push(image);
            }
            // Unknown fields are skipped, as the legacy parser did.
            _ => {}
        }
    }

    // A missing hotel_id falls through to the lookup as an empty id, which
    // matches nothing and yields the 404 path.
    Ok((hotel_id.unwrap_or_default(), files))
}
