//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`StayHubError`]
//! via `#[from]` (validation, conflict, not-found) or by boxing the source
//! (storage and media adapters).

/// Top-level error for all application operations.
#[derive(Debug, thiserror::Error)]
pub enum StayHubError {
    /// A create payload failed the required-field check.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The operation would violate a uniqueness rule.
    #[error("conflict")]
    Conflict(#[from] ConflictError),

    /// No record matched the requested identifier.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The hotel document could not be read or written.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// An uploaded image could not be persisted.
    #[error("media error")]
    Media(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Create-time payload validation failures.
///
/// The message deliberately lists every required field in one string, matching
/// the API contract for missing-field rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// At least one required field is absent, an empty string, or zero.
    #[error(
        "Required fields: hotel_id, title, images, description, guest_count, \
         bedroom_count, bathroom_count, amenities, host_information, address, \
         latitude, longitude"
    )]
    MissingFields,
}

/// Uniqueness violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    /// A record with the same `hotel_id` already exists in the document.
    #[error("Hotel with this ID already exists")]
    DuplicateHotelId,
}

/// A lookup found no matching record.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// Human-readable entity name, e.g. `"Hotel"`.
    pub entity: &'static str,
    /// The identifier that failed to match.
    pub id: String,
}
