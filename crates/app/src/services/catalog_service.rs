//! Catalog service — use-cases for managing hotel listings.

use stayhub_domain::error::{ConflictError, NotFoundError, StayHubError};
use stayhub_domain::hotel::{HotelPatch, HotelRecord, NewHotel};

use crate::ports::HotelStore;

/// Application service for hotel listing operations.
///
/// Every mutating operation is a read-modify-write cycle over the whole
/// document: read all records, compute the new sequence, write it back.
pub struct CatalogService<S> {
    store: S,
}

impl<S: HotelStore> CatalogService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List every hotel record, unfiltered and unpaginated.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list(&self) -> Result<Vec<HotelRecord>, StayHubError> {
        self.store.read_all().await
    }

    /// Create a new hotel listing.
    ///
    /// Validates the payload (legacy truthiness rules), computes the slug,
    /// rejects a duplicate `hotel_id` (strict comparison), and persists the
    /// extended document. Nothing is written on any failure.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::Validation`] for a missing/falsy field,
    /// [`StayHubError::Conflict`] for a duplicate id, or a storage error.
    #[tracing::instrument(skip(self, payload))]
    pub async fn create(&self, payload: NewHotel) -> Result<HotelRecord, StayHubError> {
        let record = payload.into_record()?;

        let mut hotels = self.store.read_all().await?;
        if hotels.iter().any(|hotel| hotel.hotel_id == record.hotel_id) {
            return Err(ConflictError::DuplicateHotelId.into());
        }

        hotels.push(record.clone());
        self.store.write_all(hotels).await?;

        tracing::info!(hotel_id = %record.hotel_id, slug = %record.slug, "hotel created");
        Ok(record)
    }

    /// Look up a hotel by the raw id parameter.
    ///
    /// The comparison is coercive: a textual `"1"` matches a record whose id
    /// is stored as the number `1`.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::NotFound`] when nothing matches, or a storage
    /// error from the store.
    pub async fn get_by_id(&self, id: &str) -> Result<HotelRecord, StayHubError> {
        let hotels = self.store.read_all().await?;
        hotels
            .into_iter()
            .find(|hotel| hotel.hotel_id.matches_param(id))
            .ok_or_else(|| not_found(id))
    }

    /// Look up a hotel by slug and id.
    ///
    /// The id comparison is coercive like [`CatalogService::get_by_id`]; the
    /// slug must match exactly.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::NotFound`] when nothing matches, or a storage
    /// error from the store.
    pub async fn get_by_slug_and_id(
        &self,
        slug: &str,
        id: &str,
    ) -> Result<HotelRecord, StayHubError> {
        let hotels = self.store.read_all().await?;
        hotels
            .into_iter()
            .find(|hotel| hotel.hotel_id.matches_param(id) && hotel.slug == slug)
            .ok_or_else(|| not_found(id))
    }

    /// Shallow-merge `patch` onto the record matching `id` and persist.
    ///
    /// Only the supplied fields change; `slug` is never recomputed here, and
    /// `hotel_id` uniqueness is not re-checked (legacy behavior).
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::NotFound`] when nothing matches, or a storage
    /// error from the store.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update(&self, id: &str, patch: HotelPatch) -> Result<HotelRecord, StayHubError> {
        let mut hotels = self.store.read_all().await?;
        let Some(hotel) = hotels
            .iter_mut()
            .find(|hotel| hotel.hotel_id.matches_param(id))
        else {
            return Err(not_found(id));
        };

        patch.apply(hotel);
        let updated = hotel.clone();
        self.store.write_all(hotels).await?;

        Ok(updated)
    }
}

fn not_found(id: &str) -> StayHubError {
    NotFoundError {
        entity: "Hotel",
        id: id.to_string(),
    }
    .into()
}
