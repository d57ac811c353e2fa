//! Gallery service — use-case for attaching uploaded images to a hotel.

use stayhub_domain::error::{NotFoundError, StayHubError};
use stayhub_domain::image::ImageUpload;

use crate::ports::{HotelStore, MediaStore};

/// Application service for the image upload flow.
///
/// Image files and the hotel document are two separate persistence targets
/// with no transaction spanning them: files are written first, then the
/// record is patched. A crash or failure between the two steps leaves the
/// files on disk with no record reference, and a failed hotel lookup does not
/// roll the files back either — the directory is keyed by hotel id and gets
/// reused on the next attempt.
pub struct GalleryService<S, M> {
    store: S,
    media: M,
}

impl<S: HotelStore, M: MediaStore> GalleryService<S, M> {
    /// Create a new service backed by the given stores.
    pub fn new(store: S, media: M) -> Self {
        Self { store, media }
    }

    /// Persist `files` under the hotel's namespace and append their public
    /// paths to the record's image list, in submission order.
    ///
    /// The document is written exactly once, after all files are on disk.
    /// Zero files is a no-op success: the hotel is still looked up and the
    /// document still written, and the returned list is empty.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::Media`] when a file cannot be persisted,
    /// [`StayHubError::NotFound`] when no record matches `hotel_id` (files
    /// already written stay on disk), or [`StayHubError::Storage`] when the
    /// document read/write fails after the files were stored.
    #[tracing::instrument(skip(self, files), fields(file_count = files.len()))]
    pub async fn attach_images(
        &self,
        hotel_id: &str,
        files: Vec<ImageUpload>,
    ) -> Result<Vec<String>, StayHubError> {
        let mut image_urls = Vec::with_capacity(files.len());
        for file in &files {
            let url = self
                .media
                .store_image(hotel_id, &file.file_name, &file.bytes)
                .await?;
            image_urls.push(url);
        }

        let mut hotels = self.store.read_all().await?;
        let Some(hotel) = hotels
            .iter_mut()
            .find(|hotel| hotel.hotel_id.matches_param(hotel_id))
        else {
            return Err(NotFoundError {
                entity: "Hotel",
                id: hotel_id.to_string(),
            }
            .into());
        };

        hotel.images.extend(image_urls.iter().cloned());
        self.store.write_all(hotels).await?;

        tracing::info!(hotel_id, count = image_urls.len(), "images attached");
        Ok(image_urls)
    }
}
