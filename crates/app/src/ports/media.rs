//! Media port — persistence of uploaded image bytes.

use std::future::Future;

use stayhub_domain::error::StayHubError;

/// Persistence of uploaded images under a per-hotel namespace.
pub trait MediaStore {
    /// Store `bytes` as `file_name` under the hotel's namespace, creating it
    /// if needed, and return the public path the image will be served from
    /// (e.g. `/uploads/<hotel_id>/<file_name>`).
    ///
    /// An existing file with the same name is overwritten (last write wins).
    fn store_image(
        &self,
        hotel_id: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> impl Future<Output = Result<String, StayHubError>> + Send;
}
