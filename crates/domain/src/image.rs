//! Uploaded image values and the request-level upload constraints.

/// Maximum size of a single uploaded image, in bytes (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Maximum number of image files accepted in one upload request.
pub const MAX_IMAGES_PER_UPLOAD: usize = 10;

/// Fallback filename for a multipart file part that carried none.
pub const DEFAULT_IMAGE_NAME: &str = "upload";

/// An image received from a multipart upload, fully buffered.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Client-supplied filename, kept as the on-disk name (last write wins
    /// on collision).
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Whether this image fits the per-file size cap.
    #[must_use]
    pub fn within_size_limit(&self) -> bool {
        self.bytes.len() <= MAX_IMAGE_BYTES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_image_at_exact_size_limit() {
        let image = ImageUpload {
            file_name: "edge.jpg".to_string(),
            bytes: vec![0; MAX_IMAGE_BYTES],
        };
        assert!(image.within_size_limit());
    }

    #[test]
    fn should_reject_image_one_byte_over_limit() {
        let image = ImageUpload {
            file_name: "big.jpg".to_string(),
            bytes: vec![0; MAX_IMAGE_BYTES + 1],
        };
        assert!(!image.within_size_limit());
    }
}
