//! Uploads-directory implementation of [`MediaStore`].

use std::path::{Path, PathBuf};

use stayhub_app::ports::MediaStore;
use stayhub_domain::error::StayHubError;
use stayhub_domain::image::DEFAULT_IMAGE_NAME;

use crate::error::MediaError;

/// Image store writing files under `<root>/<hotel_id>/<file_name>`.
///
/// Directories are created on demand. Filenames keep their client-supplied
/// value reduced to the final path component, so a crafted name cannot climb
/// out of the uploads tree; an existing file with the same name is silently
/// overwritten (last write wins).
#[derive(Debug, Clone)]
pub struct FsMediaStore {
    root: PathBuf,
}

impl FsMediaStore {
    /// Create a store rooted at `root` (the directory served as `/uploads`).
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

/// Reduce a client-supplied name to a single safe path component.
fn safe_component(raw: &str) -> String {
    Path::new(raw)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty() && name != "." && name != "..")
        .unwrap_or_else(|| DEFAULT_IMAGE_NAME.to_string())
}

impl MediaStore for FsMediaStore {
    async fn store_image(
        &self,
        hotel_id: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, StayHubError> {
        let hotel_dir = safe_component(hotel_id);
        let file_name = safe_component(file_name);

        let dir = self.root.join(&hotel_dir);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(MediaError::from)?;
        tokio::fs::write(dir.join(&file_name), bytes)
            .await
            .map_err(MediaError::from)?;

        tracing::debug!(hotel_id = %hotel_dir, file = %file_name, size = bytes.len(), "image stored");
        Ok(format!("/uploads/{hotel_dir}/{file_name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_write_file_and_return_public_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsMediaStore::new(dir.path());

        let url = store.store_image("h001", "a.jpg", b"data").await.unwrap();

        assert_eq!(url, "/uploads/h001/a.jpg");
        let on_disk = tokio::fs::read(dir.path().join("h001/a.jpg")).await.unwrap();
        assert_eq!(on_disk, b"data");
    }

    #[tokio::test]
    async fn should_overwrite_existing_file_with_same_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsMediaStore::new(dir.path());

        store.store_image("h001", "a.jpg", b"first").await.unwrap();
        store.store_image("h001", "a.jpg", b"second").await.unwrap();

        let on_disk = tokio::fs::read(dir.path().join("h001/a.jpg")).await.unwrap();
        assert_eq!(on_disk, b"second");
    }

    #[tokio::test]
    async fn should_reuse_directory_across_uploads() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsMediaStore::new(dir.path());

        store.store_image("h001", "a.jpg", b"a").await.unwrap();
        store.store_image("h001", "b.jpg", b"b").await.unwrap();

        assert!(dir.path().join("h001/a.jpg").exists());
        assert!(dir.path().join("h001/b.jpg").exists());
    }

    #[tokio::test]
    async fn should_confine_traversal_names_to_uploads_tree() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsMediaStore::new(dir.path().join("uploads"));

        let url = store
            .store_image("h001", "../../escape.jpg", b"data")
            .await
            .unwrap();

        assert_eq!(url, "/uploads/h001/escape.jpg");
        assert!(dir.path().join("uploads/h001/escape.jpg").exists());
        assert!(!dir.path().join("escape.jpg").exists());
    }

    #[tokio::test]
    async fn should_fall_back_to_default_name_for_degenerate_input() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsMediaStore::new(dir.path());

        let url = store.store_image("h001", "..", b"data").await.unwrap();

        assert_eq!(url, "/uploads/h001/upload");
    }
}
