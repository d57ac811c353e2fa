//! Flat-JSON-file implementation of [`HotelStore`].

use std::io::ErrorKind;
use std::path::PathBuf;

use stayhub_app::ports::HotelStore;
use stayhub_domain::error::StayHubError;
use stayhub_domain::hotel::HotelRecord;

use crate::error::StorageError;

/// Whole-document store backed by one JSON file.
///
/// The file holds the full ordered array of hotel records, pretty-printed.
/// Writes go to a temp sibling first and are renamed into place, so a reader
/// never observes a torn document. The struct itself is stateless (path
/// only); cloning it is cheap and every instance sees the same file.
#[derive(Debug, Clone)]
pub struct JsonHotelStore {
    path: PathBuf,
}

impl JsonHotelStore {
    /// Create a store backed by the JSON file at `path`.
    ///
    /// The file does not need to exist yet; the first write creates it
    /// (parent directories included).
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl HotelStore for JsonHotelStore {
    async fn read_all(&self) -> Result<Vec<HotelRecord>, StayHubError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StorageError::from(err).into()),
        };

        // A freshly-touched or truncated file reads as the empty document.
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let hotels = serde_json::from_slice(&bytes).map_err(StorageError::from)?;
        Ok(hotels)
    }

    async fn write_all(&self, hotels: Vec<HotelRecord>) -> Result<(), StayHubError> {
        let json = serde_json::to_vec_pretty(&hotels).map_err(StorageError::from)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(StorageError::from)?;
            }
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, &json)
            .await
            .map_err(StorageError::from)?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(StorageError::from)?;

        tracing::debug!(path = %self.path.display(), records = hotels.len(), "document written");
        Ok(())
    }
}
