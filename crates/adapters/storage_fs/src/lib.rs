//! # stayhub-adapter-storage-fs
//!
//! Filesystem persistence adapter.
//!
//! ## Responsibilities
//! - Implement the [`HotelStore`](stayhub_app::ports::HotelStore) port as a
//!   single flat JSON document on disk
//! - Implement the [`MediaStore`](stayhub_app::ports::MediaStore) port as a
//!   per-hotel `uploads/<hotel_id>/` directory tree
//! - Map filesystem and JSON faults into the domain error type
//!
//! ## Dependency rule
//! Depends on `stayhub-app` (for port traits) and `stayhub-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

pub mod document;
pub mod error;
pub mod media;

pub use document::JsonHotelStore;
pub use error::{MediaError, StorageError};
pub use media::FsMediaStore;
