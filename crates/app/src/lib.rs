//! # stayhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `HotelStore` — whole-document read/write of the hotel list
//!   - `MediaStore` — persistence of uploaded image bytes
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CatalogService` — list, create, get by id, get by slug+id, update
//!   - `GalleryService` — persist uploaded images and attach them to a record
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `stayhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
