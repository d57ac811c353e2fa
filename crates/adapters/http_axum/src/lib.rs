//! # stayhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the hotel catalog JSON API (`/hotel`, `/hotel/{id}`,
//!   `/hotel-details/{name}/{id}`) with the legacy response envelopes and
//!   status codes
//! - Serve the multipart image upload endpoint (`POST /images`, plus the
//!   legacy POST catch-all) with the 5 MiB / 10-file caps
//! - Serve uploaded files statically under `/uploads`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into JSON responses; no error escapes uncaught
//!
//! ## Dependency rule
//! Depends on `stayhub-app` (for port traits and services) and
//! `stayhub-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
