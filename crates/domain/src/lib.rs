//! # stayhub-domain
//!
//! Pure domain model for the stayhub hotel listing service.
//!
//! ## Responsibilities
//! - Foundational types: the string-or-number tolerant [`id::HotelId`] and
//!   error conventions
//! - Define **hotel records** (the persisted listing schema, its rooms, and
//!   host information)
//! - Define the **create payload** with the legacy truthiness validation and
//!   the **patch** type with shallow-merge semantics
//! - Deterministic slugification of listing titles
//! - Upload constraints (per-file size cap, per-request file cap)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod slug;

pub mod hotel;
pub mod image;
