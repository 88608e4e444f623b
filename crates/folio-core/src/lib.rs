#![deny(missing_docs)]

//! # folio-core — Foundational Types for the folio Content Layer
//!
//! This crate defines the small set of types every other crate in the
//! workspace shares. It performs no I/O and has no internal crate
//! dependencies, only `serde` and `thiserror` from the ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for backend identifiers.** A [`ContentId`] cannot be
//!    passed where a [`TermId`] is expected, even though both are integers
//!    assigned by the content backend.
//!
//! 2. **Validated collection keys.** [`ContentType`] is checked once at
//!    construction so it can be spliced into a request path without escaping.
//!
//! 3. **Structured errors.** [`ValidationError`] is built with `thiserror`;
//!    no `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod content_type;
pub mod error;
pub mod identity;

pub use content_type::ContentType;
pub use error::ValidationError;
pub use identity::{AuthorId, ContentId, MediaId, TermId};
