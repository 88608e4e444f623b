//! # folio-content-client -- Typed Rust client for a headless content API
//!
//! Provides typed, normalized access to a WordPress-style REST content
//! backend:
//! - **Listings** of any collection with pagination, search, author, taxonomy
//!   (by slug), ordering, status and sticky filters
//! - **Lookups** by slug and by id
//! - **Related content** by shared categories and tags
//! - **Taxonomies** (categories, tags) and slug-to-id resolution
//! - **Navigation menus** as raw payloads, built into trees by `folio-menu`
//!
//! Plus the [`ContentFacade`] with named accessors for the site's content
//! kinds and their typed custom fields.
//!
//! ## Embedding
//!
//! Every entity request asks the backend to embed featured media, author and
//! terms (`_embed=true`) so one page of results costs one round trip. When an
//! embed is missing the affected field falls back to its default; see
//! [`normalize`] for the full table.
//!
//! ## Failure policy
//!
//! Listings, slug lookups, taxonomy calls and menu fetches degrade to empty
//! or absent results and log a warning. [`ContentClient::get_entity_by_id`]
//! and [`ContentClient::get_related_entities`] return
//! [`ContentApiError`] for infrastructure failures so dependent calls do not
//! mistake an outage for missing content. Configuration errors are always
//! fatal.
//!
//! ## API Path Convention
//!
//! Collections live under `{base_url}/{api_prefix}/{type}` and menus under
//! `{base_url}/{menu_prefix}/{id}`. For example:
//! `https://cms.example.com/wp-json/wp/v2/posts?_embed=true`.

pub mod client;
pub mod config;
pub mod entities;
pub mod error;
pub mod facade;
pub mod fields;
pub mod model;
pub mod navigation;
pub mod normalize;
pub mod query;
pub(crate) mod raw;
pub(crate) mod retry;
pub mod taxonomy;

pub use client::ContentClient;
pub use config::{ConfigError, ContentApiConfig};
pub use error::ContentApiError;
pub use facade::{ContentFacade, FacadeCollections};
pub use model::{AuthorRef, ContentEntity, ContentStatus, MediaAsset, MediaSizes, PageResult, TaxonomyTerm};
pub use query::{ListOptions, OrderBy, SortOrder, Taxonomy};

pub use folio_core::{AuthorId, ContentId, ContentType, MediaId, TermId};
