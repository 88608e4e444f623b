//! # folio-cli — Command-Line Access to the folio Content Layer
//!
//! Provides the `folio` binary. Every subcommand prints pretty JSON on
//! stdout; logs go to stderr.
//!
//! ## Subcommands
//!
//! - `folio list <type>`: one page of a collection, with filters.
//! - `folio get <type> --slug S | --id N`: one entity; exit code 2 when absent.
//! - `folio related <type> <id>`: entities sharing a category or tag.
//! - `folio terms categories|tags`: taxonomy listing.
//! - `folio menu --id N | --file PATH`: navigation tree, live or offline.
//!
//! ```bash
//! FOLIO_API_URL=https://cms.example.com folio list posts --per-page 5 --category news
//! folio --config folio.yaml get project --slug folio
//! folio menu --file menu.json
//! ```

pub mod config;
pub mod content;
pub mod menu;

use anyhow::Result;
use serde_json::Value;

/// Exit code for success.
pub const EXIT_OK: u8 = 0;
/// Exit code for any error.
pub const EXIT_FAILURE: u8 = 1;
/// Exit code for a lookup that found nothing.
pub const EXIT_NOT_FOUND: u8 = 2;

/// Render a result document as pretty JSON.
pub fn render_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
