//! # Menu Subcommand
//!
//! Builds a navigation tree either from the live menu endpoint or, offline,
//! from a JSON payload on disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use serde_json::Value;
use url::Url;

use folio_content_client::ContentClient;
use folio_menu::MenuTreeBuilder;

/// Arguments for `folio menu`.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["id", "file"])))]
pub struct MenuArgs {
    /// Menu id to fetch from the backend.
    #[arg(long)]
    pub id: Option<u64>,
    /// Local JSON payload to normalize instead of fetching.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Base URL for resolving relative menu links.
    #[arg(long, value_name = "URL")]
    pub link_base: Option<Url>,
}

impl MenuArgs {
    /// True when the command can run without a backend.
    pub fn is_offline(&self) -> bool {
        self.file.is_some()
    }

    fn builder(&self) -> MenuTreeBuilder {
        match &self.link_base {
            Some(base) => MenuTreeBuilder::with_base(base.clone()),
            None => MenuTreeBuilder::new(),
        }
    }
}

/// Normalize a menu payload read from disk.
pub fn run_menu_file(args: &MenuArgs, path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read menu file: {}", path.display()))?;
    let payload: Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse JSON: {}", path.display()))?;
    Ok(serde_json::to_value(args.builder().build(&payload))?)
}

/// Fetch a menu and normalize it. An unreachable menu prints `[]`.
pub async fn run_menu_fetch(client: &ContentClient, args: &MenuArgs, menu_id: u64) -> Result<Value> {
    let payload = client.fetch_menu(menu_id).await;
    Ok(serde_json::to_value(args.builder().build(&payload))?)
}
