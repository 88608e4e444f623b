//! # folio CLI entry point
//!
//! Parses command-line arguments, sets up logging and dispatches to the
//! subcommand handlers in `folio_cli`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use folio_cli::config::{self, CliConfig};
use folio_cli::content::{run_get, run_list, run_related, run_terms, GetArgs, ListArgs, RelatedArgs, TermsArgs};
use folio_cli::menu::{run_menu_fetch, run_menu_file, MenuArgs};
use folio_cli::{render_json, EXIT_FAILURE, EXIT_NOT_FOUND, EXIT_OK};
use folio_content_client::ContentClient;

/// folio content CLI
///
/// Reads content from a headless content API and prints normalized JSON.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Content backend base URL. Overrides the config file and FOLIO_API_URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List one page of a collection.
    List(ListArgs),

    /// Look up one entity by slug or id.
    Get(GetArgs),

    /// List entities sharing a category or tag with another entity.
    Related(RelatedArgs),

    /// List categories or tags.
    Terms(TermsArgs),

    /// Build a navigation menu tree.
    Menu(MenuArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    tracing::debug!("folio CLI v{} starting", env!("CARGO_PKG_VERSION"));

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn init_tracing(verbose: u8, json: bool) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli) -> Result<u8> {
    if let Commands::Menu(args) = &cli.command {
        if let Some(path) = &args.file {
            return print(run_menu_file(args, path)?);
        }
    }

    let client = build_client(&cli)?;
    match &cli.command {
        Commands::List(args) => print(run_list(&client, args).await?),
        Commands::Get(args) => match run_get(&client, args).await? {
            Some(entity) => print(entity),
            None => {
                tracing::info!(content_type = %args.content_type, "no matching entity");
                Ok(EXIT_NOT_FOUND)
            }
        },
        Commands::Related(args) => print(run_related(&client, args).await?),
        Commands::Terms(args) => print(run_terms(&client, args).await?),
        Commands::Menu(args) => match args.id {
            Some(id) => print(run_menu_fetch(&client, args, id).await?),
            None => anyhow::bail!("either --id or --file is required"),
        },
    }
}

fn build_client(cli: &Cli) -> Result<ContentClient> {
    let file = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let config = config::resolve(cli.base_url.as_deref(), &file)?;
    tracing::debug!(base_url = %config.base_url, "resolved content API configuration");
    ContentClient::new(config).context("failed to build content API client")
}

fn print(value: serde_json::Value) -> Result<u8> {
    println!("{}", render_json(&value)?);
    Ok(EXIT_OK)
}
