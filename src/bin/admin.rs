//! CLI administration tool for short-alias.
//!
//! Provides commands for initializing and inspecting the record store without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create the schema (idempotent)
//! cargo run --bin admin -- db init
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # View totals and the most requested aliases
//! cargo run --bin admin -- stats --top 5
//!
//! # Inspect one alias without counting a request
//! cargo run --bin admin -- show Ab3xQ9
//!
//! # Create an alias from the command line
//! cargo run --bin admin -- shorten https://example.com/a
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DATABASE_FILE_PATH` (required): SQLite location
//! - `ALIAS_LENGTH`, `ALIAS_MAX_ATTEMPTS` (optional): used by `shorten`
//! - pool settings as for the server (see `short_alias::config`)

use short_alias::application::services::{AliasPolicy, AliasService};
use short_alias::config;
use short_alias::domain::entities::UrlRecord;
use short_alias::domain::repositories::RecordStore;
use short_alias::infrastructure::persistence::SqliteRecordStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing short-alias.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show totals and the most requested aliases
    Stats {
        /// Number of aliases to list
        #[arg(short, long, default_value_t = 10)]
        top: i64,
    },

    /// Show one alias without counting a request
    Show {
        /// The alias to inspect
        alias: String,
    },

    /// Create an alias for a URL
    Shorten {
        /// The long URL to shorten
        url: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Create the table and indexes if missing
    Init,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let policy = config.alias_policy();

    let store = SqliteRecordStore::connect(&config.database_url, &config.store_options())
        .await
        .context("Failed to connect to database")?;
    let store = Arc::new(store);

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &store).await?,
        Commands::Stats { top } => handle_stats(service(&store, policy), top).await?,
        Commands::Show { alias } => handle_show(service(&store, policy), &alias).await?,
        Commands::Shorten { url } => handle_shorten(service(&store, policy), &url).await?,
    }

    store.close().await;

    Ok(())
}

fn service(store: &Arc<SqliteRecordStore>, policy: AliasPolicy) -> AliasService<SqliteRecordStore> {
    AliasService::with_policy(store.clone(), policy)
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, store: &SqliteRecordStore) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            if !store.health_check().await {
                anyhow::bail!("Database did not answer");
            }

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Init => {
            println!("{}", "🛠  Ensuring schema...".bright_blue());

            store.ensure_schema().await?;

            println!("{}", "✅ Schema ready".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version = store.sqlite_version().await?;
            println!("  SQLite:  {}", version.bright_white());

            if store.schema_exists().await? {
                let summary = store.summary().await?;
                println!(
                    "  Records: {}",
                    summary.records.to_string().bright_white()
                );
            } else {
                println!(
                    "  Records: {}",
                    "schema missing (run `admin db init`)".yellow()
                );
            }
            println!();
        }
    }

    Ok(())
}

/// Displays totals and the most requested aliases.
///
/// # Output Format
///
/// ```text
/// 📊 Statistics
///
///   Records:        3
///   Total requests: 17
///
///   Alias    Requests   Created            URL
///   ─────────────────────────────────────────────────────────────
///   Ab3xQ9   12         2026-01-15 10:30   https://example.com/a
/// ```
async fn handle_stats(service: AliasService<SqliteRecordStore>, top: i64) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let summary = service.summary().await?;

    println!(
        "  Records:        {}",
        summary.records.to_string().bright_green().bold()
    );
    println!(
        "  Total requests: {}",
        summary.total_requests.to_string().bright_green().bold()
    );
    println!();

    let records = service.top_requested(top).await?;
    if records.is_empty() {
        println!("{}", "  No aliases yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<10} {:<10} {:<18} {}",
        "Alias".bright_white().bold(),
        "Requests".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<10} {:<10} {:<18} {}",
            record.alias.cyan(),
            record.request_count.to_string().bright_white(),
            record
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            record.original_url
        );
    }
    println!();

    Ok(())
}

/// Shows a single record.
async fn handle_show(service: AliasService<SqliteRecordStore>, alias: &str) -> Result<()> {
    let record = service
        .get_record(alias)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", alias, e))?;

    print_record(&record);

    Ok(())
}

/// Creates an alias and prints the stored record.
async fn handle_shorten(service: AliasService<SqliteRecordStore>, url: &str) -> Result<()> {
    let record = service
        .create_record(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create alias: {}", e))?;

    println!("{}", "✅ Alias created".green().bold());
    println!();
    print_record(&record);

    Ok(())
}

fn print_record(record: &UrlRecord) {
    println!("  Alias:    {}", record.alias.bright_yellow().bold());
    println!("  URL:      {}", record.original_url.cyan());
    println!(
        "  Created:  {}",
        record
            .created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!(
        "  Requests: {}",
        record.request_count.to_string().bright_white()
    );
    println!();
}
