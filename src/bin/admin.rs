//! CLI administration tool for snipurl.
//!
//! Creates and inspects short links and checks the store without going
//! through the HTTP surface.
//!
//! # Usage
//!
//! ```bash
//! # Create a short link (prompts for the URL when omitted)
//! cargo run --bin admin -- link create https://example.com --slug my-link
//!
//! # Look up a slug
//! cargo run --bin admin -- link show my-link
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the service, see [`snipurl::config`].

use snipurl::application::services::{CreateUrl, UrlService};
use snipurl::config;
use snipurl::infrastructure::persistence::Store;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};

/// CLI tool for managing snipurl.
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
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a short link
    Create {
        /// Target URL
        url: Option<String>,

        /// Custom slug (generated if not provided)
        #[arg(short, long)]
        slug: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show where a slug redirects
    Show {
        /// Slug, matched exactly as typed
        slug: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let store = Store::connect(&config).await?;
    let service = UrlService::new(
        store.url_repository(),
        config.base_url.clone(),
        config.slug_policy(),
    );

    let outcome = match cli.command {
        Commands::Link { action } => handle_link_action(action, &service).await,
        Commands::Stats => handle_stats(&service).await,
        Commands::Db { action } => handle_db_action(action, &store).await,
    };

    store.close().await;
    outcome
}

/// Dispatches short link commands.
async fn handle_link_action(action: LinkAction, service: &UrlService) -> Result<()> {
    match action {
        LinkAction::Create { url, slug, yes } => create_link(service, url, slug, yes).await,
        LinkAction::Show { slug } => show_link(service, &slug).await,
    }
}

/// Creates a short link with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for the URL (or use provided)
/// 2. Show the request
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Create through [`UrlService`], with the same validation as the web form
async fn create_link(
    service: &UrlService,
    url: Option<String>,
    slug: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let target = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Target URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    println!("{}", "Link details:".bright_white().bold());
    println!("  URL:  {}", target.cyan());
    match &slug {
        Some(s) if !s.is_empty() => println!("  Slug: {}", s.cyan()),
        _ => println!("  Slug: {}", "(generated)".bright_black()),
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let created = service
        .create(CreateUrl {
            slug,
            url: Some(target),
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!();
    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    println!(
        "  {}",
        service.short_url(&created.slug).bright_yellow().bold()
    );
    println!("  → {}", created.url.bright_white());
    println!();

    Ok(())
}

/// Prints the target of a slug.
async fn show_link(service: &UrlService, slug: &str) -> Result<()> {
    match service.resolve(slug).await {
        Ok(mapping) => {
            println!("{}", service.short_url(&mapping.slug).bright_yellow().bold());
            println!("  → {}", mapping.url.bright_white());
            println!(
                "  Created: {}",
                mapping
                    .created_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .bright_black()
            );
        }
        Err(e) => {
            println!("{}", format!("⚠️  {}", e).yellow());
        }
    }

    Ok(())
}

/// Displays the number of stored short links.
async fn handle_stats(service: &UrlService) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    println!(
        "  Links: {}",
        links_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, store: &Store) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            store.ping().await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            match store {
                Store::Postgres(pool) => {
                    let version: String = sqlx::query_scalar("SELECT version()")
                        .fetch_one(pool.as_ref())
                        .await?;
                    println!("  PostgreSQL: {}", version.bright_white());
                }
                Store::Memory(_) => {
                    println!("  Backend: {}", store.backend_name().bright_white());
                }
            }
            println!();
        }
    }

    Ok(())
}
