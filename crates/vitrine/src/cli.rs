//! Command line interface
//!
//! One subcommand per pipeline stage, plus one-shot queries against the
//! saved store.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use vitrine_domain::constants::MAX_TOP_K;
use vitrine_infrastructure::config::{AppConfig, ConfigLoader};
use vitrine_infrastructure::di::{AppContext, init_app};
use vitrine_infrastructure::logging::init_logging;
use vitrine_server::{SearchDefaults, SearchState, run_server};

/// Command line interface for Vitrine
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(about = "Visual and text similarity search over a furniture catalog")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Pipeline stage or query to run
    #[command(subcommand)]
    pub command: Command,
}

/// Vitrine subcommands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Scrape the catalog, download product images and save the product list
    Scrape {
        /// First list page (defaults to `scraper.start_page`)
        #[arg(long)]
        start_page: Option<u32>,
        /// Last list page, inclusive (defaults to the configured page count)
        #[arg(long)]
        end_page: Option<u32>,
    },
    /// Embed the saved product list and save the vector store
    Embed,
    /// Serve the search page and JSON API over the saved store
    Serve,
    /// Search the saved store by text and print the matches
    Search {
        /// Query text
        text: String,
        /// Number of results (defaults to `search.top_k`)
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },
    /// Print statistics about the saved store
    Stats,
}

/// Load configuration, install logging and run the command
pub async fn run(cli: Cli) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    execute(cli.command, config).await
}

/// Run a command against an already loaded configuration
pub async fn execute(command: Command, config: AppConfig) -> Result<()> {
    let ctx = init_app(config).context("Failed to initialize providers")?;

    match command {
        Command::Scrape {
            start_page,
            end_page,
        } => scrape(&ctx, start_page, end_page).await,
        Command::Embed => embed(&ctx).await,
        Command::Serve => serve(&ctx).await,
        Command::Search { text, top_k } => search(&ctx, &text, top_k).await,
        Command::Stats => stats(&ctx),
    }
}

async fn scrape(ctx: &AppContext, start_page: Option<u32>, end_page: Option<u32>) -> Result<()> {
    let source = ctx.catalog_source()?;
    let options = ctx.ingestion_options(start_page, end_page);
    info!(
        start_page = options.start_page,
        end_page = options.end_page,
        "Scraping catalog"
    );

    let outcome = ctx.scrape(source, options).await?;
    println!(
        "Scraped {} products ({} images) into {}",
        outcome.products.len(),
        outcome.images_downloaded,
        ctx.config().storage.products_file.display()
    );
    Ok(())
}

async fn embed(ctx: &AppContext) -> Result<()> {
    let summary = ctx.embed().await?;

    println!(
        "Embedded {}/{} products with {} (dimension {})",
        summary.successful_embeddings,
        summary.total_products,
        summary.model_id,
        summary.embedding_dimension
    );
    if !summary.failed_products.is_empty() {
        println!(
            "Stored zero vectors for {} products: {}",
            summary.failed_count(),
            summary.failed_products.join(", ")
        );
    }
    Ok(())
}

async fn serve(ctx: &AppContext) -> Result<()> {
    let state = SearchState {
        service: Arc::new(ctx.query_service()?),
        defaults: SearchDefaults::from(&ctx.config().search),
    };
    run_server(&ctx.config().server, state).await?;
    Ok(())
}

async fn search(ctx: &AppContext, text: &str, top_k: Option<usize>) -> Result<()> {
    let service = ctx.query_service()?;
    let search = &ctx.config().search;
    let top_k = top_k.unwrap_or(search.top_k).clamp(1, MAX_TOP_K);

    let hits = service
        .search_by_text(text, top_k, search.similarity_threshold)
        .await?;

    if hits.is_empty() {
        println!(
            "No products above {:.0}% similarity",
            search.similarity_threshold * 100.0
        );
        return Ok(());
    }
    for (rank, hit) in hits.iter().enumerate() {
        println!(
            "{:>2}. {:>5.1}%  {} [{}]  {}",
            rank + 1,
            hit.score_percent(),
            hit.metadata.name,
            hit.metadata.category,
            hit.metadata.product_id
        );
    }
    Ok(())
}

fn stats(ctx: &AppContext) -> Result<()> {
    let stats = ctx.query_service()?.stats();

    println!("Products:   {}", stats.total_products);
    println!("Embeddings: {}", stats.total_embeddings);
    println!("Dimension:  {}", stats.embedding_dimension);
    println!("Degraded:   {}", stats.degraded_records);
    println!("Categories: {}", stats.categories.join(", "));
    Ok(())
}
