//! Vitrine command line entry point

// Force-link vitrine-providers so linkme provider registrations are included
extern crate vitrine_providers;

use clap::Parser;
use vitrine::cli::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run(Cli::parse()).await
}
