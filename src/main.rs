//! candleblurb - Cached AI descriptions for candle collections
//!
//! Prints, prewarms, inspects and clears generated category descriptions.

use std::process;

use clap::Parser;

use candleblurb::cli::{Cli, Command, RunConfig};
use candleblurb::logger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_logger();

    let cli = Cli::parse();

    let cache = match RunConfig::from_cli(&cli).and_then(|config| config.build_cache()) {
        Ok(cache) => cache,
        Err(e) => {
            eprintln!("candleblurb: {}", e);
            process::exit(2);
        }
    };

    match &cli.command {
        Command::Describe { category, count } => {
            println!("{}", cache.fetch_description(category, *count).await);
        }
        Command::Prewarm { categories } => {
            cache.prewarm(categories).await;
            for category in categories {
                println!("{}\t{}", category, cache.entry_state(category).label());
            }
        }
        Command::Clear => {
            cache.clear_all();
        }
        Command::Status { categories } => {
            for category in categories {
                println!("{}\t{}", category, cache.entry_state(category).label());
            }
        }
    }

    Ok(())
}
