use clap::parser::ValueSource;
use clap::{CommandFactory, FromArgMatches};
use quote_scrape::{QuoteScraper, ScraperConfig};
use std::error::Error;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    let matches = Args::command().get_matches();
    let args = Args::from_arg_matches(&matches)?;
    let explicit = |id: &str| matches.value_source(id) == Some(ValueSource::CommandLine);

    // Start from the config file when given, defaults otherwise
    let mut config = match &args.config {
        Some(path) => {
            ::log::info!("Loading configuration from {}", path.display());
            ScraperConfig::from_file(path)?
        }
        None => ScraperConfig::default(),
    };

    // Defaults of flags only apply when there is no config file
    if args.config.is_none() || explicit("base_url") {
        config.base_url = args.base_url;
    }
    if args.config.is_none() || explicit("output") {
        config.output_path = args.output;
    }
    if let Some(max_pages) = args.max_pages {
        config.max_pages = Some(max_pages);
    }
    if let Some(policy) = args.on_malformed {
        config.on_malformed = policy.into();
    }

    let start_time = std::time::Instant::now();
    let scraper = QuoteScraper::from_config(config);

    match scraper.run().await {
        Ok(count) => {
            ::log::info!(
                "Scrape complete - wrote {} quotes to {} in {:.2} seconds",
                count,
                scraper.config().output_path.display(),
                start_time.elapsed().as_secs_f64()
            );
            Ok(())
        }
        Err(e) => {
            ::log::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}
