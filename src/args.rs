use clap::{Parser, ValueEnum};
use quote_scrape::{DEFAULT_BASE_URL, MalformedPolicy};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quote-scrape")]
#[command(about = "Scrapes every page of a quotes site into a CSV file")]
#[command(version)]
pub struct Args {
    /// CSV file to write
    #[arg(short, long, default_value = "quotes.csv")]
    pub output: PathBuf,

    /// Site root; page paths are appended to it
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// JSON configuration file (flags given explicitly override it)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Stop after this many pages
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// What to do with a quote missing its text or author
    #[arg(long, value_enum)]
    pub on_malformed: Option<MalformedArg>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum MalformedArg {
    Error,
    Skip,
}

impl From<MalformedArg> for MalformedPolicy {
    fn from(arg: MalformedArg) -> Self {
        match arg {
            MalformedArg::Error => MalformedPolicy::Error,
            MalformedArg::Skip => MalformedPolicy::Skip,
        }
    }
}
