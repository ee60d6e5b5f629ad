pub mod fetcher;
pub mod walker;
pub mod web;

pub use fetcher::Fetcher;
pub use walker::PageWalker;
pub use web::HttpFetcher;
