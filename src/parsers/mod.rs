pub mod html;

#[cfg(test)]
mod tests;

pub use html::{extract, parse};
