mod cli;
pub mod config;
pub mod graphql_api;

#[cfg(feature = "tests")]
pub mod test_utils;

pub use cli::CliOptions;

pub const BOOKSHELF_VERSION: &str = env!("CARGO_PKG_VERSION");
