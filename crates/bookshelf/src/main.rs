use std::net::Ipv4Addr;

use bookshelf_lib::config::Config;
use bookshelf_lib::graphql_api::{self, ApiSchemaContext};
use bookshelf_lib::CliOptions;
use bookshelf_store::Store;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Parse options");
    let cli_options = CliOptions::parse();

    let config = Config::from_cli(&cli_options)?;

    info!("Initialize store");
    let store = Store::with_books(config.seed_books.clone());

    let api_schema = graphql_api::api_schema(ApiSchemaContext::new(store));
    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, config.graphql.port)).await?;
    info!(
        port = config.graphql.port,
        version = bookshelf_lib::BOOKSHELF_VERSION,
        "GraphQL API server listening"
    );

    // Listen to requests forever.
    axum::serve(listener, graphql_api::axum_router(api_schema)).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
