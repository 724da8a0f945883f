use std::net::{Ipv4Addr, SocketAddr};

use bookshelf_store::Store;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

use crate::config::Config;
use crate::graphql_api::{api_schema, axum_router, ApiSchemaContext};

/// A store holding the default seed books.
pub fn seeded_store() -> Store {
    Store::with_books(Config::default().seed_books)
}

/// An API server running in the background on an ephemeral local port. The
/// server is shut down on drop.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start(store: Store) -> anyhow::Result<Self> {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
        let addr = listener.local_addr()?;
        let router = axum_router(api_schema(ApiSchemaContext::new(store)));

        let handle = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, router).await {
                tracing::error!(error = %err, "Test server failed");
            }
        });

        Ok(Self { addr, handle })
    }

    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}/", self.addr)).expect("Invalid test server URL")
    }

    pub fn graphql_endpoint(&self) -> Url {
        self.base_url()
            .join("graphql")
            .expect("Invalid test server URL")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
