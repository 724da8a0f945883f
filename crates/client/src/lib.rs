//! A typed client for the Bookshelf GraphQL API, plus the query and mutation
//! views built on top of it.
//!
//! Request and response types are generated by [`graphql_client`] from the
//! API schema checked in at `graphql/api_schema.graphql`, which is a copy of
//! the schema exported by the server.

pub mod views;

use std::time::Duration;

use async_trait::async_trait;
use bookshelf_common_types::BookDetails;
use graphql_client::{GraphQLQuery, Response};
use thiserror::Error;
use tracing::trace;
use url::Url;

pub use views::{AddBookForm, BooksView};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/api_schema.graphql",
    query_path = "graphql/queries/books.graphql",
    response_derives = "Debug",
    variables_derives = "Debug"
)]
struct Books;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/api_schema.graphql",
    query_path = "graphql/queries/add_book.graphql",
    response_derives = "Debug",
    variables_derives = "Debug"
)]
struct AddBook;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request to the Bookshelf API failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("The Bookshelf API returned errors: {}", .0.join(", "))]
    Graphql(Vec<String>),
    #[error("The Bookshelf API returned neither data nor errors")]
    EmptyResponse,
    #[error("The Bookshelf API returned a year that doesn't fit in 32 bits: {0}")]
    YearOutOfRange(i64),
}

/// The two operations the Bookshelf API offers.
#[async_trait]
pub trait BookshelfApi: Send + Sync {
    /// Lists all books, in the order they were added.
    async fn books(&self) -> Result<Vec<BookDetails>, ClientError>;

    /// Adds a book and returns its title.
    async fn add_book(&self, details: BookDetails) -> Result<String, ClientError>;
}

/// A [`BookshelfApi`] implementation that talks to a Bookshelf server over
/// HTTP.
#[derive(Debug, Clone)]
pub struct BookshelfClient {
    endpoint: Url,
    timeout: Duration,
    client: reqwest::Client,
}

impl BookshelfClient {
    /// Creates a new [`BookshelfClient`] for the given GraphQL endpoint.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            timeout: DEFAULT_TIMEOUT,
            client: reqwest::Client::new(),
        }
    }

    /// Sets the timeout for requests to the Bookshelf API.
    ///
    /// The default timeout is 30 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn send<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, ClientError> {
        let request = Q::build_query(variables);

        trace!(
            operation = request.operation_name,
            endpoint = %self.endpoint,
            timeout = ?self.timeout,
            "Sending GraphQL request"
        );

        let response: Response<Q::ResponseData> = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match (response.data, response.errors) {
            (_, Some(errors)) if !errors.is_empty() => Err(ClientError::Graphql(
                errors.into_iter().map(|e| e.message).collect(),
            )),
            (Some(data), _) => Ok(data),
            (None, _) => Err(ClientError::EmptyResponse),
        }
    }
}

#[async_trait]
impl BookshelfApi for BookshelfClient {
    async fn books(&self) -> Result<Vec<BookDetails>, ClientError> {
        let data = self.send::<Books>(books::Variables).await?;

        data.books
            .into_iter()
            .map(|book| {
                Ok(BookDetails {
                    year: i32::try_from(book.year)
                        .map_err(|_| ClientError::YearOutOfRange(book.year))?,
                    title: book.title,
                    author: book.author,
                })
            })
            .collect()
    }

    async fn add_book(&self, details: BookDetails) -> Result<String, ClientError> {
        let variables = add_book::Variables {
            book: add_book::BookDetails {
                title: details.title,
                author: details.author,
                year: details.year.into(),
            },
        };
        let data = self.send::<AddBook>(variables).await?;

        Ok(data.add_book.title)
    }
}
