use async_graphql::{Context, Object};
use bookshelf_common_types::BookDetails;

use super::api_types::{App, Book};
use super::ctx_data;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn app(&self, ctx: &Context<'_>) -> App {
        ctx_data(ctx).app()
    }

    /// Lists all books, in the order they were added. Same as `app.books`.
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        ctx_data(ctx).app().books().await
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Adds a book at the end of the shelf and returns it.
    async fn add_book(&self, ctx: &Context<'_>, book: BookDetails) -> Book {
        ctx_data(ctx).app().add_book(book).await
    }
}
