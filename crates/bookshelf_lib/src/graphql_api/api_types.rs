use async_graphql::Object;
use bookshelf_common_types::BookDetails;
use bookshelf_store::{models, Store};

#[derive(Clone, Debug, derive_more::From)]
pub struct Book {
    model: models::Book,
}

/// A book on the shelf.
#[Object]
impl Book {
    /// The title of the book.
    async fn title(&self) -> &str {
        self.model.title()
    }

    /// The author of the book.
    async fn author(&self) -> &str {
        self.model.author()
    }

    /// The year the book was published.
    async fn year(&self) -> i32 {
        self.model.year()
    }
}

#[derive(Clone, Debug, derive_more::From)]
pub struct App {
    store: Store,
}

impl App {
    pub async fn books(&self) -> Vec<Book> {
        self.store
            .books()
            .await
            .into_iter()
            .map(Into::into)
            .collect()
    }

    /// Appends a book to the shelf. No validation takes place, and duplicates
    /// are allowed.
    pub async fn add_book(&self, details: BookDetails) -> Book {
        self.store.append(details).await.into()
    }
}

/// The bookshelf application. Reading and adding books both go through here.
#[Object]
impl App {
    /// All books on the shelf, in the order they were added.
    #[graphql(name = "books")]
    async fn graphql_books(&self) -> Vec<Book> {
        self.books().await
    }
}
