//! In-memory storage for the Bookshelf backend.

pub mod models;

use std::sync::Arc;

use bookshelf_common_types::BookDetails;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::Book;

/// The process-wide book collection. It uses [`Arc`] internally, so it's
/// cheaply cloneable, and all clones share the same books.
///
/// Books are kept in insertion order and are never removed.
#[derive(Clone, Debug, Default)]
pub struct Store {
    books: Arc<RwLock<Vec<Book>>>,
}

impl Store {
    /// Creates a store with no books in it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already contains the given books, in iteration
    /// order.
    pub fn with_books(seed: impl IntoIterator<Item = BookDetails>) -> Self {
        let books: Vec<Book> = seed.into_iter().map(Book::from).collect();
        info!(books = books.len(), "Seeding book store");

        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    /// Returns a snapshot of all books, in insertion order.
    pub async fn books(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// Appends a new book at the end of the collection and returns it.
    pub async fn append(&self, details: BookDetails) -> Book {
        let book = Book::from(details);
        debug!(
            title = %book.title(),
            author = %book.author(),
            year = book.year(),
            "Appending book"
        );

        self.books.write().await.push(book.clone());
        book
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[tokio::test]
    async fn clones_share_books() {
        let store = Store::new();
        let clone = store.clone();

        clone
            .append(BookDetails::new("Dune", "Frank Herbert", 1965))
            .await;

        assert_eq!(store.len().await, 1);
        assert_eq!(store.books().await, clone.books().await);
    }

    #[tokio::test]
    #[traced_test]
    async fn append_logs_book_fields() {
        let store = Store::new();
        store
            .append(BookDetails::new("New title", "Lachlan", 1990))
            .await;

        assert!(logs_contain("Appending book"));
        assert!(logs_contain("title=New title"));
        assert!(logs_contain("year=1990"));
    }
}
