//! Query and mutation views over a [`BookshelfApi`].
//!
//! [`BooksView`] caches the result of the books query and renders it.
//! [`AddBookForm`] collects the fields of a new book and, once the mutation
//! succeeds, refetches the books view so it shows the new book.

use std::fmt::Write;

use bookshelf_common_types::BookDetails;
use tracing::debug;

use crate::{BookshelfApi, ClientError};

#[derive(Debug, Default)]
pub struct BooksView {
    books: Vec<BookDetails>,
}

impl BooksView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached books with a fresh result of the books query. The
    /// cache is left untouched if the query fails.
    pub async fn refresh<A>(&mut self, api: &A) -> Result<(), ClientError>
    where
        A: BookshelfApi + ?Sized,
    {
        self.books = api.books().await?;
        debug!(books = self.books.len(), "Refreshed books view");
        Ok(())
    }

    pub fn books(&self) -> &[BookDetails] {
        &self.books
    }

    /// One line per book, in list order.
    pub fn render(&self) -> String {
        if self.books.is_empty() {
            return "No books yet.\n".to_string();
        }

        let mut out = String::new();
        for book in &self.books {
            // Writing to a `String` can't fail.
            let _ = writeln!(out, "{} by {} ({})", book.title, book.author, book.year);
        }
        out
    }
}

/// The fields of a book that's about to be added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddBookForm {
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl AddBookForm {
    /// Sends the add book mutation, then refreshes `view`. On success, the form
    /// is cleared and the title of the new book is returned; on failure, the
    /// form keeps its fields.
    pub async fn submit<A>(
        &mut self,
        api: &A,
        view: &mut BooksView,
    ) -> Result<String, ClientError>
    where
        A: BookshelfApi + ?Sized,
    {
        let details = BookDetails {
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year,
        };

        let title = api.add_book(details).await?;
        view.refresh(api).await?;

        *self = Self::default();
        Ok(title)
    }
}
