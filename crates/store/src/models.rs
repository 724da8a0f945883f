use bookshelf_common_types::BookDetails;

/// A book record. Books can't be modified once created; all fields are only
/// reachable through read accessors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Book {
    title: String,
    author: String,
    year: i32,
}

impl Book {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the details this book was created from.
    pub fn details(&self) -> BookDetails {
        BookDetails {
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year,
        }
    }
}

impl From<BookDetails> for Book {
    fn from(details: BookDetails) -> Self {
        Self {
            title: details.title,
            author: details.author,
            year: details.year,
        }
    }
}
