//! Structs that may serve as inputs for the GraphQL API.

use async_graphql::InputObject;
use quickcheck::{Arbitrary, Gen};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The details of a book, as submitted by clients when adding a book and as
/// listed in the seed section of the configuration file.
///
/// No validation is applied: any title, author and year are accepted as-is.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Hash, InputObject, Serialize, Deserialize, JsonSchema,
)]
pub struct BookDetails {
    /// The title of the book.
    pub title: String,
    /// The author of the book.
    pub author: String,
    /// The year the book was published.
    pub year: i32,
}

impl BookDetails {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
        }
    }
}

impl Arbitrary for BookDetails {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            title: String::arbitrary(g),
            author: String::arbitrary(g),
            year: i32::arbitrary(g),
        }
    }
}
