//! Types shared by the Bookshelf GraphQL API, its configuration file and its
//! clients.

pub mod inputs;

pub use inputs::BookDetails;
