//! Exports the GraphQL API schema of the Bookshelf server to `schema.graphql`
//! at build time. `bookshelf_client` keeps a copy of it.
