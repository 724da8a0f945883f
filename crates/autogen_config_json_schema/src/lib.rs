//! Exports the JSON schema of the Bookshelf configuration file to
//! `schema.json` at build time.
