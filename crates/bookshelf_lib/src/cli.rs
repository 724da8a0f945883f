use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[clap(author, about, version)]
pub struct CliOptions {
    /// Path to the YAML configuration file. Built-in defaults are used when
    /// it's not given.
    #[clap(long, env = "BOOKSHELF_CONFIG")]
    pub config: Option<PathBuf>,
    /// The port on which the GraphQL API server should listen. Takes
    /// precedence over the configuration file.
    #[clap(long)]
    pub port: Option<u16>,
}
