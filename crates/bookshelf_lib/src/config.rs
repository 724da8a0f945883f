//! Bookshelf configuration parsing.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use bookshelf_common_types::BookDetails;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::CliOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlConfig {
    /// The port on which the GraphQL API server should listen.
    #[serde(default = "Config::default_graphql_api_port")]
    pub port: u16,
}

impl Default for GraphQlConfig {
    fn default() -> Self {
        Self {
            port: Config::default_graphql_api_port(),
        }
    }
}

/// A [`serde`]-compatible representation of Bookshelf's YAML configuration
/// file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// GraphQL API configuration.
    #[serde(default)]
    pub graphql: GraphQlConfig,
    /// Books that the store contains on startup, in order.
    #[serde(default = "Config::default_seed_books")]
    pub seed_books: Vec<BookDetails>,
}

impl Config {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("can't open config file {}", path.display()))?;
        serde_yaml::from_reader(file).context("invalid config file")
    }

    /// Reads the configuration file given on the command line, if any, and
    /// applies command line overrides on top of it.
    pub fn from_cli(options: &CliOptions) -> anyhow::Result<Self> {
        let mut config = match &options.config {
            Some(path) => {
                info!(path = %path.display(), "Loading configuration file");
                Self::read(path)?
            }
            None => {
                info!("No configuration file given, using defaults");
                Self::default()
            }
        };

        if let Some(port) = options.port {
            config.graphql.port = port;
        }

        Ok(config)
    }

    fn default_seed_books() -> Vec<BookDetails> {
        vec![BookDetails::new("My book", "Lachlan", 1990)]
    }

    fn default_graphql_api_port() -> u16 {
        3030
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graphql: GraphQlConfig::default(),
            seed_books: Self::default_seed_books(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.graphql.port, 3030);
        assert_eq!(
            config.seed_books,
            vec![BookDetails::new("My book", "Lachlan", 1990)]
        );
    }

    #[test]
    fn full_config() {
        let yaml = r#"
graphql:
  port: 8000
seedBooks:
  - title: Dune
    author: Frank Herbert
    year: 1965
  - title: Emma
    author: Jane Austen
    year: 1815
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.graphql.port, 8000);
        assert_eq!(
            config.seed_books,
            vec![
                BookDetails::new("Dune", "Frank Herbert", 1965),
                BookDetails::new("Emma", "Jane Austen", 1815),
            ]
        );
    }

    #[test]
    fn example_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../configs/bookshelf.yml");
        assert_eq!(Config::read(&path).unwrap(), Config::default());
    }

    #[test]
    fn explicitly_empty_seed() {
        let config: Config = serde_yaml::from_str("seedBooks: []").unwrap();
        assert!(config.seed_books.is_empty());
    }

    #[test]
    fn read_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seedBooks: not-a-list").unwrap();

        let err = Config::read(file.path()).unwrap_err();
        assert_eq!(err.to_string(), "invalid config file");
    }

    #[test]
    fn cli_port_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "graphql:\n  port: 8000").unwrap();

        let options = CliOptions {
            config: Some(file.path().to_path_buf()),
            port: Some(9000),
        };
        let config = Config::from_cli(&options).unwrap();

        assert_eq!(config.graphql.port, 9000);
        assert_eq!(config.seed_books, Config::default().seed_books);
    }

    #[test]
    fn cli_without_config_file() {
        let config = Config::from_cli(&CliOptions::default()).unwrap();
        assert_eq!(config, Config::default());
    }
}
