//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::Cli;

/// Default root directories to search, in order.
pub const DEFAULT_ROOTS: [&str; 4] = ["./app", "./components", "./lib", "./services"];

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "aggregated_code.txt";

/// Default accepted filename suffixes.
pub const DEFAULT_SUFFIXES: [&str; 2] = [".ts", ".tsx"];

/// Default header prefix.
///
/// The prefix is one fixed string for every root, not derived from the
/// root's own name: with multiple roots configured, every header still
/// begins `app/`. That labeling is part of the output contract and must
/// not change underneath existing consumers.
pub const DEFAULT_PREFIX: &str = "app/";

/// File-based configuration for srccat.
///
/// Every field is optional; unset fields fall through to the CLI merge in
/// [`AggregateConfig::resolve`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directories to search, in order.
    pub roots: Option<Vec<PathBuf>>,
    /// Output file path.
    pub output: Option<PathBuf>,
    /// Accepted filename suffixes (case-sensitive suffix match on the file name).
    pub suffixes: Option<Vec<String>>,
    /// Header prefix written before each relative path.
    pub prefix: Option<String>,
}

/// Effective aggregation settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateConfig {
    /// Root directories, processed in this order.
    pub roots: Vec<PathBuf>,
    /// Output file path, opened fresh (truncate-or-create) at run start.
    pub output: PathBuf,
    /// Accepted filename suffixes.
    pub suffixes: Vec<String>,
    /// Header prefix written before each relative path.
    pub prefix: String,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            roots: DEFAULT_ROOTS.iter().map(PathBuf::from).collect(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl AggregateConfig {
    /// Merge CLI arguments over a loaded config file, falling back to the
    /// built-in defaults for anything left unset.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let defaults = Self::default();

        let roots = if !cli.roots.is_empty() {
            cli.roots.clone()
        } else {
            config.roots.clone().unwrap_or(defaults.roots)
        };

        let output = cli
            .output
            .clone()
            .or_else(|| config.output.clone())
            .unwrap_or(defaults.output);

        let suffixes = if !cli.suffixes.is_empty() {
            cli.suffixes.clone()
        } else {
            config.suffixes.clone().unwrap_or(defaults.suffixes)
        };

        let prefix = cli
            .prefix
            .clone()
            .or_else(|| config.prefix.clone())
            .unwrap_or(defaults.prefix);

        Self {
            roots,
            output,
            suffixes,
            prefix,
        }
    }
}
