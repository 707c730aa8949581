//! Configuration layer for srccat.
//!
//! ## Layers
//! - `types`: configuration type definitions and CLI merging
//! - `loading`: file loading logic
//! - `template`: `--init` template generation

mod error;
mod loading;
mod template;
mod types;

pub use error::ConfigError;
pub use types::{
    AggregateConfig, Config, DEFAULT_OUTPUT, DEFAULT_PREFIX, DEFAULT_ROOTS, DEFAULT_SUFFIXES,
};
