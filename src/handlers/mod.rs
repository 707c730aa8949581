//! CLI command handlers.
//!
//! Handler functions for CLI entry points, separated from main.rs to
//! enable unit testing.

mod aggregate;

pub use aggregate::{handle_init_config, run_normal_mode};
