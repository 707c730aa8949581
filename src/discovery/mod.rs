//! File discovery for srccat.

mod walker;

pub use walker::{DirectoryWalker, DiscoveredFile, WalkConfig};
