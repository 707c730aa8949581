//! Directory walking abstraction for consistent file discovery.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Configuration for directory walking.
#[derive(Debug, Clone, Default)]
pub struct WalkConfig {
    /// Root directories to search, in order.
    pub roots: Vec<PathBuf>,
    /// Filename suffixes to include (case-sensitive, e.g. [".ts", ".tsx"]).
    pub suffixes: Vec<String>,
}

impl WalkConfig {
    /// Create a new WalkConfig with the given roots.
    pub fn new(roots: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set filename suffixes to include.
    pub fn with_suffixes(mut self, suffixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }
}

/// A file found under one of the configured roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Path as yielded by the walk.
    pub path: PathBuf,
    /// Path relative to the root directory it was discovered under.
    pub relative: PathBuf,
}

/// Directory walker yielding suffix-matching files in walk order.
pub struct DirectoryWalker {
    config: WalkConfig,
}

impl DirectoryWalker {
    /// Create a new DirectoryWalker with the given configuration.
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Check if a file name matches the configured suffixes.
    ///
    /// This is a suffix match on the whole name, not an extension
    /// comparison: `foo.d.ts` matches `.ts`, while `notes.txt` matches
    /// neither default suffix.
    fn matches_suffix(&self, path: &Path) -> bool {
        if self.config.suffixes.is_empty() {
            return true;
        }

        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.config.suffixes.iter().any(|s| name.ends_with(s.as_str())))
    }

    /// Walk a single root and yield matching files in walk order.
    ///
    /// A root that does not exist or is not a directory yields nothing;
    /// that is not an error.
    pub fn walk_root(&self, root: &Path) -> impl Iterator<Item = DiscoveredFile> + '_ {
        let root = root.to_path_buf();
        if !root.is_dir() {
            debug!(root = %root.display(), "skipping missing root");
            return Vec::new().into_iter();
        }

        WalkDir::new(&root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches_suffix(e.path()))
            .filter_map(|e| {
                let relative = e.path().strip_prefix(&root).ok()?.to_path_buf();
                Some(DiscoveredFile {
                    path: e.path().to_path_buf(),
                    relative,
                })
            })
            .collect::<Vec<_>>()
            .into_iter()
    }

    /// Walk all configured roots in order and yield matching files.
    pub fn walk(&self) -> impl Iterator<Item = DiscoveredFile> + '_ {
        self.config
            .roots
            .iter()
            .flat_map(move |root| self.walk_root(root))
    }
}
