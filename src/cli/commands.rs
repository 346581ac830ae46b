//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Commands {
    /// Show both sources and which one is active (default)
    Resolve,
    /// Show the repository inferred from the page URL
    Infer,
    /// Print the URL of a file on the active data branch
    DataUrl {
        /// Path relative to the data branch, e.g. data/2025-01-01.jsonl
        path: String,
    },
    /// Switch to the other source, save it, and print the reload URL
    Toggle,
    /// Save a source preference (local, fork, upstream, origin, ...)
    Set {
        /// Source name
        source: String,
    },
    /// Show the canonical key for a source name
    Normalize {
        /// Raw value as it would appear in ?source= or storage
        value: String,
    },
}
