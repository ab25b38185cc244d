//! CLI argument parsing and command definitions.
//!
//! Provides the `wikigraph` command surface: page lookup, parent/child
//! queries, multi-level traversal, article-to-category paths, degree
//! ranking, statistics, and configuration management.

use clap::{Args, Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "wikigraph", author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "WIKIGRAPH_CONFIG")]
    pub config: Option<String>,

    /// Path to the serialized graph document (overrides config).
    #[arg(short, long, env = "WIKIGRAPH_GRAPH")]
    pub graph: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<BaseCommand>,
}

/// Selects one page by id or by title.
///
/// Exactly one of `--id` / `--title` must be given; the handlers reject
/// the other combinations.
#[derive(Args, Debug, Clone)]
pub struct SelectorArgs {
    /// Page id (curid).
    #[arg(long)]
    pub id: Option<String>,

    /// Page title (standardized before lookup).
    #[arg(short, long)]
    pub title: Option<String>,

    /// Namespace for a title: "article" or "category".
    #[arg(short, long)]
    pub namespace: Option<String>,
}

/// Built-in commands.
#[derive(Subcommand, Debug)]
pub enum BaseCommand {
    /// Look up a single page and print its details.
    Lookup {
        #[command(flatten)]
        selector: SelectorArgs,

        /// Print Wikipedia URLs alongside the page.
        #[arg(long)]
        urls: bool,
    },

    /// List the parent categories of a page.
    Parents {
        #[command(flatten)]
        selector: SelectorArgs,

        /// Include hidden maintenance categories.
        #[arg(long)]
        include_hidden: bool,

        /// Output shape: id, title, or page.
        #[arg(short, long, default_value = "title")]
        return_as: String,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the members of a category.
    Children {
        #[command(flatten)]
        selector: SelectorArgs,

        /// Include hidden maintenance categories.
        #[arg(long)]
        include_hidden: bool,

        /// Output shape: id, title, or page.
        #[arg(short, long, default_value = "title")]
        return_as: String,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Expand a page's neighborhood breadth-first.
    Traverse {
        #[command(flatten)]
        selector: SelectorArgs,

        /// Direction to expand: parents or children.
        #[arg(short, long, default_value = "parents")]
        direction: String,

        /// Number of expansion rounds.
        #[arg(short, long, default_value = "1")]
        level: usize,

        /// Include hidden maintenance categories.
        #[arg(long)]
        include_hidden: bool,

        /// Print each level separately instead of one flat list.
        #[arg(long)]
        by_level: bool,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Find a membership chain from an article up to a category.
    Path {
        /// Article to start from (title or id with "id:" prefix).
        #[arg(short, long)]
        from: String,

        /// Target category (title or id with "id:" prefix).
        #[arg(short, long)]
        to: String,
    },

    /// Rank the members of a category by degree.
    Rank {
        #[command(flatten)]
        selector: SelectorArgs,

        /// Sort ascending instead of descending.
        #[arg(long)]
        ascending: bool,

        /// Keep only the first N ranked pages.
        #[arg(short, long)]
        max_pages: Option<usize>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show graph statistics.
    Stats {
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the top-level categories.
    TopLevel {
        /// Output shape: id, title, or page.
        #[arg(short, long, default_value = "title")]
        return_as: String,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print version information.
    Version,

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "display.separator").
        key: String,
    },

    /// Set a configuration value by dotted key.
    Set {
        /// Dotted key (e.g., "display.separator").
        key: String,

        /// Value to set.
        value: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================
