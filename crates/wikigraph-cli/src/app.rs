//! The `wikigraph` application shell.
//!
//! Owns logging setup, configuration loading, and dispatch from parsed
//! arguments to the handler functions.

use crate::cli::{BaseCommand, CliArgs};
use crate::config::WikigraphConfig;
use crate::config_handlers;
use crate::graph_handlers::{self, NeighborOptions, RankCmdOptions, TraverseCmdOptions};
use tracing_subscriber::EnvFilter;
use wikigraph_core::Result;
use wikigraph_graph::CategoryGraph;

// ============================================================================
// WikigraphCli
// ============================================================================

/// The CLI application: a loaded configuration plus dispatch.
pub struct WikigraphCli {
    name: String,
    config: WikigraphConfig,
    version: String,
}

impl WikigraphCli {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = WikigraphConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }

    /// Create a new CLI application.
    pub fn new(name: impl Into<String>, config: WikigraphConfig) -> Self {
        Self {
            name: name.into(),
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &WikigraphConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    /// Run the CLI with the given arguments.
    pub fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(BaseCommand::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(BaseCommand::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            Some(command) => {
                let graph = self.load_graph(args.graph.as_deref())?;
                self.handle_graph_command(&graph, command)
            }
            None => {
                println!("{} {} — use --help for usage", self.name, self.version);
                Ok(())
            }
        }
    }

    /// Load the graph document named by the flag or the config.
    fn load_graph(&self, flag: Option<&str>) -> Result<CategoryGraph> {
        let path = self.config.resolve_graph_path(flag)?;
        graph_handlers::load_graph_or_error(&path)
    }

    /// Dispatch graph subcommands to handlers.
    fn handle_graph_command(&self, graph: &CategoryGraph, command: BaseCommand) -> Result<()> {
        let display = &self.config.display;
        match command {
            BaseCommand::Lookup { selector, urls } => {
                graph_handlers::handle_lookup(graph, &selector, urls, display)
            }
            BaseCommand::Parents {
                selector,
                include_hidden,
                return_as,
                json,
            } => {
                let options = NeighborOptions {
                    include_hidden: include_hidden || self.config.query.include_hidden,
                    return_as,
                    json,
                };
                graph_handlers::handle_parents(graph, &selector, &options, display)
            }
            BaseCommand::Children {
                selector,
                include_hidden,
                return_as,
                json,
            } => {
                let options = NeighborOptions {
                    include_hidden: include_hidden || self.config.query.include_hidden,
                    return_as,
                    json,
                };
                graph_handlers::handle_children(graph, &selector, &options, display)
            }
            BaseCommand::Traverse {
                selector,
                direction,
                level,
                include_hidden,
                by_level,
                json,
            } => {
                let options = TraverseCmdOptions {
                    direction,
                    level,
                    include_hidden: include_hidden || self.config.query.include_hidden,
                    by_level,
                    json,
                };
                graph_handlers::handle_traverse(graph, &selector, &options, display)
            }
            BaseCommand::Path { from, to } => {
                graph_handlers::handle_path(graph, &from, &to, display)
            }
            BaseCommand::Rank {
                selector,
                ascending,
                max_pages,
                json,
            } => {
                let options = RankCmdOptions {
                    ascending,
                    max_pages,
                    json,
                };
                graph_handlers::handle_rank(graph, &selector, &options, display)
            }
            BaseCommand::Stats { json } => graph_handlers::handle_stats(graph, json),
            BaseCommand::TopLevel { return_as, json } => {
                graph_handlers::handle_top_level(graph, &return_as, json, display)
            }
            // Version and Config are handled before the graph is loaded.
            BaseCommand::Version | BaseCommand::Config(_) => unreachable!(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
