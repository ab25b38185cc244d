//! Command-line interface for exploring Wikipedia category graphs.
//!
//! # Modules
//!
//! - [`cli`]: argument parsing and command definitions
//! - [`app`]: the application shell (logging, config, dispatch)
//! - [`config`]: TOML/env configuration loading
//! - [`config_handlers`]: `wikigraph config ...` subcommands
//! - [`graph_handlers`]: graph query subcommands

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod graph_handlers;
