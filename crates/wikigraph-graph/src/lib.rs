//! Wikipedia category-graph engine.
//!
//! This crate provides the in-memory graph of Wikipedia pages (articles and
//! categories) connected by category-membership edges, and the query
//! operations that run against it.
//!
//! # Modules
//!
//! - [`store`]: The `CategoryGraph` store (four indexes + hidden set)
//! - [`builder`]: `GraphBuilder` for constructing a store from an edge list
//! - [`persistence`]: Loading/saving the serialized graph document
//! - [`query`]: Selectors, output shapes, and parent/child enumeration
//! - [`rank`]: Degree counting and degree-based ranking
//! - [`traverse`]: Multi-level expansion and backlink BFS
//! - [`format`]: Human-readable title joining
//! - [`stats`]: Corpus-level statistics

#![doc = include_str!("../README.md")]

pub mod builder;
pub mod format;
pub mod persistence;
pub mod query;
pub mod rank;
pub mod stats;
pub mod store;
pub mod traverse;

// Re-export key types at crate root for convenience
pub use builder::GraphBuilder;
pub use format::format_pages;
pub use persistence::{load_graph, load_graph_from_str, save_document, GraphDocument, TitleToId};
pub use query::{PageList, QueryOptions, ReturnAs, Selector};
pub use rank::RankOptions;
pub use stats::{compute_stats, quick_summary, GraphStats};
pub use store::{CategoryGraph, TOP_LEVEL_CATEGORIES};
pub use traverse::{extract_chain, TraverseDirection, TraverseOptions};
