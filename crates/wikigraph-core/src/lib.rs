//! Wikigraph Core — shared types and errors.
//!
//! This crate provides the foundational types used across all wikigraph
//! crates. It has no internal wikigraph dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`page`]: The `Page` value type and `Namespace` enum
//! - [`title`]: Title standardization (underscore joining + Unicode NFC)

#![doc = include_str!("../README.md")]

pub mod error;
pub mod page;
pub mod title;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use page::{Namespace, Page};
pub use title::{standardize, standardize_with, NormalForm};
