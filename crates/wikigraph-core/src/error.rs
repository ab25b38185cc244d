//! Error types for wikigraph operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used
//! across all wikigraph crates. Uses `thiserror` for derive macros.
//!
//! Lookup misses, structural violations, and invalid caller input all
//! surface as distinct variants; nothing is retried or silently repaired.

use thiserror::Error;

/// Errors that can occur in wikigraph operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structural violation in a serialized graph document. Fatal at load.
    #[error("Malformed graph: {0}")]
    MalformedGraph(String),

    /// Lookup by id missed.
    #[error("Page with id={0} was not found in the graph")]
    UnknownId(String),

    /// Lookup by (namespace, title) missed.
    #[error("Title \"{title}\" was not found in the {namespace} namespace")]
    UnknownTitle {
        /// The title that was looked up (already standardized).
        title: String,
        /// The namespace(s) that were searched.
        namespace: String,
    },

    /// A namespace value outside of "article"/"category" (codes 0/14).
    #[error("Invalid namespace: {0} (must be \"article\" or \"category\")")]
    InvalidNamespace(String),

    /// A title resolved to pages in more than one namespace.
    #[error("Title \"{0}\" exists in both the article and category namespaces; pass a namespace to disambiguate")]
    AmbiguousTitle(String),

    /// An unknown ranking mode was requested.
    #[error("Unsupported ranking mode: {0} (only \"degree\" is supported)")]
    UnsupportedMode(String),

    /// Traversal depth must be a positive integer.
    #[error("Invalid traversal level: {0} (must be >= 1)")]
    InvalidLevel(usize),

    /// A predecessor chain did not connect the target back to the start.
    #[error("No path found from {from} to {to}")]
    NoPathFound {
        /// Id of the starting page.
        from: String,
        /// Id of the target page.
        to: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Parse or serialization error.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Create a malformed-graph error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedGraph(msg.into())
    }

    /// Create an unknown-title error.
    pub fn unknown_title(title: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self::UnknownTitle {
            title: title.into(),
            namespace: namespace.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// Result type alias using wikigraph's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownId("42".to_string());
        assert_eq!(
            err.to_string(),
            "Page with id=42 was not found in the graph"
        );
    }

    #[test]
    fn test_unknown_title_helper() {
        let err = Error::unknown_title("Montreal", "category");
        assert!(err.to_string().contains("Montreal"));
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn test_no_path_found_display() {
        let err = Error::NoPathFound {
            from: "1".to_string(),
            to: "3".to_string(),
        };
        assert_eq!(err.to_string(), "No path found from 1 to 3");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
