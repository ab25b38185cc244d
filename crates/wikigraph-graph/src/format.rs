//! Human-readable formatting of page lists.
//!
//! Pure joins over page titles; no I/O. Input order is preserved.

use crate::store::CategoryGraph;
use wikigraph_core::{Page, Result};

/// Default separator between titles.
pub const DEFAULT_SEPARATOR: &str = "; ";

/// Join page titles into one human-readable string.
///
/// With `replace_underscores` the canonical underscore-joined titles are
/// rendered with spaces.
///
/// # Examples
///
/// ```
/// use wikigraph_core::{Namespace, Page};
/// use wikigraph_graph::format_pages;
///
/// let pages = vec![
///     Page::new("880368", "Consumer_electronics", Namespace::Category),
///     Page::new("4583997", "Computers", Namespace::Category),
/// ];
/// assert_eq!(format_pages(&pages, "; ", true), "Consumer electronics; Computers");
/// ```
pub fn format_pages(pages: &[Page], sep: &str, replace_underscores: bool) -> String {
    pages
        .iter()
        .map(|page| {
            if replace_underscores {
                page.title.replace('_', " ")
            } else {
                page.title.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(sep)
}

impl CategoryGraph {
    /// Join the titles behind a list of page ids into one human-readable
    /// string. Fails with `UnknownId` for ids absent from the graph.
    pub fn format_page_ids(
        &self,
        ids: &[String],
        sep: &str,
        replace_underscores: bool,
    ) -> Result<String> {
        let pages = ids
            .iter()
            .map(|id| self.get_page_from_id(id))
            .collect::<Result<Vec<_>>>()?;
        Ok(format_pages(&pages, sep, replace_underscores))
    }
}

// ============================================================================
// Tests
// ============================================================================
