//! Corpus-level graph statistics.
//!
//! Provides functions for analysing the loaded graph's composition:
//! namespace breakdown, degree extremes, orphan counts.

use crate::store::CategoryGraph;
use serde::{Deserialize, Serialize};
use wikigraph_core::Namespace;

// ============================================================================
// Types
// ============================================================================

/// Statistics about a loaded category graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphStats {
    /// Total number of pages.
    pub page_count: usize,
    /// Number of article pages.
    pub article_count: usize,
    /// Number of category pages.
    pub category_count: usize,
    /// Total number of membership edges.
    pub edge_count: usize,
    /// Number of hidden categories.
    pub hidden_count: usize,
    /// Pages with no parents and no children.
    pub orphan_count: usize,
    /// Average degree per page (hidden edges included).
    pub avg_degree: f32,
    /// Highest degree in the graph.
    pub max_degree: usize,
    /// Id of the page with the highest degree.
    pub max_degree_id: Option<String>,
}

// ============================================================================
// Functions
// ============================================================================

/// Compute statistics for a graph.
pub fn compute_stats(graph: &CategoryGraph) -> GraphStats {
    let page_count = graph.page_count();
    let edge_count = graph.edge_count();

    let mut article_count = 0;
    let mut category_count = 0;
    for namespace in graph.id_to_namespace.values() {
        match namespace {
            Namespace::Article => article_count += 1,
            Namespace::Category => category_count += 1,
        }
    }

    let counts = graph.get_degree_counts(true, true);
    let orphan_count = counts.values().filter(|d| **d == 0).count();
    let total_degree: usize = counts.values().sum();
    let avg_degree = if page_count > 0 {
        total_degree as f32 / page_count as f32
    } else {
        0.0
    };

    let (max_degree_id, max_degree) = counts
        .iter()
        .max_by_key(|&(_, &d)| d)
        .map(|(id, &d)| (Some(id.clone()), d))
        .unwrap_or((None, 0));

    GraphStats {
        page_count,
        article_count,
        category_count,
        edge_count,
        hidden_count: graph.hidden_ids().len(),
        orphan_count,
        avg_degree,
        max_degree,
        max_degree_id,
    }
}

/// Get a quick summary of graph size.
pub fn quick_summary(graph: &CategoryGraph) -> String {
    format!(
        "{} pages, {} edges",
        graph.page_count(),
        graph.edge_count()
    )
}

// ============================================================================
// Tests
// ============================================================================
