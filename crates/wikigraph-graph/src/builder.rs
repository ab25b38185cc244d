//! Building a `CategoryGraph` from pages and an edge list.
//!
//! The builder constructs both adjacency maps from one `(child, parent)`
//! edge list in a single pass, so the symmetry invariant holds by
//! construction. Edge order is preserved into the adjacency lists.

use crate::store::{CategoryGraph, TitleIndex};
use std::collections::{HashMap, HashSet};
use wikigraph_core::{Error, Namespace, Page, Result};

/// Builder for [`CategoryGraph`].
///
/// # Examples
///
/// ```
/// use wikigraph_core::{Namespace, Page};
/// use wikigraph_graph::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// builder.add_page(Page::new("1", "Montreal", Namespace::Article));
/// builder.add_page(Page::new("2", "Montreal", Namespace::Category));
/// builder.add_edge("1", "2");
/// let graph = builder.build().unwrap();
/// assert_eq!(graph.page_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    pages: Vec<Page>,
    edges: Vec<(String, String)>,
    hidden: HashSet<String>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page.
    pub fn add_page(&mut self, page: Page) -> &mut Self {
        self.pages.push(page);
        self
    }

    /// Add a membership edge from a member page up to one of its categories.
    pub fn add_edge(&mut self, child_id: impl Into<String>, parent_id: impl Into<String>) -> &mut Self {
        self.edges.push((child_id.into(), parent_id.into()));
        self
    }

    /// Mark a category id as hidden.
    pub fn hide(&mut self, id: impl Into<String>) -> &mut Self {
        self.hidden.insert(id.into());
        self
    }

    /// Build the graph, checking the structural invariants.
    ///
    /// Fails with `MalformedGraph` on duplicate ids, duplicate titles
    /// within a namespace, edges with unknown endpoints, or edges whose
    /// parent is not a category.
    pub fn build(self) -> Result<CategoryGraph> {
        let mut id_to_title: HashMap<String, String> = HashMap::with_capacity(self.pages.len());
        let mut id_to_namespace: HashMap<String, Namespace> =
            HashMap::with_capacity(self.pages.len());
        let mut title_to_id = TitleIndex::default();

        for page in &self.pages {
            if id_to_title
                .insert(page.id.clone(), page.title.clone())
                .is_some()
            {
                return Err(Error::malformed(format!("duplicate page id {}", page.id)));
            }
            id_to_namespace.insert(page.id.clone(), page.namespace);

            let index = match page.namespace {
                Namespace::Article => &mut title_to_id.article,
                Namespace::Category => &mut title_to_id.category,
            };
            if index.insert(page.title.clone(), page.id.clone()).is_some() {
                return Err(Error::malformed(format!(
                    "duplicate {} title {}",
                    page.namespace, page.title
                )));
            }
        }

        // One pass over the edge list fills both directions.
        let mut children_to_parents: HashMap<String, Vec<String>> = HashMap::new();
        let mut parents_to_children: HashMap<String, Vec<String>> = HashMap::new();

        for (child, parent) in &self.edges {
            if !id_to_title.contains_key(child) {
                return Err(Error::malformed(format!("edge child {child} is unknown")));
            }
            match id_to_namespace.get(parent) {
                None => return Err(Error::malformed(format!("edge parent {parent} is unknown"))),
                Some(Namespace::Article) => {
                    return Err(Error::malformed(format!(
                        "edge parent {parent} is an article; only categories have members"
                    )));
                }
                Some(Namespace::Category) => {}
            }
            children_to_parents
                .entry(child.clone())
                .or_default()
                .push(parent.clone());
            parents_to_children
                .entry(parent.clone())
                .or_default()
                .push(child.clone());
        }

        for id in &self.hidden {
            if !id_to_title.contains_key(id) {
                return Err(Error::malformed(format!("hidden id {id} is unknown")));
            }
        }

        log::debug!(
            "built graph: {} pages, {} edges, {} hidden",
            self.pages.len(),
            self.edges.len(),
            self.hidden.len()
        );

        Ok(CategoryGraph::from_parts(
            id_to_title,
            id_to_namespace,
            title_to_id,
            children_to_parents,
            parents_to_children,
            self.hidden,
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================
