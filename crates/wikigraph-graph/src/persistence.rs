//! Loading and saving the serialized graph document.
//!
//! The document is produced by the external ingestion pipeline (dump
//! download, table extraction, graph generation) and has exactly five
//! top-level fields:
//!
//! ```text
//! id_to_title:         { id -> title }
//! id_to_namespace:     { id -> namespace_code (0 = article, 14 = category) }
//! title_to_id:         { "article": { title -> id }, "category": { title -> id } }
//! children_to_parents: { id -> [parent_id, ...] }
//! parents_to_children: { id -> [child_id, ...] }
//! ```
//!
//! Loading validates the cross-index invariants and is fatal on violation:
//! silently dropping dangling references would corrupt invariants every
//! downstream query relies on.

use crate::store::{CategoryGraph, TitleIndex, HIDDEN_CATEGORIES_TITLE};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use wikigraph_core::{Error, Namespace, Result};

// ============================================================================
// Document types
// ============================================================================

/// Serializable representation of the category graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Mapping id → canonical title, one entry per known id.
    pub id_to_title: HashMap<String, String>,
    /// Mapping id → numeric namespace code.
    pub id_to_namespace: HashMap<String, u32>,
    /// Per-namespace reverse mapping title → id.
    pub title_to_id: TitleToId,
    /// Mapping member id → ordered parent category ids.
    pub children_to_parents: HashMap<String, Vec<String>>,
    /// Mapping category id → ordered member ids.
    pub parents_to_children: HashMap<String, Vec<String>>,
}

/// The two reverse title indexes of a [`GraphDocument`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TitleToId {
    /// Article titles.
    pub article: HashMap<String, String>,
    /// Category titles.
    pub category: HashMap<String, String>,
}

// ============================================================================
// Load
// ============================================================================

/// Load a category graph from a JSON document file.
pub fn load_graph(path: impl AsRef<Path>) -> Result<CategoryGraph> {
    log::info!("loading graph document from {}", path.as_ref().display());
    let json = std::fs::read_to_string(path.as_ref())?;
    load_graph_from_str(&json)
}

/// Load a category graph from a JSON string.
pub fn load_graph_from_str(json: &str) -> Result<CategoryGraph> {
    let document: GraphDocument = serde_json::from_str(json).map_err(|e| {
        // A well-formed JSON document missing an expected field is a
        // structural violation, not a parse failure.
        if e.classify() == serde_json::error::Category::Data {
            Error::malformed(e.to_string())
        } else {
            Error::parse(format!("failed to parse graph JSON: {e}"))
        }
    })?;

    CategoryGraph::from_document(document)
}

/// Save a graph document to a JSON file.
pub fn save_document(document: &GraphDocument, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(document)
        .map_err(|e| Error::parse(format!("failed to serialize graph document: {e}")))?;
    std::fs::write(path.as_ref(), json)?;
    Ok(())
}

// ============================================================================
// Document <-> store conversion
// ============================================================================

impl CategoryGraph {
    /// Build a store from a parsed document, checking every cross-index
    /// invariant. Fails with `MalformedGraph` on the first violation.
    pub fn from_document(document: GraphDocument) -> Result<Self> {
        let GraphDocument {
            id_to_title,
            id_to_namespace,
            title_to_id,
            children_to_parents,
            parents_to_children,
        } = document;

        // Namespace codes must decode, and the two id indexes must cover
        // exactly the same ids.
        let mut namespaces: HashMap<String, Namespace> =
            HashMap::with_capacity(id_to_namespace.len());
        for (id, code) in &id_to_namespace {
            let namespace = Namespace::from_code(*code).map_err(|_| {
                Error::malformed(format!("id {id} has invalid namespace code {code}"))
            })?;
            if !id_to_title.contains_key(id) {
                return Err(Error::malformed(format!(
                    "id {id} is in id_to_namespace but not in id_to_title"
                )));
            }
            namespaces.insert(id.clone(), namespace);
        }
        for id in id_to_title.keys() {
            if !namespaces.contains_key(id) {
                return Err(Error::malformed(format!(
                    "id {id} is in id_to_title but not in id_to_namespace"
                )));
            }
        }

        // The reverse title indexes must invert id_to_title exactly, one
        // namespace per id.
        let index = TitleIndex {
            article: title_to_id.article,
            category: title_to_id.category,
        };
        if index.article.len() + index.category.len() != id_to_title.len() {
            return Err(Error::malformed(format!(
                "title_to_id covers {} ids, id_to_title covers {}",
                index.article.len() + index.category.len(),
                id_to_title.len()
            )));
        }
        for (id, title) in &id_to_title {
            let namespace = namespaces[id];
            match index.for_namespace(namespace).get(title) {
                Some(mapped) if mapped == id => {}
                Some(mapped) => {
                    return Err(Error::malformed(format!(
                        "{namespace} title {title} maps to id {mapped}, expected {id}"
                    )));
                }
                None => {
                    return Err(Error::malformed(format!(
                        "{namespace} title {title} (id {id}) is missing from title_to_id"
                    )));
                }
            }
        }

        // Adjacency: no dangling ids, and the two directions must describe
        // the same edge set.
        let mut up_edges: HashSet<(&str, &str)> = HashSet::new();
        for (child, parents) in &children_to_parents {
            if !id_to_title.contains_key(child) {
                return Err(Error::malformed(format!(
                    "children_to_parents key {child} is not a known id"
                )));
            }
            for parent in parents {
                if !id_to_title.contains_key(parent) {
                    return Err(Error::malformed(format!(
                        "parent {parent} of {child} is not a known id"
                    )));
                }
                up_edges.insert((child, parent));
            }
        }
        let mut down_edges: HashSet<(&str, &str)> = HashSet::new();
        for (parent, children) in &parents_to_children {
            if !id_to_title.contains_key(parent) {
                return Err(Error::malformed(format!(
                    "parents_to_children key {parent} is not a known id"
                )));
            }
            for child in children {
                if !id_to_title.contains_key(child) {
                    return Err(Error::malformed(format!(
                        "child {child} of {parent} is not a known id"
                    )));
                }
                down_edges.insert((child, parent));
            }
        }
        if up_edges != down_edges {
            let missing = up_edges
                .symmetric_difference(&down_edges)
                .next()
                .map(|(c, p)| format!("({c}, {p})"))
                .unwrap_or_default();
            return Err(Error::malformed(format!(
                "adjacency maps are asymmetric, e.g. edge {missing}"
            )));
        }

        // The Hidden_categories category, when present, defines the default
        // hidden set: its direct members.
        let hidden: HashSet<String> = match index.category.get(HIDDEN_CATEGORIES_TITLE) {
            Some(hidden_id) => parents_to_children
                .get(hidden_id)
                .map(|children| children.iter().cloned().collect())
                .unwrap_or_default(),
            None => HashSet::new(),
        };

        log::info!(
            "loaded graph: {} pages, {} edges, {} hidden categories",
            id_to_title.len(),
            up_edges.len(),
            hidden.len()
        );

        Ok(CategoryGraph::from_parts(
            id_to_title,
            namespaces,
            index,
            children_to_parents,
            parents_to_children,
            hidden,
        ))
    }

    /// Export the store back into document form.
    ///
    /// Useful after a synthetic-root insertion, to persist the augmented
    /// graph for the presentation layer.
    pub fn to_document(&self) -> GraphDocument {
        GraphDocument {
            id_to_title: self.id_to_title.clone(),
            id_to_namespace: self
                .id_to_namespace
                .iter()
                .map(|(id, ns)| (id.clone(), ns.code()))
                .collect(),
            title_to_id: TitleToId {
                article: self.title_to_id.article.clone(),
                category: self.title_to_id.category.clone(),
            },
            children_to_parents: self.children_to_parents.clone(),
            parents_to_children: self.parents_to_children.clone(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
