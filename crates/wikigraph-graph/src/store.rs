//! The `CategoryGraph` store.
//!
//! Holds the four indexes built once at load time (id → title, id →
//! namespace, per-namespace title → id, and the adjacency lists in both
//! directions) plus the hidden-category id set. The store is read-mostly:
//! after construction the only mutation is [`CategoryGraph::insert_artificial_root`].

use crate::rank::DegreeCache;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use wikigraph_core::{standardize, Error, Namespace, Page, Result};

/// Canonical top-level categories (Wikipedia's main topic classifications),
/// used when no synthetic root has been inserted.
pub const TOP_LEVEL_CATEGORIES: &[&str] = &[
    "Academic_disciplines",
    "Business",
    "Communication",
    "Concepts",
    "Culture",
    "Economy",
    "Education",
    "Energy",
    "Engineering",
    "Entertainment",
    "Entities",
    "Ethics",
    "Food_and_drink",
    "Geography",
    "Government",
    "Health",
    "History",
    "Human_behavior",
    "Humanities",
    "Information",
    "Internet",
    "Knowledge",
    "Language",
    "Law",
    "Life",
    "Mass_media",
    "Mathematics",
    "Military",
    "Nature",
    "People",
    "Philosophy",
    "Politics",
    "Religion",
    "Science",
    "Society",
    "Sports",
    "Technology",
    "Time",
    "Universe",
];

/// Title of the category whose members are treated as hidden by default.
pub(crate) const HIDDEN_CATEGORIES_TITLE: &str = "Hidden_categories";

// ============================================================================
// Title index
// ============================================================================

/// Per-namespace reverse index from canonical title to id.
///
/// Within a namespace titles are unique; an id appears in exactly one
/// namespace's index.
#[derive(Clone, Debug, Default)]
pub struct TitleIndex {
    pub(crate) article: HashMap<String, String>,
    pub(crate) category: HashMap<String, String>,
}

impl TitleIndex {
    /// The index for one namespace.
    pub fn for_namespace(&self, namespace: Namespace) -> &HashMap<String, String> {
        match namespace {
            Namespace::Article => &self.article,
            Namespace::Category => &self.category,
        }
    }

    fn for_namespace_mut(&mut self, namespace: Namespace) -> &mut HashMap<String, String> {
        match namespace {
            Namespace::Article => &mut self.article,
            Namespace::Category => &mut self.category,
        }
    }
}

// ============================================================================
// CategoryGraph
// ============================================================================

/// The loaded category graph.
///
/// Construct it with [`crate::load_graph`] (from a serialized document) or
/// [`crate::GraphBuilder`] (from pages and edges). All query operations take
/// `&self`; the degree cache is explicit memoization state owned by the
/// instance.
#[derive(Debug)]
pub struct CategoryGraph {
    pub(crate) id_to_title: HashMap<String, String>,
    pub(crate) id_to_namespace: HashMap<String, Namespace>,
    pub(crate) title_to_id: TitleIndex,
    /// Edges pointing from a member page up to its categories.
    pub(crate) children_to_parents: HashMap<String, Vec<String>>,
    /// Edges pointing from a category down to its members.
    pub(crate) parents_to_children: HashMap<String, Vec<String>>,
    pub(crate) hidden: HashSet<String>,
    pub(crate) root_id: Option<String>,
    pub(crate) degree_cache: RefCell<DegreeCache>,
}

impl CategoryGraph {
    pub(crate) fn from_parts(
        id_to_title: HashMap<String, String>,
        id_to_namespace: HashMap<String, Namespace>,
        title_to_id: TitleIndex,
        children_to_parents: HashMap<String, Vec<String>>,
        parents_to_children: HashMap<String, Vec<String>>,
        hidden: HashSet<String>,
    ) -> Self {
        Self {
            id_to_title,
            id_to_namespace,
            title_to_id,
            children_to_parents,
            parents_to_children,
            hidden,
            root_id: None,
            degree_cache: RefCell::new(DegreeCache::default()),
        }
    }

    // ------------------------------------------------------------------------
    // Size and iteration
    // ------------------------------------------------------------------------

    /// Number of pages (articles + categories) in the graph.
    pub fn page_count(&self) -> usize {
        self.id_to_title.len()
    }

    /// Number of membership edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.children_to_parents.values().map(Vec::len).sum()
    }

    /// Iterate over all page ids.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.id_to_title.keys().map(String::as_str)
    }

    // ------------------------------------------------------------------------
    // Membership
    // ------------------------------------------------------------------------

    /// Whether the graph contains a page with the given id.
    pub fn contains_id(&self, id: &str) -> bool {
        self.id_to_title.contains_key(id)
    }

    /// Whether the graph contains the given page (by id).
    pub fn contains_page(&self, page: &Page) -> bool {
        self.contains_id(&page.id)
    }

    /// Whether the graph contains a page with the given title.
    ///
    /// The title is standardized before the check. With `namespace = None`
    /// both namespaces are searched.
    pub fn contains_title(&self, title: &str, namespace: Option<Namespace>) -> bool {
        self.contains_canonical_title(&standardize(title), namespace)
    }

    /// [`Self::contains_title`] for a title already in canonical form.
    pub fn contains_canonical_title(&self, title: &str, namespace: Option<Namespace>) -> bool {
        match namespace {
            Some(ns) => self.title_to_id.for_namespace(ns).contains_key(title),
            None => {
                self.title_to_id.article.contains_key(title)
                    || self.title_to_id.category.contains_key(title)
            }
        }
    }

    // ------------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------------

    /// Build the [`Page`] for an id.
    pub fn get_page_from_id(&self, id: &str) -> Result<Page> {
        let title = self
            .id_to_title
            .get(id)
            .ok_or_else(|| Error::UnknownId(id.to_string()))?;
        let namespace = self
            .id_to_namespace
            .get(id)
            .copied()
            .ok_or_else(|| Error::UnknownId(id.to_string()))?;
        Ok(Page::from_canonical(id, title.clone(), namespace))
    }

    /// Build the [`Page`] for a (title, namespace) pair.
    ///
    /// The title is standardized before the lookup.
    pub fn get_page_from_title(&self, title: &str, namespace: Namespace) -> Result<Page> {
        self.get_page_from_canonical_title(&standardize(title), namespace)
    }

    /// [`Self::get_page_from_title`] for a title already in canonical form.
    pub fn get_page_from_canonical_title(
        &self,
        title: &str,
        namespace: Namespace,
    ) -> Result<Page> {
        let id = self
            .title_to_id
            .for_namespace(namespace)
            .get(title)
            .ok_or_else(|| Error::unknown_title(title, namespace.as_str()))?;
        self.get_page_from_id(id)
    }

    // ------------------------------------------------------------------------
    // Hidden categories
    // ------------------------------------------------------------------------

    /// Whether an id belongs to the hidden-category set.
    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden.contains(id)
    }

    /// The hidden-category id set.
    pub fn hidden_ids(&self) -> &HashSet<String> {
        &self.hidden
    }

    /// Replace the hidden-category id set.
    ///
    /// The loader derives the set from the `Hidden_categories` category when
    /// one is present; callers with their own notion of hidden pages can
    /// override it here.
    pub fn set_hidden_ids(&mut self, ids: impl IntoIterator<Item = String>) {
        self.hidden = ids.into_iter().collect();
    }

    /// Drop hidden-category ids from a list, preserving the order of the
    /// remaining ids.
    pub fn remove_hidden_ids(&self, ids: &[String]) -> Vec<String> {
        ids.iter()
            .filter(|id| !self.hidden.contains(*id))
            .cloned()
            .collect()
    }

    // ------------------------------------------------------------------------
    // Raw adjacency
    // ------------------------------------------------------------------------

    /// Parent category ids of a page, unfiltered, in load order.
    ///
    /// Unknown ids have no parents.
    pub fn parents_of(&self, id: &str) -> &[String] {
        self.children_to_parents.get(id).map_or(&[], Vec::as_slice)
    }

    /// Member ids of a category, unfiltered, in load order.
    ///
    /// Unknown ids (and articles) have no children.
    pub fn children_of(&self, id: &str) -> &[String] {
        self.parents_to_children.get(id).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn neighbor_ids(&self, id: &str, toward_parents: bool, include_hidden: bool) -> Vec<String> {
        let raw = if toward_parents {
            self.parents_of(id)
        } else {
            self.children_of(id)
        };
        if include_hidden {
            raw.to_vec()
        } else {
            self.remove_hidden_ids(raw)
        }
    }

    // ------------------------------------------------------------------------
    // Synthetic root
    // ------------------------------------------------------------------------

    /// Insert a synthetic root category linking to all top-level categories.
    ///
    /// Workaround to give the graph a single entry point. The store is
    /// mutated in place; edges are inserted in both adjacency maps so the
    /// symmetry invariant survives. The degree cache is NOT invalidated —
    /// recompute it with `use_cache = false` afterwards.
    pub fn insert_artificial_root(&mut self, root_id: &str) -> Result<()> {
        if self.contains_id(root_id) {
            return Err(Error::malformed(format!(
                "root id {root_id} is already used by another page"
            )));
        }
        if self.title_to_id.category.contains_key(root_id) {
            return Err(Error::malformed(format!(
                "root title {root_id} is already used by another category"
            )));
        }

        let top_level = self.top_level_category_ids();
        log::debug!(
            "inserting artificial root {root_id} over {} top-level categories",
            top_level.len()
        );

        self.id_to_title
            .insert(root_id.to_string(), root_id.to_string());
        self.id_to_namespace
            .insert(root_id.to_string(), Namespace::Category);
        self.title_to_id
            .for_namespace_mut(Namespace::Category)
            .insert(root_id.to_string(), root_id.to_string());
        self.children_to_parents
            .insert(root_id.to_string(), Vec::new());
        for id in &top_level {
            self.children_to_parents
                .entry(id.clone())
                .or_default()
                .push(root_id.to_string());
        }
        self.parents_to_children
            .insert(root_id.to_string(), top_level);
        self.root_id = Some(root_id.to_string());

        Ok(())
    }

    /// Id of the synthetic root, if one was inserted.
    pub fn root_id(&self) -> Option<&str> {
        self.root_id.as_deref()
    }

    /// Ids of the top-level categories.
    ///
    /// With a synthetic root these are exactly the root's children;
    /// otherwise the canonical [`TOP_LEVEL_CATEGORIES`] titles are resolved
    /// against the category index (titles absent from a partial graph are
    /// skipped).
    pub fn top_level_category_ids(&self) -> Vec<String> {
        if let Some(root) = &self.root_id {
            return self.children_of(root).to_vec();
        }
        TOP_LEVEL_CATEGORIES
            .iter()
            .filter_map(|title| self.title_to_id.category.get(*title).cloned())
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
