//! Query engine: selectors, output shapes, and neighbor enumeration.
//!
//! Pages can be selected by `Page`, by id, or by title; the [`Selector`]
//! enum makes contradictory or missing selector combinations
//! unrepresentable. Every query resolves its output shape through one
//! shared conversion ([`CategoryGraph::resolve_ids`]) controlled by
//! [`ReturnAs`].

use crate::store::CategoryGraph;
use serde::Serialize;
use std::str::FromStr;
use wikigraph_core::{standardize, Error, Namespace, Page, Result};

// ============================================================================
// Selector
// ============================================================================

/// Identifies one page for a query.
#[derive(Clone, Debug)]
pub enum Selector<'a> {
    /// An already-constructed page.
    Page(&'a Page),
    /// A raw id.
    Id(&'a str),
    /// A title, optionally pinned to a namespace.
    Title {
        /// The title to resolve.
        title: &'a str,
        /// The namespace to search; `None` lets the query infer it.
        namespace: Option<Namespace>,
    },
}

impl<'a> Selector<'a> {
    /// Select by page.
    pub fn page(page: &'a Page) -> Self {
        Self::Page(page)
    }

    /// Select by id.
    pub fn id(id: &'a str) -> Self {
        Self::Id(id)
    }

    /// Select by title, namespace inferred.
    pub fn title(title: &'a str) -> Self {
        Self::Title {
            title,
            namespace: None,
        }
    }

    /// Select by title within an explicit namespace.
    pub fn title_in(title: &'a str, namespace: Namespace) -> Self {
        Self::Title {
            title,
            namespace: Some(namespace),
        }
    }
}

// ============================================================================
// Output shape
// ============================================================================

/// Output shape of a query: raw ids, titles, or constructed pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReturnAs {
    /// Raw id strings.
    Id,
    /// Canonical titles (via the id → title index).
    Title,
    /// Constructed [`Page`] values.
    #[default]
    Page,
}

impl FromStr for ReturnAs {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "page" => Ok(Self::Page),
            other => Err(Error::parse(format!(
                "invalid return shape: {other} (one of: id, title, page)"
            ))),
        }
    }
}

/// A query result in the shape requested by [`ReturnAs`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageList {
    /// Raw id strings.
    Ids(Vec<String>),
    /// Canonical titles.
    Titles(Vec<String>),
    /// Constructed pages.
    Pages(Vec<Page>),
}

impl PageList {
    /// Number of entries.
    pub fn len(&self) -> usize {
        match self {
            Self::Ids(v) | Self::Titles(v) => v.len(),
            Self::Pages(v) => v.len(),
        }
    }

    /// Whether the result is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The ids, if the result was requested as ids.
    pub fn into_ids(self) -> Option<Vec<String>> {
        match self {
            Self::Ids(v) => Some(v),
            _ => None,
        }
    }

    /// The titles, if the result was requested as titles.
    pub fn into_titles(self) -> Option<Vec<String>> {
        match self {
            Self::Titles(v) => Some(v),
            _ => None,
        }
    }

    /// The pages, if the result was requested as pages.
    pub fn into_pages(self) -> Option<Vec<Page>> {
        match self {
            Self::Pages(v) => Some(v),
            _ => None,
        }
    }
}

// ============================================================================
// Options
// ============================================================================

/// Options shared by the neighbor-enumeration queries.
#[derive(Clone, Debug)]
pub struct QueryOptions {
    /// Output shape. Defaults to pages.
    pub return_as: ReturnAs,
    /// Whether hidden categories appear in the result. Defaults to false.
    pub include_hidden: bool,
    /// Whether a title selector is standardized before resolution.
    /// Defaults to true; disable only for titles already in canonical form.
    pub standardize_title: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            return_as: ReturnAs::Page,
            include_hidden: false,
            standardize_title: true,
        }
    }
}

impl QueryOptions {
    /// Options returning raw ids.
    pub fn ids() -> Self {
        Self {
            return_as: ReturnAs::Id,
            ..Self::default()
        }
    }

    /// Options returning titles.
    pub fn titles() -> Self {
        Self {
            return_as: ReturnAs::Title,
            ..Self::default()
        }
    }

    /// Set `include_hidden`.
    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }
}

// ============================================================================
// Query operations
// ============================================================================

impl CategoryGraph {
    /// Convert an id list into the requested output shape.
    ///
    /// This is the single conversion point shared by every query operation.
    pub fn resolve_ids(&self, ids: Vec<String>, return_as: ReturnAs) -> Result<PageList> {
        match return_as {
            ReturnAs::Id => Ok(PageList::Ids(ids)),
            ReturnAs::Title => {
                let titles = ids
                    .iter()
                    .map(|id| {
                        self.id_to_title
                            .get(id)
                            .cloned()
                            .ok_or_else(|| Error::UnknownId(id.clone()))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(PageList::Titles(titles))
            }
            ReturnAs::Page => {
                let pages = ids
                    .iter()
                    .map(|id| self.get_page_from_id(id))
                    .collect::<Result<Vec<_>>>()?;
                Ok(PageList::Pages(pages))
            }
        }
    }

    /// Resolve a selector to a page id.
    ///
    /// `default_namespace` pins title selectors that carry no namespace of
    /// their own (children queries force the category namespace). Without a
    /// pin the namespace is inferred: a title found in exactly one namespace
    /// resolves there, one found in both fails with `AmbiguousTitle`, one
    /// found in neither with `UnknownTitle`.
    fn resolve_selector(
        &self,
        selector: &Selector<'_>,
        standardize_title: bool,
        default_namespace: Option<Namespace>,
    ) -> Result<String> {
        match selector {
            Selector::Page(page) => Ok(page.id.clone()),
            Selector::Id(id) => Ok((*id).to_string()),
            Selector::Title { title, namespace } => {
                let canonical = if standardize_title {
                    standardize(title)
                } else {
                    (*title).to_string()
                };

                let namespace = match namespace.or(default_namespace) {
                    Some(ns) => ns,
                    None => self.infer_namespace(&canonical)?,
                };

                self.title_to_id
                    .for_namespace(namespace)
                    .get(&canonical)
                    .cloned()
                    .ok_or_else(|| Error::unknown_title(canonical, namespace.as_str()))
            }
        }
    }

    fn infer_namespace(&self, canonical_title: &str) -> Result<Namespace> {
        let in_articles = self.title_to_id.article.contains_key(canonical_title);
        let in_categories = self.title_to_id.category.contains_key(canonical_title);
        match (in_articles, in_categories) {
            (true, true) => Err(Error::AmbiguousTitle(canonical_title.to_string())),
            (true, false) => Ok(Namespace::Article),
            (false, true) => Ok(Namespace::Category),
            (false, false) => Err(Error::unknown_title(
                canonical_title,
                "article or category",
            )),
        }
    }

    /// Resolve a selector to its page.
    ///
    /// Title selectors follow the same inference rules as
    /// [`Self::get_parents`]. An id selector for an absent id fails with
    /// `UnknownId` (unlike the neighbor queries, which treat absent ids as
    /// having no neighbors).
    pub fn get_page(&self, selector: Selector<'_>, opts: &QueryOptions) -> Result<Page> {
        let id = self.resolve_selector(&selector, opts.standardize_title, None)?;
        self.get_page_from_id(&id)
    }

    /// Members of a category: articles and sub-categories, in load order.
    ///
    /// A title selector is forced to the category namespace (only
    /// categories have children). Hidden categories are stripped unless
    /// `include_hidden` is set.
    pub fn get_children(&self, selector: Selector<'_>, opts: &QueryOptions) -> Result<PageList> {
        let id = self.resolve_selector(
            &selector,
            opts.standardize_title,
            Some(Namespace::Category),
        )?;
        let ids = self.neighbor_ids(&id, false, opts.include_hidden);
        self.resolve_ids(ids, opts.return_as)
    }

    /// Parent categories of a page, in load order.
    ///
    /// A title selector with no explicit namespace has its namespace
    /// inferred (article, then category).
    pub fn get_parents(&self, selector: Selector<'_>, opts: &QueryOptions) -> Result<PageList> {
        let id = self.resolve_selector(&selector, opts.standardize_title, None)?;
        let ids = self.neighbor_ids(&id, true, opts.include_hidden);
        self.resolve_ids(ids, opts.return_as)
    }

    /// The top-level categories in the requested shape.
    ///
    /// See [`CategoryGraph::top_level_category_ids`].
    pub fn get_top_level_categories(&self, return_as: ReturnAs) -> Result<PageList> {
        self.resolve_ids(self.top_level_category_ids(), return_as)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;

    /// Computer (article) with four parent categories of differing degree,
    /// one of them hidden; Montreal exists in both namespaces.
    fn test_graph() -> CategoryGraph {
        let mut builder = GraphBuilder::new();
        builder.add_page(Page::new("1", "Computer", Namespace::Article));
        builder.add_page(Page::new("2", "Consumer_electronics", Namespace::Category));
        builder.add_page(Page::new("3", "Computers", Namespace::Category));
        builder.add_page(Page::new("4", "All_stub_articles", Namespace::Category));
        builder.add_page(Page::new("5", "Montreal", Namespace::Article));
        builder.add_page(Page::new("6", "Montreal", Namespace::Category));
        builder.add_page(Page::new("7", "Laptop", Namespace::Article));
        builder.add_edge("1", "2");
        builder.add_edge("1", "3");
        builder.add_edge("1", "4");
        builder.add_edge("5", "6");
        builder.add_edge("7", "3");
        builder.hide("4");
        builder.build().unwrap()
    }

    // ------------------------------------------------------------------------
    // get_page
    // ------------------------------------------------------------------------

    #[test]
    fn test_get_page_by_title() {
        let cg = test_graph();
        let page = cg
            .get_page(Selector::title("Computer"), &QueryOptions::default())
            .unwrap();
        assert_eq!(page.id, "1");
        assert!(page.is_article());
    }

    #[test]
    fn test_get_page_unknown_id() {
        let cg = test_graph();
        let err = cg
            .get_page(Selector::id("404"), &QueryOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownId(_)));
    }

    // ------------------------------------------------------------------------
    // get_parents
    // ------------------------------------------------------------------------

    #[test]
    fn test_get_parents_by_id() {
        let cg = test_graph();
        let ids = cg
            .get_parents(Selector::id("1"), &QueryOptions::ids())
            .unwrap()
            .into_ids()
            .unwrap();
        assert_eq!(ids, vec!["2".to_string(), "3".to_string()]);
    }

    #[test]
    fn test_get_parents_by_page() {
        let cg = test_graph();
        let page = cg.get_page_from_id("1").unwrap();
        let parents = cg
            .get_parents(Selector::page(&page), &QueryOptions::default())
            .unwrap()
            .into_pages()
            .unwrap();
        assert_eq!(parents.len(), 2);
        assert!(parents.iter().all(Page::is_category));
    }

    #[test]
    fn test_get_parents_include_hidden() {
        let cg = test_graph();
        let ids = cg
            .get_parents(Selector::id("1"), &QueryOptions::ids().with_hidden(true))
            .unwrap()
            .into_ids()
            .unwrap();
        assert_eq!(ids, vec!["2".to_string(), "3".to_string(), "4".to_string()]);
    }

    #[test]
    fn test_get_parents_by_title_infers_article() {
        let cg = test_graph();
        let titles = cg
            .get_parents(Selector::title("Computer"), &QueryOptions::titles())
            .unwrap()
            .into_titles()
            .unwrap();
        assert_eq!(
            titles,
            vec!["Consumer_electronics".to_string(), "Computers".to_string()]
        );
    }

    #[test]
    fn test_get_parents_ambiguous_title() {
        let cg = test_graph();
        let err = cg
            .get_parents(Selector::title("Montreal"), &QueryOptions::ids())
            .unwrap_err();
        assert!(matches!(err, Error::AmbiguousTitle(t) if t == "Montreal"));
    }

    #[test]
    fn test_get_parents_explicit_namespace_disambiguates() {
        let cg = test_graph();
        let ids = cg
            .get_parents(
                Selector::title_in("Montreal", Namespace::Article),
                &QueryOptions::ids(),
            )
            .unwrap()
            .into_ids()
            .unwrap();
        assert_eq!(ids, vec!["6".to_string()]);
    }

    #[test]
    fn test_get_parents_unknown_title() {
        let cg = test_graph();
        let err = cg
            .get_parents(Selector::title("Atlantis"), &QueryOptions::ids())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownTitle { .. }));
    }

    #[test]
    fn test_get_parents_standardizes_title() {
        let cg = test_graph();
        let ids = cg
            .get_parents(Selector::title("Consumer electronics"), &QueryOptions::ids())
            .unwrap()
            .into_ids()
            .unwrap();
        // the category has no parents in this graph; resolution must succeed
        assert!(ids.is_empty());
    }

    #[test]
    fn test_get_parents_unknown_id_is_empty() {
        let cg = test_graph();
        let ids = cg
            .get_parents(Selector::id("404"), &QueryOptions::ids())
            .unwrap()
            .into_ids()
            .unwrap();
        assert!(ids.is_empty());
    }

    // ------------------------------------------------------------------------
    // get_children
    // ------------------------------------------------------------------------

    #[test]
    fn test_get_children_by_title_forces_category() {
        let cg = test_graph();
        // "Montreal" exists in both namespaces; children queries resolve to
        // the category without ambiguity.
        let ids = cg
            .get_children(Selector::title("Montreal"), &QueryOptions::ids())
            .unwrap()
            .into_ids()
            .unwrap();
        assert_eq!(ids, vec!["5".to_string()]);
    }

    #[test]
    fn test_get_children_load_order() {
        let cg = test_graph();
        let ids = cg
            .get_children(Selector::id("3"), &QueryOptions::ids())
            .unwrap()
            .into_ids()
            .unwrap();
        assert_eq!(ids, vec!["1".to_string(), "7".to_string()]);
    }

    #[test]
    fn test_get_children_of_article_is_empty() {
        let cg = test_graph();
        let ids = cg
            .get_children(Selector::id("1"), &QueryOptions::ids())
            .unwrap()
            .into_ids()
            .unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_child_parent_round_trip() {
        let cg = test_graph();
        let children = cg
            .get_children(Selector::id("3"), &QueryOptions::ids())
            .unwrap()
            .into_ids()
            .unwrap();
        let parents = cg
            .get_parents(Selector::id(&children[0]), &QueryOptions::ids())
            .unwrap()
            .into_ids()
            .unwrap();
        assert!(parents.contains(&"3".to_string()));
    }

    // ------------------------------------------------------------------------
    // Output shapes
    // ------------------------------------------------------------------------

    #[test]
    fn test_resolve_ids_as_pages() {
        let cg = test_graph();
        let pages = cg
            .resolve_ids(vec!["2".to_string()], ReturnAs::Page)
            .unwrap()
            .into_pages()
            .unwrap();
        assert_eq!(
            pages[0],
            Page::new("2", "Consumer_electronics", Namespace::Category)
        );
    }

    #[test]
    fn test_resolve_ids_unknown_id() {
        let cg = test_graph();
        let err = cg
            .resolve_ids(vec!["404".to_string()], ReturnAs::Title)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownId(_)));
    }

    #[test]
    fn test_return_as_from_str() {
        assert_eq!("id".parse::<ReturnAs>().unwrap(), ReturnAs::Id);
        assert_eq!("title".parse::<ReturnAs>().unwrap(), ReturnAs::Title);
        assert_eq!("page".parse::<ReturnAs>().unwrap(), ReturnAs::Page);
        assert!("url".parse::<ReturnAs>().is_err());
    }

    #[test]
    fn test_page_list_serializes_untagged() {
        let list = PageList::Ids(vec!["1".to_string(), "2".to_string()]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["1","2"]"#);
    }
}
