//! Degree counting and degree-based ranking.
//!
//! The degree of a page is the length of its parent list plus the length of
//! its child list. Counts are memoized per `include_hidden` flag inside the
//! store; the cache is never invalidated implicitly — after mutating the
//! graph (synthetic-root insertion), recompute with `use_cache = false`.

use crate::query::{PageList, ReturnAs};
use crate::store::CategoryGraph;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;
use wikigraph_core::{Error, Page, Result};

/// Memoized degree counts, one entry per `include_hidden` flag.
///
/// The maps are `Arc`'d so handing them to callers is cheap and the store
/// stays `Send`.
#[derive(Debug, Default)]
pub(crate) struct DegreeCache {
    visible: Option<Arc<HashMap<String, usize>>>,
    full: Option<Arc<HashMap<String, usize>>>,
}

impl DegreeCache {
    fn slot(&mut self, include_hidden: bool) -> &mut Option<Arc<HashMap<String, usize>>> {
        if include_hidden {
            &mut self.full
        } else {
            &mut self.visible
        }
    }
}

// ============================================================================
// Options
// ============================================================================

/// Options for [`CategoryGraph::rank_page_ids`] and
/// [`CategoryGraph::rank_pages`].
#[derive(Clone, Debug)]
pub struct RankOptions {
    /// Ranking mode; only `"degree"` is supported.
    pub mode: String,
    /// Ascending order instead of the default descending.
    pub ascending: bool,
    /// Truncate the ranked list to this many entries.
    pub max_pages: Option<usize>,
    /// Output shape. Defaults to ids.
    pub return_as: ReturnAs,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            mode: "degree".to_string(),
            ascending: false,
            max_pages: None,
            return_as: ReturnAs::Id,
        }
    }
}

// ============================================================================
// Operations
// ============================================================================

impl CategoryGraph {
    /// Degree counts for every page in the graph.
    ///
    /// With `include_hidden = false` (the usual setting) hidden category
    /// ids are excluded from both the parent and child side of the count.
    /// Results are memoized per flag; `use_cache = false` forces
    /// recomputation and refreshes the cached entry.
    pub fn get_degree_counts(
        &self,
        include_hidden: bool,
        use_cache: bool,
    ) -> Arc<HashMap<String, usize>> {
        if use_cache {
            if let Some(cached) = self.degree_cache.borrow_mut().slot(include_hidden).clone() {
                return cached;
            }
        }

        log::debug!(
            "computing degree counts for {} pages (include_hidden={include_hidden})",
            self.page_count()
        );

        let mut counts: HashMap<String, usize> = HashMap::with_capacity(self.page_count());
        for id in self.id_to_title.keys() {
            let degree = if include_hidden {
                self.parents_of(id).len() + self.children_of(id).len()
            } else {
                let visible = |ids: &[String]| {
                    ids.iter().filter(|n| !self.is_hidden(n)).count()
                };
                visible(self.parents_of(id)) + visible(self.children_of(id))
            };
            counts.insert(id.clone(), degree);
        }

        let counts = Arc::new(counts);
        *self.degree_cache.borrow_mut().slot(include_hidden) = Some(counts.clone());
        counts
    }

    /// Rank page ids by degree.
    ///
    /// The sort is stable: equal-degree ids keep their relative input
    /// order. Descending by default. Modes other than `"degree"` fail with
    /// `UnsupportedMode`; ids absent from the graph fail with `UnknownId`.
    pub fn rank_page_ids(&self, ids: &[String], opts: &RankOptions) -> Result<PageList> {
        if opts.mode != "degree" {
            return Err(Error::UnsupportedMode(opts.mode.clone()));
        }

        let counts = self.get_degree_counts(false, true);
        let mut scored = ids
            .iter()
            .map(|id| {
                counts
                    .get(id)
                    .copied()
                    .map(|degree| (id.clone(), degree))
                    .ok_or_else(|| Error::UnknownId(id.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        if opts.ascending {
            scored.sort_by_key(|(_, degree)| *degree);
        } else {
            scored.sort_by_key(|(_, degree)| Reverse(*degree));
        }
        if let Some(max) = opts.max_pages {
            scored.truncate(max);
        }

        let ranked = scored.into_iter().map(|(id, _)| id).collect();
        self.resolve_ids(ranked, opts.return_as)
    }

    /// Rank pages by degree, returning reconstructed pages in sorted order.
    ///
    /// Same semantics as [`Self::rank_page_ids`] applied to the pages' ids.
    pub fn rank_pages(&self, pages: &[Page], opts: &RankOptions) -> Result<Vec<Page>> {
        let ids: Vec<String> = pages.iter().map(|p| p.id.clone()).collect();
        let opts = RankOptions {
            return_as: ReturnAs::Page,
            ..opts.clone()
        };
        Ok(self
            .rank_page_ids(&ids, &opts)?
            .into_pages()
            .unwrap_or_default())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;
    use wikigraph_core::Namespace;

    /// Category "5" has 2 parents and 3 children (degree 5); categories
    /// "2"/"3" have degree 1 each beyond their link to "5"; "9" is hidden.
    fn test_graph() -> CategoryGraph {
        let mut builder = GraphBuilder::new();
        builder.add_page(Page::new("5", "Hub", Namespace::Category));
        builder.add_page(Page::new("2", "Parent_one", Namespace::Category));
        builder.add_page(Page::new("3", "Parent_two", Namespace::Category));
        builder.add_page(Page::new("6", "Member_a", Namespace::Article));
        builder.add_page(Page::new("7", "Member_b", Namespace::Article));
        builder.add_page(Page::new("8", "Member_c", Namespace::Article));
        builder.add_page(Page::new("9", "Hidden_cat", Namespace::Category));
        builder.add_edge("5", "2");
        builder.add_edge("5", "3");
        builder.add_edge("6", "5");
        builder.add_edge("7", "5");
        builder.add_edge("8", "5");
        builder.add_edge("6", "9");
        builder.hide("9");
        builder.build().unwrap()
    }

    // ------------------------------------------------------------------------
    // Degree counts
    // ------------------------------------------------------------------------

    #[test]
    fn test_degree_two_parents_three_children() {
        let cg = test_graph();
        let counts = cg.get_degree_counts(false, true);
        assert_eq!(counts["5"], 5);
    }

    #[test]
    fn test_degree_excludes_hidden_by_default() {
        let cg = test_graph();
        let counts = cg.get_degree_counts(false, true);
        // "6" has parents 5 and 9, but 9 is hidden
        assert_eq!(counts["6"], 1);

        let full = cg.get_degree_counts(true, true);
        assert_eq!(full["6"], 2);
    }

    #[test]
    fn test_degree_counts_cover_all_pages() {
        let cg = test_graph();
        let counts = cg.get_degree_counts(false, true);
        assert_eq!(counts.len(), cg.page_count());
    }

    #[test]
    fn test_degree_cache_reused() {
        let cg = test_graph();
        let first = cg.get_degree_counts(false, true);
        let second = cg.get_degree_counts(false, true);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_degree_cache_keyed_by_flag() {
        let cg = test_graph();
        let visible = cg.get_degree_counts(false, true);
        let full = cg.get_degree_counts(true, true);
        assert!(!Arc::ptr_eq(&visible, &full));
    }

    #[test]
    fn test_degree_cache_forced_recompute() {
        let cg = test_graph();
        let first = cg.get_degree_counts(false, true);
        let second = cg.get_degree_counts(false, false);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[test]
    fn test_degree_cache_stale_after_root_insertion() {
        let mut cg = test_graph();
        let before = cg.get_degree_counts(false, true);
        cg.insert_artificial_root("ROOT").unwrap();

        // Not auto-invalidated: the cached map still lacks the root.
        let stale = cg.get_degree_counts(false, true);
        assert!(Arc::ptr_eq(&before, &stale));

        // Explicit recomputation picks up the new node.
        let fresh = cg.get_degree_counts(false, false);
        assert!(fresh.contains_key("ROOT"));
    }

    // ------------------------------------------------------------------------
    // Ranking
    // ------------------------------------------------------------------------

    #[test]
    fn test_rank_descending_by_default() {
        let cg = test_graph();
        let ids = vec!["2".to_string(), "5".to_string(), "6".to_string()];
        let ranked = cg
            .rank_page_ids(&ids, &RankOptions::default())
            .unwrap()
            .into_ids()
            .unwrap();
        assert_eq!(ranked[0], "5");
    }

    #[test]
    fn test_rank_ascending() {
        let cg = test_graph();
        let ids = vec!["5".to_string(), "2".to_string()];
        let opts = RankOptions {
            ascending: true,
            ..Default::default()
        };
        let ranked = cg.rank_page_ids(&ids, &opts).unwrap().into_ids().unwrap();
        assert_eq!(ranked, vec!["2".to_string(), "5".to_string()]);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let cg = test_graph();
        // "2" and "3" both have degree 1; "7" and "8" both have degree 1
        let ids = vec![
            "3".to_string(),
            "2".to_string(),
            "8".to_string(),
            "7".to_string(),
        ];
        let ranked = cg
            .rank_page_ids(&ids, &RankOptions::default())
            .unwrap()
            .into_ids()
            .unwrap();
        assert_eq!(ranked, ids);
    }

    #[test]
    fn test_rank_truncates() {
        let cg = test_graph();
        let ids = vec!["2".to_string(), "5".to_string(), "6".to_string()];
        let opts = RankOptions {
            max_pages: Some(1),
            ..Default::default()
        };
        let ranked = cg.rank_page_ids(&ids, &opts).unwrap().into_ids().unwrap();
        assert_eq!(ranked, vec!["5".to_string()]);
    }

    #[test]
    fn test_rank_unsupported_mode() {
        let cg = test_graph();
        let opts = RankOptions {
            mode: "pagerank".to_string(),
            ..Default::default()
        };
        let err = cg.rank_page_ids(&["5".to_string()], &opts).unwrap_err();
        assert!(matches!(err, Error::UnsupportedMode(m) if m == "pagerank"));
    }

    #[test]
    fn test_rank_unknown_id() {
        let cg = test_graph();
        let err = cg
            .rank_page_ids(&["404".to_string()], &RankOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownId(_)));
    }

    #[test]
    fn test_rank_pages() {
        let cg = test_graph();
        let pages = vec![
            cg.get_page_from_id("2").unwrap(),
            cg.get_page_from_id("5").unwrap(),
        ];
        let ranked = cg.rank_pages(&pages, &RankOptions::default()).unwrap();
        assert_eq!(ranked[0].id, "5");
        assert_eq!(ranked[1].id, "2");
    }
}
