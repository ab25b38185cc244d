//! Multi-level traversal and backlink search.
//!
//! [`CategoryGraph::traverse`] expands a page's neighborhood breadth-first
//! for a fixed number of rounds, toward parents or children.
//! [`CategoryGraph::bfs_with_backlinks`] searches from an article toward
//! its ancestor categories, recording predecessors so
//! [`extract_chain`] can recover a path.

use crate::query::{PageList, ReturnAs};
use crate::store::CategoryGraph;
use std::collections::{HashMap, HashSet, VecDeque};
use std::str::FromStr;
use wikigraph_core::{Error, Page, Result};

// ============================================================================
// Direction and options
// ============================================================================

/// Which adjacency direction a traversal follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraverseDirection {
    /// Expand toward parent categories.
    Parents,
    /// Expand toward member pages.
    Children,
}

impl FromStr for TraverseDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "parents" => Ok(Self::Parents),
            "children" => Ok(Self::Children),
            other => Err(Error::parse(format!(
                "invalid direction: {other} (one of: parents, children)"
            ))),
        }
    }
}

/// Options for [`CategoryGraph::traverse`] and
/// [`CategoryGraph::traverse_by_level`].
#[derive(Clone, Debug)]
pub struct TraverseOptions {
    /// Number of expansion rounds. Must be >= 1.
    pub level: usize,
    /// Whether hidden categories appear in the result.
    pub include_hidden: bool,
    /// Output shape. Defaults to pages.
    pub return_as: ReturnAs,
}

impl Default for TraverseOptions {
    fn default() -> Self {
        Self {
            level: 1,
            include_hidden: false,
            return_as: ReturnAs::Page,
        }
    }
}

impl TraverseOptions {
    /// Options for an id-shaped traversal of the given depth.
    pub fn ids(level: usize) -> Self {
        Self {
            level,
            return_as: ReturnAs::Id,
            ..Self::default()
        }
    }
}

// ============================================================================
// Traversal
// ============================================================================

impl CategoryGraph {
    /// Expand `page`'s neighborhood for `opts.level` rounds and return one
    /// deduplicated list spanning all levels, in discovery order.
    pub fn traverse(
        &self,
        page: &Page,
        direction: TraverseDirection,
        opts: &TraverseOptions,
    ) -> Result<PageList> {
        let levels = self.expand_levels(page, direction, opts)?;
        let flat: Vec<String> = levels.into_iter().flatten().collect();
        self.resolve_ids(flat, opts.return_as)
    }

    /// Like [`Self::traverse`], but returns one list per level
    /// (level-1 results first).
    pub fn traverse_by_level(
        &self,
        page: &Page,
        direction: TraverseDirection,
        opts: &TraverseOptions,
    ) -> Result<Vec<PageList>> {
        self.expand_levels(page, direction, opts)?
            .into_iter()
            .map(|ids| self.resolve_ids(ids, opts.return_as))
            .collect()
    }

    /// Breadth-first expansion: round 1 holds the immediate neighbors of
    /// `page`, round k the neighbors of every node first discovered in round
    /// k-1. Nodes already seen at an earlier level are suppressed; within a
    /// level, duplicates reached by different paths collapse to the first.
    fn expand_levels(
        &self,
        page: &Page,
        direction: TraverseDirection,
        opts: &TraverseOptions,
    ) -> Result<Vec<Vec<String>>> {
        if opts.level == 0 {
            return Err(Error::InvalidLevel(0));
        }
        let toward_parents = direction == TraverseDirection::Parents;

        let mut frontier = self.neighbor_ids(&page.id, toward_parents, opts.include_hidden);
        let mut visited: HashSet<String> = HashSet::new();
        let mut levels: Vec<Vec<String>> = Vec::with_capacity(opts.level);

        for _ in 0..opts.level {
            let mut discovered = Vec::new();
            let mut next = Vec::new();
            for id in frontier {
                if visited.insert(id.clone()) {
                    next.extend(self.neighbor_ids(&id, toward_parents, opts.include_hidden));
                    discovered.push(id);
                }
            }
            levels.push(discovered);
            frontier = next;
        }

        Ok(levels)
    }

    /// Search from `article` toward its ancestor categories, recording for
    /// every newly visited node the node it was reached from.
    ///
    /// Terminates as soon as `target` is dequeued, or when the frontier is
    /// exhausted. The returned predecessor map covers the explored region
    /// whether or not the target was reached; feed it to [`extract_chain`]
    /// to recover the path.
    ///
    /// This is not a shortest-path search: the chain it finds is the first
    /// one in traversal order, which depends on adjacency-list ordering.
    pub fn bfs_with_backlinks(&self, article: &Page, target: &Page) -> HashMap<String, String> {
        let mut queue: VecDeque<String> = VecDeque::from([article.id.clone()]);
        let mut backlinks: HashMap<String, String> = HashMap::new();

        while let Some(id) = queue.pop_front() {
            if id == target.id {
                break;
            }
            for parent in self.neighbor_ids(&id, true, false) {
                if !backlinks.contains_key(&parent) {
                    backlinks.insert(parent.clone(), id.clone());
                    queue.push_back(parent);
                }
            }
        }

        backlinks
    }
}

/// Walk a predecessor map backward from `target` to `article`, producing
/// the ordered id chain from article to target inclusive.
///
/// Fails with `NoPathFound` if the predecessor chain does not terminate at
/// `article`.
pub fn extract_chain(
    backlinks: &HashMap<String, String>,
    article: &Page,
    target: &Page,
) -> Result<Vec<String>> {
    let mut chain = vec![target.id.clone()];
    let mut node = &target.id;

    while node != &article.id {
        match backlinks.get(node) {
            Some(previous) => {
                chain.push(previous.clone());
                node = previous;
            }
            None => {
                return Err(Error::NoPathFound {
                    from: article.id.clone(),
                    to: target.id.clone(),
                });
            }
        }
    }

    chain.reverse();
    Ok(chain)
}

// ============================================================================
// Tests
// ============================================================================
