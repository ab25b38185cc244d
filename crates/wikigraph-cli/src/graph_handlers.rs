//! Handler functions for graph CLI commands.
//!
//! These functions implement the logic behind `lookup`, `parents`,
//! `children`, `traverse`, `path`, `rank`, `stats`, and `top-level`. The
//! application shell loads the graph document once and hands each handler
//! a borrowed store.

use crate::cli::SelectorArgs;
use crate::config::DisplayConfig;
use std::path::Path;
use wikigraph_core::{Error, Namespace, Page, Result};
use wikigraph_graph::{
    compute_stats, extract_chain, format_pages, load_graph, CategoryGraph, PageList,
    QueryOptions, RankOptions, ReturnAs, Selector, TraverseDirection, TraverseOptions,
};

// ============================================================================
// Option types
// ============================================================================

/// Options for the parents/children commands.
#[derive(Debug, Clone)]
pub struct NeighborOptions {
    /// Include hidden maintenance categories.
    pub include_hidden: bool,
    /// Output shape: "id", "title", or "page".
    pub return_as: String,
    /// Print as JSON instead of joined text.
    pub json: bool,
}

/// Options for the traverse command.
#[derive(Debug, Clone)]
pub struct TraverseCmdOptions {
    /// Direction: "parents" or "children".
    pub direction: String,
    /// Number of expansion rounds.
    pub level: usize,
    /// Include hidden maintenance categories.
    pub include_hidden: bool,
    /// Print each level separately.
    pub by_level: bool,
    /// Print as JSON instead of joined text.
    pub json: bool,
}

/// Options for the rank command.
#[derive(Debug, Clone)]
pub struct RankCmdOptions {
    /// Sort ascending instead of descending.
    pub ascending: bool,
    /// Keep only the first N ranked pages.
    pub max_pages: Option<usize>,
    /// Print as JSON instead of joined text.
    pub json: bool,
}

// ============================================================================
// Helpers
// ============================================================================

/// Load the graph document, with a friendlier error for a missing file.
pub fn load_graph_or_error(path: &Path) -> Result<CategoryGraph> {
    if !path.exists() {
        return Err(Error::config(format!(
            "graph document not found at {}",
            path.display()
        )));
    }
    load_graph(path)
}

/// Turn `--id` / `--title` / `--namespace` into a query selector.
fn to_selector(args: &SelectorArgs) -> Result<Selector<'_>> {
    let namespace = args
        .namespace
        .as_deref()
        .map(str::parse::<Namespace>)
        .transpose()?;

    match (args.id.as_deref(), args.title.as_deref()) {
        (Some(id), None) => Ok(Selector::id(id)),
        (None, Some(title)) => Ok(match namespace {
            Some(ns) => Selector::title_in(title, ns),
            None => Selector::title(title),
        }),
        (Some(_), Some(_)) => Err(Error::config("pass exactly one of --id / --title")),
        (None, None) => Err(Error::config("pass one of --id / --title")),
    }
}

/// Resolve a `path` endpoint: a title, or an id with an `id:` prefix.
fn resolve_endpoint(
    graph: &CategoryGraph,
    reference: &str,
    namespace: Namespace,
) -> Result<Page> {
    match reference.strip_prefix("id:") {
        Some(id) => graph.get_page_from_id(id),
        None => graph.get_page(
            Selector::title_in(reference, namespace),
            &QueryOptions::default(),
        ),
    }
}

/// Print a query result, either as JSON or as a joined line of text.
fn print_page_list(list: &PageList, display: &DisplayConfig, json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(list).map_err(|e| Error::parse(e.to_string()))?;
        println!("{rendered}");
        return Ok(());
    }

    if list.is_empty() {
        println!("(no results)");
        return Ok(());
    }

    match list {
        PageList::Ids(ids) => println!("{}", ids.join(&display.separator)),
        PageList::Titles(titles) => {
            let rendered: Vec<String> = titles
                .iter()
                .map(|t| {
                    if display.replace_underscores {
                        t.replace('_', " ")
                    } else {
                        t.clone()
                    }
                })
                .collect();
            println!("{}", rendered.join(&display.separator));
        }
        PageList::Pages(pages) => {
            println!(
                "{}",
                format_pages(pages, &display.separator, display.replace_underscores)
            );
        }
    }
    Ok(())
}

// ============================================================================
// Handlers
// ============================================================================

/// Look up a single page and print its details.
pub fn handle_lookup(
    graph: &CategoryGraph,
    selector: &SelectorArgs,
    urls: bool,
    display: &DisplayConfig,
) -> Result<()> {
    let page = graph.get_page(to_selector(selector)?, &QueryOptions::default())?;

    println!("{page}");
    if urls {
        println!("  {}", page.get_url(display.use_curid));
    }
    Ok(())
}

/// List the parent categories of a page.
pub fn handle_parents(
    graph: &CategoryGraph,
    selector: &SelectorArgs,
    options: &NeighborOptions,
    display: &DisplayConfig,
) -> Result<()> {
    let opts = QueryOptions {
        return_as: options.return_as.parse()?,
        include_hidden: options.include_hidden,
        ..Default::default()
    };
    let parents = graph.get_parents(to_selector(selector)?, &opts)?;
    print_page_list(&parents, display, options.json)
}

/// List the members of a category.
pub fn handle_children(
    graph: &CategoryGraph,
    selector: &SelectorArgs,
    options: &NeighborOptions,
    display: &DisplayConfig,
) -> Result<()> {
    let opts = QueryOptions {
        return_as: options.return_as.parse()?,
        include_hidden: options.include_hidden,
        ..Default::default()
    };
    let children = graph.get_children(to_selector(selector)?, &opts)?;
    print_page_list(&children, display, options.json)
}

/// Expand a page's neighborhood breadth-first.
pub fn handle_traverse(
    graph: &CategoryGraph,
    selector: &SelectorArgs,
    options: &TraverseCmdOptions,
    display: &DisplayConfig,
) -> Result<()> {
    let page = graph.get_page(to_selector(selector)?, &QueryOptions::default())?;
    let direction: TraverseDirection = options.direction.parse()?;
    let opts = TraverseOptions {
        level: options.level,
        include_hidden: options.include_hidden,
        return_as: ReturnAs::Title,
    };

    if options.by_level {
        let levels = graph.traverse_by_level(&page, direction, &opts)?;
        for (i, level) in levels.iter().enumerate() {
            if !options.json {
                print!("level {}: ", i + 1);
            }
            print_page_list(level, display, options.json)?;
        }
        Ok(())
    } else {
        let flat = graph.traverse(&page, direction, &opts)?;
        print_page_list(&flat, display, options.json)
    }
}

/// Find a membership chain from an article up to a category.
pub fn handle_path(
    graph: &CategoryGraph,
    from: &str,
    to: &str,
    display: &DisplayConfig,
) -> Result<()> {
    let article = resolve_endpoint(graph, from, Namespace::Article)?;
    let target = resolve_endpoint(graph, to, Namespace::Category)?;

    let backlinks = graph.bfs_with_backlinks(&article, &target);
    let chain = extract_chain(&backlinks, &article, &target)?;

    let rendered = graph.format_page_ids(&chain, " -> ", display.replace_underscores)?;
    println!("{rendered}");
    println!("\n{} hop(s)", chain.len() - 1);
    Ok(())
}

/// Rank the members of a category by degree.
pub fn handle_rank(
    graph: &CategoryGraph,
    selector: &SelectorArgs,
    options: &RankCmdOptions,
    display: &DisplayConfig,
) -> Result<()> {
    let children = graph
        .get_children(to_selector(selector)?, &QueryOptions::ids())?
        .into_ids()
        .unwrap_or_default();

    let rank_opts = RankOptions {
        ascending: options.ascending,
        max_pages: options.max_pages,
        return_as: ReturnAs::Page,
        ..Default::default()
    };
    let ranked = graph
        .rank_page_ids(&children, &rank_opts)?
        .into_pages()
        .unwrap_or_default();

    if options.json {
        let rendered =
            serde_json::to_string_pretty(&ranked).map_err(|e| Error::parse(e.to_string()))?;
        println!("{rendered}");
        return Ok(());
    }

    if ranked.is_empty() {
        println!("(no results)");
        return Ok(());
    }
    let counts = graph.get_degree_counts(false, true);
    for (i, page) in ranked.iter().enumerate() {
        let title = if display.replace_underscores {
            page.title.replace('_', " ")
        } else {
            page.title.clone()
        };
        let degree = counts.get(&page.id).copied().unwrap_or(0);
        println!("  {}. {title} (degree: {degree})", i + 1);
    }
    Ok(())
}

/// Show graph statistics.
pub fn handle_stats(graph: &CategoryGraph, json: bool) -> Result<()> {
    let stats = compute_stats(graph);

    if json {
        let rendered =
            serde_json::to_string_pretty(&stats).map_err(|e| Error::parse(e.to_string()))?;
        println!("{rendered}");
        return Ok(());
    }

    println!("Graph Statistics");
    println!("================");
    println!("Pages:        {}", stats.page_count);
    println!("  Articles:   {}", stats.article_count);
    println!("  Categories: {}", stats.category_count);
    println!("  Orphans:    {}", stats.orphan_count);
    println!("Edges:        {}", stats.edge_count);
    println!("Hidden:       {}", stats.hidden_count);
    println!("Avg degree:   {:.2}", stats.avg_degree);
    println!("Max degree:   {}", stats.max_degree);

    if let Some(ref id) = stats.max_degree_id {
        if let Ok(page) = graph.get_page_from_id(id) {
            println!("Highest-degree page: {} ({id})", page.title);
        }
    }

    Ok(())
}

/// List the top-level categories.
pub fn handle_top_level(
    graph: &CategoryGraph,
    return_as: &str,
    json: bool,
    display: &DisplayConfig,
) -> Result<()> {
    let list = graph.get_top_level_categories(return_as.parse()?)?;
    print_page_list(&list, display, json)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use wikigraph_graph::GraphBuilder;

    fn display() -> DisplayConfig {
        DisplayConfig::default()
    }

    fn selector_title(title: &str) -> SelectorArgs {
        SelectorArgs {
            id: None,
            title: Some(title.to_string()),
            namespace: None,
        }
    }

    fn selector_id(id: &str) -> SelectorArgs {
        SelectorArgs {
            id: Some(id.to_string()),
            title: None,
            namespace: None,
        }
    }

    /// Montreal (article "1") under Montreal (category "2") under
    /// Canada ("3") under Countries ("4"); hidden category "9".
    fn test_graph() -> CategoryGraph {
        let mut builder = GraphBuilder::new();
        builder.add_page(Page::new("1", "Montreal", Namespace::Article));
        builder.add_page(Page::new("2", "Montreal", Namespace::Category));
        builder.add_page(Page::new("3", "Canada", Namespace::Category));
        builder.add_page(Page::new("4", "Countries", Namespace::Category));
        builder.add_page(Page::new("9", "Tracking", Namespace::Category));
        builder.add_edge("1", "2");
        builder.add_edge("1", "9");
        builder.add_edge("2", "3");
        builder.add_edge("3", "4");
        builder.hide("9");
        builder.build().unwrap()
    }

    // ------------------------------------------------------------------------
    // selector conversion
    // ------------------------------------------------------------------------

    #[test]
    fn test_to_selector_requires_one() {
        let both = SelectorArgs {
            id: Some("1".into()),
            title: Some("Montreal".into()),
            namespace: None,
        };
        assert!(to_selector(&both).is_err());

        let neither = SelectorArgs {
            id: None,
            title: None,
            namespace: None,
        };
        assert!(to_selector(&neither).is_err());
    }

    #[test]
    fn test_to_selector_invalid_namespace() {
        let args = SelectorArgs {
            id: None,
            title: Some("Montreal".into()),
            namespace: Some("template".into()),
        };
        assert!(to_selector(&args).is_err());
    }

    // ------------------------------------------------------------------------
    // lookup
    // ------------------------------------------------------------------------

    #[test]
    fn test_handle_lookup_by_id() {
        let graph = test_graph();
        let result = handle_lookup(&graph, &selector_id("1"), true, &display());
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_lookup_ambiguous_title() {
        let graph = test_graph();
        let result = handle_lookup(&graph, &selector_title("Montreal"), false, &display());
        assert!(matches!(result, Err(Error::AmbiguousTitle(_))));
    }

    #[test]
    fn test_handle_lookup_with_namespace() {
        let graph = test_graph();
        let args = SelectorArgs {
            id: None,
            title: Some("Montreal".into()),
            namespace: Some("category".into()),
        };
        let result = handle_lookup(&graph, &args, false, &display());
        assert!(result.is_ok());
    }

    // ------------------------------------------------------------------------
    // parents / children
    // ------------------------------------------------------------------------

    #[test]
    fn test_handle_parents() {
        let graph = test_graph();
        let options = NeighborOptions {
            include_hidden: false,
            return_as: "title".into(),
            json: false,
        };
        let result = handle_parents(&graph, &selector_id("1"), &options, &display());
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_parents_bad_return_shape() {
        let graph = test_graph();
        let options = NeighborOptions {
            include_hidden: false,
            return_as: "url".into(),
            json: false,
        };
        let result = handle_parents(&graph, &selector_id("1"), &options, &display());
        assert!(result.is_err());
    }

    #[test]
    fn test_handle_children_json() {
        let graph = test_graph();
        let options = NeighborOptions {
            include_hidden: false,
            return_as: "id".into(),
            json: true,
        };
        let result = handle_children(&graph, &selector_title("Canada"), &options, &display());
        assert!(result.is_ok());
    }

    // ------------------------------------------------------------------------
    // traverse
    // ------------------------------------------------------------------------

    #[test]
    fn test_handle_traverse_flat() {
        let graph = test_graph();
        let options = TraverseCmdOptions {
            direction: "parents".into(),
            level: 2,
            include_hidden: false,
            by_level: false,
            json: false,
        };
        let result = handle_traverse(&graph, &selector_id("1"), &options, &display());
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_traverse_by_level() {
        let graph = test_graph();
        let options = TraverseCmdOptions {
            direction: "children".into(),
            level: 3,
            include_hidden: false,
            by_level: true,
            json: false,
        };
        let result = handle_traverse(&graph, &selector_title("Countries"), &options, &display());
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_traverse_bad_direction() {
        let graph = test_graph();
        let options = TraverseCmdOptions {
            direction: "sideways".into(),
            level: 1,
            include_hidden: false,
            by_level: false,
            json: false,
        };
        let result = handle_traverse(&graph, &selector_id("1"), &options, &display());
        assert!(result.is_err());
    }

    #[test]
    fn test_handle_traverse_level_zero() {
        let graph = test_graph();
        let options = TraverseCmdOptions {
            direction: "parents".into(),
            level: 0,
            include_hidden: false,
            by_level: false,
            json: false,
        };
        let result = handle_traverse(&graph, &selector_id("1"), &options, &display());
        assert!(matches!(result, Err(Error::InvalidLevel(0))));
    }

    // ------------------------------------------------------------------------
    // path
    // ------------------------------------------------------------------------

    #[test]
    fn test_handle_path_by_title() {
        let graph = test_graph();
        let result = handle_path(&graph, "Montreal", "Countries", &display());
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_path_by_id_prefix() {
        let graph = test_graph();
        let result = handle_path(&graph, "id:1", "id:4", &display());
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_path_unreachable() {
        let graph = test_graph();
        // "9" is hidden, so the upward search never reaches it
        let result = handle_path(&graph, "Montreal", "id:9", &display());
        assert!(matches!(result, Err(Error::NoPathFound { .. })));
    }

    // ------------------------------------------------------------------------
    // rank
    // ------------------------------------------------------------------------

    #[test]
    fn test_handle_rank() {
        let graph = test_graph();
        let options = RankCmdOptions {
            ascending: false,
            max_pages: Some(5),
            json: false,
        };
        let result = handle_rank(&graph, &selector_title("Canada"), &options, &display());
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_rank_json() {
        let graph = test_graph();
        let options = RankCmdOptions {
            ascending: true,
            max_pages: None,
            json: true,
        };
        let result = handle_rank(&graph, &selector_title("Countries"), &options, &display());
        assert!(result.is_ok());
    }

    // ------------------------------------------------------------------------
    // stats / top-level
    // ------------------------------------------------------------------------

    #[test]
    fn test_handle_stats() {
        let graph = test_graph();
        assert!(handle_stats(&graph, false).is_ok());
        assert!(handle_stats(&graph, true).is_ok());
    }

    #[test]
    fn test_handle_top_level() {
        let graph = test_graph();
        let result = handle_top_level(&graph, "title", false, &display());
        assert!(result.is_ok());
    }

    // ------------------------------------------------------------------------
    // load_graph_or_error
    // ------------------------------------------------------------------------

    #[test]
    fn test_load_graph_or_error_missing() {
        let result = load_graph_or_error(Path::new("/nonexistent/graph.json"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_graph_or_error_success() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.json");
        std::fs::write(
            &path,
            r#"{
                "id_to_title": {"1": "Montreal", "2": "Montreal"},
                "id_to_namespace": {"1": 0, "2": 14},
                "title_to_id": {"article": {"Montreal": "1"}, "category": {"Montreal": "2"}},
                "children_to_parents": {"1": ["2"]},
                "parents_to_children": {"2": ["1"]}
            }"#,
        )
        .unwrap();

        let graph = load_graph_or_error(&path).unwrap();
        assert_eq!(graph.page_count(), 2);
    }
}
