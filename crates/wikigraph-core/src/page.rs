//! The `Page` value type and `Namespace` enum.
//!
//! A `Page` is one node in the category graph: a curid, a canonical
//! underscore-joined title, and a namespace (article or category). Pages are
//! immutable once constructed; the graph store builds them on demand from
//! its indexes.

use crate::error::{Error, Result};
use crate::title::standardize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire code for the article namespace in Wikipedia dumps.
pub const ARTICLE_CODE: u32 = 0;

/// Wire code for the category namespace in Wikipedia dumps.
pub const CATEGORY_CODE: u32 = 14;

// ============================================================================
// Namespace
// ============================================================================

/// The kind of a page: article or category.
///
/// Serialized graph documents carry the numeric Wikipedia namespace codes
/// (0 = article, 14 = category); the string forms `"article"`/`"category"`
/// are used everywhere else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    /// A regular article page (namespace code 0).
    Article,
    /// A category page (namespace code 14).
    Category,
}

impl Namespace {
    /// Convert a numeric Wikipedia namespace code.
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            ARTICLE_CODE => Ok(Self::Article),
            CATEGORY_CODE => Ok(Self::Category),
            other => Err(Error::InvalidNamespace(other.to_string())),
        }
    }

    /// The numeric Wikipedia namespace code.
    pub fn code(&self) -> u32 {
        match self {
            Self::Article => ARTICLE_CODE,
            Self::Category => CATEGORY_CODE,
        }
    }

    /// The lowercase string form (`"article"` / `"category"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Category => "category",
        }
    }
}

impl FromStr for Namespace {
    type Err = Error;

    /// Accepts the string forms and, like the original wire format, the
    /// numeric codes rendered as strings (`"0"` / `"14"`).
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "article" | "0" => Ok(Self::Article),
            "category" | "14" => Ok(Self::Category),
            other => Err(Error::InvalidNamespace(other.to_string())),
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Page
// ============================================================================

/// One node in the category graph.
///
/// # Examples
///
/// ```
/// use wikigraph_core::{Namespace, Page};
///
/// let page = Page::new("7954681", "Montreal", Namespace::Article);
/// assert!(page.is_article());
/// assert_eq!(page.get_url(false), "https://en.wikipedia.org/wiki/Montreal");
/// assert_eq!(page.get_url(true), "https://en.wikipedia.org/?curid=7954681");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page {
    /// The curid: a stable numeric page identifier, kept as text.
    pub id: String,
    /// The canonical underscore-joined title.
    pub title: String,
    /// The namespace of the page.
    pub namespace: Namespace,
}

impl Page {
    /// Create a page, standardizing the title.
    pub fn new(id: impl Into<String>, title: &str, namespace: Namespace) -> Self {
        Self {
            id: id.into(),
            title: standardize(title),
            namespace,
        }
    }

    /// Create a page from an already-standardized title.
    ///
    /// The graph store uses this for titles coming out of its own indexes,
    /// which are standardized at load time.
    pub fn from_canonical(
        id: impl Into<String>,
        title: impl Into<String>,
        namespace: Namespace,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            namespace,
        }
    }

    /// Whether the page is a category.
    pub fn is_category(&self) -> bool {
        self.namespace == Namespace::Category
    }

    /// Whether the page is an article.
    pub fn is_article(&self) -> bool {
        self.namespace == Namespace::Article
    }

    /// The Wikipedia URL of the page.
    ///
    /// With `use_curid` the URL is built from the stable curid; otherwise it
    /// is the human-readable title URL, with the `Category:` prefix for
    /// category pages. The title is used verbatim (already underscore-joined).
    pub fn get_url(&self, use_curid: bool) -> String {
        if use_curid {
            return format!("https://en.wikipedia.org/?curid={}", self.id);
        }
        match self.namespace {
            Namespace::Category => {
                format!("https://en.wikipedia.org/wiki/Category:{}", self.title)
            }
            Namespace::Article => format!("https://en.wikipedia.org/wiki/{}", self.title),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Page(id=\"{}\", title=\"{}\", namespace=\"{}\")",
            self.id, self.title, self.namespace
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
