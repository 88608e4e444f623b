//! Listing options and their translation into query parameters.

use serde::{Deserialize, Serialize};

use folio_core::{AuthorId, ContentId};

use crate::model::ContentStatus;

/// Largest page size the backend accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Sort field for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    Date,
    Title,
    Slug,
    Modified,
    MenuOrder,
}

impl OrderBy {
    /// Query-string value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Title => "title",
            Self::Slug => "slug",
            Self::Modified => "modified",
            Self::MenuOrder => "menu_order",
        }
    }
}

impl std::str::FromStr for OrderBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "title" => Ok(Self::Title),
            "slug" => Ok(Self::Slug),
            "modified" => Ok(Self::Modified),
            "menu_order" => Ok(Self::MenuOrder),
            other => Err(format!("unknown sort field: {other}")),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Query-string value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// Taxonomy collections usable as listing filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Taxonomy {
    Categories,
    Tags,
}

impl Taxonomy {
    /// Collection path, which is also the filter parameter name on listings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Tags => "tags",
        }
    }
}

impl std::str::FromStr for Taxonomy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "categories" | "category" => Ok(Self::Categories),
            "tags" | "tag" => Ok(Self::Tags),
            other => Err(format!("unknown taxonomy: {other}")),
        }
    }
}

/// Options for [`ContentClient::list_entities`](crate::ContentClient::list_entities).
///
/// Taxonomy filters are slugs; the client resolves them to ids before
/// issuing the listing. Slugs with no match are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// 1-based page index (default 1; `0` is treated as 1).
    pub page: Option<u32>,
    /// Page size, clamped to `1..=100` (default: backend default).
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub author: Option<AuthorId>,
    /// Category slugs.
    pub categories: Vec<String>,
    /// Tag slugs.
    pub tags: Vec<String>,
    pub order_by: Option<OrderBy>,
    pub order: Option<SortOrder>,
    /// Status filter (default `publish`).
    pub status: Option<ContentStatus>,
    pub sticky: Option<bool>,
    /// Exclude sticky entities; ignored when `sticky` is set.
    pub exclude_sticky: bool,
    /// Entity ids to leave out.
    pub exclude: Vec<ContentId>,
}

impl ListOptions {
    /// Effective page index.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Effective page size, if one was requested.
    pub fn per_page(&self) -> Option<u32> {
        self.per_page.map(|n| n.clamp(1, MAX_PER_PAGE))
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn with_author(mut self, author: AuthorId) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_category(mut self, slug: impl Into<String>) -> Self {
        self.categories.push(slug.into());
        self
    }

    pub fn with_tag(mut self, slug: impl Into<String>) -> Self {
        self.tags.push(slug.into());
        self
    }

    pub fn with_order(mut self, order_by: OrderBy, order: SortOrder) -> Self {
        self.order_by = Some(order_by);
        self.order = Some(order);
        self
    }

    /// Filter by status. [`ContentStatus::Unknown`] is not a filter and
    /// leaves the default, published entities only.
    pub fn with_status(mut self, status: ContentStatus) -> Self {
        self.status = status.query_value().map(|_| status);
        self
    }

    /// Query parameters for everything except the taxonomy filters, which
    /// need resolving first.
    pub(crate) fn base_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("_embed", "true".to_string()), ("page", self.page().to_string())];
        if let Some(n) = self.per_page() {
            params.push(("per_page", n.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(("search", search.to_string()));
        }
        if let Some(author) = self.author {
            params.push(("author", author.to_string()));
        }
        if let Some(order_by) = self.order_by {
            params.push(("orderby", order_by.as_str().to_string()));
        }
        if let Some(order) = self.order {
            params.push(("order", order.as_str().to_string()));
        }
        let status = self
            .status
            .and_then(ContentStatus::query_value)
            .unwrap_or("publish");
        params.push(("status", status.to_string()));
        match (self.sticky, self.exclude_sticky) {
            (Some(sticky), _) => params.push(("sticky", sticky.to_string())),
            (None, true) => params.push(("sticky", "false".to_string())),
            (None, false) => {}
        }
        if !self.exclude.is_empty() {
            params.push(("exclude", join_ids(&self.exclude)));
        }
        params
    }
}

/// Comma-join ids for list-valued query parameters.
pub(crate) fn join_ids<T: std::fmt::Display>(ids: &[T]) -> String {
    ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}
