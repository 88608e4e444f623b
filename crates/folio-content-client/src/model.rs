//! Normalized content records.
//!
//! These are the stable internal schema every consumer sees. Every optional
//! or missing part of the backend payload has already been resolved into the
//! defaults documented on each field; nothing here is mutated after
//! construction.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use folio_core::{AuthorId, ContentId, MediaId, TermId};

/// Publication status of a content entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Publish,
    Draft,
    Private,
    /// Forward-compatible catch-all for statuses this client does not model
    /// (`future`, `pending`, plugin-defined values).
    #[serde(other)]
    Unknown,
}

impl ContentStatus {
    /// Query-string value for the status filter. `Unknown` has none.
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            Self::Publish => Some("publish"),
            Self::Draft => Some("draft"),
            Self::Private => Some("private"),
            Self::Unknown => None,
        }
    }

    /// Interpret a raw status string; absent means published.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None | Some("publish") => Self::Publish,
            Some("draft") => Self::Draft,
            Some("private") => Self::Private,
            Some(_) => Self::Unknown,
        }
    }
}

/// Named renditions of a media asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSizes {
    pub thumbnail: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
    /// Always the full-resolution source URL.
    pub full: String,
}

impl MediaSizes {
    /// Look up a rendition by its size key.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "thumbnail" => self.thumbnail.as_deref(),
            "medium" => self.medium.as_deref(),
            "large" => self.large.as_deref(),
            "full" => Some(self.full.as_str()),
            _ => None,
        }
    }
}

/// A featured image. Only constructed when the payload carries a non-empty
/// source URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
    pub id: MediaId,
    pub url: String,
    pub alt: String,
    pub caption: String,
    pub title: String,
    pub sizes: MediaSizes,
    pub width: u32,
    pub height: u32,
}

/// Author of a content entity. `AuthorRef::default()` (id 0, empty strings)
/// stands in when the author embed is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRef {
    pub id: AuthorId,
    pub name: String,
    pub slug: String,
    /// 96px avatar URL.
    pub avatar: String,
    pub description: String,
    pub url: String,
}

impl AuthorRef {
    /// True for the placeholder record used when the embed was missing.
    pub fn is_placeholder(&self) -> bool {
        self.id.is_unset()
    }
}

/// A category or tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyTerm {
    pub id: TermId,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Number of published entities carrying this term.
    pub count: u64,
}

/// A normalized post, page, or custom-post-type record.
///
/// `A` is the content-type-specific custom-field payload. The client never
/// inspects it; it is deserialized into whatever the call site asks for and
/// falls back to `A::default()` when the payload does not fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntity<A = serde_json::Value> {
    pub id: ContentId,
    /// Rendered HTML, passed through unmodified.
    pub title: String,
    /// Rendered HTML, passed through unmodified.
    pub content: String,
    /// Rendered HTML, passed through unmodified.
    pub excerpt: String,
    pub slug: String,
    /// Backend timestamp string, unparsed.
    pub date: String,
    /// Backend timestamp string, unparsed.
    pub modified: String,
    pub status: ContentStatus,
    pub link: String,
    pub featured_image: Option<MediaAsset>,
    pub author: AuthorRef,
    pub categories: Vec<TaxonomyTerm>,
    pub tags: Vec<TaxonomyTerm>,
    pub comment_status: String,
    pub format: String,
    pub sticky: bool,
    pub acf: A,
    /// Opaque SEO metadata block.
    pub seo: Option<serde_json::Value>,
}

impl<A> ContentEntity<A> {
    /// Parse `date` on demand. The backend emits local time without an
    /// offset (`2024-03-05T10:15:00`); `None` when the string does not parse.
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        parse_backend_timestamp(&self.date)
    }

    /// Parse `modified` on demand; see [`ContentEntity::published_at`].
    pub fn modified_at(&self) -> Option<NaiveDateTime> {
        parse_backend_timestamp(&self.modified)
    }

    /// Ids of all taxonomy terms, categories first.
    pub fn term_ids(&self) -> impl Iterator<Item = TermId> + '_ {
        self.categories.iter().chain(self.tags.iter()).map(|t| t.id)
    }

    /// Replace the custom-field payload, keeping everything else.
    pub fn map_acf<B>(self, f: impl FnOnce(A) -> B) -> ContentEntity<B> {
        ContentEntity {
            id: self.id,
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
            slug: self.slug,
            date: self.date,
            modified: self.modified,
            status: self.status,
            link: self.link,
            featured_image: self.featured_image,
            author: self.author,
            categories: self.categories,
            tags: self.tags,
            comment_status: self.comment_status,
            format: self.format,
            sticky: self.sticky,
            acf: f(self.acf),
            seo: self.seo,
        }
    }
}

fn parse_backend_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_utc())
        })
}

/// One page of a listing.
///
/// `has_more` is `page < total_pages` as reported by the backend's
/// pagination headers; it is not derived from `items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub total_pages: u32,
    pub page: u32,
    pub has_more: bool,
}

impl<T> PageResult<T> {
    /// The degraded result: no items, zero counts, no further pages.
    pub fn empty(page: u32) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            total_pages: 0,
            page,
            has_more: false,
        }
    }

    /// Convert every item, keeping the pagination counters.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            total_pages: self.total_pages,
            page: self.page,
            has_more: self.has_more,
        }
    }
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self::empty(1)
    }
}
