//! Raw payload → normalized record conversion.
//!
//! Every optional-chaining decision about the backend payload is made here,
//! once:
//!
//! | Missing or malformed | Result |
//! |----------------------|--------|
//! | entity `id` or `slug` | entity dropped |
//! | featured-media embed, or one without `source_url` | `featured_image: None` |
//! | author embed | `AuthorRef::default()` |
//! | term embeds | empty `categories` / `tags` |
//! | custom fields not matching `A` | `A::default()` |
//! | `status` / `comment_status` / `format` / `sticky` | `publish` / `closed` / `standard` / `false` |

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use folio_core::{AuthorId, ContentId, MediaId, TermId};

use crate::model::{AuthorRef, ContentEntity, ContentStatus, MediaAsset, MediaSizes, TaxonomyTerm};
use crate::raw::{rendered, RawAuthor, RawEntity, RawMedia, RawTerm};

/// Normalize one entity payload. `None` when the payload is not an object
/// or lacks a positive `id` or a non-empty `slug`.
pub fn entity<A>(value: Value) -> Option<ContentEntity<A>>
where
    A: DeserializeOwned + Default,
{
    let mut raw: RawEntity = match serde_json::from_value(value) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(error = %e, "content entity payload has unexpected shape, dropped");
            return None;
        }
    };

    let id = match raw.id.map(ContentId::from_signed) {
        Some(Ok(id)) => id,
        _ => {
            tracing::debug!(id = ?raw.id, "content entity without a valid id dropped");
            return None;
        }
    };
    let slug = match raw.slug.take().filter(|s| !s.is_empty()) {
        Some(slug) => slug,
        None => {
            tracing::debug!(%id, "content entity without a slug dropped");
            return None;
        }
    };

    let featured_image = raw.embed_first("wp:featuredmedia").and_then(media);
    let author = raw.embed_first("author").map(author).unwrap_or_default();
    let categories = raw.embedded_terms(0).iter().filter_map(term).collect();
    let tags = raw.embedded_terms(1).iter().filter_map(term).collect();
    let acf = custom_fields(std::mem::take(&mut raw.acf), id);

    Some(ContentEntity {
        id,
        title: rendered(&raw.title),
        content: rendered(&raw.content),
        excerpt: rendered(&raw.excerpt),
        slug,
        date: raw.date.unwrap_or_default(),
        modified: raw.modified.unwrap_or_default(),
        status: ContentStatus::from_raw(raw.status.as_deref()),
        link: raw.link.unwrap_or_default(),
        featured_image,
        author,
        categories,
        tags,
        comment_status: raw.comment_status.unwrap_or_else(|| "closed".to_string()),
        format: raw.format.unwrap_or_else(|| "standard".to_string()),
        sticky: raw.sticky.unwrap_or(false),
        acf,
        seo: raw.yoast_head_json,
    })
}

fn custom_fields<A>(value: Value, id: ContentId) -> A
where
    A: DeserializeOwned + Default,
{
    if value.is_null() {
        return A::default();
    }
    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::debug!(%id, error = %e, "custom fields do not match requested type, using default");
        A::default()
    })
}

/// Normalize a media payload. `None` without a non-empty `source_url`, which
/// is also how the backend's embedded error objects (`rest_forbidden`, ...)
/// are recognised.
pub fn media(value: &Value) -> Option<MediaAsset> {
    let raw = RawMedia::deserialize_lenient(value)?;
    let url = raw.source_url.filter(|u| !u.is_empty())?;
    let details = &raw.media_details;
    let size = |key: &str| {
        details
            .get("sizes")
            .and_then(|s| s.get(key))
            .and_then(|s| s.get("source_url"))
            .and_then(Value::as_str)
            .map(str::to_string)
    };
    let dimension = |key: &str| {
        details
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0)
    };

    Some(MediaAsset {
        id: raw
            .id
            .and_then(|id| MediaId::from_signed(id).ok())
            .unwrap_or_default(),
        alt: raw.alt_text.unwrap_or_default(),
        caption: rendered(&raw.caption),
        title: rendered(&raw.title),
        sizes: MediaSizes {
            thumbnail: size("thumbnail"),
            medium: size("medium"),
            large: size("large"),
            full: url.clone(),
        },
        width: dimension("width"),
        height: dimension("height"),
        url,
    })
}

/// Normalize an author payload; malformed payloads yield the placeholder.
pub fn author(value: &Value) -> AuthorRef {
    let Some(raw) = RawAuthor::deserialize_lenient(value) else {
        return AuthorRef::default();
    };
    AuthorRef {
        id: raw
            .id
            .and_then(|id| AuthorId::from_signed(id).ok())
            .unwrap_or_default(),
        name: raw.name.unwrap_or_default(),
        slug: raw.slug.unwrap_or_default(),
        avatar: raw.avatar_urls.get("96").cloned().unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        url: raw.url.unwrap_or_default(),
    }
}

/// Normalize a taxonomy term. `None` without a positive id.
pub fn term(value: &Value) -> Option<TaxonomyTerm> {
    let raw = RawTerm::deserialize_lenient(value)?;
    let id = TermId::from_signed(raw.id?).ok()?;
    Some(TaxonomyTerm {
        id,
        name: raw.name.unwrap_or_default(),
        slug: raw.slug.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        count: raw.count.unwrap_or(0),
    })
}

trait DeserializeLenient: Sized {
    fn deserialize_lenient(value: &Value) -> Option<Self>;
}

impl<T: DeserializeOwned> DeserializeLenient for T {
    fn deserialize_lenient(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        T::deserialize(value).ok()
    }
}
