//! Content entity listing and lookup.
//!
//! ## Routes
//!
//! | Method | Path (relative to the REST root) | Operation |
//! |--------|----------------------------------|-----------|
//! | GET    | `/{type}?_embed=true&page=..`    | [`ContentClient::list_entities`] |
//! | GET    | `/{type}?slug={slug}&_embed=true` | [`ContentClient::get_entity_by_slug`] |
//! | GET    | `/{type}/{id}?_embed=true`       | [`ContentClient::get_entity_by_id`] |
//!
//! Listings and slug lookups degrade to empty results on any failure and log
//! a warning. Id lookups report "not found" as `Ok(None)` and everything else
//! as an error.

use serde::de::DeserializeOwned;
use serde_json::Value;

use folio_core::{AuthorId, ContentId, ContentType, TermId};

use crate::client::{decode, ensure_success, header_number, ContentClient, TOTAL_HEADER, TOTAL_PAGES_HEADER};
use crate::error::ContentApiError;
use crate::model::{ContentEntity, PageResult};
use crate::normalize;
use crate::query::{join_ids, ListOptions, OrderBy, SortOrder, Taxonomy, MAX_PER_PAGE};

impl ContentClient {
    /// List one page of a collection.
    ///
    /// Taxonomy slugs in `options` are resolved to ids first; slugs with no
    /// match are dropped, and a dimension with no resolved ids is not
    /// filtered at all. On transport or status failure the result is
    /// [`PageResult::empty`].
    pub async fn list_entities<A>(
        &self,
        content_type: &ContentType,
        options: &ListOptions,
    ) -> PageResult<ContentEntity<A>>
    where
        A: DeserializeOwned + Default,
    {
        let mut extra = Vec::new();
        for (taxonomy, slugs) in [
            (Taxonomy::Categories, &options.categories),
            (Taxonomy::Tags, &options.tags),
        ] {
            let ids = self.resolve_term_ids(taxonomy, slugs).await;
            if !ids.is_empty() {
                extra.push((taxonomy.as_str(), join_ids(&ids)));
            }
        }
        self.list_with(content_type, options, extra).await
    }

    /// Listing with extra raw query parameters, degrading on failure.
    async fn list_with<A>(
        &self,
        content_type: &ContentType,
        options: &ListOptions,
        extra: Vec<(&'static str, String)>,
    ) -> PageResult<ContentEntity<A>>
    where
        A: DeserializeOwned + Default,
    {
        let page = options.page();
        match self.try_list(content_type, options, extra).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(
                    content_type = %content_type,
                    page,
                    status = ?e.status(),
                    transport = e.is_transport(),
                    error = %e,
                    "content listing failed, returning empty page"
                );
                PageResult::empty(page)
            }
        }
    }

    async fn try_list<A>(
        &self,
        content_type: &ContentType,
        options: &ListOptions,
        extra: Vec<(&'static str, String)>,
    ) -> Result<PageResult<ContentEntity<A>>, ContentApiError>
    where
        A: DeserializeOwned + Default,
    {
        let endpoint = format!("GET /{content_type}");
        let url = self.api_url(content_type.as_str(), &endpoint)?;
        let mut query = options.base_params();
        query.extend(extra);

        let resp = self.get_ok(&endpoint, &url, &query).await?;
        let total_count: u64 = header_number(resp.headers(), TOTAL_HEADER);
        let total_pages: u32 = header_number(resp.headers(), TOTAL_PAGES_HEADER);
        let raw: Vec<Value> = decode(&endpoint, resp).await?;

        let mut items: Vec<ContentEntity<A>> =
            raw.into_iter().filter_map(normalize::entity).collect();
        if let Some(per_page) = options.per_page() {
            items.truncate(per_page as usize);
        }

        let page = options.page();
        Ok(PageResult {
            items,
            total_count,
            total_pages,
            page,
            has_more: page < total_pages,
        })
    }

    /// Look up one entity by slug.
    ///
    /// Returns the first match in backend order. `None` when nothing matches
    /// and also when the request fails.
    pub async fn get_entity_by_slug<A>(
        &self,
        content_type: &ContentType,
        slug: &str,
    ) -> Option<ContentEntity<A>>
    where
        A: DeserializeOwned + Default,
    {
        let endpoint = format!("GET /{content_type}?slug");
        let result: Result<Vec<Value>, ContentApiError> = async {
            let url = self.api_url(content_type.as_str(), &endpoint)?;
            let query = [("slug", slug.to_string()), ("_embed", "true".to_string())];
            self.get_json(&endpoint, &url, &query).await
        }
        .await;

        match result {
            Ok(raw) => raw.into_iter().find_map(normalize::entity),
            Err(e) => {
                tracing::warn!(
                    content_type = %content_type,
                    slug,
                    error = %e,
                    "slug lookup failed, treating as absent"
                );
                None
            }
        }
    }

    /// Look up one entity by id.
    ///
    /// `Ok(None)` on a 404 (or a payload that does not normalize). Transport
    /// failures and any other status are errors, so callers can tell a
    /// missing entity from an unreachable backend.
    pub async fn get_entity_by_id<A>(
        &self,
        content_type: &ContentType,
        id: ContentId,
    ) -> Result<Option<ContentEntity<A>>, ContentApiError>
    where
        A: DeserializeOwned + Default,
    {
        let endpoint = format!("GET /{content_type}/{id}");
        let url = self.api_url(&format!("{content_type}/{id}"), &endpoint)?;
        let query = [("_embed", "true".to_string())];

        let resp = self.send(&endpoint, &url, &query).await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = ensure_success(&endpoint, resp).await?;
        let raw: Value = decode(&endpoint, resp).await?;
        Ok(normalize::entity(raw))
    }

    /// Entities of the same collection sharing at least one category or tag
    /// with `id`, excluding `id` itself, at most `limit` of them.
    ///
    /// Empty when the source is not found, carries no terms, or `limit` is 0.
    /// A failure to fetch the source is returned as an error; a failure of
    /// the follow-up listing degrades to empty.
    pub async fn get_related_entities<A>(
        &self,
        content_type: &ContentType,
        id: ContentId,
        limit: u32,
    ) -> Result<Vec<ContentEntity<A>>, ContentApiError>
    where
        A: DeserializeOwned + Default,
    {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let Some(source) = self.get_entity_by_id::<Value>(content_type, id).await? else {
            return Ok(Vec::new());
        };

        let category_ids: Vec<TermId> = source.categories.iter().map(|t| t.id).collect();
        let tag_ids: Vec<TermId> = source.tags.iter().map(|t| t.id).collect();
        if category_ids.is_empty() && tag_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut extra = Vec::new();
        if !category_ids.is_empty() {
            extra.push((Taxonomy::Categories.as_str(), join_ids(&category_ids)));
        }
        if !tag_ids.is_empty() {
            extra.push((Taxonomy::Tags.as_str(), join_ids(&tag_ids)));
        }
        if !category_ids.is_empty() && !tag_ids.is_empty() {
            extra.push(("tax_relation", "OR".to_string()));
        }

        let limit = limit.min(MAX_PER_PAGE);
        let options = ListOptions {
            per_page: Some(limit),
            exclude: vec![id],
            ..ListOptions::default()
        };
        let mut items = self.list_with::<A>(content_type, &options, extra).await.items;
        items.retain(|e| e.id != id);
        items.truncate(limit as usize);
        Ok(items)
    }

    /// Free-text search within a collection.
    pub async fn search<A>(
        &self,
        content_type: &ContentType,
        query: &str,
        options: ListOptions,
    ) -> PageResult<ContentEntity<A>>
    where
        A: DeserializeOwned + Default,
    {
        self.list_entities(content_type, &options.with_search(query)).await
    }

    /// Entities filed under one category slug.
    pub async fn list_by_category<A>(
        &self,
        content_type: &ContentType,
        slug: &str,
        options: ListOptions,
    ) -> PageResult<ContentEntity<A>>
    where
        A: DeserializeOwned + Default,
    {
        let options = ListOptions {
            categories: vec![slug.to_string()],
            ..options
        };
        self.list_entities(content_type, &options).await
    }

    /// Entities carrying one tag slug.
    pub async fn list_by_tag<A>(
        &self,
        content_type: &ContentType,
        slug: &str,
        options: ListOptions,
    ) -> PageResult<ContentEntity<A>>
    where
        A: DeserializeOwned + Default,
    {
        let options = ListOptions {
            tags: vec![slug.to_string()],
            ..options
        };
        self.list_entities(content_type, &options).await
    }

    /// Entities written by one author.
    pub async fn list_by_author<A>(
        &self,
        content_type: &ContentType,
        author: AuthorId,
        options: ListOptions,
    ) -> PageResult<ContentEntity<A>>
    where
        A: DeserializeOwned + Default,
    {
        self.list_entities(content_type, &options.with_author(author)).await
    }

    /// The `limit` newest entities.
    pub async fn recent<A>(&self, content_type: &ContentType, limit: u32) -> Vec<ContentEntity<A>>
    where
        A: DeserializeOwned + Default,
    {
        let options = ListOptions::default()
            .with_per_page(limit)
            .with_order(OrderBy::Date, SortOrder::Desc);
        self.list_entities(content_type, &options).await.items
    }

    /// The `limit` most-commented entities.
    pub async fn popular<A>(&self, content_type: &ContentType, limit: u32) -> Vec<ContentEntity<A>>
    where
        A: DeserializeOwned + Default,
    {
        let options = ListOptions::default().with_per_page(limit);
        let extra = vec![
            ("orderby", "comment_count".to_string()),
            ("order", SortOrder::Desc.as_str().to_string()),
        ];
        self.list_with(content_type, &options, extra).await.items
    }
}
