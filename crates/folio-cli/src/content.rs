//! # Content Subcommands
//!
//! `folio list`, `folio get`, `folio related` and `folio terms`. Each handler
//! returns the JSON document to print; `main` owns stdout.

use anyhow::Result;
use clap::{ArgGroup, Args};
use serde_json::Value;

use folio_content_client::{
    AuthorId, ContentClient, ContentEntity, ContentId, ContentStatus, ContentType, ListOptions,
    OrderBy, SortOrder, Taxonomy,
};

/// Arguments for `folio list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Collection key (e.g. "posts", "project", "case-study").
    #[arg(value_name = "TYPE")]
    pub content_type: ContentType,
    /// 1-based page index.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Page size (1-100).
    #[arg(long)]
    pub per_page: Option<u32>,
    /// Free-text search.
    #[arg(long)]
    pub search: Option<String>,
    /// Author id filter.
    #[arg(long)]
    pub author: Option<u64>,
    /// Category slug filter. Repeatable.
    #[arg(long = "category", value_name = "SLUG")]
    pub categories: Vec<String>,
    /// Tag slug filter. Repeatable.
    #[arg(long = "tag", value_name = "SLUG")]
    pub tags: Vec<String>,
    /// Sort field: date, title, slug, modified, menu_order.
    #[arg(long)]
    pub order_by: Option<OrderBy>,
    /// Sort direction: asc, desc.
    #[arg(long)]
    pub order: Option<SortOrder>,
    /// Status filter: publish, draft, private.
    #[arg(long, value_parser = parse_status)]
    pub status: Option<ContentStatus>,
    /// Only sticky (true) or only non-sticky (false) entities.
    #[arg(long)]
    pub sticky: Option<bool>,
}

impl ListArgs {
    pub fn to_options(&self) -> ListOptions {
        ListOptions {
            page: Some(self.page),
            per_page: self.per_page,
            search: self.search.clone(),
            author: self.author.map(AuthorId::new),
            categories: self.categories.clone(),
            tags: self.tags.clone(),
            order_by: self.order_by,
            order: self.order,
            status: self.status,
            sticky: self.sticky,
            ..ListOptions::default()
        }
    }
}

/// Arguments for `folio get`.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("key").required(true).args(["slug", "id"])))]
pub struct GetArgs {
    #[arg(value_name = "TYPE")]
    pub content_type: ContentType,
    /// Look up by slug.
    #[arg(long)]
    pub slug: Option<String>,
    /// Look up by id.
    #[arg(long)]
    pub id: Option<u64>,
}

/// Arguments for `folio related`.
#[derive(Args, Debug)]
pub struct RelatedArgs {
    #[arg(value_name = "TYPE")]
    pub content_type: ContentType,
    /// Id of the source entity.
    pub id: u64,
    /// Maximum number of related entities.
    #[arg(long, default_value_t = 5)]
    pub limit: u32,
}

/// Arguments for `folio terms`.
#[derive(Args, Debug)]
pub struct TermsArgs {
    /// categories or tags.
    pub taxonomy: Taxonomy,
}

/// `folio list`: one page of a collection.
pub async fn run_list(client: &ContentClient, args: &ListArgs) -> Result<Value> {
    let page = client
        .list_entities::<Value>(&args.content_type, &args.to_options())
        .await;
    Ok(serde_json::to_value(page)?)
}

/// `folio get`: `None` when the entity does not exist.
///
/// A slug lookup that fails reads as absent; an id lookup that fails is an
/// error.
pub async fn run_get(client: &ContentClient, args: &GetArgs) -> Result<Option<Value>> {
    let entity: Option<ContentEntity> = match (&args.slug, args.id) {
        (Some(slug), _) => client.get_entity_by_slug(&args.content_type, slug).await,
        (None, Some(id)) => {
            let id = ContentId::new(id);
            client.get_entity_by_id(&args.content_type, id).await?
        }
        (None, None) => anyhow::bail!("either --slug or --id is required"),
    };
    entity.map(serde_json::to_value).transpose().map_err(Into::into)
}

/// `folio related`.
pub async fn run_related(client: &ContentClient, args: &RelatedArgs) -> Result<Value> {
    let related: Vec<ContentEntity> = client
        .get_related_entities(&args.content_type, ContentId::new(args.id), args.limit)
        .await?;
    Ok(serde_json::to_value(related)?)
}

/// `folio terms`.
pub async fn run_terms(client: &ContentClient, args: &TermsArgs) -> Result<Value> {
    Ok(serde_json::to_value(client.list_terms(args.taxonomy).await)?)
}

fn parse_status(raw: &str) -> Result<ContentStatus, String> {
    match ContentStatus::from_raw(Some(raw)) {
        ContentStatus::Unknown => Err(format!("unknown status: {raw} (expected publish, draft or private)")),
        status => Ok(status),
    }
}
