//! Per-content-kind accessors for the site's pages.
//!
//! [`ContentFacade`] is mapping only: each accessor picks a collection, a
//! custom-field type and a default ordering, then calls the generic client.
//! It inherits the client's degrade-to-empty behavior everywhere.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use folio_core::{ContentId, ContentType};
use folio_menu::{MenuNode, MenuTreeBuilder};

use crate::client::ContentClient;
use crate::fields::{
    CaseStudyFields, ExperienceFields, PersonalInfoFields, ProjectFields, ReviewFields,
    ServiceFields,
};
use crate::model::{ContentEntity, ContentStatus, MediaAsset, PageResult};
use crate::query::ListOptions;

/// Collection keys the facade reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacadeCollections {
    pub posts: ContentType,
    pub case_studies: ContentType,
    pub projects: ContentType,
    pub services: ContentType,
    pub experience: ContentType,
    pub reviews: ContentType,
    pub expertise: ContentType,
    pub personal_info: ContentType,
}

impl Default for FacadeCollections {
    fn default() -> Self {
        Self {
            posts: ContentType::POSTS,
            case_studies: ContentType::from_static("case-study"),
            projects: ContentType::from_static("project"),
            services: ContentType::from_static("service"),
            experience: ContentType::from_static("experience"),
            reviews: ContentType::from_static("review"),
            expertise: ContentType::from_static("expertise"),
            personal_info: ContentType::from_static("personal-info"),
        }
    }
}

/// Listing card for a showcase collection: the entity's identity and image
/// plus its custom fields flattened alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Showcase<F> {
    pub id: ContentId,
    pub title: String,
    pub slug: String,
    pub featured_image: Option<MediaAsset>,
    #[serde(flatten)]
    pub fields: F,
}

impl<F> From<ContentEntity<F>> for Showcase<F> {
    fn from(entity: ContentEntity<F>) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            featured_image: entity.featured_image,
            fields: entity.acf,
        }
    }
}

pub type CaseStudySummary = Showcase<CaseStudyFields>;
pub type ProjectSummary = Showcase<ProjectFields>;

/// Title and blurb of one area of expertise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expertise {
    pub title: String,
    /// Rendered HTML of the entity content.
    pub short_description: String,
}

/// Named accessors over a [`ContentClient`].
#[derive(Debug, Clone)]
pub struct ContentFacade {
    client: ContentClient,
    collections: FacadeCollections,
    menus: MenuTreeBuilder,
}

impl ContentFacade {
    pub fn new(client: ContentClient) -> Self {
        Self::with_collections(client, FacadeCollections::default())
    }

    pub fn with_collections(client: ContentClient, collections: FacadeCollections) -> Self {
        Self {
            client,
            collections,
            menus: MenuTreeBuilder::new(),
        }
    }

    /// Use a custom base for menu link normalization.
    pub fn with_menu_builder(mut self, menus: MenuTreeBuilder) -> Self {
        self.menus = menus;
        self
    }

    pub fn client(&self) -> &ContentClient {
        &self.client
    }

    pub async fn blog_posts(&self, limit: u32, page: u32) -> PageResult<ContentEntity> {
        self.client
            .list_entities(&self.collections.posts, &page_options(limit, page))
            .await
    }

    pub async fn post_by_slug(&self, slug: &str) -> Option<ContentEntity> {
        self.client.get_entity_by_slug(&self.collections.posts, slug).await
    }

    /// Related posts; empty on any failure, including an unreachable backend.
    pub async fn related_posts(&self, id: ContentId, limit: u32) -> Vec<ContentEntity> {
        match self
            .client
            .get_related_entities(&self.collections.posts, id, limit)
            .await
        {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!(%id, error = %e, "related posts unavailable");
                Vec::new()
            }
        }
    }

    pub async fn case_studies(&self, limit: u32, page: u32) -> PageResult<CaseStudySummary> {
        self.client
            .list_entities::<CaseStudyFields>(&self.collections.case_studies, &page_options(limit, page))
            .await
            .map(Showcase::from)
    }

    pub async fn case_study_by_slug(&self, slug: &str) -> Option<ContentEntity<CaseStudyFields>> {
        self.client
            .get_entity_by_slug(&self.collections.case_studies, slug)
            .await
    }

    pub async fn projects(&self, limit: u32, page: u32) -> PageResult<ProjectSummary> {
        self.client
            .list_entities::<ProjectFields>(&self.collections.projects, &page_options(limit, page))
            .await
            .map(Showcase::from)
    }

    pub async fn project_by_slug(&self, slug: &str) -> Option<ContentEntity<ProjectFields>> {
        self.client.get_entity_by_slug(&self.collections.projects, slug).await
    }

    pub async fn services(&self, limit: u32, page: u32) -> PageResult<ContentEntity<ServiceFields>> {
        self.client
            .list_entities(&self.collections.services, &page_options(limit, page))
            .await
    }

    pub async fn service_by_slug(&self, slug: &str) -> Option<ContentEntity<ServiceFields>> {
        self.client.get_entity_by_slug(&self.collections.services, slug).await
    }

    /// Work history entries, backend default order.
    pub async fn experience(&self) -> Vec<ExperienceFields> {
        self.custom_fields(&self.collections.experience).await
    }

    pub async fn reviews(&self) -> Vec<ReviewFields> {
        self.custom_fields(&self.collections.reviews).await
    }

    pub async fn expertise(&self, limit: u32) -> Vec<Expertise> {
        let options = published().with_per_page(limit);
        self.client
            .list_entities::<Value>(&self.collections.expertise, &options)
            .await
            .items
            .into_iter()
            .map(|e| Expertise {
                title: e.title,
                short_description: e.content,
            })
            .collect()
    }

    /// Site owner profile from the first personal-info entity; `None` when
    /// the collection is empty or unreachable.
    pub async fn personal_info(&self) -> Option<PersonalInfoFields> {
        self.client
            .list_entities::<PersonalInfoFields>(&self.collections.personal_info, &published())
            .await
            .items
            .into_iter()
            .next()
            .map(|e| e.acf)
    }

    /// Fetch one navigation menu and build its tree. Empty on failure.
    pub async fn menu(&self, menu_id: u64) -> Vec<MenuNode> {
        let payload = self.client.fetch_menu(menu_id).await;
        self.menus.build(&payload)
    }

    async fn custom_fields<F>(&self, content_type: &ContentType) -> Vec<F>
    where
        F: serde::de::DeserializeOwned + Default,
    {
        self.client
            .list_entities::<F>(content_type, &published())
            .await
            .items
            .into_iter()
            .map(|e| e.acf)
            .collect()
    }
}

fn published() -> ListOptions {
    ListOptions::default().with_status(ContentStatus::Publish)
}

fn page_options(limit: u32, page: u32) -> ListOptions {
    published().with_per_page(limit).with_page(page)
}
