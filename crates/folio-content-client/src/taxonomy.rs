//! Category and tag lookups.

use serde_json::Value;

use folio_core::TermId;

use crate::client::ContentClient;
use crate::error::ContentApiError;
use crate::model::TaxonomyTerm;
use crate::normalize;
use crate::query::{Taxonomy, MAX_PER_PAGE};

impl ContentClient {
    /// All categories (first 100). Empty on failure.
    pub async fn list_categories(&self) -> Vec<TaxonomyTerm> {
        self.list_terms(Taxonomy::Categories).await
    }

    /// All tags (first 100). Empty on failure.
    pub async fn list_tags(&self) -> Vec<TaxonomyTerm> {
        self.list_terms(Taxonomy::Tags).await
    }

    /// Terms of one taxonomy. Empty on failure.
    pub async fn list_terms(&self, taxonomy: Taxonomy) -> Vec<TaxonomyTerm> {
        let query = [("per_page", MAX_PER_PAGE.to_string())];
        match self.fetch_terms(taxonomy, &query).await {
            Ok(terms) => terms,
            Err(e) => {
                tracing::warn!(taxonomy = taxonomy.as_str(), error = %e, "term listing failed");
                Vec::new()
            }
        }
    }

    /// Resolve taxonomy slugs to term ids, in backend order.
    ///
    /// Slugs with no matching term are left out. An empty `slugs` issues no
    /// request. A failed lookup resolves nothing, which callers treat as "no
    /// filter on this taxonomy".
    pub async fn resolve_term_ids(&self, taxonomy: Taxonomy, slugs: &[String]) -> Vec<TermId> {
        let wanted: Vec<&str> = slugs
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if wanted.is_empty() {
            return Vec::new();
        }

        let query = [
            ("slug", wanted.join(",")),
            ("per_page", MAX_PER_PAGE.to_string()),
        ];
        match self.fetch_terms(taxonomy, &query).await {
            Ok(terms) => terms
                .into_iter()
                .filter(|t| wanted.contains(&t.slug.as_str()))
                .map(|t| t.id)
                .collect(),
            Err(e) => {
                tracing::warn!(
                    taxonomy = taxonomy.as_str(),
                    slugs = %wanted.join(","),
                    error = %e,
                    "term slug resolution failed, filter ignored"
                );
                Vec::new()
            }
        }
    }

    async fn fetch_terms(
        &self,
        taxonomy: Taxonomy,
        query: &[(&str, String)],
    ) -> Result<Vec<TaxonomyTerm>, ContentApiError> {
        let endpoint = format!("GET /{}", taxonomy.as_str());
        let url = self.api_url(taxonomy.as_str(), &endpoint)?;
        let raw: Vec<Value> = self.get_json(&endpoint, &url, query).await?;
        Ok(raw.iter().filter_map(normalize::term).collect())
    }
}
