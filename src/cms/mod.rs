//! CMS integration.
//!
//! Articles come from a headless CMS over its REST API. The
//! [`ArticleSource`] trait is the seam between fetching and rendering;
//! [`CmsClient`] is the HTTP implementation.
//!
//! Nothing here retries. A failed fetch surfaces as a [`CmsError`], and
//! page-level callers degrade it to a "not found" presentation via
//! [`find_article`] / [`list_articles`].

pub mod client;
pub mod query;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::content::NormalizeError;
use crate::domain::{ArticleCategory, NormalizedArticle};

pub use client::CmsClient;

/// Errors talking to the CMS
#[derive(Error, Debug)]
pub enum CmsError {
    #[error("Invalid CMS url: {0}")]
    InvalidUrl(String),

    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch {what}: HTTP {status}")]
    Status { what: String, status: u16 },

    #[error("Failed to decode CMS response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Malformed CMS payload: {0}")]
    Normalize(#[from] NormalizeError),
}

/// Source of normalized articles
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Human-readable source name
    fn name(&self) -> &str;

    /// Fetch one article by id
    async fn article(&self, id: &str) -> Result<NormalizedArticle, CmsError>;

    /// Fetch a listing, optionally filtered by category and limited
    async fn articles(
        &self,
        category: ArticleCategory,
        limit: Option<u32>,
    ) -> Result<Vec<NormalizedArticle>, CmsError>;
}

/// Fetch an article, degrading any failure to `None`.
///
/// An empty id is treated as "missing" without hitting the source.
pub async fn find_article(source: &dyn ArticleSource, id: &str) -> Option<NormalizedArticle> {
    if id.is_empty() {
        return None;
    }

    match source.article(id).await {
        Ok(article) => Some(article),
        Err(e) => {
            warn!(source = source.name(), id, error = %e, "Error fetching article");
            None
        }
    }
}

/// Fetch a listing, degrading any failure to an empty list
pub async fn list_articles(
    source: &dyn ArticleSource,
    category: ArticleCategory,
    limit: Option<u32>,
) -> Vec<NormalizedArticle> {
    match source.articles(category, limit).await {
        Ok(articles) => articles,
        Err(e) => {
            warn!(source = source.name(), %category, error = %e, "Error fetching articles");
            Vec::new()
        }
    }
}
