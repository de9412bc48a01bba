//! HTTP client for the CMS REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use super::query::{article_detail_query, article_list_query, encode_pairs};
use super::{ArticleSource, CmsError};
use crate::config::CmsSettings;
use crate::content::{normalize_collection, normalize_single};
use crate::domain::{ArticleCategory, NormalizedArticle};

/// CMS REST client
pub struct CmsClient {
    /// Base URL of the CMS (may carry a path prefix)
    base_url: Url,
    /// HTTP client
    client: reqwest::Client,
}

impl CmsClient {
    /// Create a new client
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CmsError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CmsError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(CmsError::InvalidUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CmsError::Client)?;

        Ok(Self { base_url, client })
    }

    /// Create from config
    pub fn from_config(settings: &CmsSettings) -> Result<Self, CmsError> {
        Self::new(&settings.base_url, settings.timeout())
    }

    /// Build an endpoint URL from path segments and a nested query.
    ///
    /// Segments are percent-encoded, so ids cannot escape the path.
    pub fn endpoint(&self, segments: &[&str], query: &Value) -> Result<Url, CmsError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CmsError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        let pairs = encode_pairs(query);
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }

    /// GET a JSON body, failing on any non-success status
    async fn get_json(&self, url: Url, what: &str) -> Result<Value, CmsError> {
        debug!(%url, "Fetching {}", what);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| CmsError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::Status {
                what: what.to_string(),
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(CmsError::Decode)
    }

    /// Fetch one article by id, with every block image relation populated
    pub async fn get_article(&self, id: &str) -> Result<NormalizedArticle, CmsError> {
        let url = self.endpoint(&["api", "articles", id], &article_detail_query())?;
        let body = self
            .get_json(url, &format!("article with ID: {}", id))
            .await?;

        Ok(normalize_single(&body)?)
    }

    /// Fetch an article listing
    pub async fn get_articles(
        &self,
        category: ArticleCategory,
        limit: Option<u32>,
    ) -> Result<Vec<NormalizedArticle>, CmsError> {
        let url = self.endpoint(&["api", "articles"], &article_list_query(category, limit))?;
        let body = self.get_json(url, "articles").await?;

        let articles = normalize_collection(&body)?;
        debug!(count = articles.len(), %category, "Fetched articles");
        Ok(articles)
    }
}

#[async_trait]
impl ArticleSource for CmsClient {
    fn name(&self) -> &str {
        "cms"
    }

    async fn article(&self, id: &str) -> Result<NormalizedArticle, CmsError> {
        self.get_article(id).await
    }

    async fn articles(
        &self,
        category: ArticleCategory,
        limit: Option<u32>,
    ) -> Result<Vec<NormalizedArticle>, CmsError> {
        self.get_articles(category, limit).await
    }
}
