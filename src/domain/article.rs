//! Normalized article view model.
//!
//! Articles are created fresh per request by the normalizer and dropped
//! once the page is rendered. Field names serialize in the PascalCase
//! shape the rendering layer consumes.

use serde::{Deserialize, Serialize};

use super::block::NormalizedContentBlock;

/// A flat, UI-ready article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NormalizedArticle {
    /// CMS identifier, stringified
    pub id: String,

    pub title: String,

    pub slug: String,

    /// Category name (news, activities, blog, ...)
    pub category: String,

    /// Short summary, if the author wrote one
    pub summary: Option<String>,

    /// Thumbnail image URL (listing views only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    /// Body blocks in rendering order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<NormalizedContentBlock>>,
}

impl NormalizedArticle {
    /// Body blocks, or an empty slice when the article has no content
    pub fn blocks(&self) -> &[NormalizedContentBlock] {
        self.content.as_deref().unwrap_or_default()
    }

    /// Summary text, empty when absent
    pub fn summary_or_empty(&self) -> &str {
        self.summary.as_deref().unwrap_or_default()
    }
}
