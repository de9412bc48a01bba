//! storefront - CMS content layer for the storefront
//!
//! Fetches articles from a headless CMS, normalizes the nested CMS
//! payload into flat view models, and renders content blocks through a
//! static renderer registry.
//!
//! # Architecture
//!
//! Content flows through three stateless stages:
//! - Fetch: the CMS client issues one GET per page
//! - Normalize: nested CMS JSON becomes a flat `NormalizedArticle`
//! - Render: each block's `Component` selects its renderer, with a raw
//!   JSON fallback for unknown kinds
//!
//! # Modules
//!
//! - `cms`: CMS REST client and query encoding
//! - `content`: Payload normalization and safe path extraction
//! - `domain`: View models (NormalizedArticle, NormalizedContentBlock, BlockKind)
//! - `render`: Block renderers, component resolver and page assembly
//! - `config`: CMS connection settings
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Render an article page
//! storefront article 12
//!
//! # List news articles as JSON
//! storefront articles --category news --limit 5 --json
//!
//! # Normalize a saved CMS response
//! storefront normalize --input response.json
//! ```

pub mod cli;
pub mod cms;
pub mod config;
pub mod content;
pub mod domain;
pub mod render;

// Re-export main types at crate root for convenience
pub use cms::{ArticleSource, CmsClient, CmsError};
pub use content::{normalize_article, normalize_block, normalize_collection, normalize_single, NormalizeError};
pub use domain::{ArticleCategory, BlockKind, NormalizedArticle, NormalizedContentBlock};
pub use render::{render_article_page, render_block, resolve, Renderer};
