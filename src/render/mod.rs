//! HTML rendering of normalized content.
//!
//! Markup is built with `maud`, which escapes every interpolated value.
//! The only pre-escaped fragment is paragraph markdown, whose raw HTML
//! is neutralized before rendering.
//!
//! # Modules
//!
//! - `registry`: Component resolver (block kind -> renderer) and raw fallback
//! - `blocks`: Renderers for each recognized block kind
//! - `page`: Article page, listing and metadata assembly

pub mod blocks;
pub mod page;
pub mod registry;

pub use maud::Markup;
pub use page::{
    page_metadata, render_article_list, render_article_page, render_head, ArticleCard, PageMetadata,
};
pub use registry::{render_block, render_raw, resolve, Renderer};
