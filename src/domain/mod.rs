//! Domain types for the storefront content layer.
//!
//! This module contains the view models produced by normalization:
//! - Article: the flat, UI-ready article record
//! - Block: normalized content blocks and the recognized block kinds
//! - Category: article categories used to filter listings

pub mod article;
pub mod block;
pub mod category;

// Re-export commonly used types
pub use article::NormalizedArticle;
pub use block::{BlockKind, NormalizedContentBlock, COMPONENT_FIELD};
pub use category::ArticleCategory;
