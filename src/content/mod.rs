//! Content normalization.
//!
//! Turns nested CMS responses into the flat view models in `domain`.
//!
//! # Modules
//!
//! - `path`: Safe nested-path extraction over JSON values
//! - `normalizer`: Article and content block normalization

pub mod normalizer;
pub mod path;

pub use normalizer::{
    component_name, normalize_article, normalize_block, normalize_collection, normalize_single,
    BlockError, NormalizeError,
};
pub use path::{image_url_path, string_at, string_at_or, value_at, ImageFormat};
