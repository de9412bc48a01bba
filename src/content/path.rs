//! Safe path extraction over JSON values.
//!
//! CMS responses nest optional relations several levels deep. Every
//! lookup here treats an absent key, a `null`, or a non-object
//! intermediate as "not found" instead of failing.

use serde_json::Value;

/// Size variant of an uploaded CMS image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Listing thumbnails
    Small,
    /// Images inside content blocks
    Medium,
}

impl ImageFormat {
    /// Key under `formats` for this variant
    pub fn key(self) -> &'static str {
        match self {
            ImageFormat::Small => "small",
            ImageFormat::Medium => "medium",
        }
    }
}

/// Path from an image relation to the URL of one size variant
pub fn image_url_path(format: ImageFormat) -> [&'static str; 5] {
    ["data", "attributes", "formats", format.key(), "url"]
}

/// Walk `path` through nested objects.
pub fn value_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))
}

/// Leaf at `path` when it is a string
pub fn string_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    value_at(value, path)?.as_str()
}

/// Leaf at `path` when it is a string, otherwise `fallback`
pub fn string_at_or(value: &Value, path: &[&str], fallback: &str) -> String {
    string_at(value, path).unwrap_or(fallback).to_string()
}
