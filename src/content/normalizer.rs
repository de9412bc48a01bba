//! CMS payload normalization.
//!
//! Converts the nested, server-specific article shape into
//! [`NormalizedArticle`] records. The transform is one-way: feeding a
//! normalized record back in is not supported.
//!
//! Tolerance rules:
//! - Missing scalar attributes default (empty string, or `None` for the summary)
//! - Missing or partial image relations resolve to an empty string
//! - A missing envelope, `attributes` bag or `data` field is an error

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::content::path::{image_url_path, string_at, string_at_or, value_at, ImageFormat};
use crate::domain::{BlockKind, NormalizedArticle, NormalizedContentBlock};

/// Discriminant key on raw content blocks
pub const DISCRIMINANT_FIELD: &str = "__component";

/// Variant used for images inside content blocks
pub const BLOCK_IMAGE_FORMAT: ImageFormat = ImageFormat::Medium;

/// Variant used for article thumbnails
pub const THUMBNAIL_FORMAT: ImageFormat = ImageFormat::Small;

/// Errors that can occur while normalizing a CMS response
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("CMS response has no data")]
    MissingData,

    #[error("Article payload has no attributes")]
    MissingAttributes,

    #[error("Content block {index}: {source}")]
    Block {
        index: usize,
        #[source]
        source: BlockError,
    },
}

/// Errors for a single raw content block
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BlockError {
    #[error("block is not an object")]
    NotAnObject,

    #[error("block has no __component discriminant")]
    MissingDiscriminant,
}

/// Logical type name of a discriminant: everything after the first `.`.
///
/// A discriminant without a separator is used whole.
pub fn component_name(discriminant: &str) -> &str {
    discriminant
        .split_once('.')
        .map_or(discriminant, |(_, name)| name)
}

/// Normalize one raw content block.
pub fn normalize_block(raw: &Value) -> Result<NormalizedContentBlock, BlockError> {
    let object = raw.as_object().ok_or(BlockError::NotAnObject)?;
    let discriminant = object
        .get(DISCRIMINANT_FIELD)
        .and_then(Value::as_str)
        .ok_or(BlockError::MissingDiscriminant)?;
    let component = component_name(discriminant);

    let mut fields = object.clone();
    if let Some(kind) = BlockKind::from_component(component) {
        let field = kind.image_field();
        let url = resolve_image(fields.get(field), BLOCK_IMAGE_FORMAT, field);
        fields.insert(field.to_string(), Value::String(url));
    }

    Ok(NormalizedContentBlock::new(component, fields))
}

/// Normalize one article envelope (`{ id, attributes }`).
pub fn normalize_article(envelope: &Value) -> Result<NormalizedArticle, NormalizeError> {
    let attributes = value_at(envelope, &["attributes"])
        .filter(|attrs| attrs.is_object())
        .ok_or(NormalizeError::MissingAttributes)?;

    let content = match attributes.get("Content") {
        None | Some(Value::Null) => None,
        Some(Value::Array(blocks)) => Some(
            blocks
                .iter()
                .enumerate()
                .map(|(index, raw)| {
                    normalize_block(raw).map_err(|source| NormalizeError::Block { index, source })
                })
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Some(other) => {
            warn!(kind = json_kind(other), "Article Content is not a list, ignoring");
            None
        }
    };

    Ok(NormalizedArticle {
        id: envelope_id(envelope),
        title: string_at_or(attributes, &["Title"], ""),
        slug: string_at_or(attributes, &["Slug"], ""),
        category: string_at_or(attributes, &["Category"], ""),
        summary: string_at(attributes, &["Summary"]).map(str::to_string),
        thumbnail_url: attributes
            .get("Thumbnail")
            .and_then(|thumb| string_at(thumb, &image_url_path(THUMBNAIL_FORMAT)))
            .map(str::to_string),
        content,
    })
}

/// Normalize a single-item response (`{ "data": { ... } }`).
pub fn normalize_single(response: &Value) -> Result<NormalizedArticle, NormalizeError> {
    match response.get("data") {
        None | Some(Value::Null) => Err(NormalizeError::MissingData),
        Some(item) => normalize_article(item),
    }
}

/// Normalize a collection response (`{ "data": [ ... ] }`), preserving order.
pub fn normalize_collection(response: &Value) -> Result<Vec<NormalizedArticle>, NormalizeError> {
    let items = response
        .get("data")
        .and_then(Value::as_array)
        .ok_or(NormalizeError::MissingData)?;

    items.iter().map(normalize_article).collect()
}

/// Resolve an image relation to a URL string, empty when unavailable
fn resolve_image(relation: Option<&Value>, format: ImageFormat, field: &str) -> String {
    let leaf = relation.and_then(|rel| value_at(rel, &image_url_path(format)));

    match leaf {
        Some(Value::String(url)) => url.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => {
            // Usually means the CMS schema changed under us
            warn!(field, kind = json_kind(other), "Image url is not a string, using empty url");
            String::new()
        }
    }
}

fn envelope_id(envelope: &Value) -> String {
    match envelope.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => String::new(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
