//! Nested query-parameter encoding for the CMS REST API.
//!
//! The CMS expects `populate`, `filters` and `pagination` as bracketed
//! keys, e.g. `populate[Content][populate][HeroBgImg][fields][0]=url`.
//! Queries are built as JSON values and flattened into key/value pairs;
//! percent-encoding happens when the pairs are appended to the URL.

use serde_json::{json, Map, Value};

use crate::domain::{ArticleCategory, BlockKind};

/// Flatten a JSON query object into bracketed key/value pairs.
///
/// Arrays use numeric indices, `null` values and empty containers are
/// skipped.
pub fn encode_pairs(query: &Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if let Value::Object(map) = query {
        for (key, value) in map {
            push_pairs(key.clone(), value, &mut pairs);
        }
    }
    pairs
}

fn push_pairs(prefix: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, nested) in map {
                push_pairs(format!("{}[{}]", prefix, key), nested, pairs);
            }
        }
        Value::Array(items) => {
            for (index, nested) in items.iter().enumerate() {
                push_pairs(format!("{}[{}]", prefix, index), nested, pairs);
            }
        }
        Value::String(s) => pairs.push((prefix, s.clone())),
        Value::Bool(_) | Value::Number(_) => pairs.push((prefix, value.to_string())),
    }
}

/// Query for a single article: populate each block kind's image relation
pub fn article_detail_query() -> Value {
    let images: Map<String, Value> = BlockKind::ALL
        .into_iter()
        .map(|kind| {
            (
                kind.image_field().to_string(),
                json!({ "fields": ["url", "formats"] }),
            )
        })
        .collect();

    json!({
        "populate": {
            "Content": { "populate": images }
        }
    })
}

/// Query for an article listing, optionally filtered and limited
pub fn article_list_query(category: ArticleCategory, limit: Option<u32>) -> Value {
    let mut query = json!({
        "populate": {
            "Thumbnail": { "fields": ["formats"] },
            "Content": { "fields": "*" }
        }
    });

    if let Some(filter) = category.filter_value() {
        query["filters"] = json!({ "Category": filter });
    }
    if let Some(limit) = limit {
        query["pagination"] = json!({ "limit": limit });
    }

    query
}
