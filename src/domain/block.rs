//! Content blocks and the recognized block kinds.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key under which the derived type name is attached to every block
pub const COMPONENT_FIELD: &str = "Component";

/// Recognized content block kinds.
///
/// Each kind owns both its image field name and (see
/// `render::registry`) its renderer, so the two can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Full-width header with a background image
    Hero,

    /// Markdown text with an optional side image
    Paragraph,

    /// Call to action with an optional button
    Cta,
}

impl BlockKind {
    /// Every recognized kind
    pub const ALL: [BlockKind; 3] = [BlockKind::Hero, BlockKind::Paragraph, BlockKind::Cta];

    /// Look up a kind by its component name (e.g. `"hero"`)
    pub fn from_component(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.component() == name)
    }

    /// Component name as it appears after the discriminant separator
    pub fn component(self) -> &'static str {
        match self {
            BlockKind::Hero => "hero",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Cta => "cta",
        }
    }

    /// Field holding this kind's image relation
    pub fn image_field(self) -> &'static str {
        match self {
            BlockKind::Hero => "HeroBgImg",
            BlockKind::Paragraph => "ParagraphImg",
            BlockKind::Cta => "CtaBgImg",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.component())
    }
}

/// A content block after normalization.
///
/// Carries every field of the raw block verbatim (apart from the
/// resolved image field) plus the derived `Component` name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedContentBlock {
    #[serde(rename = "Component")]
    component: String,

    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl NormalizedContentBlock {
    /// Build a block from its derived component name and passthrough fields.
    ///
    /// Any `Component` key already present in `fields` is dropped: the
    /// component is always derived, never caller supplied.
    pub fn new(component: impl Into<String>, mut fields: Map<String, Value>) -> Self {
        fields.remove(COMPONENT_FIELD);
        Self {
            component: component.into(),
            fields,
        }
    }

    /// Derived component name
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Recognized kind, if any
    pub fn kind(&self) -> Option<BlockKind> {
        BlockKind::from_component(&self.component)
    }

    /// Passthrough fields (excluding `Component`)
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Raw field value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// String field, empty when absent or not a string
    pub fn str_field(&self, key: &str) -> &str {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Resolved image URL for a recognized kind, `None` when empty
    pub fn image_url(&self) -> Option<&str> {
        let url = self.str_field(self.kind()?.image_field());
        (!url.is_empty()).then_some(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_kind_lookup() {
        assert_eq!(BlockKind::from_component("hero"), Some(BlockKind::Hero));
        assert_eq!(BlockKind::from_component("cta"), Some(BlockKind::Cta));
        assert_eq!(BlockKind::from_component("Hero"), None);
        assert_eq!(BlockKind::from_component("unknown-widget"), None);
    }

    #[test]
    fn test_image_fields_are_distinct() {
        assert_eq!(BlockKind::Hero.image_field(), "HeroBgImg");
        assert_eq!(BlockKind::Paragraph.image_field(), "ParagraphImg");
        assert_eq!(BlockKind::Cta.image_field(), "CtaBgImg");
    }

    #[test]
    fn test_supplied_component_is_dropped() {
        let block = NormalizedContentBlock::new(
            "hero",
            fields(json!({"Component": "spoofed", "HeroTitle": "Hi"})),
        );

        assert_eq!(block.component(), "hero");
        assert!(block.get("Component").is_none());
        assert_eq!(block.str_field("HeroTitle"), "Hi");
    }

    #[test]
    fn test_serialization_flattens_fields() {
        let block = NormalizedContentBlock::new(
            "paragraph",
            fields(json!({"id": 3, "ParagraphImg": ""})),
        );

        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json, json!({"Component": "paragraph", "id": 3, "ParagraphImg": ""}));
        assert_eq!(block.image_url(), None);
    }
}
