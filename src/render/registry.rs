//! Component resolver.
//!
//! Maps a block's `Component` name to its renderer. A miss is not an
//! error: the block is shown as pretty-printed JSON instead, so one
//! unknown block never takes down the page.

use maud::{html, Markup};
use tracing::debug;

use super::blocks;
use crate::domain::{BlockKind, NormalizedContentBlock};

/// A unit of UI that renders one normalized block to HTML
pub type Renderer = fn(&NormalizedContentBlock) -> Markup;

impl BlockKind {
    /// Renderer for this kind
    pub fn renderer(self) -> Renderer {
        match self {
            BlockKind::Hero => blocks::hero,
            BlockKind::Paragraph => blocks::paragraph,
            BlockKind::Cta => blocks::cta,
        }
    }
}

/// Look up the renderer for a component name
pub fn resolve(component: &str) -> Option<Renderer> {
    BlockKind::from_component(component).map(BlockKind::renderer)
}

/// Render a block with its renderer, or the raw fallback on a miss
pub fn render_block(block: &NormalizedContentBlock) -> Markup {
    match resolve(block.component()) {
        Some(renderer) => renderer(block),
        None => {
            debug!(component = block.component(), "No renderer, using raw view");
            render_raw(block)
        }
    }
}

/// Diagnostic view: the block as pretty-printed JSON
pub fn render_raw(block: &NormalizedContentBlock) -> Markup {
    let json = serde_json::to_string_pretty(block).unwrap_or_else(|_| format!("{:?}", block));
    html! {
        pre { (json) }
    }
}
