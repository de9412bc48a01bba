//! Renderers for the recognized block kinds.
//!
//! Each renderer takes the normalized block as-is. Image fields have
//! already been flattened to a URL string; an empty string means "no
//! image" and suppresses the image markup.

use maud::{html, Markup, PreEscaped};
use pulldown_cmark::{html as markdown_html, Event, Options, Parser};

use crate::domain::NormalizedContentBlock;

/// Hero: full-width heading over a background image
pub fn hero(block: &NormalizedContentBlock) -> Markup {
    let classes = join_classes("hero", block.str_field("HeroCssClasses"));
    let title = block.str_field("HeroTitle");
    let subtitle = block.str_field("HeroSubtitle");

    html! {
        section class=(classes) style=[block.image_url().map(background_style)] {
            @if !title.is_empty() {
                h1 { (title) }
            }
            @if !subtitle.is_empty() {
                p { (subtitle) }
            }
        }
    }
}

/// Paragraph: markdown body with an optional side image
pub fn paragraph(block: &NormalizedContentBlock) -> Markup {
    let classes = join_classes("prose paragraph", block.str_field("ParagraphCssClasses"));
    let body = markdown_to_html(block.str_field("ParagraphContent"));

    html! {
        div class=(classes) {
            @if let Some(url) = block.image_url() {
                figure class="paragraph-image" {
                    img src=(url) alt="Paragraph Image";
                }
            }
            div class="paragraph-body" { (PreEscaped(body)) }
        }
    }
}

/// CTA: title, text and an optional button over a background image
pub fn cta(block: &NormalizedContentBlock) -> Markup {
    let classes = join_classes("cta", block.str_field("CtaCssClasses"));
    let title = block.str_field("CtaTitle");
    let text = block.str_field("CtaText");
    let (label, link) = (block.str_field("CtaButtonText"), block.str_field("CtaButtonLink"));

    html! {
        section class=(classes) style=[block.image_url().map(background_style)] {
            @if !title.is_empty() {
                h3 { (title) }
            }
            @if !text.is_empty() {
                p { (text) }
            }
            @if !label.is_empty() && !link.is_empty() {
                a class="cta-button" href=(link) { (label) }
            }
        }
    }
}

/// Render CMS-authored markdown to HTML.
///
/// Raw HTML in the source is emitted as escaped text, never as markup.
fn markdown_to_html(source: &str) -> String {
    let events = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::new();
    markdown_html::push_html(&mut out, events);
    out
}

/// Inline style for a background image
fn background_style(url: &str) -> String {
    format!("background-image: url('{}')", css_url(url))
}

/// Percent-encode the characters that could end a CSS `url('...')` token
fn css_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        if matches!(c, '\'' | '"' | '(' | ')' | '\\') || c.is_whitespace() || c.is_control() {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{:02X}", byte));
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn join_classes(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn block(component: &str, fields: Value) -> NormalizedContentBlock {
        NormalizedContentBlock::new(component, fields.as_object().cloned().unwrap_or_default())
    }

    #[test]
    fn test_hero_with_image() {
        let html = hero(&block(
            "hero",
            json!({"HeroBgImg": "/img/a.jpg", "HeroTitle": "Fresh & hoppy"}),
        ))
        .into_string();

        assert!(html.contains("background-image: url('/img/a.jpg')"));
        assert!(html.contains("<h1>Fresh &amp; hoppy</h1>"));
        assert!(html.ends_with("</section>"));
    }

    #[test]
    fn test_hero_without_image() {
        let html = hero(&block("hero", json!({"HeroBgImg": ""}))).into_string();

        assert_eq!(html, r#"<section class="hero"></section>"#);
    }

    #[test]
    fn test_background_url_cannot_close_css_token() {
        let html = hero(&block(
            "hero",
            json!({"HeroBgImg": "/a.jpg'); background: url('//evil/x"}),
        ))
        .into_string();

        assert!(html.contains(
            "background-image: url('/a.jpg%27%29;%20background:%20url%28%27//evil/x')"
        ));
        assert!(!html.contains("');"));

        let html = cta(&block("cta", json!({"CtaBgImg": "/b c\\\".jpg"}))).into_string();
        assert!(html.contains("url('/b%20c%5C%22.jpg')"));
    }

    #[test]
    fn test_paragraph_renders_markdown() {
        let html = paragraph(&block(
            "paragraph",
            json!({
                "ParagraphContent": "## Brewing\n\nWe use **local** rice.",
                "ParagraphCssClasses": "text-justify",
                "ParagraphImg": ""
            }),
        ))
        .into_string();

        assert!(html.starts_with(r#"<div class="prose paragraph text-justify">"#));
        assert!(html.contains("<h2>Brewing</h2>"));
        assert!(html.contains("<strong>local</strong>"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_paragraph_escapes_raw_html() {
        let html = paragraph(&block(
            "paragraph",
            json!({"ParagraphContent": "Hello <script>alert(1)</script> there\n\n<div onclick=\"x()\">block</div>"}),
        ))
        .into_string();

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<div onclick"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_paragraph_with_image() {
        let html = paragraph(&block(
            "paragraph",
            json!({"ParagraphContent": "Hi", "ParagraphImg": "/img/p.jpg"}),
        ))
        .into_string();

        assert!(html.contains(r#"<img src="/img/p.jpg" alt="Paragraph Image">"#));
    }

    #[test]
    fn test_cta_button_needs_label_and_link() {
        let with_button = cta(&block(
            "cta",
            json!({"CtaTitle": "Visit", "CtaButtonText": "Discover more", "CtaButtonLink": "/brewery"}),
        ))
        .into_string();
        assert!(with_button.contains(r#"<a class="cta-button" href="/brewery">Discover more</a>"#));

        let without_link =
            cta(&block("cta", json!({"CtaButtonText": "Discover more"}))).into_string();
        assert!(!without_link.contains("<a "));
    }
}
