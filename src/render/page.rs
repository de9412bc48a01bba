//! Page assembly for article detail and listing views.

use maud::{html, Markup};
use serde::Serialize;

use super::registry::render_block;
use crate::domain::NormalizedArticle;

/// Title used when no article is available
pub const DEFAULT_TITLE: &str = "Blog and Stories";

/// Description used when the article has no summary
pub const DEFAULT_DESCRIPTION: &str =
    "Dive into our blog to uncover stories from the brewery, craft beer culture and our community.";

/// Shown in place of the article body when it could not be loaded
pub const NOT_FOUND_MESSAGE: &str = "No article found or missing ID.";

/// Head metadata for an article page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

/// Build page metadata, falling back to defaults when the article is missing
pub fn page_metadata(article: Option<&NormalizedArticle>) -> PageMetadata {
    let title = match article {
        Some(article) => format!("{} - {}", DEFAULT_TITLE, article.title),
        None => DEFAULT_TITLE.to_string(),
    };

    let description = article
        .map(NormalizedArticle::summary_or_empty)
        .filter(|summary| !summary.is_empty())
        .unwrap_or(DEFAULT_DESCRIPTION)
        .to_string();

    PageMetadata { title, description }
}

/// Render the article body: back link plus every block in order.
///
/// `None` renders the "not found" presentation.
pub fn render_article_page(article: Option<&NormalizedArticle>) -> Markup {
    html! {
        div class="article-page" {
            @if let Some(article) = article {
                a class="back-link" href={ "/" (article.category) } {
                    "Back to " (article.category)
                }
                section {
                    @for block in article.blocks() {
                        (render_block(block))
                    }
                }
            } @else {
                p { (NOT_FOUND_MESSAGE) }
            }
        }
    }
}

/// Document head tags for an article page
pub fn render_head(meta: &PageMetadata) -> Markup {
    html! {
        title { (meta.title) }
        meta name="description" content=(meta.description);
    }
}

/// Listing view of one article
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleCard {
    pub id: String,
    pub title: String,
    /// Summary, empty when absent
    pub caption: String,
    pub thumbnail_url: Option<String>,
    pub slug: String,
    pub category: String,
}

impl From<&NormalizedArticle> for ArticleCard {
    fn from(article: &NormalizedArticle) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            caption: article.summary_or_empty().to_string(),
            thumbnail_url: article.thumbnail_url.clone(),
            slug: article.slug.clone(),
            category: article.category.clone(),
        }
    }
}

impl ArticleCard {
    /// Link to the article's detail page
    pub fn href(&self) -> String {
        format!("/{}/{}?id={}", self.category, self.slug, self.id)
    }

    pub fn render(&self) -> Markup {
        html! {
            article class="article-card" data-category=(self.category) {
                @if let Some(url) = &self.thumbnail_url {
                    img src=(url) alt=(self.title);
                }
                h3 {
                    a href=(self.href()) { (self.title) }
                }
                p { (self.caption) }
            }
        }
    }
}

/// Render a grid of article cards, in input order
pub fn render_article_list(articles: &[NormalizedArticle]) -> Markup {
    html! {
        div class="article-grid" {
            @for article in articles {
                (ArticleCard::from(article).render())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(summary: Option<&str>) -> NormalizedArticle {
        NormalizedArticle {
            id: "4".to_string(),
            title: "Rice lager".to_string(),
            slug: "rice-lager".to_string(),
            category: "blog".to_string(),
            summary: summary.map(str::to_string),
            thumbnail_url: None,
            content: None,
        }
    }

    #[test]
    fn test_metadata_with_article() {
        let meta = page_metadata(Some(&article(Some("A new brew"))));
        assert_eq!(meta.title, "Blog and Stories - Rice lager");
        assert_eq!(meta.description, "A new brew");
    }

    #[test]
    fn test_metadata_falls_back() {
        let meta = page_metadata(None);
        assert_eq!(meta.title, DEFAULT_TITLE);
        assert_eq!(meta.description, DEFAULT_DESCRIPTION);

        // An empty summary also falls back
        let meta = page_metadata(Some(&article(Some(""))));
        assert_eq!(meta.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_not_found_page() {
        let html = render_article_page(None).into_string();
        assert_eq!(
            html,
            format!(r#"<div class="article-page"><p>{}</p></div>"#, NOT_FOUND_MESSAGE)
        );
    }

    #[test]
    fn test_card_from_article() {
        let card = ArticleCard::from(&article(None));
        assert_eq!(card.caption, "");
        assert_eq!(card.href(), "/blog/rice-lager?id=4");
        assert!(!card.render().into_string().contains("<img"));
    }

    #[test]
    fn test_card_escapes_text() {
        let mut article = article(Some("Lager & <ale>"));
        article.title = "\"Quoted\"".to_string();
        article.thumbnail_url = Some("/img/t.jpg".to_string());

        let html = ArticleCard::from(&article).render().into_string();
        assert!(html.contains(r#"<img src="/img/t.jpg" alt="&quot;Quoted&quot;">"#));
        assert!(html.contains("<p>Lager &amp; &lt;ale&gt;</p>"));
    }

    #[test]
    fn test_head_tags() {
        let meta = page_metadata(Some(&article(Some("A <new> brew"))));
        let html = render_head(&meta).into_string();

        assert_eq!(
            html,
            r#"<title>Blog and Stories - Rice lager</title><meta name="description" content="A &lt;new&gt; brew">"#
        );
    }
}
