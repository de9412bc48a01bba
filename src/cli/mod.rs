//! Command-line interface for storefront.
//!
//! Provides commands for fetching and rendering articles from the CMS,
//! normalizing saved CMS responses offline, and showing configuration.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;

use crate::cms::{self, ArticleSource, CmsClient};
use crate::config::{self, CmsSettings};
use crate::content::{normalize_collection, normalize_single};
use crate::domain::ArticleCategory;
use crate::render::{page_metadata, render_article_list, render_article_page, render_head};

/// storefront - CMS article fetching, normalization and rendering
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Override the CMS base URL
    #[arg(long, global = true, env = config::ENV_CMS_URL)]
    pub cms_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one article and render its page
    Article {
        /// Article ID
        id: String,

        /// Print the normalized article as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },

    /// Fetch an article listing
    Articles {
        /// Filter by category
        #[arg(short, long, value_enum)]
        category: Option<CategoryArg>,

        /// Maximum number of articles
        #[arg(short, long)]
        limit: Option<u32>,

        /// Print normalized articles as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },

    /// Normalize a saved CMS response (reads stdin if no input file)
    Normalize {
        /// Input file
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Normalize and render a saved CMS response (reads stdin if no input file)
    Render {
        /// Input file
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Category for CLI (maps to ArticleCategory)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    News,
    Activities,
    Blog,
    All,
}

impl From<CategoryArg> for ArticleCategory {
    fn from(c: CategoryArg) -> Self {
        match c {
            CategoryArg::News => ArticleCategory::News,
            CategoryArg::Activities => ArticleCategory::Activities,
            CategoryArg::Blog => ArticleCategory::Blog,
            CategoryArg::All => ArticleCategory::All,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let cms_url = self.cms_url;
        match self.command {
            Commands::Article { id, json } => show_article(cms_url, &id, json).await,
            Commands::Articles {
                category,
                limit,
                json,
            } => {
                let category = category.map(ArticleCategory::from).unwrap_or_default();
                list_articles(cms_url, category, limit, json).await
            }
            Commands::Normalize { input } => normalize_input(input),
            Commands::Render { input } => render_input(input),
            Commands::Config => show_config(cms_url),
        }
    }
}

/// Resolve CMS settings, applying the command-line override
fn cms_settings(cms_url: Option<String>) -> Result<CmsSettings> {
    let mut settings = config::config()?.cms.clone();
    if let Some(url) = cms_url {
        settings.base_url = url;
    }
    Ok(settings)
}

fn cms_client(cms_url: Option<String>) -> Result<CmsClient> {
    let settings = cms_settings(cms_url)?;
    CmsClient::from_config(&settings).context("Failed to create CMS client")
}

/// Fetch an article and print its page (or JSON)
async fn show_article(cms_url: Option<String>, id: &str, json: bool) -> Result<()> {
    let client = cms_client(cms_url)?;

    if json {
        let article = client
            .article(id)
            .await
            .with_context(|| format!("Failed to fetch article {}", id))?;
        println!("{}", serde_json::to_string_pretty(&article)?);
        return Ok(());
    }

    // Fetch failures degrade to the "not found" page
    let article = cms::find_article(&client, id).await;
    let meta = page_metadata(article.as_ref());

    println!("{}", render_head(&meta).into_string());
    println!("{}", render_article_page(article.as_ref()).into_string());

    Ok(())
}

/// Fetch a listing and print cards (or JSON)
async fn list_articles(
    cms_url: Option<String>,
    category: ArticleCategory,
    limit: Option<u32>,
    json: bool,
) -> Result<()> {
    let client = cms_client(cms_url)?;

    if json {
        let articles = client
            .articles(category, limit)
            .await
            .context("Failed to fetch articles")?;
        println!("{}", serde_json::to_string_pretty(&articles)?);
        return Ok(());
    }

    let articles = cms::list_articles(&client, category, limit).await;
    if articles.is_empty() {
        eprintln!("No articles found.");
    }
    println!("{}", render_article_list(&articles).into_string());

    Ok(())
}

/// Read a CMS response from a file or stdin
fn read_response(input: Option<PathBuf>) -> Result<Value> {
    let raw = if let Some(path) = input {
        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    serde_json::from_str(&raw).context("Input is not valid JSON")
}

/// True when the response wraps a list of articles
fn is_collection(response: &Value) -> bool {
    response.get("data").map_or(false, Value::is_array)
}

/// Normalized JSON for a single or collection response
fn normalize_output(response: &Value) -> Result<String> {
    let output = if is_collection(response) {
        serde_json::to_string_pretty(&normalize_collection(response)?)?
    } else {
        serde_json::to_string_pretty(&normalize_single(response)?)?
    };
    Ok(output)
}

/// Article page or listing HTML for a single or collection response
fn render_output(response: &Value) -> Result<String> {
    let markup = if is_collection(response) {
        render_article_list(&normalize_collection(response)?)
    } else {
        render_article_page(Some(&normalize_single(response)?))
    };
    Ok(markup.into_string())
}

fn normalize_input(input: Option<PathBuf>) -> Result<()> {
    let response = read_response(input)?;
    println!("{}", normalize_output(&response)?);
    Ok(())
}

fn render_input(input: Option<PathBuf>) -> Result<()> {
    let response = read_response(input)?;
    println!("{}", render_output(&response)?);
    Ok(())
}

fn show_config(cms_url: Option<String>) -> Result<()> {
    let cfg = config::config()?;
    let settings = cms_settings(cms_url)?;

    println!("Storefront Configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("CMS:");
    println!("  Base URL: {}", settings.base_url);
    println!("  Timeout:  {}s", settings.timeout_seconds);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn article_json(id: u64, title: &str) -> Value {
        json!({
            "id": id,
            "attributes": {
                "Title": title,
                "Slug": title.to_lowercase().replace(' ', "-"),
                "Category": "blog",
                "Summary": "From the brewhouse",
                "Content": [
                    {"__component": "blocks.hero", "HeroTitle": title},
                    {"__component": "blocks.unknown-widget", "Note": "kept"}
                ]
            }
        })
    }

    fn saved_response(response: &Value) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", response).unwrap();
        file
    }

    #[test]
    fn test_parse_articles_command() {
        let cli = Cli::parse_from(["storefront", "articles", "--category", "news", "--limit", "3"]);

        match cli.command {
            Commands::Articles {
                category, limit, ..
            } => {
                assert_eq!(category.map(ArticleCategory::from), Some(ArticleCategory::News));
                assert_eq!(limit, Some(3));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_cms_url() {
        let cli = Cli::parse_from(["storefront", "article", "7", "--cms-url", "http://cms:1337"]);
        assert_eq!(cli.cms_url.as_deref(), Some("http://cms:1337"));
    }

    #[test]
    fn test_cms_url_reads_environment() {
        let cmd = Cli::command();
        let arg = cmd
            .get_arguments()
            .find(|arg| arg.get_id() == "cms_url")
            .unwrap();
        assert_eq!(
            arg.get_env().and_then(|env| env.to_str()),
            Some("STOREFRONT_CMS_URL")
        );
    }

    #[test]
    fn test_saved_single_response() {
        let file = saved_response(&json!({"data": article_json(4, "Rice lager")}));
        let response = read_response(Some(file.path().to_path_buf())).unwrap();
        assert!(!is_collection(&response));

        let normalized: Value = serde_json::from_str(&normalize_output(&response).unwrap()).unwrap();
        assert_eq!(normalized["Id"], "4");
        assert_eq!(normalized["Content"][0]["Component"], "hero");
        assert_eq!(normalized["Content"][0]["HeroBgImg"], "");
        assert_eq!(normalized["Content"][1]["Component"], "unknown-widget");

        let html = render_output(&response).unwrap();
        assert!(html.starts_with(r#"<div class="article-page"><a class="back-link" href="/blog">"#));
        assert!(html.contains("<h1>Rice lager</h1>"));
        assert!(html.contains("<pre>"));

        assert!(normalize_input(Some(file.path().to_path_buf())).is_ok());
        assert!(render_input(Some(file.path().to_path_buf())).is_ok());
    }

    #[test]
    fn test_saved_collection_response() {
        let file = saved_response(&json!({
            "data": [article_json(1, "First brew"), article_json(2, "Second brew")]
        }));
        let response = read_response(Some(file.path().to_path_buf())).unwrap();
        assert!(is_collection(&response));

        let normalized: Value = serde_json::from_str(&normalize_output(&response).unwrap()).unwrap();
        let ids: Vec<&str> = normalized
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|article| article["Id"].as_str())
            .collect();
        assert_eq!(ids, ["1", "2"]);

        let html = render_output(&response).unwrap();
        assert_eq!(html.matches(r#"<article class="article-card""#).count(), 2);
        assert!(html.contains(r#"href="/blog/first-brew?id=1""#));
        assert!(html.find("First brew") < html.find("Second brew"));

        assert!(normalize_input(Some(file.path().to_path_buf())).is_ok());
        assert!(render_input(Some(file.path().to_path_buf())).is_ok());
    }

    #[test]
    fn test_saved_response_must_be_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(read_response(Some(file.path().to_path_buf())).is_err());
        assert!(normalize_input(Some(file.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_is_collection() {
        assert!(is_collection(&json!({"data": []})));
        assert!(!is_collection(&json!({"data": {"id": 1}})));
        assert!(!is_collection(&json!({})));
    }
}
