//! Server-rendered list and detail pages.
//!
//! Templates are compiled into the binary and rendered with Tera. Article
//! bodies go through [`chronicle_core::content::parse_blocks`] so headings,
//! subheadings and quotes get their own markup.

use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use chronicle_core::content::ContentBlock;
use chronicle_core::models::article::Article;

const BASE: &str = "base.html";
const INDEX: &str = "index.html";
const ARTICLE: &str = "article.html";
const NOT_FOUND: &str = "not_found.html";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("template rendering failed: {0}")]
    TemplateRender(String),
}

impl From<tera::Error> for RenderError {
    fn from(e: tera::Error) -> Self {
        RenderError::TemplateRender(e.to_string())
    }
}

pub struct Pages {
    tera: Tera,
}

/// What the templates see for one article.
#[derive(Serialize)]
struct ArticleView<'a> {
    id: i64,
    title: &'a str,
    excerpt: &'a str,
    topic: &'static str,
    reading_time: u32,
    created_at: String,
    short_date: String,
    long_date: String,
    blocks: Vec<ContentBlock>,
}

impl<'a> ArticleView<'a> {
    fn summary(article: &'a Article) -> Self {
        Self::build(article, Vec::new())
    }

    fn full(article: &'a Article) -> Self {
        Self::build(article, article.blocks())
    }

    fn build(article: &'a Article, blocks: Vec<ContentBlock>) -> Self {
        let ts = article.created_at;
        Self {
            id: article.id,
            title: &article.title,
            excerpt: &article.excerpt,
            topic: article.topic.as_str(),
            reading_time: article.reading_time,
            created_at: ts.to_string(),
            short_date: ts.strftime("%b %-d, %Y").to_string(),
            long_date: ts.strftime("%B %-d, %Y").to_string(),
            blocks,
        }
    }
}

impl Pages {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (BASE, include_str!("../templates/base.html")),
            (INDEX, include_str!("../templates/index.html")),
            (ARTICLE, include_str!("../templates/article.html")),
            (NOT_FOUND, include_str!("../templates/not_found.html")),
        ])
        .map_err(|e| RenderError::TemplateParse(e.to_string()))?;

        Ok(Self { tera })
    }

    pub fn article_list(&self, articles: &[Article]) -> Result<String, RenderError> {
        let views: Vec<ArticleView<'_>> = articles.iter().map(ArticleView::summary).collect();
        let mut context = Context::new();
        context.insert("articles", &views);
        Ok(self.tera.render(INDEX, &context)?)
    }

    pub fn article_detail(&self, article: &Article) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("article", &ArticleView::full(article));
        Ok(self.tera.render(ARTICLE, &context)?)
    }

    pub fn not_found(&self) -> Result<String, RenderError> {
        Ok(self.tera.render(NOT_FOUND, &Context::new())?)
    }
}
