//! The article catalog: an immutable, ordered set of articles with
//! category filtering and id lookup.

use crate::content::articles::seed_articles;
use crate::domain::model::{Article, ArticleSummary, CategoryFilter};
use crate::utils::error::{Result, SiteError};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Ids become path segments and hrefs, so they are limited to slug characters.
static ARTICLE_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Number of tags shown on a listing card.
pub const SUMMARY_TAG_LIMIT: usize = 3;

static BUILTIN: LazyLock<ArticleCatalog> = LazyLock::new(|| {
    seed_articles()
        .and_then(ArticleCatalog::new)
        .expect("built-in article data is valid")
});

/// The catalog compiled into the program, built on first use.
pub fn builtin() -> &'static ArticleCatalog {
    &BUILTIN
}

#[derive(Debug, Clone)]
pub struct ArticleCatalog {
    articles: Vec<Article>,
    by_id: HashMap<String, usize>,
}

impl ArticleCatalog {
    /// Builds a catalog, rejecting duplicate, blank or non-slug ids, blank
    /// titles and zero read times.
    pub fn new(articles: Vec<Article>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(articles.len());

        for (position, article) in articles.iter().enumerate() {
            if article.id.trim().is_empty() {
                return Err(SiteError::ValidationError {
                    message: format!("article at position {} has an empty id", position),
                });
            }
            if !ARTICLE_ID.is_match(&article.id) {
                return Err(SiteError::ValidationError {
                    message: format!(
                        "article id '{}' may only contain letters, digits, '-' and '_'",
                        article.id
                    ),
                });
            }
            if article.title.trim().is_empty() {
                return Err(SiteError::ValidationError {
                    message: format!("article '{}' has an empty title", article.id),
                });
            }
            if article.read_time == 0 {
                return Err(SiteError::ValidationError {
                    message: format!("article '{}' has a zero read time", article.id),
                });
            }
            if by_id.insert(article.id.clone(), position).is_some() {
                return Err(SiteError::DuplicateArticleError {
                    id: article.id.clone(),
                });
            }
        }

        tracing::debug!("Article catalog built with {} articles", articles.len());
        Ok(Self { articles, by_id })
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Articles matching `filter`, in catalog order.
    pub fn list_by_category(&self, filter: impl Into<CategoryFilter>) -> Vec<&Article> {
        let filter = filter.into();
        self.articles
            .iter()
            .filter(|article| filter.matches(article.category))
            .collect()
    }

    /// Like [`list_by_category`](Self::list_by_category) but takes the
    /// selector as text. Unknown selectors match nothing.
    pub fn list_by_selector(&self, selector: &str) -> Vec<&Article> {
        match selector.parse::<CategoryFilter>() {
            Ok(filter) => self.list_by_category(filter),
            Err(()) => {
                tracing::debug!("Unknown category selector '{}'", selector);
                Vec::new()
            }
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Article> {
        self.by_id.get(id).map(|&position| &self.articles[position])
    }

    pub fn summaries(&self, filter: impl Into<CategoryFilter>) -> Vec<ArticleSummary> {
        self.list_by_category(filter)
            .into_iter()
            .map(|article| article.summary(SUMMARY_TAG_LIMIT))
            .collect()
    }
}
