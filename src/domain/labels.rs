use serde::{Deserialize, Serialize};

use crate::domain::model::{Category, CategoryFilter};

/// User-visible strings of the navigation and the article pages.
///
/// Every field has an English default, so a `[labels]` table in the TOML
/// configuration only needs the keys it wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub nav_home: String,
    pub nav_portfolio: String,
    pub nav_projects: String,
    pub articles_title: String,
    pub articles_subtitle: String,
    pub all: String,
    pub rails: String,
    pub react: String,
    pub fullstack: String,
    pub devops: String,
    pub min_read: String,
    pub read_more: String,
    pub no_articles: String,
    pub not_found: String,
    pub back_to_articles: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            nav_home: "Home".to_string(),
            nav_portfolio: "Portfolio".to_string(),
            nav_projects: "Projects".to_string(),
            articles_title: "Articles".to_string(),
            articles_subtitle: "Best Practices & Insights".to_string(),
            all: "All".to_string(),
            rails: "Ruby on Rails".to_string(),
            react: "ReactJS".to_string(),
            fullstack: "Full-Stack".to_string(),
            devops: "DevOps".to_string(),
            min_read: "min read".to_string(),
            read_more: "Read More".to_string(),
            no_articles: "No articles found in this category.".to_string(),
            not_found: "Article not found".to_string(),
            back_to_articles: "Back to Articles".to_string(),
        }
    }
}

impl Labels {
    pub fn category(&self, category: Category) -> &str {
        match category {
            Category::Rails => &self.rails,
            Category::React => &self.react,
            Category::Fullstack => &self.fullstack,
            Category::Devops => &self.devops,
        }
    }

    pub fn filter(&self, filter: CategoryFilter) -> &str {
        match filter {
            CategoryFilter::All => &self.all,
            CategoryFilter::Only(category) => self.category(category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let labels: Labels = toml::from_str("read_more = \"Continue\"").unwrap();
        assert_eq!(labels.read_more, "Continue");
        assert_eq!(labels.min_read, "min read");
        assert_eq!(labels.filter(CategoryFilter::All), "All");
        assert_eq!(labels.category(Category::Devops), "DevOps");
    }
}
