use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::core::catalog::ArticleCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Rails,
    React,
    Fullstack,
    Devops,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Rails,
        Category::React,
        Category::Fullstack,
        Category::Devops,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Category::Rails => "rails",
            Category::React => "react",
            Category::Fullstack => "fullstack",
            Category::Devops => "devops",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rails" => Ok(Category::Rails),
            "react" => Ok(Category::React),
            "fullstack" => Ok(Category::Fullstack),
            "devops" => Ok(Category::Devops),
            _ => Err(()),
        }
    }
}

/// 分類篩選條件："all" 或單一分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Every filter state, "all" first, then categories in declaration order.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.slug(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub published_at: NaiveDate,
    pub read_time: u32,
    pub category: Category,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
}

impl Article {
    /// 顯示用日期，例如 "January 15, 2024"
    pub fn formatted_date(&self) -> String {
        format_date(self.published_at)
    }

    pub fn summary(&self, tag_limit: usize) -> ArticleSummary {
        ArticleSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            category: self.category,
            tags: self.tags.iter().take(tag_limit).cloned().collect(),
            read_time: self.read_time,
            published_at: self.published_at,
        }
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Listing-card view of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub read_time: u32,
    pub published_at: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub brand: String,
    pub headline: String,
    pub introduction: String,
    pub email: String,
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreValue {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub company_type: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub url: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub company: String,
    pub year: String,
    pub demo_url: Option<String>,
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub call_to_action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub hero: Hero,
    pub about: Vec<String>,
    pub tagline: String,
    pub services: Vec<Service>,
    pub values: Vec<CoreValue>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
}

/// Everything the render phase needs.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub catalog: Arc<ArticleCatalog>,
    pub portfolio: Arc<Portfolio>,
}

/// A generated file, addressed relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub path: String,
    pub body: String,
}

#[derive(Debug, Clone, Default)]
pub struct RenderedSite {
    pub pages: Vec<Page>,
}
