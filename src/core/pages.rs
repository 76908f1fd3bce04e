//! Page templates of the site.
//!
//! Every page is an askama template under `templates/` extending
//! `base.html`. The structs below hold what a template reads, already
//! resolved to hrefs and labels, so the templates only print fields.
//! Askama escapes every printed value; the article body comes from
//! [`render_content`], which escapes its own text, and is inserted with
//! `|safe`.

use askama::Template;

use crate::core::catalog::ArticleCatalog;
use crate::core::filter::FilterState;
use crate::core::html::{Layout, Routes};
use crate::core::markup::render_content;
use crate::domain::labels::Labels;
use crate::domain::model::{Article, CategoryFilter, Portfolio, Project};
use crate::utils::error::Result;

#[derive(Template)]
#[template(path = "home.html")]
struct HomePage<'a> {
    layout: &'a Layout,
    title: String,
    portfolio: &'a Portfolio,
    articles_href: String,
    articles_label: &'a str,
}

#[derive(Template)]
#[template(path = "portfolio.html")]
struct PortfolioPage<'a> {
    layout: &'a Layout,
    title: String,
    portfolio: &'a Portfolio,
}

#[derive(Template)]
#[template(path = "projects.html")]
struct ProjectsPage<'a> {
    layout: &'a Layout,
    title: String,
    projects: &'a [Project],
}

/// A filter-bar entry.
struct FilterLink {
    label: String,
    href: String,
    active: bool,
}

/// Listing card of one article.
struct ArticleCard {
    href: String,
    title: String,
    excerpt: String,
    category_slug: &'static str,
    category_label: String,
    read_time: u32,
    published_at: String,
    formatted_date: String,
    tags: Vec<String>,
}

#[derive(Template)]
#[template(path = "articles/listing.html")]
struct ListingPage<'a> {
    layout: &'a Layout,
    title: String,
    labels: &'a Labels,
    filters: Vec<FilterLink>,
    cards: Vec<ArticleCard>,
}

#[derive(Template)]
#[template(path = "articles/detail.html")]
struct ArticlePage<'a> {
    layout: &'a Layout,
    title: String,
    labels: &'a Labels,
    article: &'a Article,
    back_href: String,
    category_href: String,
    category_label: &'a str,
    content: String,
}

#[derive(Template)]
#[template(path = "articles/not_found.html")]
struct NotFoundPage<'a> {
    layout: &'a Layout,
    title: String,
    labels: &'a Labels,
    back_href: String,
}

pub struct PageRenderer {
    layout: Layout,
    labels: Labels,
    tag_limit: usize,
}

impl PageRenderer {
    pub fn new(layout: Layout, labels: Labels, tag_limit: usize) -> Self {
        Self {
            layout,
            labels,
            tag_limit,
        }
    }

    fn href(&self, path: &str) -> String {
        self.layout.routes.href(path)
    }

    fn articles_href(&self) -> String {
        self.href(&Routes::listing_path(CategoryFilter::All))
    }

    pub fn home(&self, portfolio: &Portfolio) -> Result<String> {
        let page = HomePage {
            layout: &self.layout,
            title: self.layout.title(""),
            portfolio,
            articles_href: self.articles_href(),
            articles_label: &self.labels.articles_title,
        };
        Ok(page.render()?)
    }

    pub fn portfolio(&self, portfolio: &Portfolio) -> Result<String> {
        let page = PortfolioPage {
            layout: &self.layout,
            title: self.layout.title("Portfolio"),
            portfolio,
        };
        Ok(page.render()?)
    }

    pub fn projects(&self, portfolio: &Portfolio) -> Result<String> {
        let page = ProjectsPage {
            layout: &self.layout,
            title: self.layout.title("Projects"),
            projects: &portfolio.projects,
        };
        Ok(page.render()?)
    }

    /// Article listing for one filter state.
    pub fn listing(&self, catalog: &ArticleCatalog, filter: CategoryFilter) -> Result<String> {
        let state = FilterState::with_selection(filter);

        let filters = state
            .options(&self.labels)
            .into_iter()
            .map(|option| FilterLink {
                href: self.href(&Routes::listing_path(option.filter)),
                label: option.label,
                active: option.active,
            })
            .collect();

        let cards = catalog
            .list_by_category(state.selected())
            .into_iter()
            .map(|article| self.article_card(article))
            .collect();

        let title = match filter {
            CategoryFilter::All => self.labels.articles_title.clone(),
            CategoryFilter::Only(_) => format!(
                "{}: {}",
                self.labels.articles_title,
                self.labels.filter(filter)
            ),
        };

        let page = ListingPage {
            layout: &self.layout,
            title: self.layout.title(&title),
            labels: &self.labels,
            filters,
            cards,
        };
        Ok(page.render()?)
    }

    fn article_card(&self, article: &Article) -> ArticleCard {
        let summary = article.summary(self.tag_limit);
        ArticleCard {
            href: self.href(&Routes::article_path(&summary.id)),
            category_slug: summary.category.slug(),
            category_label: self.labels.category(summary.category).to_string(),
            read_time: summary.read_time,
            published_at: summary.published_at.to_string(),
            formatted_date: article.formatted_date(),
            title: summary.title,
            excerpt: summary.excerpt,
            tags: summary.tags,
        }
    }

    pub fn article_detail(&self, article: &Article) -> Result<String> {
        let page = ArticlePage {
            layout: &self.layout,
            title: self.layout.title(&article.title),
            labels: &self.labels,
            article,
            back_href: self.articles_href(),
            category_href: self.href(&Routes::listing_path(article.category.into())),
            category_label: self.labels.category(article.category),
            content: render_content(&article.content),
        };
        Ok(page.render()?)
    }

    /// Fallback for an id that is not in the catalog.
    pub fn not_found(&self) -> Result<String> {
        let page = NotFoundPage {
            layout: &self.layout,
            title: self.layout.title(&self.labels.not_found),
            labels: &self.labels,
            back_href: self.articles_href(),
        };
        Ok(page.render()?)
    }

    /// Detail page for `id`, or the not-found page when it is absent.
    pub fn article_or_not_found(&self, catalog: &ArticleCatalog, id: &str) -> Result<String> {
        match catalog.find_by_id(id) {
            Some(article) => self.article_detail(article),
            None => {
                tracing::debug!("Article '{}' not found, rendering fallback", id);
                self.not_found()
            }
        }
    }
}
