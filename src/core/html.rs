use crate::domain::labels::Labels;
use crate::domain::model::CategoryFilter;

/// Output paths and hrefs of every page, relative to the site root.
#[derive(Debug, Clone)]
pub struct Routes {
    base_url: String,
}

impl Routes {
    pub fn new(base_url: &str) -> Self {
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    pub fn href(&self, path: &str) -> String {
        let path = path.strip_suffix("index.html").unwrap_or(path);
        format!("{}{}", self.base_url, path)
    }

    pub fn home_path() -> &'static str {
        "index.html"
    }

    pub fn portfolio_path() -> &'static str {
        "portfolio/index.html"
    }

    pub fn projects_path() -> &'static str {
        "projects/index.html"
    }

    pub fn listing_path(filter: CategoryFilter) -> String {
        match filter {
            CategoryFilter::All => "articles/index.html".to_string(),
            CategoryFilter::Only(category) => {
                format!("articles/category/{}/index.html", category.slug())
            }
        }
    }

    /// `id` is slug-safe; the catalog rejects anything else.
    pub fn article_path(id: &str) -> String {
        format!("articles/{}/index.html", id)
    }

    pub fn not_found_path() -> &'static str {
        "articles/not-found.html"
    }

    pub fn index_json_path() -> &'static str {
        "articles/index.json"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Shared page chrome, rendered by `templates/base.html`.
#[derive(Debug, Clone)]
pub struct Layout {
    pub site_title: String,
    pub brand: String,
    pub tagline: String,
    pub year: i32,
    pub routes: Routes,
    pub home_href: String,
    pub nav: Vec<NavLink>,
}

impl Layout {
    pub fn new(
        site_title: &str,
        brand: &str,
        tagline: &str,
        year: i32,
        routes: Routes,
        labels: &Labels,
    ) -> Self {
        let nav = [
            (&labels.nav_home, Routes::home_path().to_string()),
            (&labels.nav_portfolio, Routes::portfolio_path().to_string()),
            (&labels.nav_projects, Routes::projects_path().to_string()),
            (&labels.articles_title, Routes::listing_path(CategoryFilter::All)),
        ]
        .into_iter()
        .map(|(label, path)| NavLink {
            label: label.clone(),
            href: routes.href(&path),
        })
        .collect();

        Self {
            site_title: site_title.to_string(),
            brand: brand.to_string(),
            tagline: tagline.to_string(),
            year,
            home_href: routes.href(Routes::home_path()),
            routes,
            nav,
        }
    }

    /// `<title>` text: the page title followed by the site title.
    pub fn title(&self, page_title: &str) -> String {
        if page_title.is_empty() {
            self.site_title.clone()
        } else {
            format!("{} | {}", page_title, self.site_title)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Category;

    #[test]
    fn test_routes() {
        let routes = Routes::new("/site");
        assert_eq!(routes.href("index.html"), "/site/");
        assert_eq!(routes.href(&Routes::article_path("3")), "/site/articles/3/");
        assert_eq!(
            Routes::listing_path(CategoryFilter::Only(Category::React)),
            "articles/category/react/index.html"
        );
        assert_eq!(routes.href(Routes::not_found_path()), "/site/articles/not-found.html");
    }

    #[test]
    fn test_nav_follows_labels() {
        let labels = Labels {
            articles_title: "Blog".to_string(),
            nav_projects: "Work".to_string(),
            ..Labels::default()
        };
        let layout = Layout::new("TechConsult", "RailsDev", "Tagline", 2026, Routes::new("/"), &labels);

        let nav: Vec<(&str, &str)> = layout
            .nav
            .iter()
            .map(|link| (link.label.as_str(), link.href.as_str()))
            .collect();
        assert_eq!(
            nav,
            vec![
                ("Home", "/"),
                ("Portfolio", "/portfolio/"),
                ("Work", "/projects/"),
                ("Blog", "/articles/"),
            ]
        );
        assert_eq!(layout.home_href, "/");
    }

    #[test]
    fn test_page_title() {
        let layout = Layout::new("TechConsult", "RailsDev", "", 2026, Routes::new("/"), &Labels::default());
        assert_eq!(layout.title(""), "TechConsult");
        assert_eq!(layout.title("Articles"), "Articles | TechConsult");
    }
}
