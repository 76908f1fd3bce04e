use crate::adapters::storage::MemoryStorage;
use crate::content::portfolio::portfolio;
use crate::core::catalog::{self, ArticleCatalog};
use crate::core::engine::SiteEngine;
use crate::core::html::{Layout, Routes};
use crate::core::pages::PageRenderer;
use crate::domain::model::{
    ArticleSummary, CategoryFilter, Page, Portfolio, RenderedSite, SiteContent,
};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;
use chrono::Datelike;
use std::io::Write;
use std::sync::Arc;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Builds the static site: gathers content, renders every page, writes the
/// pages through `storage`.
pub struct SitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    catalog: Arc<ArticleCatalog>,
    portfolio: Arc<Portfolio>,
}

impl<S: Storage, C: ConfigProvider> SitePipeline<S, C> {
    /// Uses the built-in catalog and portfolio.
    pub fn new(storage: S, config: C) -> Self {
        Self::with_content(
            storage,
            config,
            Arc::new(catalog::builtin().clone()),
            Arc::new(portfolio()),
        )
    }

    pub fn with_content(
        storage: S,
        config: C,
        catalog: Arc<ArticleCatalog>,
        portfolio: Arc<Portfolio>,
    ) -> Self {
        Self {
            storage,
            config,
            catalog,
            portfolio,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn renderer(&self, portfolio: &Portfolio) -> PageRenderer {
        let layout = Layout::new(
            self.config.site_title(),
            &portfolio.profile.brand,
            &portfolio.tagline,
            chrono::Utc::now().year(),
            Routes::new(self.config.base_url()),
            self.config.labels(),
        );
        PageRenderer::new(
            layout,
            self.config.labels().clone(),
            self.config.summary_tag_limit(),
        )
    }
}

/// Output paths of every page, in the order they are rendered.
pub fn planned_paths(catalog: &ArticleCatalog) -> Vec<String> {
    let mut paths = vec![
        Routes::home_path().to_string(),
        Routes::portfolio_path().to_string(),
        Routes::projects_path().to_string(),
    ];
    paths.extend(CategoryFilter::options().map(Routes::listing_path));
    paths.extend(
        catalog
            .articles()
            .iter()
            .map(|article| Routes::article_path(&article.id)),
    );
    paths.push(Routes::not_found_path().to_string());
    paths.push("404.html".to_string());
    paths.push(Routes::index_json_path().to_string());
    paths
}

/// Pages a build would write, with their sizes in bytes.
#[derive(Debug, Clone)]
pub struct DryRunReport {
    pub pages: Vec<(String, usize)>,
    pub monitored: bool,
}

/// Runs a full build into memory; nothing is written to disk.
pub async fn dry_run<C: ConfigProvider>(
    config: C,
    monitor_enabled: bool,
) -> Result<DryRunReport> {
    let pipeline = SitePipeline::new(MemoryStorage::new(), config);
    let engine = SiteEngine::new_with_monitoring(pipeline, monitor_enabled);
    engine.run().await?;

    let storage = engine.pipeline().storage();
    let pages = storage
        .paths()
        .into_iter()
        .map(|path| {
            let size = storage.get(&path).map_or(0, |data| data.len());
            (path, size)
        })
        .collect();

    Ok(DryRunReport {
        pages,
        monitored: engine.is_monitoring(),
    })
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SitePipeline<S, C> {
    async fn collect(&self) -> Result<SiteContent> {
        tracing::debug!(
            "Collected {} articles, {} experiences, {} projects",
            self.catalog.len(),
            self.portfolio.experiences.len(),
            self.portfolio.projects.len()
        );

        if self.catalog.is_empty() {
            tracing::warn!("Article catalog is empty, listing pages will show the empty message");
        }

        Ok(SiteContent {
            catalog: Arc::clone(&self.catalog),
            portfolio: Arc::clone(&self.portfolio),
        })
    }

    async fn render(&self, content: SiteContent) -> Result<RenderedSite> {
        let renderer = self.renderer(&content.portfolio);
        let catalog = content.catalog.as_ref();
        let mut pages = Vec::new();

        pages.push(Page {
            path: Routes::home_path().to_string(),
            body: renderer.home(&content.portfolio)?,
        });
        pages.push(Page {
            path: Routes::portfolio_path().to_string(),
            body: renderer.portfolio(&content.portfolio)?,
        });
        pages.push(Page {
            path: Routes::projects_path().to_string(),
            body: renderer.projects(&content.portfolio)?,
        });

        // 每個篩選狀態各輸出一頁
        for filter in CategoryFilter::options() {
            tracing::debug!("Rendering listing for '{}'", filter.slug());
            pages.push(Page {
                path: Routes::listing_path(filter),
                body: renderer.listing(catalog, filter)?,
            });
        }

        for article in catalog.articles() {
            pages.push(Page {
                path: Routes::article_path(&article.id),
                body: renderer.article_detail(article)?,
            });
        }

        let not_found = renderer.not_found()?;
        pages.push(Page {
            path: Routes::not_found_path().to_string(),
            body: not_found.clone(),
        });
        pages.push(Page {
            path: "404.html".to_string(),
            body: not_found,
        });

        let limit = self.config.summary_tag_limit();
        let summaries: Vec<ArticleSummary> = catalog
            .list_by_category(CategoryFilter::All)
            .into_iter()
            .map(|article| article.summary(limit))
            .collect();
        pages.push(Page {
            path: Routes::index_json_path().to_string(),
            body: serde_json::to_string_pretty(&summaries)?,
        });

        Ok(RenderedSite { pages })
    }

    async fn publish(&self, site: RenderedSite) -> Result<String> {
        for page in &site.pages {
            tracing::debug!("Writing {} ({} bytes)", page.path, page.body.len());
            self.storage
                .write_file(&page.path, page.body.as_bytes())
                .await?;
        }

        let Some(archive_name) = self.config.archive_filename() else {
            return Ok(self.config.output_path().to_string());
        };

        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
            for page in &site.pages {
                zip.start_file(page.path.as_str(), SimpleFileOptions::default())?;
                zip.write_all(page.body.as_bytes())?;
            }
            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        tracing::debug!("Writing archive ({} bytes) to storage", zip_data.len());
        self.storage.write_file(archive_name, &zip_data).await?;

        Ok(format!("{}/{}", self.config.output_path(), archive_name))
    }
}
