use portfolio_site::content::portfolio::portfolio;
use portfolio_site::core::catalog::builtin;
use portfolio_site::core::site::{dry_run, planned_paths};
use portfolio_site::{
    ArticleCatalog, ArticleSummary, LocalStorage, MemoryStorage, SiteEngine, SiteError,
    SitePipeline, TomlConfig,
};
use std::io::Read;
use std::sync::Arc;
use tempfile::TempDir;

fn config_for(output_path: &str, extra: &str) -> TomlConfig {
    let toml_content = format!(
        r#"
[site]
title = "TechConsult"
base_url = "/"

[build]
output_path = "{}"
{}
"#,
        output_path, extra
    );
    TomlConfig::from_toml_str(&toml_content).unwrap()
}

#[tokio::test]
async fn test_end_to_end_build_writes_every_page() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = SitePipeline::new(storage, config_for(&output_path, ""));
    let engine = SiteEngine::new(pipeline);

    let result = engine.run().await.unwrap();
    assert_eq!(result, output_path);

    for path in planned_paths(builtin()) {
        let full_path = temp_dir.path().join(&path);
        assert!(full_path.exists(), "missing {}", path);
    }

    let listing = std::fs::read_to_string(temp_dir.path().join("articles/category/react/index.html")).unwrap();
    assert!(listing.contains("React Performance Optimization Techniques"));
    assert!(listing.contains("State Management in React"));
    assert!(!listing.contains("Docker Best Practices for Rails Applications"));

    let detail = std::fs::read_to_string(temp_dir.path().join("articles/3/index.html")).unwrap();
    assert!(detail.contains("Building Real-Time Features with Rails and React"));
    assert!(detail.contains("<pre><code class=\"language-ruby\">"));
    assert!(detail.contains("March 10, 2024"));

    let not_found = std::fs::read_to_string(temp_dir.path().join("404.html")).unwrap();
    assert!(not_found.contains("Article not found"));
    assert!(not_found.contains("Back to Articles"));
}

#[tokio::test]
async fn test_index_json_lists_all_summaries() {
    let storage = MemoryStorage::new();
    let pipeline = SitePipeline::new(storage, config_for("./dist", "summary_tag_limit = 2"));
    let engine = SiteEngine::new(pipeline);
    engine.run().await.unwrap();

    let storage = engine.pipeline().storage();
    let json = storage.get("articles/index.json").unwrap();
    let summaries: Vec<ArticleSummary> = serde_json::from_slice(&json).unwrap();

    let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    assert!(summaries.iter().all(|s| s.tags.len() == 2));
}

#[tokio::test]
async fn test_archive_contains_every_page() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let config = config_for(
        &output_path,
        "\n[build.archive]\nenabled = true\nfilename = \"release.zip\"\n",
    );
    let storage = LocalStorage::new(output_path.clone());
    let engine = SiteEngine::new(SitePipeline::new(storage, config));

    let result = engine.run().await.unwrap();
    assert!(result.ends_with("release.zip"));

    let zip_data = std::fs::read(temp_dir.path().join("release.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();

    let expected = planned_paths(builtin());
    assert_eq!(archive.len(), expected.len());
    for path in &expected {
        assert!(archive.by_name(path).is_ok(), "archive missing {}", path);
    }

    let mut home = String::new();
    archive
        .by_name("index.html")
        .unwrap()
        .read_to_string(&mut home)
        .unwrap();
    assert!(home.contains("id=\"services\""));
}

#[tokio::test]
async fn test_labels_override_reaches_pages() {
    let config = config_for(
        "./dist",
        "\n[labels]\nno_articles = \"Nothing yet.\"\narticles_title = \"Blog\"\n",
    );
    let engine = SiteEngine::new(SitePipeline::new(MemoryStorage::new(), config));
    engine.run().await.unwrap();

    let listing = engine.pipeline().storage().get("articles/index.html").unwrap();
    let listing = String::from_utf8(listing).unwrap();
    assert!(listing.contains("<h1>Blog</h1>"));
    assert!(listing.contains("<a class=\"nav-link\" href=\"/articles/\">Blog</a>"));

    let home = engine.pipeline().storage().get("index.html").unwrap();
    let home = String::from_utf8(home).unwrap();
    assert!(home.contains("<a class=\"nav-link\" href=\"/articles/\">Blog</a>"));
}

#[tokio::test]
async fn test_article_id_cannot_leave_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("dist");
    let output_path = output_dir.to_str().unwrap().to_string();

    let mut articles = builtin().articles().to_vec();
    articles[0].id = "../../escaped".to_string();
    let result = ArticleCatalog::new(articles);
    assert!(matches!(result, Err(SiteError::ValidationError { .. })));

    let catalog = Arc::new(builtin().clone());
    let pipeline = SitePipeline::with_content(
        LocalStorage::new(output_path.clone()),
        config_for(&output_path, ""),
        catalog,
        Arc::new(portfolio()),
    );
    SiteEngine::new(pipeline).run().await.unwrap();

    assert!(!temp_dir.path().join("escaped").exists());
    for path in planned_paths(builtin()) {
        assert!(output_dir.join(&path).exists(), "missing {}", path);
    }
}

#[cfg(feature = "cli")]
#[tokio::test]
async fn test_dry_run_keeps_monitoring_and_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("dist");
    let config = config_for(output_dir.to_str().unwrap(), "");

    let report = dry_run(config, true).await.unwrap();

    assert!(report.monitored);
    assert_eq!(report.pages.len(), planned_paths(builtin()).len());
    assert!(report.pages.iter().all(|(_, size)| *size > 0));
    assert!(!output_dir.exists());
}

#[tokio::test]
async fn test_dry_run_without_monitoring() {
    let report = dry_run(config_for("./dist", ""), false).await.unwrap();
    assert!(!report.monitored);
    assert!(report
        .pages
        .iter()
        .any(|(path, _)| path == "articles/index.json"));
}

#[test]
fn test_run_with_block_on() {
    let engine = SiteEngine::new(SitePipeline::new(MemoryStorage::new(), config_for("./dist", "")));
    let output = tokio_test::block_on(engine.run()).unwrap();
    assert_eq!(output, "./dist");
    assert_eq!(
        engine.pipeline().storage().paths().len(),
        planned_paths(builtin()).len()
    );
}
