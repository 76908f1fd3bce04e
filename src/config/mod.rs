pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::labels::Labels;
#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_ARCHIVE_FILENAME: &str = "site.zip";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Builds the static portfolio site")]
pub struct CliConfig {
    #[arg(long, default_value = "./dist")]
    pub output_path: String,

    #[arg(long, default_value = "TechConsult")]
    pub site_title: String,

    #[arg(long, default_value = "/")]
    pub base_url: String,

    #[arg(long, help = "Also bundle every page into a zip archive")]
    pub archive: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory after each build phase")]
    pub monitor: bool,

    #[arg(skip)]
    #[serde(default)]
    pub labels: Labels,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn site_title(&self) -> &str {
        &self.site_title
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn labels(&self) -> &Labels {
        &self.labels
    }

    fn summary_tag_limit(&self) -> usize {
        crate::core::catalog::SUMMARY_TAG_LIMIT
    }

    fn archive_filename(&self) -> Option<&str> {
        self.archive.then_some(DEFAULT_ARCHIVE_FILENAME)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("site_title", &self.site_title)?;
        validation::validate_base_url("base_url", &self.base_url)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["portfolio-site"]);
        assert_eq!(config.output_path(), "./dist");
        assert_eq!(config.base_url(), "/");
        assert_eq!(config.archive_filename(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_archive_flag() {
        let config = CliConfig::parse_from(["portfolio-site", "--archive", "--output-path", "out"]);
        assert_eq!(config.archive_filename(), Some(DEFAULT_ARCHIVE_FILENAME));
        assert_eq!(config.output_path(), "out");
    }

    #[test]
    fn test_cli_rejects_bad_base_url() {
        let config = CliConfig::parse_from(["portfolio-site", "--base-url", "blog"]);
        assert!(config.validate().is_err());
    }
}
