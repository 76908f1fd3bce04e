use crate::config::DEFAULT_ARCHIVE_FILENAME;
use crate::core::catalog::SUMMARY_TAG_LIMIT;
use crate::domain::labels::Labels;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub site: SiteSection,
    pub build: BuildSection,
    pub monitoring: Option<MonitoringSection>,
    #[serde(default)]
    pub labels: Labels,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub title: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSection {
    pub output_path: String,
    pub archive: Option<ArchiveSection>,
    pub summary_tag_limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveSection {
    pub enabled: bool,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringSection {
    pub enabled: bool,
    pub json_logs: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SITE_BASE_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn archive_enabled(&self) -> bool {
        self.build.archive.as_ref().is_some_and(|a| a.enabled)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().is_some_and(|m| m.enabled)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.json_logs)
            .unwrap_or(false)
    }

    /// 命令列覆蓋：強制開啟封存
    pub fn enable_archive(&mut self) {
        match self.build.archive.as_mut() {
            Some(archive) => archive.enabled = true,
            None => {
                self.build.archive = Some(ArchiveSection {
                    enabled: true,
                    filename: None,
                })
            }
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn output_path(&self) -> &str {
        &self.build.output_path
    }

    fn site_title(&self) -> &str {
        &self.site.title
    }

    fn base_url(&self) -> &str {
        self.site.base_url.as_deref().unwrap_or("/")
    }

    fn labels(&self) -> &Labels {
        &self.labels
    }

    fn summary_tag_limit(&self) -> usize {
        self.build.summary_tag_limit.unwrap_or(SUMMARY_TAG_LIMIT)
    }

    fn archive_filename(&self) -> Option<&str> {
        let archive = self.build.archive.as_ref().filter(|a| a.enabled)?;
        Some(archive.filename.as_deref().unwrap_or(DEFAULT_ARCHIVE_FILENAME))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("site.title", &self.site.title)?;
        validation::validate_base_url("site.base_url", self.base_url())?;
        validation::validate_path("build.output_path", &self.build.output_path)?;

        if let Some(limit) = self.build.summary_tag_limit {
            validation::validate_range("build.summary_tag_limit", limit, 1, 10)?;
        }

        if let Some(filename) = self.archive_filename() {
            validation::validate_path("build.archive.filename", filename)?;
            if !filename.ends_with(".zip") {
                return Err(SiteError::InvalidConfigValueError {
                    field: "build.archive.filename".to_string(),
                    value: filename.to_string(),
                    reason: "Archive filename must end with .zip".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[site]
title = "TechConsult"

[build]
output_path = "./public"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.site_title(), "TechConsult");
        assert_eq!(config.base_url(), "/");
        assert_eq!(config.output_path(), "./public");
        assert_eq!(config.summary_tag_limit(), SUMMARY_TAG_LIMIT);
        assert_eq!(config.archive_filename(), None);
        assert!(!config.monitoring_enabled());
        assert_eq!(config.labels, Labels::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config_with_labels() {
        let toml_content = r#"
[site]
title = "RailsDev"
base_url = "https://example.com/"

[build]
output_path = "./public"
summary_tag_limit = 2

[build.archive]
enabled = true
filename = "release.zip"

[monitoring]
enabled = true
json_logs = true

[labels]
articles_title = "Blog"
no_articles = "Nothing here yet."
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.archive_filename(), Some("release.zip"));
        assert_eq!(config.summary_tag_limit(), 2);
        assert!(config.monitoring_enabled());
        assert!(config.json_logs());
        assert_eq!(config.labels.articles_title, "Blog");
        assert_eq!(config.labels.read_more, "Read More");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PORTFOLIO_TEST_OUTPUT", "/tmp/portfolio-out");

        let toml_content = r#"
[site]
title = "TechConsult"

[build]
output_path = "${PORTFOLIO_TEST_OUTPUT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), "/tmp/portfolio-out");

        std::env::remove_var("PORTFOLIO_TEST_OUTPUT");
    }

    #[test]
    fn test_unset_env_var_is_kept() {
        let toml_content = r#"
[site]
title = "${PORTFOLIO_TEST_UNSET_VARIABLE}"

[build]
output_path = "./public"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.site.title, "${PORTFOLIO_TEST_UNSET_VARIABLE}");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[site]
title = "TechConsult"
base_url = "ftp://example.com"

[build]
output_path = "./public"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let toml_content = r#"
[site]
title = "TechConsult"

[build]
output_path = "./public"
summary_tag_limit = 0
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let toml_content = r#"
[site]
title = "TechConsult"

[build]
output_path = "./public"

[build.archive]
enabled = true
filename = "site.tar"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_section_is_error() {
        let result = TomlConfig::from_toml_str("[site]\ntitle = \"x\"\n");
        assert!(matches!(result, Err(SiteError::ConfigValidationError { .. })));
    }

    #[test]
    fn test_enable_archive_override() {
        let mut config = TomlConfig::from_toml_str(
            "[site]\ntitle = \"x\"\n\n[build]\noutput_path = \"out\"\n",
        )
        .unwrap();
        config.enable_archive();
        assert_eq!(config.archive_filename(), Some(DEFAULT_ARCHIVE_FILENAME));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[site]
title = "File Test"

[build]
output_path = "./public"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.site.title, "File Test");
    }
}
