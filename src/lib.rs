pub mod adapters;
pub mod config;
pub mod content;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::storage::{LocalStorage, MemoryStorage};
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{catalog::ArticleCatalog, engine::SiteEngine, site::SitePipeline};
pub use crate::domain::labels::Labels;
pub use crate::domain::model::{Article, ArticleSummary, Category, CategoryFilter};
pub use crate::utils::error::{Result, SiteError};
