pub mod catalog;
pub mod engine;
pub mod filter;
pub mod html;
pub mod markup;
pub mod pages;
pub mod site;

pub use crate::domain::model::{Page, RenderedSite, SiteContent};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
