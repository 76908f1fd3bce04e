use crate::domain::labels::Labels;
use crate::domain::model::{RenderedSite, SiteContent};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn site_title(&self) -> &str;
    fn base_url(&self) -> &str;
    fn labels(&self) -> &Labels;
    fn summary_tag_limit(&self) -> usize;
    /// 若為 Some，發佈時額外輸出整站 zip 封存檔
    fn archive_filename(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn collect(&self) -> Result<SiteContent>;
    async fn render(&self, content: SiteContent) -> Result<RenderedSite>;
    async fn publish(&self, site: RenderedSite) -> Result<String>;
}
