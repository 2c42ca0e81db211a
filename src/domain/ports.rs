use crate::domain::model::{Hierarchy, LoadSummary, LoadedTable};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn scheme_title(&self) -> &str;
    fn scheme_description(&self) -> &str;
    fn base_uri(&self) -> &str;
    fn language(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<LoadedTable>;
    async fn transform(&self, table: LoadedTable) -> Result<Hierarchy>;
    async fn load(&self, hierarchy: Hierarchy) -> Result<LoadSummary>;
}
