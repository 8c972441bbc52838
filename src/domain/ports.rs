use crate::domain::model::{MenuGroups, WritePayload};
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

/// A sink bound to one fixed output file.
#[async_trait]
pub trait MenuWriter: Send + Sync {
    fn target(&self) -> &str;
    async fn write(&self, payload: &WritePayload) -> Result<()>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<String>>;
    async fn transform(&self, lines: Vec<String>) -> Result<MenuGroups>;
    async fn load(&self, groups: MenuGroups) -> Result<Vec<String>>;
}
