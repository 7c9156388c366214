use crate::domain::model::{Artifact, CryptoMaterial, UploadReceipt};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote object storage as consumed by the pipeline. Two operations only:
/// idempotent private-container creation and whole-object put with overwrite.
pub trait ObjectStore: Send + Sync {
    fn ensure_container(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    fn put_object(
        &self,
        container: &str,
        name: &str,
        data: Vec<u8>,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_path(&self) -> &str;
    fn container_name(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn key_base64(&self) -> &str;
    /// Pinned IV for deterministic runs; `None` means a fresh IV per run.
    fn iv_base64(&self) -> Option<&str>;
}

/// The three sequential stages of one backup run. Each stage completes fully
/// before the next starts.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn prepare(&self) -> Result<CryptoMaterial>;
    async fn seal(&self, material: &CryptoMaterial) -> Result<Artifact>;
    async fn upload(&self, artifact: Artifact) -> Result<UploadReceipt>;
}
