use crate::core::{Pipeline, UploadReceipt};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives the pipeline stages in order and logs stage boundaries.
///
/// Errors are returned to the caller, not swallowed here; the entry point
/// decides whether a failed run is log-only or a non-zero exit.
pub struct BackupEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> BackupEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<UploadReceipt> {
        tracing::info!("Starting backup run");

        let material = self.pipeline.prepare().await?;
        tracing::info!("Crypto material ready");

        let artifact = self.pipeline.seal(&material).await?;
        tracing::info!(
            "Sealed artifact '{}' ({} bytes)",
            artifact.blob_name,
            artifact.bytes
        );
        self.monitor.log_stats("Seal");

        let receipt = self.pipeline.upload(artifact).await?;
        tracing::info!(
            "Uploaded '{}' to container '{}'",
            receipt.blob_name,
            receipt.container
        );
        self.monitor.log_final_stats();

        Ok(receipt)
    }
}
