use crate::core::ObjectStore;
use crate::utils::error::{BackupError, Result};
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::Client as S3Client;

/// S3-backed object store. Buckets play the role of containers; `put_object`
/// replaces any existing object of the same key, which gives the required
/// overwrite semantics without extra calls.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: S3Client,
}

impl S3ObjectStore {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

impl ObjectStore for S3ObjectStore {
    async fn ensure_container(&self, name: &str) -> Result<()> {
        // Buckets are private unless explicitly opened up, so create-if-absent
        // with no further access configuration matches the contract.
        match self.client.create_bucket().bucket(name).send().await {
            Ok(_) => {
                tracing::debug!("Container '{}' created", name);
                Ok(())
            }
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_bucket_already_owned_by_you()
                    || service_err.is_bucket_already_exists()
                {
                    tracing::debug!("Container '{}' already exists", name);
                    Ok(())
                } else {
                    Err(BackupError::RemoteStorage {
                        operation: "container ensure".to_string(),
                        message: service_err
                            .message()
                            .unwrap_or("unknown service error")
                            .to_string(),
                    })
                }
            }
        }
    }

    async fn put_object(&self, container: &str, name: &str, data: Vec<u8>) -> Result<()> {
        self.client
            .put_object()
            .bucket(container)
            .key(name)
            .body(data.into())
            .send()
            .await
            .map_err(|err| {
                let service_err = err.into_service_error();
                BackupError::RemoteStorage {
                    operation: "upload".to_string(),
                    message: service_err
                        .message()
                        .unwrap_or("unknown service error")
                        .to_string(),
                }
            })?;

        Ok(())
    }
}
