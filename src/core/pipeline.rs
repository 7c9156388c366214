use crate::core::crypto;
use crate::core::{Artifact, ConfigProvider, CryptoMaterial, ObjectStore, UploadReceipt};
use crate::utils::error::{BackupError, Result};
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;

/// Suffix appended to the source file stem to name the artifact and the blob.
pub const ARTIFACT_SUFFIX: &str = "_encrypted.gz.enc";

/// The one pipeline: read source, gzip, AES-encrypt, write artifact, upload.
pub struct BackupPipeline<S: ObjectStore, C: ConfigProvider> {
    store: S,
    config: C,
}

impl<S: ObjectStore, C: ConfigProvider> BackupPipeline<S, C> {
    pub fn new(store: S, config: C) -> Self {
        Self { store, config }
    }

    fn artifact_name(&self) -> Result<String> {
        // Always derived from the original source name, never from a previous
        // run's output, so the name cannot drift across repeated runs.
        let source = Path::new(self.config.source_path());
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| BackupError::ConfigError {
                message: format!(
                    "source path '{}' has no usable file name",
                    self.config.source_path()
                ),
            })?;
        Ok(format!("{}{}", stem, ARTIFACT_SUFFIX))
    }
}

#[async_trait::async_trait]
impl<S: ObjectStore, C: ConfigProvider> crate::core::Pipeline for BackupPipeline<S, C> {
    async fn prepare(&self) -> Result<CryptoMaterial> {
        // Key/IV problems must surface before any byte of the source is read.
        CryptoMaterial::from_base64(self.config.key_base64(), self.config.iv_base64())
    }

    async fn seal(&self, material: &CryptoMaterial) -> Result<Artifact> {
        let source_path = self.config.source_path();
        tracing::debug!("Sealing source file: {}", source_path);

        let source = File::open(source_path).map_err(|e| BackupError::LocalIo {
            path: source_path.to_string(),
            source: e,
        })?;

        let compressed =
            crypto::compress(BufReader::new(source)).map_err(|e| BackupError::LocalIo {
                path: source_path.to_string(),
                source: e,
            })?;
        let ciphertext = crypto::encrypt(material, &compressed);

        let blob_name = self.artifact_name()?;
        let artifact_path = Path::new(self.config.output_dir()).join(&blob_name);
        if let Some(parent) = artifact_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Create-or-truncate, then IV first so a consumer can decrypt with
        // nothing but the key.
        let write = |path: &Path| -> std::io::Result<()> {
            let mut out = File::create(path)?;
            out.write_all(material.iv())?;
            out.write_all(&ciphertext)?;
            out.flush()
        };
        write(&artifact_path).map_err(|e| BackupError::LocalIo {
            path: artifact_path.display().to_string(),
            source: e,
        })?;

        let bytes = (material.iv().len() + ciphertext.len()) as u64;
        tracing::debug!("Artifact written: {} ({} bytes)", artifact_path.display(), bytes);

        Ok(Artifact {
            path: artifact_path,
            blob_name,
            bytes,
        })
    }

    async fn upload(&self, artifact: Artifact) -> Result<UploadReceipt> {
        let container = self.config.container_name();

        // Container must exist before any upload is attempted; an ensure
        // failure aborts the run with no put issued.
        self.store.ensure_container(container).await?;

        let data = fs::read(&artifact.path).map_err(|e| BackupError::LocalIo {
            path: artifact.path.display().to_string(),
            source: e,
        })?;

        tracing::debug!(
            "Uploading {} ({} bytes) to container '{}'",
            artifact.blob_name,
            data.len(),
            container
        );
        self.store
            .put_object(container, &artifact.blob_name, data)
            .await?;

        Ok(UploadReceipt {
            container: container.to_string(),
            blob_name: artifact.blob_name,
            bytes: artifact.bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NameConfig {
        source_path: String,
    }

    impl ConfigProvider for NameConfig {
        fn source_path(&self) -> &str {
            &self.source_path
        }
        fn container_name(&self) -> &str {
            "backups"
        }
        fn output_dir(&self) -> &str {
            "."
        }
        fn key_base64(&self) -> &str {
            ""
        }
        fn iv_base64(&self) -> Option<&str> {
            None
        }
    }

    struct NullStore;

    impl ObjectStore for NullStore {
        async fn ensure_container(&self, _name: &str) -> Result<()> {
            Ok(())
        }
        async fn put_object(&self, _container: &str, _name: &str, _data: Vec<u8>) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn artifact_name_uses_source_stem() {
        let pipeline = BackupPipeline::new(
            NullStore,
            NameConfig {
                source_path: "/var/backups/sample_backup.bak".to_string(),
            },
        );
        assert_eq!(
            pipeline.artifact_name().unwrap(),
            "sample_backup_encrypted.gz.enc"
        );
    }

    #[test]
    fn artifact_name_rejects_pathless_source() {
        let pipeline = BackupPipeline::new(
            NullStore,
            NameConfig {
                source_path: "..".to_string(),
            },
        );
        assert!(matches!(
            pipeline.artifact_name().unwrap_err(),
            BackupError::ConfigError { .. }
        ));
    }
}
