use crate::core::ConfigProvider;
use crate::utils::error::{BackupError, Result};
use crate::utils::validation::{
    validate_container_name, validate_non_empty_string, validate_path, validate_region, Validate,
};
use std::env;

/// Configuration for the scheduled Lambda entry point, read from environment
/// variables at invocation time.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub source_path: String,
    pub container: String,
    pub output_dir: String,
    pub key_base64: String,
    pub iv_base64: Option<String>,
    pub region: String,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            source_path: env::var("BACKUP_SOURCE_PATH").map_err(|_| {
                BackupError::MissingConfigError {
                    field: "BACKUP_SOURCE_PATH".to_string(),
                }
            })?,
            container: env::var("BACKUP_CONTAINER").unwrap_or_else(|_| "backups".to_string()),
            // Lambda's only writable directory.
            output_dir: env::var("BACKUP_OUTPUT_DIR").unwrap_or_else(|_| "/tmp".to_string()),
            key_base64: env::var("BACKUP_KEY_B64").map_err(|_| BackupError::MissingConfigError {
                field: "BACKUP_KEY_B64".to_string(),
            })?,
            iv_base64: env::var("BACKUP_IV_B64").ok(),
            region: env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn source_path(&self) -> &str {
        &self.source_path
    }

    fn container_name(&self) -> &str {
        &self.container
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn key_base64(&self) -> &str {
        &self.key_base64
    }

    fn iv_base64(&self) -> Option<&str> {
        self.iv_base64.as_deref()
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_path("BACKUP_SOURCE_PATH", &self.source_path)?;
        validate_path("BACKUP_OUTPUT_DIR", &self.output_dir)?;
        validate_container_name("BACKUP_CONTAINER", &self.container)?;
        validate_non_empty_string("BACKUP_KEY_B64", &self.key_base64)?;
        validate_region("S3_REGION", &self.region)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
