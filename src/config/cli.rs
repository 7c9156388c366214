use crate::core::ConfigProvider;
use crate::utils::validation::{
    validate_container_name, validate_non_empty_string, validate_path, validate_region, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "blob-backup")]
#[command(about = "Compresses, encrypts, and uploads a file to cloud object storage")]
pub struct CliConfig {
    #[arg(long, help = "Local file to back up")]
    pub source_path: String,

    #[arg(long, default_value = "backups")]
    pub container: String,

    #[arg(long, default_value = ".", help = "Directory for the local artifact")]
    pub output_dir: String,

    #[arg(long, help = "Base64-encoded 32-byte AES-256 key")]
    pub key_base64: String,

    #[arg(
        long,
        help = "Base64-encoded 16-byte IV; omit to generate a fresh one per run"
    )]
    pub iv_base64: Option<String>,

    #[arg(long, help = "AWS region override")]
    pub region: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
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

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_path("source_path", &self.source_path)?;
        validate_path("output_dir", &self.output_dir)?;
        validate_container_name("container", &self.container)?;
        validate_non_empty_string("key_base64", &self.key_base64)?;

        if let Some(region) = &self.region {
            validate_region("region", region)?;
        }

        Ok(())
    }
}
