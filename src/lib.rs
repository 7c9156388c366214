pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use adapters::storage::S3ObjectStore;
pub use core::{backup::BackupEngine, pipeline::BackupPipeline};
pub use utils::error::{BackupError, Result};
