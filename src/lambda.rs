#[cfg(feature = "lambda")]
use aws_config::BehaviorVersion;
#[cfg(feature = "lambda")]
use aws_sdk_s3::config::Region;
#[cfg(feature = "lambda")]
use aws_sdk_s3::Client as S3Client;
#[cfg(feature = "lambda")]
use blob_backup::config::lambda::LambdaConfig;
#[cfg(feature = "lambda")]
use blob_backup::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use blob_backup::{BackupEngine, BackupPipeline, S3ObjectStore};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use serde::{Deserialize, Serialize};

/// Payload of a scheduled invocation. The schedule itself lives in
/// EventBridge; an empty payload falls back to the environment configuration.
#[cfg(feature = "lambda")]
#[derive(Deserialize)]
pub struct Request {
    pub source_path: Option<String>,
    pub container: Option<String>,
}

#[cfg(feature = "lambda")]
#[derive(Serialize)]
pub struct Response {
    pub message: String,
    pub blob_name: String,
    pub bytes_uploaded: u64,
}

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    tracing::info!("Scheduled backup invocation started");

    if let Some(source_path) = &event.payload.source_path {
        std::env::set_var("BACKUP_SOURCE_PATH", source_path);
    }
    if let Some(container) = &event.payload.container {
        std::env::set_var("BACKUP_CONTAINER", container);
    }

    let lambda_config =
        LambdaConfig::from_env().map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    lambda_config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let region = Region::new(lambda_config.region.clone());
    let config = aws_sdk_s3::config::Builder::from(&config)
        .region(region)
        .build();
    let s3_client = S3Client::from_conf(config);

    let store = S3ObjectStore::new(s3_client);
    let pipeline = BackupPipeline::new(store, lambda_config);

    // A failed run surfaces as a failed invocation so the platform records it.
    let engine = BackupEngine::new(pipeline);
    let receipt = engine
        .run()
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    tracing::info!("Scheduled backup completed successfully");
    Ok(Response {
        message: "Backup completed successfully".to_string(),
        blob_name: receipt.blob_name,
        bytes_uploaded: receipt.bytes,
    })
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
