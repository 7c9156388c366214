use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::Client as S3Client;
use blob_backup::utils::{logger, validation::Validate};
use blob_backup::{BackupEngine, BackupPipeline, CliConfig, S3ObjectStore};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting blob-backup CLI");
    if config.verbose {
        tracing::debug!(
            "Backing up '{}' to container '{}'",
            config.source_path,
            config.container
        );
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(3);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let mut builder = aws_sdk_s3::config::Builder::from(&aws_config);
    if let Some(region) = &config.region {
        builder = builder.region(Region::new(region.clone()));
    }
    let client = S3Client::from_conf(builder.build());

    let store = S3ObjectStore::new(client);
    let pipeline = BackupPipeline::new(store, config);

    let engine = BackupEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(receipt) => {
            tracing::info!("✅ Backup completed successfully!");
            println!("✅ Backup completed successfully!");
            println!(
                "📦 Uploaded '{}' ({} bytes) to container '{}'",
                receipt.blob_name, receipt.bytes, receipt.container
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Backup run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // A failed run must be distinguishable from success by the caller.
            let exit_code = match e.severity() {
                blob_backup::utils::error::ErrorSeverity::Low => 0,
                blob_backup::utils::error::ErrorSeverity::Medium => 2,
                blob_backup::utils::error::ErrorSeverity::High => 1,
                blob_backup::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
