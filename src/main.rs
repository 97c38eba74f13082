use clap::Parser;
use hafrag::domain::ports::ConfigProvider;
use hafrag::utils::{logger, validation::Validate};
use hafrag::{CliConfig, ConcatSink, DirectoryCollector, Engine, SystemDns, TomlConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting hafrag");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let config = match TomlConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Could not load {}: {}", cli.config, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output.directory.clone());
    let registry_dir = cli
        .registry_dir
        .clone()
        .or_else(|| config.registry_dir().map(str::to_string))
        .unwrap_or_else(|| "./exported".to_string());

    let sink = Arc::new(ConcatSink::new(output_dir));
    let collector = Arc::new(DirectoryCollector::new(
        registry_dir,
        config.output.default_target.clone(),
        Arc::clone(&sink),
    ));

    let engine = Engine::new(config, SystemDns, sink, collector);

    match engine.run().await {
        Ok(written) => {
            tracing::info!("✅ Fragment assembly completed successfully!");
            println!("✅ Fragment assembly completed successfully!");
            for path in written {
                println!("📁 {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Fragment assembly failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                hafrag::utils::error::ErrorSeverity::Low => 0,
                hafrag::utils::error::ErrorSeverity::Medium => 2,
                hafrag::utils::error::ErrorSeverity::High => 1,
                hafrag::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
