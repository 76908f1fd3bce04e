use clap::Parser;
use portfolio_site::core::site::dry_run;
use portfolio_site::core::ConfigProvider;
use portfolio_site::utils::{logger, validation::Validate};
use portfolio_site::{LocalStorage, SiteEngine, SitePipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-build")]
#[command(about = "Builds the portfolio site from a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "site.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Bundle every page into a zip archive regardless of config
    #[arg(long)]
    archive: bool,

    /// Dry run - render in memory and list the pages without writing them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based site build");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 應用命令列覆蓋設定
    if args.archive {
        config.enable_archive();
        tracing::info!("🔧 Archive output enabled from command line");
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - Nothing will be written to disk");
        perform_dry_run(config, monitor_enabled).await?;
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = SitePipeline::new(storage, config);
    let engine = SiteEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Site build completed successfully!");
            println!("✅ Site build completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Site build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Site: {}", config.site_title());
    println!("  Base URL: {}", config.base_url());
    println!("  Output: {}", config.output_path());
    println!("  Tags per card: {}", config.summary_tag_limit());

    if let Some(archive) = config.archive_filename() {
        println!("  Archive: {}", archive);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

async fn perform_dry_run(
    config: TomlConfig,
    monitor_enabled: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_path = config.output_path().to_string();
    let report = dry_run(config, monitor_enabled).await?;

    println!("🔍 Dry Run Analysis:");
    println!("  Pages that would be written under {}:", output_path);
    for (path, size) in &report.pages {
        println!("  {:<45} {:>8} bytes", path, size);
    }

    println!();
    println!("✅ Dry run complete. Run without --dry-run to write the site.");
    Ok(())
}
