use clap::Parser;
use gradebook::utils::{logger, validation::Validate};
use gradebook::{CliConfig, DemoRunner};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.log_json);

    tracing::debug!("CLI config: {:?}", cli);

    // 驗證並合併配置
    let config = match cli.validate().and_then(|_| cli.resolve()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let runner = DemoRunner::new(config);
    match runner.run() {
        Ok(loaded) => {
            tracing::info!("✅ Demo completed, {} students reloaded", loaded.len());
        }
        Err(e) => {
            tracing::warn!("Demo aborted: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    }

    Ok(())
}
