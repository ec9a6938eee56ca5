use ats_backend::core::ConfigProvider;
use ats_backend::utils::error::{AtsError, ErrorSeverity};
use ats_backend::utils::{logger, validation::Validate};
use ats_backend::{AtsServer, CliConfig, InMemoryUserStore, MongoUserStore, TomlConfig};
use clap::Parser;

fn exit_with(e: &AtsError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());

    // 啟動失敗一律非零；設定錯誤與系統錯誤分開
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 1,
        ErrorSeverity::High => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

async fn serve<C: ConfigProvider + Validate>(config: C, in_memory: bool) -> ats_backend::Result<()> {
    config.validate()?;

    if in_memory {
        tracing::warn!("Using in-memory user store; accounts are lost on restart");
        return AtsServer::new(InMemoryUserStore::new(), &config).run().await;
    }

    let store = match MongoUserStore::connect(&config).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("❌ MongoDB Connection Error: {}", e);
            return Err(e);
        }
    };

    AtsServer::new(store, &config).run().await
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting ats-backend");

    let result = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            match TomlConfig::from_file(path) {
                Ok(config) => serve(config, cli.in_memory).await,
                Err(e) => Err(e),
            }
        }
        None => serve(cli.clone(), cli.in_memory).await,
    };

    if let Err(e) = result {
        exit_with(&e);
    }
}
