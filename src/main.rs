use anyhow::Context;
use clap::Parser;
use menu_etl::utils::{logger, validation::Validate};
use menu_etl::{CliConfig, LocalStorage, MenuEngine, MenuPipeline, RunSummary};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting menu-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Wrote {} courses ({} items) to {}",
                summary.courses,
                summary.items,
                summary.outputs.join(", ")
            );
        }
        Err(e) => {
            // 單一頂層處理：回報錯誤後結束，不區分退出碼
            tracing::error!("❌ Menu processing failed: {:#}", e);
            if let Some(menu_error) = e.downcast_ref::<menu_etl::MenuError>() {
                tracing::error!("💡 Suggestion: {}", menu_error.recovery_suggestion());
            }
            eprintln!("An error occurred: {:#}", e);
        }
    }
}

async fn run(config: &CliConfig) -> anyhow::Result<RunSummary> {
    config.validate().context("invalid command line")?;
    let menu_config = config
        .menu_config()
        .context("failed to load configuration")?;

    let storage = LocalStorage::new(".");
    let pipeline = MenuPipeline::new(storage, menu_config);
    let engine = MenuEngine::new(pipeline);

    let summary = engine.run().await.context("failed to process menu")?;
    Ok(summary)
}
