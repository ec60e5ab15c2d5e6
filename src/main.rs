use anyhow::Context;
use clap::Parser;
use manhelper::utils::logger;
use manhelper::{
    CliConfig, ManhelperError, ManhelperSettings, Po4aTranslator, TranslateEngine,
    TranslationJob, TranslatorExit,
};

#[tokio::main]
async fn main() {
    // 參數數量不對時 clap 會印出用法並以 2 結束
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let exit_code = match run(&config).await {
        Ok(exit) => {
            if exit.success() {
                tracing::info!("✅ Translation completed successfully");
            } else {
                tracing::error!("❌ Translator failed with exit code {}", exit.code());
            }
            exit.code()
        }
        Err(e) => report(&e),
    };

    std::process::exit(exit_code);
}

async fn run(config: &CliConfig) -> anyhow::Result<TranslatorExit> {
    let settings = ManhelperSettings::resolve(config).context("invalid settings")?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let job = TranslationJob::from_settings(&config.source, &config.destination, &settings)
        .map_err(ManhelperError::from)
        .context("cannot resolve input paths")?;

    let engine = TranslateEngine::new(Po4aTranslator::from_settings(&settings), job);
    Ok(engine.run().await?)
}

fn report(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ManhelperError>() {
        Some(e) => {
            tracing::error!(
                "❌ {:#} (Category: {:?}, Severity: {:?})",
                err,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            e.exit_code()
        }
        None => {
            tracing::error!("❌ {:#}", err);
            eprintln!("❌ {:#}", err);
            1
        }
    }
}
