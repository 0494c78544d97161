use anyhow::Context;
use clap::Parser;
use headcode_lookup::utils::{logger, validation::Validate};
use headcode_lookup::{CliConfig, HeadcodePipeline, LookupConfig, LookupEngine, LookupError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = LookupConfig::from(CliConfig::parse());

    logger::init_cli_logger(config.verbose);
    tracing::debug!("Lookup config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let pipeline =
        HeadcodePipeline::with_http(config).context("failed to set up the HTTP client")?;
    let engine = LookupEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => print!("{}", report),
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &LookupError) -> ! {
    tracing::error!("Lookup failed: {} (category: {:?})", e, e.category());
    eprintln!("Error: {}", e.user_friendly_message());
    eprintln!("Hint: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
