mod cli;
mod logging;
mod repl;
mod wiring;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Pick up OPEN_AI_KEY and friends from a local .env, if any.
    let dotenv = dotenvy::dotenv();
    let args = cli::parse();

    if let Err(e) = run(args, dotenv).await {
        eprintln!("plugchat: {e}");
        std::process::exit(1);
    }
}

async fn run(
    args: cli::Args,
    dotenv: dotenvy::Result<std::path::PathBuf>,
) -> plugchat_common::Result<()> {
    let config = wiring::prepare_config(args.config.as_deref(), args.base_url, |key| {
        std::env::var(key).ok()
    })?;

    if args.print_config {
        println!("{}", plugchat_config::config_to_json(&config));
        return Ok(());
    }

    let level = args.log_level.as_deref().unwrap_or(config.logging.level.as_filter());
    logging::init(level, config.logging.file.as_deref())?;

    tracing::info!("Plugchat v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = dotenv_problem(&dotenv) {
        tracing::warn!("ignoring .env: {e}");
    }
    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }

    let gateway = Arc::new(wiring::completion_client(&config.completion)?);
    let registry = wiring::plugin_registry(&config)?;
    let settings = wiring::session_settings(&config);
    let store = wiring::session_store(gateway, registry, settings);

    repl::run(store).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// A `.env` that is absent is fine; one that exists but cannot be read or
/// parsed is worth a warning.
fn dotenv_problem<T>(result: &dotenvy::Result<T>) -> Option<&dotenvy::Error> {
    match result {
        Err(e) if !e.not_found() => Some(e),
        _ => None,
    }
}
