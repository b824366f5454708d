use std::path::PathBuf;

use clap::Parser;

/// Plugchat: a chat assistant that calls REST APIs on your behalf.
#[derive(Parser, Debug)]
#[command(name = "plugchat", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Base URL of the REST API, overriding `rest_api.base_url`.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
