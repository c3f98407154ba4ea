use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quicktr::cli::commands::{languages, translate};
use quicktr::cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();

    match args.command {
        Some(Command::Languages { prefix }) => languages::run(prefix.as_deref()),
        None => {
            let options = translate::TranslateOptions {
                query: args.query,
                set_key: args.set_key,
                set_api: args.set_api,
                set_lang: args.set_lang,
            };
            translate::run(options).await
        }
    }
}

/// Logs go to stderr; stdout is reserved for the feedback document.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
