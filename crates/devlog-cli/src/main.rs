use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("devlog error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let config = bootstrap::load_config(&flags)?;
    tracing::debug!(
        db = %config.database.path,
        default_format = %config.general.default_format,
        "loaded configuration"
    );

    let ctx = context::AppContext::init(config)
        .await
        .context("failed to initialize devlog application context")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

/// Default filter when `DEVLOG_LOG` is unset. `--quiet` wins over `--verbose`.
const fn default_level(quiet: bool, verbose: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, true) => "debug",
        (false, false) => "warn",
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("DEVLOG_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level(quiet, verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}
