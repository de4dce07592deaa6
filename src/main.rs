use anyhow::Context;
use clap::Parser;
use fillcamp::api::ApiClient;
use fillcamp::config::Config;
use fillcamp::host::HostUser;
use fillcamp::logging::init_tracing;
use std::path::PathBuf;

/// Terminal client for the FillCamp loyalty mini-app.
#[derive(Debug, Parser)]
#[command(name = "fillcamp", version, about)]
struct Cli {
    /// Path to the config file (default: <config dir>/fillcamp/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Telegram user id to act as
    #[arg(long, value_name = "ID")]
    telegram_id: Option<i64>,

    /// Log filter directive, e.g. "debug" or "fillcamp=trace"
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    if let Some(id) = cli.telegram_id {
        config.host.telegram_id = Some(id);
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.validate()?;

    let log_path = config.log_path();
    init_tracing(&config.logging.level, &log_path)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;

    let host_user = HostUser::from_config(&config.host);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.api.base_url,
        telegram_id = host_user.as_ref().map(|user| user.id),
        "Starting fillcamp"
    );
    if host_user.is_none() {
        tracing::warn!("No host identity configured; requests are sent anonymously");
    }

    let client = ApiClient::new(&config.api, host_user.as_ref())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    fillcamp::ui::runtime::run(
        runtime.handle(),
        client,
        config.api.news_page_size,
        host_user,
    )
    .context("Terminal UI failed")?;

    runtime.shutdown_timeout(std::time::Duration::from_secs(1));
    Ok(())
}
