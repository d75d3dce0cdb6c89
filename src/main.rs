use anyhow::Context;
use clap::Parser;
use profile_form::config::Config;
use profile_form::logging::init_tracing;
use std::path::PathBuf;

/// Terminal form that collects a user profile and sends it to the profile API.
#[derive(Debug, Parser)]
#[command(name = "profile-form", version)]
struct Cli {
    /// Config file (default: <config_dir>/profile-form/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override api.base_url
    #[arg(long)]
    base_url: Option<String>,

    /// Override logging.file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate()?;
    }

    let log_path = init_tracing(&config.logging, cli.log_file.as_deref())?;
    tracing::info!(
        config = %config_path.display(),
        log = %log_path.display(),
        "Configuration loaded"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let result = profile_form::ui::run(&config, runtime.handle().clone());
    if let Err(err) = &result {
        tracing::error!(error = %err, "Profile form exited with an error");
    }
    result
}
