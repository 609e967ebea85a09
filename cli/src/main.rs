use clap::Parser;
use eyre::WrapErr;

mod cli;
mod commands;
mod config;
mod render;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bloomfes=info".into()),
        )
        .init();

    let args = cli::RootArgs::parse();
    let config = config::CliConfig::resolve(&args);

    std::fs::create_dir_all(&config.data_dir)
        .wrap_err_with(|| format!("create data directory: {}", config.data_dir.display()))?;
    if let Some(parent) = config.db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("create database directory: {}", parent.display()))?;
        }
    }

    tracing::info!("database: {}", config.db_path.display());
    let pool = bloomfes_store::connect(&config.database_url())
        .await
        .wrap_err("connect db")?;
    bloomfes_store::migrate(&pool).await.wrap_err("migrate db")?;

    match args.command {
        cli::Command::Roster { command } => commands::roster(&pool, command).await,
        cli::Command::Settings { command } => commands::settings(&pool, command).await,
        cli::Command::Table { command } => commands::table(&pool, command).await,
        cli::Command::Backup { command } => commands::backup(&pool, command).await,
    }
}
