//! Главный исполняемый файл RustQL

use anyhow::{Context, Result};
use rustql::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::init();

    let config = cli
        .load_config()
        .context("Ошибка загрузки конфигурации")?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.logging.level),
    )
    .init();

    cli.execute().await?;

    Ok(())
}
