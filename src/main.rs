mod config;
mod github;
mod http;
mod logger;

use anyhow::{Context, Result};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    logger::init()?;

    let config = Config::from_env()?;

    log::info!(
        "Syncing target label and milestone for {}/{}#{} (base branch '{}')",
        config.owner,
        config.repo,
        config.pr_number,
        config.base_ref
    );

    github::sync(&config)
        .await
        .context("Cannot sync the pull request target label and milestone")?;

    Ok(())
}
