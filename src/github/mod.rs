mod github_client;
mod handler;
mod labels;
mod macros;
mod request;
mod response;
mod version;

use self::{handler::repository_handler::RepositoryHandler, response::PullRequest};
use crate::config::Config;
use anyhow::{Context, Result};
use github_client::GithubClient;

/// Reconciles the pull request's `Target: ` label and milestone with its
/// base branch, in that order. Best effort, no rollback on partial failure.
pub async fn sync(config: &Config) -> Result<()> {
    sync_with(github_client::instance(), config).await
}

async fn sync_with(client: &GithubClient, config: &Config) -> Result<()> {
    let repo = client.repo(&config.owner, &config.repo);

    let pull_request = repo
        .pull_request(config.pr_number)
        .get()
        .await
        .context("Cannot fetch the pull request")?;

    ensure_target_label(&repo, &pull_request, &config.base_ref).await?;
    ensure_milestone(&repo, &pull_request, &config.base_ref).await?;

    Ok(())
}

// The Github API creates a label on first application, so the label must
// already exist on the repository before we touch the pull request.
async fn ensure_target_label(
    repo: &RepositoryHandler<'_>,
    pull_request: &PullRequest,
    base_ref: &str,
) -> Result<()> {
    let target_label = format!("{}{}", labels::TARGET_PREFIX, base_ref);

    if repo.labels().get(&target_label).await?.is_none() {
        log::warn!("Label '{}' not found, leaving labels untouched", target_label);
        return Ok(());
    }

    let current: Vec<String> = pull_request
        .labels
        .iter()
        .map(|label| label.name.to_owned())
        .collect();

    let plan = labels::plan(&current, &target_label);
    let issue = repo.issue(pull_request.number);

    for stale in &plan.remove {
        log::info!("Removing label '{}'", stale);
        issue.remove_label(stale).await?;
    }

    if let Some(label) = plan.add {
        log::info!("Adding label '{}'", label);
        issue.add_labels(vec![label]).await?;
    }

    Ok(())
}

async fn ensure_milestone(
    repo: &RepositoryHandler<'_>,
    pull_request: &PullRequest,
    base_ref: &str,
) -> Result<()> {
    let prefix = version::target_version_prefix(base_ref).with_context(|| {
        format!("Cannot derive a version prefix from base branch '{}'", base_ref)
    })?;

    for milestone in repo.milestones().open().await? {
        if milestone.title.starts_with(&prefix) {
            log::info!("Setting milestone to '{}'", milestone.title);
            repo.issue(pull_request.number)
                .set_milestone(milestone.number)
                .await?;
            break;
        }
    }

    Ok(())
}
