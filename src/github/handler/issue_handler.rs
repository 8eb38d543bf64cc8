use crate::github::github_client::GithubClient;
use anyhow::Result;

/// Label and milestone mutations go through the issue endpoints, which a
/// pull request shares with its paired issue object.
pub struct IssueHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
    number: u64,
}

impl<'a> IssueHandler<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
        number: u64,
    ) -> Self {
        IssueHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
            number,
        }
    }

    pub async fn add_labels(&self, labels: Vec<String>) -> Result<()> {
        self.client
            .add_labels(&self.owner, &self.repo, self.number, labels)
            .await
    }

    pub async fn remove_label(&self, name: &str) -> Result<()> {
        self.client
            .remove_label(&self.owner, &self.repo, self.number, name)
            .await
    }

    pub async fn set_milestone(&self, milestone: u64) -> Result<()> {
        self.client
            .set_milestone(&self.owner, &self.repo, self.number, milestone)
            .await
    }
}
