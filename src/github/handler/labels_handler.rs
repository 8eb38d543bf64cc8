use crate::github::{github_client::GithubClient, response::Label};
use anyhow::Result;

pub struct LabelsHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> LabelsHandler<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        LabelsHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Looks up a label on the repository, `None` when it does not exist.
    pub async fn get(&self, name: &str) -> Result<Option<Label>> {
        self.client.get_label(&self.owner, &self.repo, name).await
    }
}
