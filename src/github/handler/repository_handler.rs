use super::{
    issue_handler::IssueHandler, labels_handler::LabelsHandler,
    milestones_handler::MilestonesHandler, pull_request_handler::PullRequestHandler,
};
use crate::github::github_client::GithubClient;

pub struct RepositoryHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> RepositoryHandler<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        RepositoryHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn labels(&self) -> LabelsHandler<'a> {
        LabelsHandler::new(self.client, &self.owner, &self.repo)
    }

    pub fn milestones(&self) -> MilestonesHandler<'a> {
        MilestonesHandler::new(self.client, &self.owner, &self.repo)
    }

    pub fn pull_request(&self, number: u64) -> PullRequestHandler<'a> {
        PullRequestHandler::new(self.client, &self.owner, &self.repo, number)
    }

    pub fn issue(&self, number: u64) -> IssueHandler<'a> {
        IssueHandler::new(self.client, &self.owner, &self.repo, number)
    }
}
