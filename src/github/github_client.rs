use super::{
    request::{add_labels_request::AddLabelsRequest, set_milestone_request::SetMilestoneRequest},
    response::{Label, Milestone, PullRequest},
};
use crate::{delete, get, maybe_get, patch, post};
use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use reqwest::Url;
use std::env;

pub static GITHUB_TOKEN: Lazy<String> =
    Lazy::new(|| env::var("GITHUB_TOKEN").expect("GITHUB_TOKEN must be set"));

const DEFAULT_API_BASE: &str = "https://api.github.com";

static CLIENT: Lazy<GithubClient> = Lazy::new(GithubClient::from_env);

pub fn instance() -> &'static GithubClient {
    &CLIENT
}

pub struct GithubClient {
    api_base: String,
}

impl GithubClient {
    // Github Actions exports GITHUB_API_URL, which also covers Enterprise
    // installs with a non-default API host.
    fn from_env() -> Self {
        let api_base =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_owned());

        GithubClient { api_base }
    }

    #[cfg(test)]
    pub(super) fn with_api_base(api_base: impl Into<String>) -> Self {
        GithubClient {
            api_base: api_base.into(),
        }
    }

    pub(super) async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequest> {
        let uri = format!("{}/repos/{}/{}/pulls/{}", self.api_base, owner, repo, number);

        let response = get!(&uri)?;

        let pull_request = serde_json::from_str::<PullRequest>(&response)?;

        Ok(pull_request)
    }

    // Label names go through path-segment encoding: they may contain
    // spaces and, for branches like 'release/v2.1.x', slashes that must
    // not be parsed as path separators.
    fn label_endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut uri = Url::parse(&self.api_base)?;

        uri.path_segments_mut()
            .map_err(|_| anyhow!("Invalid API base URL '{}'", self.api_base))?
            .pop_if_empty()
            .extend(segments);

        Ok(uri)
    }

    pub(super) async fn get_label(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
    ) -> Result<Option<Label>> {
        let uri = self.label_endpoint(&["repos", owner, repo, "labels", name])?;

        let response = maybe_get!(uri)?;

        match response {
            Some(body) => Ok(Some(serde_json::from_str::<Label>(&body)?)),
            None => Ok(None),
        }
    }

    pub(super) async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        labels: Vec<String>,
    ) -> Result<()> {
        let uri = format!(
            "{}/repos/{}/{}/issues/{}/labels",
            self.api_base, owner, repo, number
        );

        let request = AddLabelsRequest::new(labels);

        let body: String = serde_json::to_string(&request)?;

        post!(&uri, body)?;

        Ok(())
    }

    pub(super) async fn remove_label(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        name: &str,
    ) -> Result<()> {
        let number = number.to_string();
        let uri =
            self.label_endpoint(&["repos", owner, repo, "issues", &number, "labels", name])?;

        delete!(uri)?;

        Ok(())
    }

    pub(super) async fn list_open_milestones(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<Milestone>> {
        let uri = format!(
            "{}/repos/{}/{}/milestones?state=open",
            self.api_base, owner, repo
        );

        let response = get!(&uri)?;

        let milestones = serde_json::from_str::<Vec<Milestone>>(&response)?;

        Ok(milestones)
    }

    pub(super) async fn set_milestone(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        milestone: u64,
    ) -> Result<()> {
        let uri = format!(
            "{}/repos/{}/{}/issues/{}",
            self.api_base, owner, repo, number
        );

        let request = SetMilestoneRequest::new(milestone);

        let body: String = serde_json::to_string(&request)?;

        patch!(&uri, body)?;

        Ok(())
    }
}
