use std::env;
use thiserror::Error;

const GITHUB_BASE_REF: &str = "GITHUB_BASE_REF";
const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
const PR_NUM: &str = "PR_NUM";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable '{0}': this tool is designed to run as a Github Action")]
    MissingVar(&'static str),
    #[error("GITHUB_REPOSITORY must be an 'owner/name' slug, got '{0}'")]
    InvalidRepository(String),
    #[error("PR_NUM must be a pull request number, got '{0}'")]
    InvalidPrNumber(String),
}

/// Runtime configuration, read from the environment a Github Actions
/// workflow provides.
#[derive(Debug)]
pub struct Config {
    pub base_ref: String,
    pub owner: String,
    pub repo: String,
    pub pr_number: u64,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Config, ConfigError> {
        let base_ref = require(&lookup, GITHUB_BASE_REF)?;
        // The token is read by the Github client; checked here so a missing
        // value fails before any API call.
        require(&lookup, GITHUB_TOKEN)?;
        let repository = require(&lookup, GITHUB_REPOSITORY)?;
        let pr_num = require(&lookup, PR_NUM)?;

        let (owner, repo) = repository
            .split_once('/')
            .ok_or_else(|| ConfigError::InvalidRepository(repository.to_owned()))?;

        let pr_number = pr_num
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidPrNumber(pr_num.to_owned()))?;

        Ok(Config {
            base_ref,
            owner: owner.to_owned(),
            repo: repo.to_owned(),
            pr_number,
        })
    }
}

fn require(
    lookup: &impl Fn(&'static str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    lookup(name).ok_or(ConfigError::MissingVar(name))
}
