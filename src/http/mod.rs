use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use std::ops::{Deref, DerefMut};
use thiserror::Error;

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl DerefMut for HttpClient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unexpected response status {status}: {body}")]
    UnexpectedStatusError { status: StatusCode, body: String },
    #[error("Failed to send request")]
    SendRequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
}

/// Turns a raw `reqwest` outcome into the response body, surfacing non-2xx
/// statuses as errors. `handle_optional` maps 404 to `None` for lookups
/// where a missing resource is an expected condition.
pub trait ResponseHandler {
    async fn handle(self) -> Result<String>;
    async fn handle_optional(self) -> Result<Option<String>>;
}

impl ResponseHandler for std::result::Result<Response, reqwest::Error> {
    async fn handle(self) -> Result<String> {
        let response = self.map_err(|cause| Error::SendRequestError { cause })?;
        let status = response.status();

        let body = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !status.is_success() {
            return Err(Error::UnexpectedStatusError { status, body }.into());
        }

        Ok(body)
    }

    async fn handle_optional(self) -> Result<Option<String>> {
        let response = self.map_err(|cause| Error::SendRequestError { cause })?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !status.is_success() {
            return Err(Error::UnexpectedStatusError { status, body }.into());
        }

        Ok(Some(body))
    }
}
