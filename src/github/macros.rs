use super::github_client::GITHUB_TOKEN;
use reqwest::{
    header::{ACCEPT, USER_AGENT},
    RequestBuilder,
};

pub trait Headers {
    fn default_headers(self) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self) -> RequestBuilder {
        self.bearer_auth(GITHUB_TOKEN.to_string())
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(USER_AGENT, "github-labeler")
    }
}

#[macro_export]
macro_rules! get {
    ($url:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .get($url)
            .default_headers()
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! maybe_get {
    ($url:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .get($url)
            .default_headers()
            .send()
            .await
            .handle_optional()
            .await
    }};
}

#[macro_export]
macro_rules! post {
    ($url:expr, $body:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .post($url)
            .default_headers()
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! patch {
    ($url:expr, $body:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .patch($url)
            .default_headers()
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! delete {
    ($url:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .delete($url)
            .default_headers()
            .send()
            .await
            .handle()
            .await
    }};
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use mockito::Server;
    use std::env;

    #[tokio::test]
    async fn get_macro() -> Result<()> {
        env::set_var("GITHUB_TOKEN", "token");
        let mut server = Server::new_async().await;
        let url = server.url();

        let expected_body = "test_body";
        let mock = server
            .mock("GET", "/")
            .match_header("authorization", "Bearer token")
            .match_header("accept", "application/vnd.github+json")
            .match_header("x-github-api-version", "2022-11-28")
            .match_header("user-agent", "github-labeler")
            .with_body(expected_body)
            .create_async()
            .await;

        let response = get!(url)?;

        mock.assert_async().await;
        assert_eq!(response, expected_body);

        Ok(())
    }

    #[tokio::test]
    async fn get_macro_fails_on_server_error() -> Result<()> {
        env::set_var("GITHUB_TOKEN", "token");
        let mut server = Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let response = get!(url);

        mock.assert_async().await;
        assert!(response.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn maybe_get_macro_maps_missing_resource_to_none() -> Result<()> {
        env::set_var("GITHUB_TOKEN", "token");
        let mut server = Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/")
            .with_status(404)
            .create_async()
            .await;

        let response = maybe_get!(url)?;

        mock.assert_async().await;
        assert_eq!(response, None);

        Ok(())
    }

    #[tokio::test]
    async fn post_macro() -> Result<()> {
        env::set_var("GITHUB_TOKEN", "token");
        let mut server = Server::new_async().await;
        let url = server.url();

        let expected_body = "test_body";
        let mock = server
            .mock("POST", "/")
            .match_header("authorization", "Bearer token")
            .match_body(expected_body)
            .with_body(expected_body)
            .create_async()
            .await;

        let response = post!(url, expected_body)?;

        mock.assert_async().await;
        assert_eq!(response, expected_body);

        Ok(())
    }

    #[tokio::test]
    async fn patch_macro() -> Result<()> {
        env::set_var("GITHUB_TOKEN", "token");
        let mut server = Server::new_async().await;
        let url = server.url();

        let expected_body = "test_body";
        let mock = server
            .mock("PATCH", "/")
            .match_header("authorization", "Bearer token")
            .match_body(expected_body)
            .with_body(expected_body)
            .create_async()
            .await;

        let response = patch!(url, expected_body)?;

        mock.assert_async().await;
        assert_eq!(response, expected_body);

        Ok(())
    }

    #[tokio::test]
    async fn delete_macro() -> Result<()> {
        env::set_var("GITHUB_TOKEN", "token");
        let mut server = Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("DELETE", "/")
            .match_header("authorization", "Bearer token")
            .with_body("[]")
            .create_async()
            .await;

        let response = delete!(url)?;

        mock.assert_async().await;
        assert_eq!(response, "[]");

        Ok(())
    }
}
