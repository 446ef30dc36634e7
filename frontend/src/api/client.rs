use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config, utils::navigation};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    /// Every request goes through here. The session lives in an HTTP-only
    /// cookie, so browser requests always include credentials.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        let request = builder
            .build()
            .map_err(|e| ApiError::network(format!("Invalid request: {}", e)))?;
        log::debug!("{} {}", request.method(), request.url());

        #[cfg(all(test, not(target_arch = "wasm32")))]
        {
            if let Some(response) = mock_registry::respond(&request) {
                return response;
            }
        }

        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::network(format!("Request failed: {}", e)))
    }

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("session rejected by the server, returning to login");
            navigation::redirect_to_login();
        }
    }

    /// Decodes a success body as `T`, or turns an error status into an
    /// [`ApiError`] carrying the server's message.
    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::server(format!("Failed to parse response: {}", e)))
    }

    /// Like [`Self::map_json_response`] for endpoints whose body is ignored.
    pub(crate) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        Self::check_status(response).await.map(|_| ())
    }

    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::FORBIDDEN {
            log::warn!("request forbidden: {}", response.url());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_body(&body))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) use mock_registry::{register_mock, MockResponse, TestResponder};
