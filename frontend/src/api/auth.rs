use super::{
    client::ApiClient,
    types::{
        ApiError, ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse,
        UserResponse,
    },
};

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/auth/login").await;
        let response = self.send(self.http_client().post(url).json(request)).await?;
        self.map_json_response(response).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.endpoint("/auth/logout").await;
        let response = self.send(self.http_client().post(url)).await?;
        self.map_empty_response(response).await
    }

    /// Current session user. A 401 here means "not signed in" and must not
    /// bounce the user to the login page, so the status is checked first.
    pub async fn get_me(&self) -> Result<Option<UserResponse>, ApiError> {
        let url = self.endpoint("/auth/me").await;
        let response = self.send(self.http_client().get(url)).await?;
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        self.map_json_response(response).await.map(Some)
    }

    pub async fn request_password_reset(
        &self,
        identifier: &str,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.endpoint("/auth/forgot-password").await;
        let body = ForgotPasswordRequest {
            identifier: identifier.trim().to_string(),
        };
        let response = self.send(self.http_client().post(url).json(&body)).await?;
        self.map_json_response(response).await
    }
}
