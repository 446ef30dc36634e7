use crate::api::{ApiClient, ApiError, LoginRequest, LoginResponse};
use leptos::use_context;
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Uses the app-wide client when one is provided.
    pub fn from_context() -> Self {
        let client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::new_with_client(Rc::new(client))
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.login(request).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.logout().await
    }
}
