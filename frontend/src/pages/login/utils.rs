use crate::api::{ApiError, LoginRequest};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        build_request(&self.username.get_untracked(), &self.password.get_untracked())
    }

    pub fn clear_password(&self) {
        self.password.set(String::new());
    }
}

/// The username is trimmed; the password is sent exactly as typed.
pub fn build_request(username: &str, password: &str) -> Result<LoginRequest, ApiError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ApiError::validation("username", "Username is required."));
    }
    if password.is_empty() {
        return Err(ApiError::validation("password", "Password is required."));
    }
    Ok(LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    })
}
