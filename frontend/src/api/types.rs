use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::permissions::PermissionSet;

pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Server(String),
    #[error("{message}")]
    Validation { field: String, message: String },
}

impl ApiError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Builds a server error from a raw response body, falling back to the
    /// generic message when the body carries no usable text.
    pub fn from_body(body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        Self::Server(message)
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Text safe to put in front of a user. Transport failures carry
    /// reqwest's wording and the request URL, so they collapse to the
    /// generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => GENERIC_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.to_string()
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.user_message().into_view()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
    }
}

/// Record identifier. The backend is free to send numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct RecordId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for RecordId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(value) => Self(value.to_string()),
            RawId::Text(value) => Self(value),
        }
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: RecordId,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub is_master: bool,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl UserResponse {
    pub fn permission_set(&self) -> PermissionSet {
        PermissionSet::new(self.is_master, self.permissions.iter().cloned())
    }

    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub identifier: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ComponentType {
    #[default]
    Earning,
    Deduction,
}

impl ComponentType {
    pub const ALL: [ComponentType; 2] = [ComponentType::Earning, ComponentType::Deduction];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Earning => "Earning",
            ComponentType::Deduction => "Deduction",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryComponent {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    #[serde(default)]
    pub is_days_based: bool,
    #[serde(default)]
    pub is_base_component: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryComponentPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub is_days_based: bool,
    pub is_base_component: bool,
}

impl Default for SalaryComponentPayload {
    fn default() -> Self {
        Self {
            name: String::new(),
            component_type: ComponentType::Earning,
            is_days_based: true,
            is_base_component: false,
        }
    }
}

impl From<&SalaryComponent> for SalaryComponentPayload {
    fn from(component: &SalaryComponent) -> Self {
        Self {
            name: component.name.clone(),
            component_type: component.component_type,
            is_days_based: component.is_days_based,
            is_base_component: component.is_base_component,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl LeaveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: RecordId,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: LeaveStatus,
}

impl LeaveRequest {
    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }

    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveDecision {
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveDecisionPayload {
    pub status: LeaveDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
