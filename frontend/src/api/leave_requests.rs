use crate::api::client::ApiClient;
use crate::api::listing::ListEndpoint;
use crate::api::types::{ApiError, LeaveDecisionPayload, LeaveRequest, RecordId};
use crate::mutation::{Mutation, MutationBackend};

pub const LEAVE_MANAGEMENT_PATH: &str = "/leaves/manage";

impl ApiClient {
    pub fn leave_request_list(&self) -> ListEndpoint<LeaveRequest> {
        ListEndpoint::new(self.clone(), LEAVE_MANAGEMENT_PATH)
    }

    pub async fn update_leave_status(
        &self,
        id: &RecordId,
        payload: &LeaveDecisionPayload,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/leaves/{}/status", id)).await;
        let response = self.send(self.http_client().put(url).json(payload)).await?;
        self.map_empty_response(response).await
    }
}

/// Mutation backend for leave requests. Managers only decide on existing
/// requests; creating or deleting them happens elsewhere.
#[derive(Clone)]
pub struct LeaveRequestApi(pub ApiClient);

impl MutationBackend for LeaveRequestApi {
    type Payload = LeaveDecisionPayload;

    async fn apply(&self, mutation: Mutation<LeaveDecisionPayload>) -> Result<(), ApiError> {
        match mutation {
            Mutation::Update { id, payload } => self.0.update_leave_status(&id, &payload).await,
            other => Err(ApiError::server(format!(
                "{:?} is not supported for leave requests",
                other.kind()
            ))),
        }
    }
}
