use crate::api::{ApiClient, LeaveRequest, LeaveRequestApi, ListEndpoint};
use leptos::use_context;

#[derive(Clone)]
pub struct LeaveRequestRepository {
    client: ApiClient,
}

impl LeaveRequestRepository {
    pub fn new_with_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        Self::new_with_client(use_context::<ApiClient>().unwrap_or_else(ApiClient::new))
    }

    pub fn list_source(&self) -> ListEndpoint<LeaveRequest> {
        self.client.leave_request_list()
    }

    pub fn backend(&self) -> LeaveRequestApi {
        LeaveRequestApi(self.client.clone())
    }
}
