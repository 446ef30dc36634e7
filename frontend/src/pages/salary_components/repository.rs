use crate::api::{
    ApiClient, ApiError, ListEndpoint, RecordId, SalaryComponent, SalaryComponentApi,
};
use leptos::use_context;

#[derive(Clone)]
pub struct SalaryComponentRepository {
    client: ApiClient,
}

impl SalaryComponentRepository {
    pub fn new_with_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        Self::new_with_client(use_context::<ApiClient>().unwrap_or_else(ApiClient::new))
    }

    pub fn list_source(&self) -> ListEndpoint<SalaryComponent> {
        self.client.salary_component_list()
    }

    pub fn backend(&self) -> SalaryComponentApi {
        SalaryComponentApi(self.client.clone())
    }

    pub async fn fetch(&self, id: &RecordId) -> Result<SalaryComponent, ApiError> {
        self.client.get_salary_component(id).await
    }
}
