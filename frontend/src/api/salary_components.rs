use crate::api::client::ApiClient;
use crate::api::listing::ListEndpoint;
use crate::api::types::{ApiError, RecordId, SalaryComponent, SalaryComponentPayload};
use crate::mutation::{Mutation, MutationBackend};

pub const SALARY_COMPONENTS_PATH: &str = "/payroll/salary-components";

impl ApiClient {
    pub fn salary_component_list(&self) -> ListEndpoint<SalaryComponent> {
        ListEndpoint::new(self.clone(), SALARY_COMPONENTS_PATH)
    }

    pub async fn get_salary_component(&self, id: &RecordId) -> Result<SalaryComponent, ApiError> {
        let url = self
            .endpoint(&format!("{}/{}", SALARY_COMPONENTS_PATH, id))
            .await;
        let response = self.send(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }

    pub async fn create_salary_component(
        &self,
        payload: &SalaryComponentPayload,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(SALARY_COMPONENTS_PATH).await;
        let response = self.send(self.http_client().post(url).json(payload)).await?;
        self.map_empty_response(response).await
    }

    pub async fn update_salary_component(
        &self,
        id: &RecordId,
        payload: &SalaryComponentPayload,
    ) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("{}/{}", SALARY_COMPONENTS_PATH, id))
            .await;
        let response = self.send(self.http_client().put(url).json(payload)).await?;
        self.map_empty_response(response).await
    }

    pub async fn delete_salary_component(&self, id: &RecordId) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("{}/{}", SALARY_COMPONENTS_PATH, id))
            .await;
        let response = self.send(self.http_client().delete(url)).await?;
        self.map_empty_response(response).await
    }
}

/// Mutation backend for salary components.
#[derive(Clone)]
pub struct SalaryComponentApi(pub ApiClient);

impl MutationBackend for SalaryComponentApi {
    type Payload = SalaryComponentPayload;

    async fn apply(&self, mutation: Mutation<SalaryComponentPayload>) -> Result<(), ApiError> {
        match mutation {
            Mutation::Create(payload) => self.0.create_salary_component(&payload).await,
            Mutation::Update { id, payload } => self.0.update_salary_component(&id, &payload).await,
            Mutation::Delete { id } => self.0.delete_salary_component(&id).await,
        }
    }
}
