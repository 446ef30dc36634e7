use serde::de::DeserializeOwned;
use std::marker::PhantomData;

use crate::api::client::ApiClient;
use crate::api::types::ApiError;
use crate::table::{list_params, ListSource, PageResult, QueryState};

/// A paginated listing endpoint answering `{data, totalPages}`.
pub struct ListEndpoint<R> {
    client: ApiClient,
    path: &'static str,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for ListEndpoint<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            path: self.path,
            _record: PhantomData,
        }
    }
}

impl<R> ListEndpoint<R> {
    pub fn new(client: ApiClient, path: &'static str) -> Self {
        Self {
            client,
            path,
            _record: PhantomData,
        }
    }
}

impl<R: DeserializeOwned + Clone + 'static> ListSource for ListEndpoint<R> {
    type Record = R;

    async fn fetch_page(&self, query: &QueryState) -> Result<PageResult<R>, ApiError> {
        let url = self.client.endpoint(self.path).await;
        let params = list_params(query);
        let response = self
            .client
            .send(self.client.http_client().get(url).query(&params))
            .await?;
        self.client.map_json_response(response).await
    }
}
