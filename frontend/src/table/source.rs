use super::query::{PageResult, QueryState};
use crate::api::ApiError;

/// Anything that can produce one page of records for a query.
#[allow(async_fn_in_trait)]
pub trait ListSource {
    type Record: Clone + 'static;

    async fn fetch_page(&self, query: &QueryState) -> Result<PageResult<Self::Record>, ApiError>;
}

/// Query-string parameters understood by the listing endpoints.
pub fn list_params(query: &QueryState) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page", query.page_number().to_string()),
        ("pageSize", query.page_size.to_string()),
        ("sortBy", query.sort_key.clone()),
        ("sortOrder", query.sort_direction.as_str().to_string()),
    ];
    if let Some(term) = query.search() {
        params.push(("search", term.to_string()));
    }
    params
}
