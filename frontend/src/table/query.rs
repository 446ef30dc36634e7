use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    }
}

/// Pagination, sort and search parameters of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub page_index: usize,
    pub page_size: usize,
    pub sort_key: String,
    pub sort_direction: SortDirection,
    pub search_term: String,
}

impl QueryState {
    pub fn new(page_size: usize, sort_key: impl Into<String>) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            sort_key: sort_key.into(),
            sort_direction: SortDirection::Asc,
            search_term: String::new(),
        }
    }

    /// Page number as the listing endpoints count them.
    pub fn page_number(&self) -> usize {
        self.page_index + 1
    }

    pub fn search(&self) -> Option<&str> {
        let term = self.search_term.trim();
        if term.is_empty() {
            None
        } else {
            Some(term)
        }
    }
}

/// One page of records as returned by a listing endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageResult<R> {
    #[serde(rename = "data")]
    pub records: Vec<R>,
    #[serde(rename = "totalPages", default)]
    pub total_pages: usize,
}

impl<R> PageResult<R> {
    pub fn new(records: Vec<R>, total_pages: usize) -> Self {
        Self {
            records,
            total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R> Default for PageResult<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total_pages: 0,
        }
    }
}
