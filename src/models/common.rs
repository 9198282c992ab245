use std::fmt;

use serde::{Deserialize, Serialize};

/// Response wrapper the backend uses for API errors.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub message: String,
}

/// Page response for pagination endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Optional paging parameters for endpoints that support them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pageable {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<SortDirection>,
}
