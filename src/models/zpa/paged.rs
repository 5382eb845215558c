use serde::{Deserialize, Serialize};

/// List envelope shared by every paginated ZPA endpoint.
///
/// ZPA serializes the page counters as strings on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list: Vec<T>,
}

impl<T> Default for PagedResponse<T> {
    fn default() -> Self {
        Self {
            total_pages: None,
            total_count: None,
            list: Vec::new(),
        }
    }
}
