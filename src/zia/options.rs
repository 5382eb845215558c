/// Query options accepted by the paginated ZIA list endpoints.
#[derive(Debug, Clone, Default)]
pub struct ZiaListOptions {
    pub page: Option<i32>,
    pub page_size: Option<i32>,
    pub search: Option<String>,
}

impl ZiaListOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("pageSize", page_size.to_string()));
        }
        if let Some(ref search) = self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}
