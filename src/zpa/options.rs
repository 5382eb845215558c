/// Query options accepted by the paginated ZPA list endpoints.
///
/// Field names follow the crate's snake_case convention; `to_query_pairs`
/// remaps them to the wire parameter names (`pageSize`, `microtenantId`).
#[derive(Debug, Clone, Default)]
pub struct ZpaPageOptions {
    pub page: Option<i32>,
    pub page_size: Option<i32>,
    pub search: Option<String>,
    pub microtenant_id: Option<String>,
}

impl ZpaPageOptions {
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
        if let Some(ref microtenant_id) = self.microtenant_id {
            pairs.push(("microtenantId", microtenant_id.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::snake_to_camel;

    #[test]
    fn query_names_are_the_camelized_field_names() {
        let options = ZpaPageOptions {
            page: Some(1),
            page_size: Some(20),
            search: Some("crm".to_string()),
            microtenant_id: Some("216196257331285463".to_string()),
        };
        let pairs = options.to_query_pairs();
        assert_eq!(
            pairs.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
            vec!["page", "pageSize", "search", "microtenantId"]
        );
        assert_eq!(snake_to_camel("page_size"), "pageSize");
        assert_eq!(snake_to_camel("microtenant_id"), "microtenantId");
    }

    #[test]
    fn default_options_produce_no_query() {
        assert!(ZpaPageOptions::default().to_query_pairs().is_empty());
    }
}
