/// Time-range filter shared by the ZDX analytics endpoints. Both bounds
/// are epoch seconds; the API defaults to the most recent two hours when
/// neither is set.
#[derive(Debug, Clone, Default)]
pub struct ZdxTimeOptions {
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub location_id: Option<i64>,
    pub department_id: Option<i64>,
}

impl ZdxTimeOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(from) = self.from {
            pairs.push(("from", from.to_string()));
        }
        if let Some(to) = self.to {
            pairs.push(("to", to.to_string()));
        }
        if let Some(location_id) = self.location_id {
            pairs.push(("loc", location_id.to_string()));
        }
        if let Some(department_id) = self.department_id {
            pairs.push(("dept", department_id.to_string()));
        }
        pairs
    }
}
