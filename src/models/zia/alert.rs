use serde::{Deserialize, Serialize};

/// Alert subscription: which severities of each alert class are delivered
/// to one recipient address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AlertSubscription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pt0_severities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secure_severities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub manage_severities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comply_severities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub system_severities: Vec<String>,
    /// The API documents this as defaulting to false rather than absent.
    #[serde(default)]
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deleted_defaults_to_false() {
        let sub: AlertSubscription =
            serde_json::from_value(json!({"id": 5, "email": "ops@example.com"}))
                .expect("decode");
        assert!(!sub.deleted);
        let wire = serde_json::to_value(&sub).expect("encode");
        assert_eq!(wire, json!({"id": 5, "email": "ops@example.com", "deleted": false}));
    }
}
