use serde::{Deserialize, Serialize};

/// Тело запроса на смену состояния: `{status}` или `{order}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MutationPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl MutationPayload {
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            order: None,
        }
    }

    pub fn order(order: Option<i64>) -> Self {
        Self {
            status: None,
            order,
        }
    }

    /// Статус, если он задан и не пустой
    pub fn non_blank_status(&self) -> Option<&str> {
        self.status
            .as_deref()
            .map(str::trim)
            .filter(|status| !status.is_empty())
    }
}

/// Тело пакетного удаления (`{ids: [...]}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteIdsRequest {
    pub ids: Vec<String>,
}

impl DeleteIdsRequest {
    pub fn single(id: impl Into<String>) -> Self {
        Self {
            ids: vec![id.into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_present_field_is_serialized() {
        let status = serde_json::to_value(MutationPayload::status("contacted")).unwrap();
        assert_eq!(status, json!({ "status": "contacted" }));

        let order = serde_json::to_value(MutationPayload::order(Some(3))).unwrap();
        assert_eq!(order, json!({ "order": 3 }));
    }

    #[test]
    fn test_blank_status_is_treated_as_missing() {
        assert_eq!(MutationPayload::status("  ").non_blank_status(), None);
        assert_eq!(MutationPayload::order(Some(1)).non_blank_status(), None);
        assert_eq!(
            MutationPayload::status("won").non_blank_status(),
            Some("won")
        );
    }

    #[test]
    fn test_delete_ids_body() {
        let body = serde_json::to_value(DeleteIdsRequest::single("p-1")).unwrap();
        assert_eq!(body, json!({ "ids": ["p-1"] }));
    }
}
