use serde::{Deserialize, Serialize};

/// Общий конверт ответа бэкенда: `{status, message, data?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = serde_json::Value> {
    pub status: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: Option<T>) -> Self {
        Self {
            status: true,
            message: None,
            data,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Сообщение бэкенда, если оно не пустое
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }

    pub fn is_success(&self) -> bool {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_envelope_parses() {
        let resp: ApiResponse = serde_json::from_value(json!({ "status": true })).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.message(), None);
        assert_eq!(resp.data, None);
    }

    #[test]
    fn test_failure_message_is_kept() {
        let resp: ApiResponse =
            serde_json::from_value(json!({ "status": false, "message": "locked" })).unwrap();
        assert!(!resp.is_success());
        assert_eq!(resp.message(), Some("locked"));
    }

    #[test]
    fn test_blank_message_is_ignored() {
        let resp: ApiResponse<()> = ApiResponse::failed("   ");
        assert_eq!(resp.message(), None);
    }
}
