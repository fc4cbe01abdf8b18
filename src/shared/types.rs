use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform wire envelope for every API response.
///
/// `error` carries the underlying fault detail and is only populated on 500s
/// outside production operating mode.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>) -> Self {
        Self {
            success: true,
            data,
            message,
            error: None,
        }
    }

    pub fn error(message: Option<String>, error: Option<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_absent_fields() {
        let envelope = ApiResponse::success(Some(vec![1, 2]), None);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2]));
        assert!(json.get("message").is_none());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn error_envelope_carries_message() {
        let envelope = ApiResponse::<()>::error(Some("Route not found".to_string()), None);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Route not found");
    }
}
