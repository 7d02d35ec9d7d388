use serde::{Deserialize, Serialize};

/// Message shown when a failed upload carries no usable `detail`.
pub const GENERIC_UPLOAD_ERROR: &str = "Erro no upload";

/// Body returned by every `*/upload-csv` endpoint.
///
/// Each endpoint names its counter differently; [`UploadResponse::processed_count`]
/// folds the aliases into one number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub added: Option<u64>,
    #[serde(default)]
    pub products_added: Option<u64>,
    #[serde(default)]
    pub total_added: Option<u64>,
    /// Error description on non-2xx responses. Usually a string, but
    /// validation failures send a structured value.
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl UploadResponse {
    /// Processed-record count: `added`, then `products_added`, then `total_added`, else 0.
    pub fn processed_count(&self) -> u64 {
        self.added
            .or(self.products_added)
            .or(self.total_added)
            .unwrap_or(0)
    }

    /// Human readable `detail`, if any.
    pub fn detail_message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.trim().is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Message to surface for a failed upload.
    pub fn error_message(&self) -> String {
        self.detail_message()
            .unwrap_or_else(|| GENERIC_UPLOAD_ERROR.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> UploadResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_count_prefers_added() {
        assert_eq!(parse(r#"{"added": 5, "products_added": 9}"#).processed_count(), 5);
        assert_eq!(
            parse(r#"{"added": 0, "products_added": 9, "total_added": 2}"#).processed_count(),
            0
        );
    }

    #[test]
    fn test_count_fallback_chain() {
        assert_eq!(parse(r#"{"products_added": 9, "total_added": 2}"#).processed_count(), 9);
        assert_eq!(parse(r#"{"total_added": 2}"#).processed_count(), 2);
        assert_eq!(parse(r#"{"message": "ok"}"#).processed_count(), 0);
        assert_eq!(parse(r#"{"added": null, "total_added": 4}"#).processed_count(), 4);
    }

    #[test]
    fn test_error_message_uses_detail() {
        assert_eq!(
            parse(r#"{"detail": "Categoria inexistente: Bebidas"}"#).error_message(),
            "Categoria inexistente: Bebidas"
        );
        assert_eq!(parse(r#"{}"#).error_message(), GENERIC_UPLOAD_ERROR);
        assert_eq!(parse(r#"{"detail": ""}"#).error_message(), GENERIC_UPLOAD_ERROR);
    }

    #[test]
    fn test_structured_detail_is_rendered_as_json() {
        let response = parse(r#"{"detail": [{"loc": ["file"], "msg": "field required"}]}"#);
        let message = response.error_message();
        assert!(message.contains("field required"));
    }
}
