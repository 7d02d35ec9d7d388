//! API utilities for frontend-backend communication
//!
//! Resolves the catalog backend base URL and wraps `gloo-net` so every api
//! module reports failures through the same [`ApiError`] taxonomy.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Port of the catalog backend when the base URL is derived from the page location
const API_PORT: u16 = 8000;

/// Failure of a backend call, displayed verbatim to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never got a response (server down, CORS, offline)
    #[error("Não foi possível conectar ao servidor.")]
    Network(String),

    /// Non-2xx response; `detail` is the server-supplied message, if any
    #[error("{}", status_message(.status, .detail))]
    Status { status: u16, detail: Option<String> },

    /// Non-2xx upload answer, already resolved to the message shown on the slot
    #[error("{0}")]
    Rejected(String),

    /// 2xx response whose body does not have the expected shape
    #[error("Resposta inválida do servidor.")]
    Decode(String),

    /// The request could not be built (query or body serialization)
    #[error("Falha ao montar a requisição.")]
    Request(String),
}

fn status_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(d) => d.clone(),
        None => format!("Erro do servidor (HTTP {}).", status),
    }
}

impl ApiError {
    pub fn network(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }

    pub fn decode(err: gloo_net::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Get the base URL for API requests
///
/// A compile-time `SMARTMART_API_URL` wins. Otherwise the URL is built from
/// the current window location with the backend port.
///
/// # Returns
/// - API base URL like "http://127.0.0.1:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(configured) = option_env!("SMARTMART_API_URL") {
        return configured.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/products/count");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Build a full API URL with a query string serialized from `query`.
pub fn api_url_with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Request(e.to_string()))?;
    Ok(append_query(&api_url(path), &qs))
}

fn append_query(url: &str, qs: &str) -> String {
    if qs.is_empty() {
        url.to_string()
    } else {
        format!("{}?{}", url, qs)
    }
}

/// Extracts the `detail` field of an error body.
///
/// String details are used as is; structured ones are rendered as compact JSON.
pub fn detail_from_body(body: &serde_json::Value) -> Option<String> {
    match body.get("detail")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.trim().is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Turns a non-2xx response into [`ApiError::Status`].
pub async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let detail = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| detail_from_body(&body));
    log::warn!("HTTP {} from {}: {:?}", status, response.url(), detail);
    Err(ApiError::Status { status, detail })
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(ApiError::decode)
}

/// `GET url` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url).send().await.map_err(ApiError::network)?;
    let response = ensure_ok(response).await?;
    read_json(response).await
}

/// `POST url` with a JSON body and decode the JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let request = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    let response = request.send().await.map_err(ApiError::network)?;
    let response = ensure_ok(response).await?;
    read_json(response).await
}

/// `PUT url` with a JSON body and decode the JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let request = Request::put(url)
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    let response = request.send().await.map_err(ApiError::network)?;
    let response = ensure_ok(response).await?;
    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_product::ProductFilter;

    #[test]
    fn test_append_query() {
        assert_eq!(append_query("/products/count", ""), "/products/count");
        assert_eq!(
            append_query("/products/", "skip=0&limit=10"),
            "/products/?skip=0&limit=10"
        );
    }

    #[test]
    fn test_query_string_omits_absent_filters() {
        let qs = serde_qs::to_string(&ProductFilter::default()).unwrap();
        assert_eq!(qs, "");

        let qs = serde_qs::to_string(&ProductFilter::new("", Some(3)).page(2, 10)).unwrap();
        assert_eq!(qs, "category_id=3&skip=10&limit=10");
    }

    #[test]
    fn test_detail_from_body() {
        let body = serde_json::json!({"detail": "Categoria já cadastrada"});
        assert_eq!(
            detail_from_body(&body).as_deref(),
            Some("Categoria já cadastrada")
        );
        assert_eq!(detail_from_body(&serde_json::json!({"message": "x"})), None);
        assert_eq!(detail_from_body(&serde_json::json!({"detail": null})), None);
        assert_eq!(
            detail_from_body(&serde_json::json!({"detail": [1, 2]})).as_deref(),
            Some("[1,2]")
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::Status {
            status: 400,
            detail: Some("Nome duplicado".to_string()),
        };
        assert_eq!(err.to_string(), "Nome duplicado");

        let err = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(err.to_string(), "Erro do servidor (HTTP 500).");

        let err = ApiError::Network("TypeError: Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Não foi possível conectar ao servidor.");

        let err = ApiError::Rejected("Erro no upload".to_string());
        assert_eq!(err.to_string(), "Erro no upload");
    }
}
