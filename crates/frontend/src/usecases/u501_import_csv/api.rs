use crate::shared::api_utils::{api_url, ApiError};
use contracts::usecases::u501_import_csv::{ImportArtifact, UploadResponse, GENERIC_UPLOAD_ERROR};
use gloo_net::http::Request;
use web_sys::{File, FormData};

/// Maps a failed upload body to the message shown on the slot.
pub fn rejection_message(body: Option<&UploadResponse>) -> String {
    body.map(UploadResponse::error_message)
        .unwrap_or_else(|| GENERIC_UPLOAD_ERROR.to_string())
}

/// Sends `file` as multipart field `file` to the artifact's ingestion endpoint
/// and returns the processed-record count.
///
/// Non-2xx answers become [`ApiError::Rejected`] carrying the server `detail`
/// or the generic upload message.
pub async fn upload_csv(artifact: ImportArtifact, file: File) -> Result<u64, ApiError> {
    let form_data = FormData::new().map_err(|e| ApiError::Request(format!("{e:?}")))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| ApiError::Request(format!("{e:?}")))?;

    let url = api_url(&artifact.upload_path());
    log::info!("Uploading {} to {}", file.name(), url);

    let response = Request::post(&url)
        .body(form_data)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        let body = response.json::<UploadResponse>().await.ok();
        let message = rejection_message(body.as_ref());
        log::warn!("Upload of {} rejected ({}): {}", artifact.code(), response.status(), message);
        return Err(ApiError::Rejected(message));
    }

    let body: UploadResponse = response.json().await.map_err(ApiError::decode)?;
    Ok(body.processed_count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message() {
        assert_eq!(rejection_message(None), "Erro no upload");

        let body: UploadResponse =
            serde_json::from_str(r#"{"detail": "Produto não encontrado: 42"}"#).unwrap();
        assert_eq!(rejection_message(Some(&body)), "Produto não encontrado: 42");

        let err = ApiError::Rejected(rejection_message(None));
        assert_eq!(err.to_string(), "Erro no upload");
    }

    #[test]
    fn test_connectivity_message_matches_other_calls() {
        let err = ApiError::Network("TypeError: Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Não foi possível conectar ao servidor.");
    }
}
