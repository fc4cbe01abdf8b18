use reqwest::Client;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::features::svgs::dtos::{SvgRecordDto, MAX_SVG_SIZE};
use crate::features::svgs::validation::is_svg_upload;
use crate::shared::types::ApiResponse;

/// Failures surfaced to the gallery. `Api` carries the server's own
/// user-facing message; `MalformedResponse` means the payload did not parse
/// into the typed envelope and was rejected rather than trusted.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Api(String),

    #[error("malformed response payload: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    InvalidFile(String),
}

/// Typed client for the SVG Holder API
pub struct SvgApiClient {
    client: Client,
    base_url: String,
}

impl SvgApiClient {
    /// `base_url` is the API root, e.g. `http://localhost:3001/api`
    pub fn new(base_url: impl Into<String>) -> Result<Self, GalleryError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub async fn fetch_all(&self) -> Result<Vec<SvgRecordDto>, GalleryError> {
        let response = self
            .client
            .get(format!("{}/svgs", self.base_url))
            .send()
            .await?;
        unwrap_data(parse_envelope(response).await?)
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SvgRecordDto>, GalleryError> {
        let url = format!(
            "{}/svgs/search?q={}",
            self.base_url,
            urlencoding::encode(query)
        );
        let response = self.client.get(url).send().await?;
        unwrap_data(parse_envelope(response).await?)
    }

    pub async fn fetch_by_id(&self, id: Uuid) -> Result<SvgRecordDto, GalleryError> {
        let response = self
            .client
            .get(format!("{}/svgs/{}", self.base_url, id))
            .send()
            .await?;
        unwrap_data(parse_envelope(response).await?)
    }

    /// Upload a file with its metadata. Runs the same pre-flight checks the
    /// server enforces so obviously bad files never leave the client.
    pub async fn upload(
        &self,
        name: &str,
        description: &str,
        file_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<SvgRecordDto, GalleryError> {
        validate_file(file_name, content_type, &data)?;

        let part = reqwest::multipart::Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = reqwest::multipart::Form::new()
            .text("name", name.to_string())
            .text("description", description.to_string())
            .part("svgFile", part);

        let response = self
            .client
            .post(format!("{}/svgs", self.base_url))
            .multipart(form)
            .send()
            .await?;
        unwrap_data(parse_envelope(response).await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        description: &str,
    ) -> Result<SvgRecordDto, GalleryError> {
        let response = self
            .client
            .put(format!("{}/svgs/{}", self.base_url, id))
            .json(&serde_json::json!({
                "name": name,
                "description": description,
            }))
            .send()
            .await?;
        unwrap_data(parse_envelope(response).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), GalleryError> {
        let response = self
            .client
            .delete(format!("{}/svgs/{}", self.base_url, id))
            .send()
            .await?;
        let envelope: ApiResponse<serde_json::Value> = parse_envelope(response).await?;
        if !envelope.success {
            return Err(GalleryError::Api(
                envelope
                    .message
                    .unwrap_or_else(|| "Failed to delete SVG".to_string()),
            ));
        }
        Ok(())
    }

    pub async fn health(&self) -> Result<bool, GalleryError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        let envelope: ApiResponse<serde_json::Value> = parse_envelope(response).await?;
        Ok(envelope.success)
    }
}

/// Client-side pre-upload checks, mirroring the server's rules
pub fn validate_file(
    file_name: &str,
    content_type: &str,
    data: &[u8],
) -> Result<(), GalleryError> {
    if !is_svg_upload(content_type, file_name) {
        return Err(GalleryError::InvalidFile(
            "Please select a valid SVG file".to_string(),
        ));
    }
    if data.len() > MAX_SVG_SIZE {
        return Err(GalleryError::InvalidFile(
            "File size must be less than 5MB".to_string(),
        ));
    }
    if !String::from_utf8_lossy(data).contains("<svg") {
        return Err(GalleryError::InvalidFile("Invalid SVG content".to_string()));
    }
    Ok(())
}

/// Parse a response body into the typed envelope, rejecting anything that
/// does not match the contract.
async fn parse_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<ApiResponse<T>, GalleryError> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| GalleryError::MalformedResponse(e.to_string()))
}

fn unwrap_data<T>(envelope: ApiResponse<T>) -> Result<T, GalleryError> {
    if !envelope.success {
        return Err(GalleryError::Api(
            envelope
                .message
                .unwrap_or_else(|| "request failed".to_string()),
        ));
    }
    envelope
        .data
        .ok_or_else(|| GalleryError::MalformedResponse("missing data field".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_list_envelope_parses_into_typed_model() {
        let json = r#"{
            "success": true,
            "data": [{
                "id": "6f2cbb50-1fb1-4cb5-9d22-8a0a1d4c1a2e",
                "name": "Logo",
                "description": "A logo",
                "content": "<svg/>",
                "fileSize": 120,
                "originalName": "logo.svg",
                "createdAt": "2025-06-01T10:00:00Z",
                "updatedAt": "2025-06-01T10:00:00Z"
            }]
        }"#;

        let envelope: ApiResponse<Vec<SvgRecordDto>> = serde_json::from_str(json).unwrap();
        let records = unwrap_data(envelope).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Logo");
        assert_eq!(records[0].file_size, 120);
    }

    #[test]
    fn payload_missing_required_fields_is_rejected() {
        // no content field: must fail parsing, never produce a half-record
        let json = r#"{
            "success": true,
            "data": [{
                "id": "6f2cbb50-1fb1-4cb5-9d22-8a0a1d4c1a2e",
                "name": "Logo",
                "fileSize": 120
            }]
        }"#;

        let parsed: Result<ApiResponse<Vec<SvgRecordDto>>, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }

    #[test]
    fn failure_envelope_surfaces_server_message() {
        let json = r#"{"success": false, "message": "SVG not found"}"#;
        let envelope: ApiResponse<SvgRecordDto> = serde_json::from_str(json).unwrap();
        let err = unwrap_data(envelope).unwrap_err();
        assert!(matches!(err, GalleryError::Api(msg) if msg == "SVG not found"));
    }

    #[test]
    fn success_envelope_without_data_is_malformed() {
        let json = r#"{"success": true}"#;
        let envelope: ApiResponse<SvgRecordDto> = serde_json::from_str(json).unwrap();
        let err = unwrap_data(envelope).unwrap_err();
        assert!(matches!(err, GalleryError::MalformedResponse(_)));
    }

    #[test]
    fn pre_upload_checks_mirror_server_rules() {
        assert!(validate_file("a.svg", "image/svg+xml", b"<svg/>").is_ok());
        assert!(matches!(
            validate_file("a.txt", "text/plain", b"<svg/>"),
            Err(GalleryError::InvalidFile(_))
        ));
        assert!(matches!(
            validate_file("a.svg", "image/svg+xml", b"nope"),
            Err(GalleryError::InvalidFile(_))
        ));
        let big = vec![b'x'; MAX_SVG_SIZE + 1];
        assert!(matches!(
            validate_file("a.svg", "image/svg+xml", &big),
            Err(GalleryError::InvalidFile(_))
        ));
    }
}
