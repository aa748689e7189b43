use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{Availability, CreateAvailabilityRequest};
use thiserror::Error;

const AVAILABILITIES_PATH: &str = "/api/v1/availabilities";

/// Failure talking to the availability service. `Display` is what the user sees.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

/// API client for the remote availability service
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn availabilities_url(&self) -> String {
        format!("{}{}", self.base_url, AVAILABILITIES_PATH)
    }

    pub fn availabilities_for_guide_url(&self, guide_id: &str) -> String {
        let encoded: String = js_sys::encode_uri_component(guide_id).into();
        format!("{}?guideId={}", self.availabilities_url(), encoded)
    }

    /// All availabilities belonging to `guide_id`
    pub async fn get_availabilities(&self, guide_id: &str) -> Result<Vec<Availability>, ApiError> {
        let url = self.availabilities_for_guide_url(guide_id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(response).await
    }

    /// Create one availability; the server echoes the stored record back
    pub async fn create_availability(
        &self,
        request: &CreateAvailabilityRequest,
    ) -> Result<Availability, ApiError> {
        let response = Request::post(&self.availabilities_url())
            .json(request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status { status, body });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_list_url_encodes_guide_id() {
        let client = ApiClient::with_base_url("http://localhost:3000");
        assert_eq!(
            client.availabilities_for_guide_url("guide 7&x"),
            "http://localhost:3000/api/v1/availabilities?guideId=guide%207%26x"
        );
    }

    #[wasm_bindgen_test]
    fn test_create_url() {
        let client = ApiClient::with_base_url("https://planner.example.com");
        assert_eq!(
            client.availabilities_url(),
            "https://planner.example.com/api/v1/availabilities"
        );
    }

    #[wasm_bindgen_test]
    fn test_error_messages() {
        let error = ApiError::Status { status: 422, body: "bad range".to_string() };
        assert_eq!(error.to_string(), "Server error 422: bad range");
        assert_eq!(
            ApiError::Network("offline".to_string()).to_string(),
            "Network error: offline"
        );
    }
}
