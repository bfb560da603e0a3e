//! Gemini Client
//!
//! Thin HTTP layer over the `generateContent` endpoint. The API key is sent
//! per call in the `x-goog-api-key` header and never stored on the client.

use std::time::Duration;

use reqwest::{
    Client, ClientBuilder, Response,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde_json::{Value, json};

use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::Credential;

use super::config::GeminiConfig;
use super::error::GeminiErrorMapper;
use super::models::GenerateContentResponse;

const API_KEY_HEADER: &str = "x-goog-api-key";

const SAFETY_CATEGORIES: &[&str] = &[
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

/// What a generation is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    /// Caller-facing completion: fixed sampling and safety thresholds
    Chat,
    /// Health probe: temperature and output cap only
    Probe,
}

/// Sampling parameters for one generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub kind: GenerationKind,
}

impl GenerationParams {
    pub fn chat(temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            temperature,
            max_output_tokens,
            kind: GenerationKind::Chat,
        }
    }

    pub fn probe(max_output_tokens: u32) -> Self {
        Self {
            temperature: 0.0,
            max_output_tokens,
            kind: GenerationKind::Probe,
        }
    }
}

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()
            .map_err(|e| {
                ProviderError::configuration("gemini", format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Request body for a single-prompt generation
    pub fn build_request(&self, prompt: &str, params: GenerationParams) -> Value {
        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}]
            }],
            "generationConfig": {
                "temperature": params.temperature,
                "maxOutputTokens": params.max_output_tokens
            }
        });

        if params.kind == GenerationKind::Chat {
            let config = &mut body["generationConfig"];
            config["candidateCount"] = json!(1);
            config["topP"] = json!(0.8);
            config["topK"] = json!(10);

            body["safetySettings"] = Value::Array(
                SAFETY_CATEGORIES
                    .iter()
                    .map(|category| {
                        json!({
                            "category": category,
                            "threshold": "BLOCK_MEDIUM_AND_ABOVE"
                        })
                    })
                    .collect(),
            );
        }

        body
    }

    /// Call `generateContent` on `model`
    pub async fn generate(
        &self,
        model: &str,
        body: &Value,
        credential: &Credential,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let url = self.config.get_endpoint(model, "generateContent");
        let headers = self.build_headers(credential)?;

        tracing::debug!(url = %url, "Sending Gemini request");

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::network("gemini", format!("Network error: {}", e)))?;

        self.handle_response(response).await
    }

    fn build_headers(&self, credential: &Credential) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut key = HeaderValue::from_str(credential.expose())
            .map_err(|_| ProviderError::authentication("gemini", "Invalid API key format"))?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);

        Ok(headers)
    }

    async fn handle_response(
        &self,
        response: Response,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            ProviderError::network("gemini", format!("Failed to read response: {}", e))
        })?;

        tracing::debug!(status = %status, "Gemini response received");

        if !status.is_success() {
            return Err(GeminiErrorMapper::from_http_status(
                status.as_u16(),
                &response_text,
            ));
        }

        serde_json::from_str(&response_text).map_err(|e| {
            ProviderError::serialization("gemini", format!("Failed to parse response JSON: {}", e))
        })
    }
}
