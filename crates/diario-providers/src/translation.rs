// ABOUTME: Text translation provider integration for ingredient and recipe text
// ABOUTME: TranslationProvider trait and LibreTranslate-style keyed API client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::errors::{ProviderError, ProviderResult};
use crate::http_client::shared_client;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

/// Provider name used in errors and logs
const SERVICE: &str = "translation";

/// Abstraction over the external text-translation provider
///
/// The recipe aggregator and the `/traduzir_texto` endpoint both depend
/// on this trait rather than a concrete client, so tests can inject
/// fakes and the provider can be swapped without touching the pipeline.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` from `source` locale to `target` locale
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::EmptyInput` for empty text, and a
    /// transport/status/malformed-body error when the remote call fails.
    /// Callers must not use the text of a failed translation.
    async fn translate(&self, text: &str, source: &str, target: &str) -> ProviderResult<String>;
}

/// Configuration for the translation API client
#[derive(Debug, Clone)]
pub struct TranslationConfig {
    /// API base URL (e.g. `https://libretranslate.com`)
    pub base_url: String,
    /// API key, loaded from runtime configuration only
    pub api_key: String,
}

/// Client for a LibreTranslate-style translation API
///
/// The provider expects form fields `q`, `source`, `target`,
/// `format=text`, and `api_key`, and answers
/// `{ "translatedText": "..." }`.
pub struct LibreTranslateClient {
    config: TranslationConfig,
}

/// Response body of the translation endpoint
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl LibreTranslateClient {
    /// Create a client from runtime configuration
    #[must_use]
    pub const fn new(config: TranslationConfig) -> Self {
        Self { config }
    }

    fn endpoint(&self) -> String {
        format!("{}/translate", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslateClient {
    async fn translate(&self, text: &str, source: &str, target: &str) -> ProviderResult<String> {
        if text.trim().is_empty() {
            return Err(ProviderError::EmptyInput);
        }

        debug!(source, target, chars = text.len(), "calling translation provider");

        let form = [
            ("q", text),
            ("source", source),
            ("target", target),
            ("format", "text"),
            ("api_key", self.config.api_key.as_str()),
        ];

        let response = shared_client()
            .post(self.endpoint())
            .form(&form)
            .send()
            .await
            .map_err(|source| ProviderError::Http {
                service: SERVICE,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "translation provider returned non-success status");
            return Err(ProviderError::UpstreamStatus {
                service: SERVICE,
                status: status.as_u16(),
            });
        }

        let body: TranslateResponse =
            response
                .json()
                .await
                .map_err(|e| ProviderError::MalformedResponse {
                    service: SERVICE,
                    detail: e.to_string(),
                })?;

        Ok(body.translated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_text_is_rejected_before_any_remote_call() {
        let client = LibreTranslateClient::new(TranslationConfig {
            base_url: "http://localhost:1".into(),
            api_key: "test-key".into(),
        });

        let result = client.translate("   ", "pt-BR", "en").await;
        assert!(matches!(result, Err(ProviderError::EmptyInput)));
    }

    #[test]
    fn test_translate_response_parsing() {
        let body = r#"{"translatedText": "eggs, flour"}"#;
        let parsed: TranslateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.translated_text, "eggs, flour");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = LibreTranslateClient::new(TranslationConfig {
            base_url: "https://libretranslate.com/".into(),
            api_key: "k".into(),
        });
        assert_eq!(client.endpoint(), "https://libretranslate.com/translate");
    }
}
