// ABOUTME: Text translation route handler over the translation provider
// ABOUTME: Validates the text parameter and maps provider failures onto the 400 contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Text translation route
//!
//! Exposes the translation provider directly. Any failure (empty text,
//! transport error, upstream non-success) is a 400 on this endpoint;
//! callers must not use the text of a failed translation.

use crate::resources::ServerResources;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use diario_core::errors::AppError;
use diario_providers::errors::ProviderError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

fn default_source_locale() -> String {
    "pt-BR".into()
}

fn default_target_locale() -> String {
    "en".into()
}

/// Query parameters for a translation request
#[derive(Debug, Deserialize)]
pub struct TranslateParams {
    /// Text to translate
    #[serde(rename = "texto", default)]
    pub text: String,
    /// Source locale (defaults to the diary's locale)
    #[serde(rename = "idioma_origem", default = "default_source_locale")]
    pub source: String,
    /// Target locale
    #[serde(rename = "idioma_destino", default = "default_target_locale")]
    pub target: String,
}

/// Response carrying the translated text
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    /// Translated text
    #[serde(rename = "texto_traduzido")]
    pub translated_text: String,
}

/// Translation routes
pub struct TranslationRoutes;

impl TranslationRoutes {
    /// Create the translation route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/traduzir_texto", get(Self::handle_translate))
            .with_state(resources)
    }

    /// Handle a translation request
    async fn handle_translate(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<TranslateParams>,
    ) -> Result<Response, AppError> {
        if params.text.trim().is_empty() {
            warn!("rejecting translation of empty text");
            return Err(AppError::missing_field("texto"));
        }

        info!(
            source = %params.source,
            target = %params.target,
            chars = params.text.len(),
            "translating text"
        );

        let translated_text = resources
            .translator
            .translate(&params.text, &params.source, &params.target)
            .await
            .map_err(|e| match e {
                ProviderError::EmptyInput => AppError::missing_field("texto"),
                other => {
                    warn!(error = %other, "translation provider call failed");
                    AppError::translation_failed("the text could not be translated")
                        .with_source(other)
                }
            })?;

        Ok((StatusCode::OK, Json(TranslateResponse { translated_text })).into_response())
    }
}
