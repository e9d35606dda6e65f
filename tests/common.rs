// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database, resource, and fake provider helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(dead_code, clippy::missing_panics_doc, clippy::must_use_candidate)]

//! Shared test utilities for `diario_alimentar_server`
//!
//! Common setup functions to reduce duplication across integration
//! tests: an on-disk test database, fake providers for the recipe
//! pipeline, and a fully wired application router.

use async_trait::async_trait;
use axum::Router;
use diario_alimentar_server::{
    config::{
        DatabaseConfig, HttpClientConfig, LocaleConfig, ProviderCredentials, ServerConfig,
    },
    database::Database,
    resources::ServerResources,
    routes,
    services::recipe_search::RecipeSearchService,
};
use diario_providers::{
    errors::{ProviderError, ProviderResult},
    recipes::{ProviderIngredient, ProviderRecipe, RecipeProvider},
    translation::TranslationProvider,
};
use http_body_util::BodyExt;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, Once,
};
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
///
/// The returned `TempDir` must be kept alive for as long as the
/// database is used.
pub async fn create_test_database() -> (Database, TempDir) {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}", dir.path().join("test.db").display());
    let database = Database::new(&url).await.unwrap();
    (database, dir)
}

/// Server configuration pointing at unreachable providers
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        database: DatabaseConfig {
            url: "sqlite:unused".into(),
        },
        recipes: ProviderCredentials {
            base_url: "http://localhost:1".into(),
            api_key: "test-recipes-key".into(),
        },
        translation: ProviderCredentials {
            base_url: "http://localhost:1".into(),
            api_key: "test-translate-key".into(),
        },
        locales: LocaleConfig {
            caller: "pt-BR".into(),
            provider: "en".into(),
        },
        http_client: HttpClientConfig::default(),
    }
}

/// Translation fake that returns the input unchanged and records calls
#[derive(Default)]
pub struct RecordingTranslator {
    /// (text, source, target) per call, in order
    pub calls: Mutex<Vec<(String, String, String)>>,
}

#[async_trait]
impl TranslationProvider for RecordingTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str) -> ProviderResult<String> {
        if text.trim().is_empty() {
            return Err(ProviderError::EmptyInput);
        }
        self.calls
            .lock()
            .unwrap()
            .push((text.to_owned(), source.to_owned(), target.to_owned()));
        Ok(text.to_owned())
    }
}

/// Translation fake that always fails with an upstream status
pub struct FailingTranslator;

#[async_trait]
impl TranslationProvider for FailingTranslator {
    async fn translate(&self, _text: &str, _source: &str, _target: &str) -> ProviderResult<String> {
        Err(ProviderError::UpstreamStatus {
            service: "translation",
            status: 503,
        })
    }
}

/// Recipe provider fake serving canned results and recording whether it ran
pub struct FakeRecipeProvider {
    /// Recipes returned by every search
    pub recipes: Vec<ProviderRecipe>,
    /// Set once `search` has been called
    pub called: AtomicBool,
}

impl FakeRecipeProvider {
    pub fn with_results(recipes: Vec<ProviderRecipe>) -> Self {
        Self {
            recipes,
            called: AtomicBool::new(false),
        }
    }

    pub fn empty() -> Self {
        Self::with_results(Vec::new())
    }
}

#[async_trait]
impl RecipeProvider for FakeRecipeProvider {
    async fn search(
        &self,
        _include: &str,
        _exclude: &str,
        _count: u8,
    ) -> ProviderResult<Vec<ProviderRecipe>> {
        self.called.store(true, Ordering::SeqCst);
        Ok(self.recipes.clone())
    }
}

/// Recipe provider fake that always fails with an upstream status
pub struct FailingRecipeProvider;

#[async_trait]
impl RecipeProvider for FailingRecipeProvider {
    async fn search(
        &self,
        _include: &str,
        _exclude: &str,
        _count: u8,
    ) -> ProviderResult<Vec<ProviderRecipe>> {
        Err(ProviderError::UpstreamStatus {
            service: "recipe-search",
            status: 500,
        })
    }
}

/// A provider recipe fixture with instructions and metric ingredients
pub fn sample_provider_recipe() -> ProviderRecipe {
    ProviderRecipe {
        title: "Scrambled Eggs".into(),
        steps: vec!["Crack the eggs.".into(), "Whisk and cook.".into()],
        ingredients: vec![
            ProviderIngredient {
                name: "egg".into(),
                amount: 2.0,
                unit: String::new(),
            },
            ProviderIngredient {
                name: "butter".into(),
                amount: 14.0,
                unit: "g".into(),
            },
        ],
    }
}

/// Build the full application router over the given database and fakes
pub async fn build_test_router(
    database: Database,
    translator: Arc<dyn TranslationProvider>,
    recipes: Arc<dyn RecipeProvider>,
) -> Router {
    let recipe_search = RecipeSearchService::new(
        translator.clone(),
        recipes,
        "pt-BR".into(),
        "en".into(),
    );

    let resources = Arc::new(ServerResources::new(
        database,
        translator,
        recipe_search,
        test_config(),
    ));

    routes::router(resources)
}

/// Router over a fresh database with working fakes, for diary tests
pub async fn build_diary_router() -> (Router, TempDir) {
    let (database, dir) = create_test_database().await;
    let router = build_test_router(
        database,
        Arc::new(RecordingTranslator::default()),
        Arc::new(FakeRecipeProvider::with_results(vec![
            sample_provider_recipe(),
        ])),
    )
    .await;
    (router, dir)
}

/// Read a response body as JSON
pub async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
