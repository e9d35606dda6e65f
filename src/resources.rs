// ABOUTME: Shared server resources passed to all route handlers
// ABOUTME: Bundles database, provider clients, and configuration behind one Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Shared state for the HTTP surface.
//!
//! All route handlers receive an `Arc<ServerResources>` as axum state;
//! resources are constructed once at startup and shared across requests.

use crate::config::ServerConfig;
use crate::database::Database;
use crate::services::recipe_search::RecipeSearchService;
use diario_providers::translation::TranslationProvider;
use std::sync::Arc;

/// Long-lived resources shared by every request
pub struct ServerResources {
    /// Diary store
    pub database: Database,
    /// Translation provider, used directly by `/traduzir_texto`
    pub translator: Arc<dyn TranslationProvider>,
    /// Recipe aggregation pipeline
    pub recipe_search: RecipeSearchService,
    /// Runtime configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Bundle the server's long-lived resources
    #[must_use]
    pub fn new(
        database: Database,
        translator: Arc<dyn TranslationProvider>,
        recipe_search: RecipeSearchService,
        config: ServerConfig,
    ) -> Self {
        Self {
            database,
            translator,
            recipe_search,
            config,
        }
    }
}
