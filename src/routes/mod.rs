// ABOUTME: Route module organization for the feeding diary HTTP endpoints
// ABOUTME: Centralized route definitions organized by domain with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Route module for the diary API server
//!
//! Each domain module contains route definitions and thin handler
//! functions that delegate to the store or the service layer. Route
//! paths are the legacy Portuguese paths of the original public API and
//! must not change.

use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Diary entry CRUD routes
pub mod diary;
/// Health check and system status routes
pub mod health;
/// Recipe search route
pub mod recipes;
/// Text translation route
pub mod translation;

/// Diary route handlers
pub use diary::DiaryRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Recipe search route handlers
pub use recipes::RecipeRoutes;
/// Translation route handlers
pub use translation::TranslationRoutes;

/// Assemble the complete application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(DiaryRoutes::routes(resources.clone()))
        .merge(RecipeRoutes::routes(resources.clone()))
        .merge(TranslationRoutes::routes(resources))
        .merge(HealthRoutes::routes())
        .layer(TraceLayer::new_for_http())
}
