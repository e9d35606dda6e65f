// ABOUTME: Recipe search route handler delegating to the aggregation pipeline
// ABOUTME: Validates ingredient parameters and surfaces pipeline failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Recipe search route
//!
//! Thin handler over the recipe aggregation pipeline. Ingredient lists
//! arrive in the caller's locale as free text; the pipeline owns all
//! translation and provider calls.

use crate::resources::ServerResources;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use diario_core::errors::AppError;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Query parameters for a recipe search
#[derive(Debug, Deserialize)]
pub struct RecipeSearchParams {
    /// Ingredients the recipe must include, caller's locale
    #[serde(default)]
    pub ingredients: String,
    /// Ingredients the recipe must avoid (optional)
    #[serde(rename = "excludeIngredients", default)]
    pub exclude_ingredients: String,
}

/// Recipe search routes
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create the recipe search route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/buscar_receita", get(Self::handle_search))
            .with_state(resources)
    }

    /// Handle a recipe search request
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<RecipeSearchParams>,
    ) -> Result<Response, AppError> {
        if params.ingredients.trim().is_empty() {
            warn!("rejecting recipe search without ingredients");
            return Err(AppError::missing_field("ingredients"));
        }

        info!(
            ingredients = %params.ingredients,
            exclude = %params.exclude_ingredients,
            "searching for recipe"
        );

        let recipe = resources
            .recipe_search
            .search(&params.ingredients, &params.exclude_ingredients)
            .await?;

        Ok((StatusCode::OK, Json(recipe)).into_response())
    }
}
