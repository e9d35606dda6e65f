// ABOUTME: Diary entry route handlers for the feeding diary CRUD operations
// ABOUTME: Insert, list, find, delete, and edit endpoints over the diary store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Diary entry routes
//!
//! This module handles the diary aggregate CRUD operations. Entries are
//! keyed by date; meals are always carried inside their entry. Editing
//! replaces the meal list wholesale (no partial edits).

use crate::resources::ServerResources;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::NaiveDate;
use diario_core::errors::AppError;
use diario_core::models::{DiaryEntry, Meal, MAX_COMMENT_LENGTH};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Request body for inserting or editing a diary entry
#[derive(Debug, Deserialize)]
pub struct DiaryUpsertRequest {
    /// Record date, ISO calendar date
    #[serde(rename = "data_registro")]
    pub date: String,
    /// Meals offered on the date (empty list is legal)
    #[serde(rename = "refeicoes", default)]
    pub meals: Vec<MealPayload>,
}

/// One meal in an insert/edit request
#[derive(Debug, Deserialize)]
pub struct MealPayload {
    /// Kind of meal offered
    #[serde(rename = "tipo", default)]
    pub meal_type: String,
    /// Method used to offer the food
    #[serde(rename = "metodo", default)]
    pub method: String,
    /// Assessment of how the meal went
    #[serde(rename = "avaliacao", default)]
    pub assessment: String,
    /// Acceptance of the offered food
    #[serde(rename = "aceitacao", default)]
    pub acceptance: String,
    /// Free-text comments
    #[serde(rename = "comentarios", default)]
    pub comments: String,
}

/// Query parameters selecting a diary entry by date
#[derive(Debug, Deserialize)]
pub struct DiaryDateQuery {
    /// Record date, ISO calendar date
    #[serde(rename = "data_registro")]
    pub date: String,
}

/// Response listing all diary entries
#[derive(Debug, Serialize)]
pub struct ListDiariesResponse {
    /// All stored entries in date order
    #[serde(rename = "diarios")]
    pub diaries: Vec<DiaryEntry>,
}

/// Confirmation returned after deleting an entry
#[derive(Debug, Serialize)]
pub struct DeleteDiaryResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Date of the removed entry
    #[serde(rename = "data_registro")]
    pub date: NaiveDate,
}

impl DiaryUpsertRequest {
    /// Validate the request and convert it into domain values
    fn validate(self) -> Result<(NaiveDate, Vec<Meal>), AppError> {
        let date = parse_date(&self.date)?;

        let mut meals = Vec::with_capacity(self.meals.len());
        for meal in self.meals {
            if meal.comments.chars().count() > MAX_COMMENT_LENGTH {
                return Err(AppError::invalid_input(format!(
                    "comentarios must not exceed {MAX_COMMENT_LENGTH} characters"
                )));
            }
            meals.push(Meal {
                meal_type: meal.meal_type,
                method: meal.method,
                assessment: meal.assessment,
                acceptance: meal.acceptance,
                comments: meal.comments,
            });
        }

        Ok((date, meals))
    }
}

/// Parse an ISO calendar date, mapping failures onto the 400 contract
fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
        warn!(value = raw, "rejecting malformed data_registro");
        AppError::invalid_format(format!("data_registro must be an ISO calendar date: {raw}"))
            .with_source(e)
    })
}

/// Diary entry management routes
pub struct DiaryRoutes;

impl DiaryRoutes {
    /// Create all diary entry routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/inserir_diario", post(Self::handle_insert))
            .route("/listar_diarios", get(Self::handle_list))
            .route("/buscar_diario", get(Self::handle_find))
            .route("/deletar_diario", delete(Self::handle_delete))
            .route("/editar_diario", post(Self::handle_edit))
            .with_state(resources)
    }

    /// Handle diary entry creation
    async fn handle_insert(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<DiaryUpsertRequest>,
    ) -> Result<Response, AppError> {
        let (date, meals) = request.validate()?;

        info!(date = %date, meals = meals.len(), "inserting diary entry");

        let entry = resources.database.insert_diary(date, &meals).await?;

        Ok((StatusCode::OK, Json(entry)).into_response())
    }

    /// Handle listing every diary entry
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let diaries = resources.database.list_diaries().await?;

        info!(count = diaries.len(), "listing diary entries");

        Ok((StatusCode::OK, Json(ListDiariesResponse { diaries })).into_response())
    }

    /// Handle finding one diary entry by date
    async fn handle_find(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<DiaryDateQuery>,
    ) -> Result<Response, AppError> {
        let date = parse_date(&query.date)?;

        info!(date = %date, "looking up diary entry");

        let entry = resources
            .database
            .get_diary(date)
            .await?
            .ok_or_else(|| {
                warn!(date = %date, "diary entry not found");
                AppError::not_found(format!("diary entry for {date}"))
            })?;

        Ok((StatusCode::OK, Json(entry)).into_response())
    }

    /// Handle deleting a diary entry and its meals
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<DiaryDateQuery>,
    ) -> Result<Response, AppError> {
        let date = parse_date(&query.date)?;

        info!(date = %date, "deleting diary entry");

        resources.database.delete_diary(date).await?;

        let response = DeleteDiaryResponse {
            message: "diary entry removed".into(),
            date,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle replacing the meals of an existing entry
    async fn handle_edit(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<DiaryUpsertRequest>,
    ) -> Result<Response, AppError> {
        let (date, meals) = request.validate()?;

        info!(date = %date, meals = meals.len(), "editing diary entry");

        let entry = resources.database.replace_meals(date, &meals).await?;

        Ok((StatusCode::OK, Json(entry)).into_response())
    }
}
