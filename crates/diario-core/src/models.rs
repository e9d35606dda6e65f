// ABOUTME: Domain models for diary entries, meals, and recipe search results
// ABOUTME: DiaryEntry, Meal, Recipe, and RecipeIngredient definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! Core data structures for the feeding diary API. Wire field names are
//! the Portuguese names of the original public API (`data_registro`,
//! `refeicoes`, `tipo`, ...), mapped onto English struct fields through
//! serde renames.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum accepted length for the free-text meal comments field
pub const MAX_COMMENT_LENGTH: usize = 4000;

/// One feeding event within a diary entry
///
/// Meals have no independent identity on the wire: they are always read
/// and written as part of their owning `DiaryEntry`. The surrogate id
/// assigned by the store stays internal to the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    /// Kind of meal offered (e.g. `LANCHE_MANHA`)
    #[serde(rename = "tipo")]
    pub meal_type: String,
    /// Method used to offer the food (e.g. `BLW`)
    #[serde(rename = "metodo")]
    pub method: String,
    /// Assessment of how the meal went (e.g. `SUCESSO`)
    #[serde(rename = "avaliacao")]
    pub assessment: String,
    /// Acceptance of the offered food (e.g. `OTIMO`)
    #[serde(rename = "aceitacao")]
    pub acceptance: String,
    /// Free-text comments, bounded at `MAX_COMMENT_LENGTH` characters
    #[serde(rename = "comentarios")]
    pub comments: String,
}

/// One calendar day's feeding record, uniquely keyed by date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Record date, primary key of the entry
    #[serde(rename = "data_registro")]
    pub date: NaiveDate,
    /// Meals offered on this date, owned exclusively by the entry
    #[serde(rename = "refeicoes")]
    pub meals: Vec<Meal>,
}

/// One ingredient of a recipe search result, in metric measures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient name
    pub name: String,
    /// Metric amount
    pub quantity: f64,
    /// Metric unit (g, ml, ...)
    pub unit: String,
}

/// Recipe search result returned to the caller
///
/// Ephemeral shape assembled by the recipe aggregator; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe title
    pub title: String,
    /// Step-by-step instructions flattened into one string, steps
    /// separated by line breaks
    pub instructions: String,
    /// Ordered ingredient list
    pub ingredients: Vec<RecipeIngredient>,
}
