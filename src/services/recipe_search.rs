// ABOUTME: Recipe aggregation pipeline across the translation and recipe providers
// ABOUTME: Translates ingredients, searches recipes, reshapes, and translates the result back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Recipe Aggregator
//!
//! Orchestrates the three sequential remote calls behind
//! `/buscar_receita`: translate the ingredient lists to the provider's
//! locale, query the recipe provider, and translate the reshaped result
//! back to the caller's locale. No step runs after a failed
//! predecessor, and no partial recipe is ever returned.

use crate::services::envelope;
use diario_core::errors::{AppError, AppResult};
use diario_core::models::{Recipe, RecipeIngredient};
use diario_providers::errors::ProviderError;
use diario_providers::recipes::RecipeProvider;
use diario_providers::translation::TranslationProvider;
use std::sync::Arc;
use tracing::{info, warn};

/// The provider is always asked for a single best match; multi-result
/// search was dropped from the public contract.
const RESULT_COUNT: u8 = 1;

/// Recipe aggregation pipeline
pub struct RecipeSearchService {
    translator: Arc<dyn TranslationProvider>,
    recipes: Arc<dyn RecipeProvider>,
    caller_locale: String,
    provider_locale: String,
}

impl RecipeSearchService {
    /// Create the pipeline over the given providers and locales
    #[must_use]
    pub fn new(
        translator: Arc<dyn TranslationProvider>,
        recipes: Arc<dyn RecipeProvider>,
        caller_locale: String,
        provider_locale: String,
    ) -> Self {
        Self {
            translator,
            recipes,
            caller_locale,
            provider_locale,
        }
    }

    /// Search for one recipe matching the ingredient lists
    ///
    /// `include` and `exclude` arrive in the caller's locale. An empty
    /// exclusion list is legal and skips its translation call.
    ///
    /// # Errors
    ///
    /// `TranslationFailed` when either translation direction fails,
    /// `ExternalServiceError` when the recipe provider fails, and
    /// `ResourceNotFound` when the search matches nothing.
    pub async fn search(&self, include: &str, exclude: &str) -> AppResult<Recipe> {
        let include_translated = self
            .translator
            .translate(include, &self.caller_locale, &self.provider_locale)
            .await
            .map_err(translation_error)?;

        let exclude_translated = if exclude.trim().is_empty() {
            String::new()
        } else {
            self.translator
                .translate(exclude, &self.caller_locale, &self.provider_locale)
                .await
                .map_err(translation_error)?
        };

        info!(
            include = %include_translated,
            exclude = %exclude_translated,
            "searching recipe provider"
        );

        let results = self
            .recipes
            .search(&include_translated, &exclude_translated, RESULT_COUNT)
            .await
            .map_err(provider_error)?;

        let Some(found) = results.into_iter().next() else {
            warn!(include = %include_translated, "no recipe matched the translated ingredients");
            return Err(AppError::not_found("recipe matching the requested ingredients"));
        };

        let recipe = Recipe {
            title: found.title,
            instructions: found.steps.join("\n"),
            ingredients: found
                .ingredients
                .into_iter()
                .map(|i| RecipeIngredient {
                    name: i.name,
                    quantity: i.amount,
                    unit: i.unit,
                })
                .collect(),
        };

        let translated = self
            .translator
            .translate(
                &envelope::encode(&recipe),
                &self.provider_locale,
                &self.caller_locale,
            )
            .await
            .map_err(translation_error)?;

        let recipe = envelope::decode(&translated).map_err(|e| {
            warn!(error = %e, "translated recipe envelope could not be reassembled");
            AppError::translation_failed("the translated recipe could not be reassembled")
                .with_source(e)
        })?;

        info!(title = %recipe.title, "recipe search completed");
        Ok(recipe)
    }
}

fn translation_error(e: ProviderError) -> AppError {
    match e {
        ProviderError::EmptyInput => AppError::missing_field("ingredients"),
        other => {
            warn!(error = %other, "ingredient translation failed");
            AppError::translation_failed("the ingredient list could not be translated")
                .with_source(other)
        }
    }
}

fn provider_error(e: ProviderError) -> AppError {
    match e {
        ProviderError::NoResults => {
            AppError::not_found("recipe matching the requested ingredients")
        }
        other => {
            warn!(error = %other, "recipe provider call failed");
            AppError::external_service("recipe-search", "the recipe provider request failed")
                .with_source(other)
        }
    }
}
