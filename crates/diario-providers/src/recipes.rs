// ABOUTME: Recipe search provider integration and data reshaping
// ABOUTME: RecipeProvider trait and Spoonacular-style complexSearch client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::errors::{ProviderError, ProviderResult};
use crate::http_client::shared_client;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

/// Provider name used in errors and logs
const SERVICE: &str = "recipe-search";

/// One ingredient of a provider recipe, normalized to metric measures
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderIngredient {
    /// Ingredient name in the provider's locale
    pub name: String,
    /// Metric amount
    pub amount: f64,
    /// Metric unit (g, ml, ...)
    pub unit: String,
}

/// A recipe as returned by the search provider, normalized away from the
/// provider's wire shape
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRecipe {
    /// Recipe title in the provider's locale
    pub title: String,
    /// Ordered instruction steps
    pub steps: Vec<String>,
    /// Ordered ingredient list
    pub ingredients: Vec<ProviderIngredient>,
}

/// Abstraction over the external recipe-search provider
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Search for recipes matching `include` ingredients while avoiding
    /// `exclude` ingredients, returning at most `count` results
    ///
    /// # Errors
    ///
    /// Returns a transport/status/malformed-body error when the remote
    /// call fails. An empty result list is NOT an error at this layer;
    /// the caller decides how to surface it.
    async fn search(
        &self,
        include: &str,
        exclude: &str,
        count: u8,
    ) -> ProviderResult<Vec<ProviderRecipe>>;
}

/// Configuration for the recipe search API client
#[derive(Debug, Clone)]
pub struct SpoonacularConfig {
    /// API base URL (e.g. `https://api.spoonacular.com`)
    pub base_url: String,
    /// API key, loaded from runtime configuration only
    pub api_key: String,
}

/// Client for a Spoonacular-style `complexSearch` API
pub struct SpoonacularClient {
    config: SpoonacularConfig,
}

impl SpoonacularClient {
    /// Create a client from runtime configuration
    #[must_use]
    pub const fn new(config: SpoonacularConfig) -> Self {
        Self { config }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/recipes/complexSearch",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

// Wire shapes of the complexSearch response, limited to the fields the
// aggregator consumes.

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResult {
    title: String,
    #[serde(default)]
    analyzed_instructions: Vec<InstructionSet>,
    #[serde(default)]
    extended_ingredients: Vec<ExtendedIngredient>,
}

#[derive(Debug, Deserialize)]
struct InstructionSet {
    #[serde(default)]
    steps: Vec<InstructionStep>,
}

#[derive(Debug, Deserialize)]
struct InstructionStep {
    step: String,
}

#[derive(Debug, Deserialize)]
struct ExtendedIngredient {
    name: String,
    measures: Measures,
}

#[derive(Debug, Deserialize)]
struct Measures {
    metric: MetricMeasure,
}

#[derive(Debug, Deserialize)]
struct MetricMeasure {
    amount: f64,
    #[serde(rename = "unitShort")]
    unit_short: String,
}

impl From<SearchResult> for ProviderRecipe {
    fn from(result: SearchResult) -> Self {
        let steps = result
            .analyzed_instructions
            .into_iter()
            .flat_map(|set| set.steps)
            .map(|s| s.step)
            .collect();

        let ingredients = result
            .extended_ingredients
            .into_iter()
            .map(|i| ProviderIngredient {
                name: i.name,
                amount: i.measures.metric.amount,
                unit: i.measures.metric.unit_short,
            })
            .collect();

        Self {
            title: result.title,
            steps,
            ingredients,
        }
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularClient {
    async fn search(
        &self,
        include: &str,
        exclude: &str,
        count: u8,
    ) -> ProviderResult<Vec<ProviderRecipe>> {
        debug!(include, exclude, count, "calling recipe search provider");

        let count = count.to_string();
        let mut params = vec![
            ("apiKey", self.config.api_key.as_str()),
            ("includeIngredients", include),
            ("number", count.as_str()),
            // Full recipe information: instructions and ingredient measures
            ("addRecipeInformation", "true"),
            ("fillIngredients", "true"),
            ("addRecipeInstructions", "true"),
            ("instructionsRequired", "true"),
        ];
        if !exclude.is_empty() {
            params.push(("excludeIngredients", exclude));
        }

        let response = shared_client()
            .get(self.endpoint())
            .query(&params)
            .send()
            .await
            .map_err(|source| ProviderError::Http {
                service: SERVICE,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "recipe provider returned non-success status");
            return Err(ProviderError::UpstreamStatus {
                service: SERVICE,
                status: status.as_u16(),
            });
        }

        let body: SearchResponse =
            response
                .json()
                .await
                .map_err(|e| ProviderError::MalformedResponse {
                    service: SERVICE,
                    detail: e.to_string(),
                })?;

        Ok(body.results.into_iter().map(ProviderRecipe::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "results": [
            {
                "title": "Scrambled Eggs",
                "analyzedInstructions": [
                    {
                        "steps": [
                            {"number": 1, "step": "Crack the eggs."},
                            {"number": 2, "step": "Whisk and cook."}
                        ]
                    }
                ],
                "extendedIngredients": [
                    {
                        "name": "egg",
                        "measures": {
                            "us": {"amount": 2.0, "unitShort": "large"},
                            "metric": {"amount": 2.0, "unitShort": ""}
                        }
                    },
                    {
                        "name": "butter",
                        "measures": {
                            "us": {"amount": 0.5, "unitShort": "oz"},
                            "metric": {"amount": 14.0, "unitShort": "g"}
                        }
                    }
                ]
            }
        ],
        "offset": 0,
        "number": 1,
        "totalResults": 42
    }"#;

    #[test]
    fn test_search_response_reshaping() {
        let response: SearchResponse = serde_json::from_str(FIXTURE).unwrap();
        let recipes: Vec<ProviderRecipe> =
            response.results.into_iter().map(ProviderRecipe::from).collect();

        assert_eq!(recipes.len(), 1);
        let recipe = &recipes[0];
        assert_eq!(recipe.title, "Scrambled Eggs");
        assert_eq!(recipe.steps, vec!["Crack the eggs.", "Whisk and cook."]);
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[1].name, "butter");
        assert!((recipe.ingredients[1].amount - 14.0).abs() < f64::EPSILON);
        assert_eq!(recipe.ingredients[1].unit, "g");
    }

    #[test]
    fn test_empty_results_parse_as_empty_vec() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"results": [], "totalResults": 0}"#).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_missing_instruction_blocks_default_to_empty() {
        let body = r#"{"results": [{"title": "Plain Toast"}]}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let recipe = ProviderRecipe::from(response.results.into_iter().next().unwrap());
        assert!(recipe.steps.is_empty());
        assert!(recipe.ingredients.is_empty());
    }
}
