// ABOUTME: External provider clients for recipe search and text translation
// ABOUTME: Provider traits, shared HTTP client, and typed provider errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! Outbound provider clients and core abstractions.
//!
//! This crate provides the provider system for the two external HTTP
//! dependencies of the diary API: a recipe-search provider
//! (Spoonacular-style `complexSearch`) and a text-translation provider
//! (LibreTranslate-style keyed API). Each client sits behind a trait so
//! the aggregation pipeline can be exercised with fakes in tests.

/// Shared HTTP client for provider API calls
pub mod http_client;

/// Typed errors for outbound provider calls
pub mod errors;

/// Recipe search provider trait and Spoonacular-style client
pub mod recipes;

/// Text translation provider trait and LibreTranslate-style client
pub mod translation;

pub use errors::{ProviderError, ProviderResult};
pub use http_client::{initialize_shared_client, shared_client};
pub use recipes::{ProviderIngredient, ProviderRecipe, RecipeProvider, SpoonacularClient};
pub use translation::{LibreTranslateClient, TranslationProvider};
