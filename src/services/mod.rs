// ABOUTME: Service layer for the recipe aggregation pipeline
// ABOUTME: Envelope encoding and the translate-search-translate orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Service layer behind the recipe-search route.

/// Escape-safe delimited encoding for round-tripping a recipe through translation
pub mod envelope;

/// Recipe aggregation pipeline (translate, search, reshape, translate back)
pub mod recipe_search;
