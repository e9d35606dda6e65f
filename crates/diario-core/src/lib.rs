// ABOUTME: Core types for the Diario de Introducao Alimentar platform
// ABOUTME: Foundation crate with unified error handling and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Diario Core
//!
//! Foundation crate providing shared types for the infant feeding diary
//! API. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Domain models (`DiaryEntry`, `Meal`, `Recipe`)

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Domain models for diary entries, meals, and recipe search results
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode, ErrorResponse};
pub use models::{DiaryEntry, Meal, Recipe, RecipeIngredient, MAX_COMMENT_LENGTH};
