// ABOUTME: Main library entry point for the Diario de Introducao Alimentar API
// ABOUTME: Infant feeding diary records plus recipe search over external providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Diario de Introducao Alimentar API
//!
//! Record-keeping API for an infant feeding diary. A diary entry is one
//! calendar day's feeding record (uniquely keyed by date) owning a list
//! of meals; the recipe-search feature aggregates an external recipe
//! provider and a translation provider.
//!
//! ## Modules
//!
//! - **config**: environment-based runtime configuration
//! - **database**: the diary/meal aggregate store over SQLite
//! - **logging**: structured logging bootstrap
//! - **resources**: shared per-process state for route handlers
//! - **routes**: the HTTP surface (legacy Portuguese route paths)
//! - **services**: the recipe aggregation pipeline and its envelope codec

/// Environment-based runtime configuration
pub mod config;

/// Diary entry and meal persistence over SQLite
pub mod database;

/// Logging configuration and structured logging setup
pub mod logging;

/// Shared server resources for route handlers
pub mod resources;

/// HTTP route definitions organized by domain
pub mod routes;

/// Recipe aggregation service layer
pub mod services;
