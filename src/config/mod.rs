// ABOUTME: Configuration module for the feeding diary server
// ABOUTME: Environment-based runtime configuration with fail-fast credential loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration management for the diary API server.

/// Environment-based configuration management
pub mod environment;

pub use environment::{
    DatabaseConfig, HttpClientConfig, LocaleConfig, ProviderCredentials, ServerConfig,
};
