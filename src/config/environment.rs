// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, provider credentials, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration management for production deployment
//!
//! Provider credentials are loaded exclusively from the environment and
//! are REQUIRED: the server refuses to start without them. An earlier
//! revision of this service shipped with an embedded API key; keys in
//! source are treated as a defect, never a fallback.

use anyhow::{Context, Result};
use std::env;

/// Default HTTP port for the API server
const DEFAULT_HTTP_PORT: u16 = 8090;

/// Default SQLite database location
const DEFAULT_DATABASE_URL: &str = "sqlite:./diario.db";

/// Default base URL of the recipe search provider
const DEFAULT_RECIPE_BASE_URL: &str = "https://api.spoonacular.com";

/// Default base URL of the translation provider
const DEFAULT_TRANSLATE_BASE_URL: &str = "https://libretranslate.com";

/// Default locale of diary users (ingredient lists arrive in this locale)
const DEFAULT_CALLER_LOCALE: &str = "pt-BR";

/// Default locale expected by the recipe provider
const DEFAULT_PROVIDER_LOCALE: &str = "en";

/// Default outbound request timeout in seconds
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default outbound connection timeout in seconds
const DEFAULT_HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    pub url: String,
}

/// Credentials and base URL for one external provider
#[derive(Debug, Clone)]
pub struct ProviderCredentials {
    /// API base URL
    pub base_url: String,
    /// API key loaded from the environment
    pub api_key: String,
}

/// Locales used by the recipe aggregation pipeline
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Locale of incoming ingredient lists and outgoing recipe text
    pub caller: String,
    /// Locale the recipe provider expects
    pub provider: String,
}

/// Timeouts for the shared outbound HTTP client
#[derive(Debug, Clone, Copy)]
pub struct HttpClientConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Complete server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Recipe search provider (Spoonacular-style)
    pub recipes: ProviderCredentials,
    /// Translation provider (LibreTranslate-style)
    pub translation: ProviderCredentials,
    /// Pipeline locales
    pub locales: LocaleConfig,
    /// Outbound HTTP client timeouts
    pub http_client: HttpClientConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Fails fast when a required credential (`SPOONACULAR_API_KEY`,
    /// `TRANSLATE_API_KEY`) is absent or a numeric variable does not
    /// parse.
    pub fn from_env() -> Result<Self> {
        let http_port = parse_env_or("HTTP_PORT", DEFAULT_HTTP_PORT)?;

        let database = DatabaseConfig {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into()),
        };

        let recipes = ProviderCredentials {
            base_url: env::var("SPOONACULAR_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_RECIPE_BASE_URL.into()),
            api_key: env::var("SPOONACULAR_API_KEY")
                .context("SPOONACULAR_API_KEY must be set (recipe search provider credential)")?,
        };

        let translation = ProviderCredentials {
            base_url: env::var("TRANSLATE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_TRANSLATE_BASE_URL.into()),
            api_key: env::var("TRANSLATE_API_KEY")
                .context("TRANSLATE_API_KEY must be set (translation provider credential)")?,
        };

        let locales = LocaleConfig {
            caller: env::var("DIARY_CALLER_LOCALE").unwrap_or_else(|_| DEFAULT_CALLER_LOCALE.into()),
            provider: env::var("RECIPE_PROVIDER_LOCALE")
                .unwrap_or_else(|_| DEFAULT_PROVIDER_LOCALE.into()),
        };

        let http_client = HttpClientConfig {
            timeout_secs: parse_env_or("HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?,
            connect_timeout_secs: parse_env_or(
                "HTTP_CONNECT_TIMEOUT_SECS",
                DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
            )?,
        };

        Ok(Self {
            http_port,
            database,
            recipes,
            translation,
            locales,
            http_client,
        })
    }

    /// One-line configuration summary safe for logging (no secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} database={} recipes={} translation={} locales={}->{} timeout={}s",
            self.http_port,
            self.database.url,
            self.recipes.base_url,
            self.translation.base_url,
            self.locales.caller,
            self.locales.provider,
            self.http_client.timeout_secs,
        )
    }
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{name} has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}
