// ABOUTME: Structured error types for outbound provider calls
// ABOUTME: Distinguishes transport failures, upstream status codes, and malformed bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Typed errors for the recipe-search and translation providers.
//!
//! Callers must be able to tell a failed remote call apart from a call
//! that succeeded but matched nothing, so the taxonomy keeps those cases
//! separate. Nothing here is retried; each variant is converted into the
//! application error taxonomy at the operation boundary.

use thiserror::Error;

/// Errors returned by outbound provider calls
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Empty text was submitted for translation
    #[error("empty text submitted for translation")]
    EmptyInput,

    /// The HTTP request itself failed (connect, timeout, TLS, ...)
    #[error("request to {service} failed: {source}")]
    Http {
        /// Provider name for log correlation
        service: &'static str,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success HTTP status
    #[error("{service} returned status {status}")]
    UpstreamStatus {
        /// Provider name for log correlation
        service: &'static str,
        /// HTTP status code returned by the provider
        status: u16,
    },

    /// The provider answered 2xx but the body did not match the expected shape
    #[error("unexpected response from {service}: {detail}")]
    MalformedResponse {
        /// Provider name for log correlation
        service: &'static str,
        /// What was wrong with the body
        detail: String,
    },

    /// The search succeeded but matched no recipes
    #[error("no recipe matched the requested ingredients")]
    NoResults,
}

impl ProviderError {
    /// Whether this error represents a failure of the remote dependency
    /// (as opposed to bad input or an empty result set)
    #[must_use]
    pub const fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            Self::Http { .. } | Self::UpstreamStatus { .. } | Self::MalformedResponse { .. }
        )
    }
}

/// Result type alias for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
