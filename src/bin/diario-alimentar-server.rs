// ABOUTME: Server binary for the Diario de Introducao Alimentar API
// ABOUTME: Loads configuration, initializes logging and storage, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Diary API Server Binary
//!
//! Starts the feeding diary API: environment configuration, structured
//! logging, SQLite-backed diary store, and the recipe/translation
//! provider clients.

use anyhow::Result;
use clap::Parser;
use diario_alimentar_server::{
    config::environment::ServerConfig,
    database::Database,
    logging,
    resources::ServerResources,
    routes,
    services::recipe_search::RecipeSearchService,
};
use diario_providers::{
    http_client::initialize_shared_client,
    recipes::{RecipeProvider, SpoonacularClient, SpoonacularConfig},
    translation::{LibreTranslateClient, TranslationConfig, TranslationProvider},
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "diario-alimentar-server")]
#[command(about = "Diario de Introducao Alimentar - infant feeding diary API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment; missing provider credentials
    // abort startup here rather than failing on the first request
    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Diario de Introducao Alimentar API");
    info!("{}", config.summary());

    initialize_shared_client(
        config.http_client.timeout_secs,
        config.http_client.connect_timeout_secs,
    );

    let database = Database::new(&config.database.url).await?;
    info!("Database initialized successfully: {}", config.database.url);

    let translator: Arc<dyn TranslationProvider> =
        Arc::new(LibreTranslateClient::new(TranslationConfig {
            base_url: config.translation.base_url.clone(),
            api_key: config.translation.api_key.clone(),
        }));

    let recipes: Arc<dyn RecipeProvider> = Arc::new(SpoonacularClient::new(SpoonacularConfig {
        base_url: config.recipes.base_url.clone(),
        api_key: config.recipes.api_key.clone(),
    }));

    let recipe_search = RecipeSearchService::new(
        translator.clone(),
        recipes,
        config.locales.caller.clone(),
        config.locales.provider.clone(),
    );

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(
        database,
        translator,
        recipe_search,
        config,
    ));

    let app = routes::router(resources);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", http_port)).await?;
    info!(port = http_port, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown signal handler");
    }
}
