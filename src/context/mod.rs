// ABOUTME: Explicit dependency context handed to every route handler
// ABOUTME: Wires the recipe catalog, saved-recipe service and identity service from configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

//! Application context
//!
//! Handlers receive the store handles and the identity service through this
//! context instead of reading process-wide globals. The current user is never
//! part of the context; it is resolved per request from the bearer token.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::auth::{AuthService, LocalIdentityProvider, SupabaseIdentityProvider};
use crate::config::{DatabaseUrl, ServerConfig, SupabaseConfig};
use crate::services::recipes::RecipeCatalog;
use crate::services::saved::SavedRecipesService;
use crate::store::{SqliteStore, SupabaseStore};

/// Shared dependencies for request handlers
#[derive(Clone)]
pub struct AppContext {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Recipe reads with fallback
    pub catalog: RecipeCatalog,
    /// Saved-recipe toggle
    pub saved: SavedRecipesService,
    /// Identity flows
    pub auth: AuthService,
}

impl AppContext {
    /// Build the context for a configuration: hosted backend when configured, local `SQLite` otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP clients cannot be built, or the local database cannot be opened or migrated
    pub async fn from_config(config: ServerConfig) -> Result<Self> {
        match config.supabase.clone() {
            Some(backend) => Self::hosted(config, &backend),
            None => Self::local(config).await,
        }
    }

    fn hosted(config: ServerConfig, backend: &SupabaseConfig) -> Result<Self> {
        let timeout = config.store_timeout();
        let store = Arc::new(
            SupabaseStore::new(backend, timeout).context("Failed to build recipe store client")?,
        );
        let provider = SupabaseIdentityProvider::new(backend, timeout)
            .context("Failed to build identity provider client")?;

        let catalog = RecipeCatalog::new(store.clone(), timeout);
        info!(backend = %backend.url, "Using hosted recipe store and identity provider");
        Ok(Self {
            saved: SavedRecipesService::new(store, catalog.clone()),
            catalog,
            auth: AuthService::new(Arc::new(provider)),
            config: Arc::new(config),
        })
    }

    async fn local(config: ServerConfig) -> Result<Self> {
        if let DatabaseUrl::SQLite { path } = &config.database_url {
            ensure_parent_dir(path)?;
        }
        let url = config.database_url.to_connection_string();
        let store = SqliteStore::connect(&url)
            .await
            .with_context(|| format!("Failed to open local database {url}"))?;
        let provider = LocalIdentityProvider::new(store.pool().clone());

        if config.auto_migrate {
            store.migrate().await.context("Recipe store migration failed")?;
            provider
                .migrate()
                .await
                .context("Identity store migration failed")?;
        }

        let store = Arc::new(store);
        let catalog = RecipeCatalog::new(store.clone(), config.store_timeout());
        info!(database = %url, "Using local recipe store and identity provider");
        Ok(Self {
            saved: SavedRecipesService::new(store, catalog.clone()),
            catalog,
            auth: AuthService::new(Arc::new(provider)),
            config: Arc::new(config),
        })
    }

    /// Context with no collaborators: fallback recipes only, no saving, no sign-in
    #[must_use]
    pub fn fallback_only(config: ServerConfig) -> Self {
        let catalog = RecipeCatalog::fallback_only();
        Self {
            saved: SavedRecipesService::unavailable(catalog.clone()),
            catalog,
            auth: AuthService::not_configured(),
            config: Arc::new(config),
        }
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create database directory {}", dir.display())),
        _ => Ok(()),
    }
}
