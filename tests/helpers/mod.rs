// ABOUTME: Shared test helpers and fixtures for integration tests
// ABOUTME: In-memory SQLite contexts, seeded stores, signed-in users and sample recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;

use std::sync::Arc;
use std::time::Duration;

use fusion_flavors::auth::{
    AuthService, AuthSession, LocalIdentityProvider, SessionUser, SignInRequest, SignUpRequest,
};
use fusion_flavors::config::{DatabaseUrl, Environment, ServerConfig};
use fusion_flavors::context::AppContext;
use fusion_flavors::models::{Difficulty, Recipe};
use fusion_flavors::services::recipes::RecipeCatalog;
use fusion_flavors::services::saved::SavedRecipesService;
use fusion_flavors::store::fallback::fallback_recipes;
use fusion_flavors::store::SqliteStore;

/// Password used by every test account
pub const TEST_PASSWORD: &str = "secret-pass";

/// Configuration for tests: in-memory database, no hosted backend
pub fn test_config() -> ServerConfig {
    ServerConfig {
        environment: Environment::Testing,
        database_url: DatabaseUrl::Memory,
        public_base_url: "https://fusionflavors.test".to_owned(),
        store_timeout_secs: 2,
        ..ServerConfig::default()
    }
}

/// Migrated in-memory store
pub async fn memory_store() -> SqliteStore {
    let store = SqliteStore::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    store.migrate().await.expect("Failed to migrate store");
    store
}

/// Migrated in-memory store holding the fallback catalog
pub async fn seeded_store() -> SqliteStore {
    let store = memory_store().await;
    for recipe in fallback_recipes() {
        store
            .upsert_recipe(&recipe)
            .await
            .expect("Failed to seed recipe");
    }
    store
}

/// Context over an in-memory store and the local identity provider
pub async fn local_context(seed: bool) -> AppContext {
    let store = if seed {
        seeded_store().await
    } else {
        memory_store().await
    };
    let provider = LocalIdentityProvider::new(store.pool().clone());
    provider.migrate().await.expect("Failed to migrate identity store");

    let config = test_config();
    let store = Arc::new(store);
    let catalog = RecipeCatalog::new(store.clone(), Duration::from_secs(config.store_timeout_secs));
    AppContext {
        saved: SavedRecipesService::new(store, catalog.clone()),
        catalog,
        auth: AuthService::new(Arc::new(provider)),
        config: Arc::new(config),
    }
}

/// Context with no store and no identity provider
pub fn fallback_context() -> AppContext {
    AppContext::fallback_only(test_config())
}

/// Register and sign in a user, returning the session
pub async fn sign_in_new_user(auth: &AuthService, email: &str) -> AuthSession {
    auth.sign_up(SignUpRequest {
        email: email.to_owned(),
        password: TEST_PASSWORD.to_owned(),
        confirm_password: TEST_PASSWORD.to_owned(),
        display_name: None,
    })
    .await
    .expect("Sign-up failed");

    auth.sign_in(SignInRequest {
        email: email.to_owned(),
        password: TEST_PASSWORD.to_owned(),
    })
    .await
    .expect("Sign-in failed")
}

/// Register, sign in and resolve the per-request user
pub async fn session_user(auth: &AuthService, email: &str) -> SessionUser {
    let session = sign_in_new_user(auth, email).await;
    auth.current_user(Some(&session.access_token))
        .await
        .expect("Fresh token should resolve to a user")
}

/// A recipe with `steps` plain instructions and no authored guide
pub fn sample_recipe(id: i64, title: &str, steps: usize) -> Recipe {
    Recipe {
        id,
        title: title.to_owned(),
        cuisine: "Test".to_owned(),
        prep_time: "15 min".to_owned(),
        difficulty: Difficulty::Easy,
        image_url: String::new(),
        servings: 2,
        ingredients: vec!["1 pinch salt".into()],
        instructions: (1..=steps).map(|n| format!("Do step {n}.")).collect(),
    }
}
