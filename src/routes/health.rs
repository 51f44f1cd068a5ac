// ABOUTME: Health and readiness endpoints
// ABOUTME: Readiness reports which collaborators are configured and whether the store answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use fusion_core::constants::routes;

use crate::context::AppContext;
use crate::services::recipes::DataSource;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check routes
    pub fn routes(ctx: AppContext) -> Router {
        Router::new()
            .route(routes::HEALTH, get(Self::handle_health))
            .route(routes::READY, get(Self::handle_ready))
            .with_state(ctx)
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": "fusion-flavors",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    /// Always ready: a missing store degrades to fallback data rather than failing
    async fn handle_ready(State(ctx): State<AppContext>) -> Json<Value> {
        let recipes = ctx.catalog.list_all().await;
        Json(json!({
            "status": "ready",
            "recipe_source": recipes.source,
            "store_available": recipes.source == DataSource::Store,
            "auth_configured": ctx.auth.is_configured(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
