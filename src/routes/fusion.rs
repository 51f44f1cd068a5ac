// ABOUTME: Fusion cuisine picker and variant presenter endpoints
// ABOUTME: Variants are static content looked up by base recipe and picked cuisine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use fusion_core::constants::routes;
use fusion_core::errors::AppError;
use fusion_core::models::{RecipeId, RecipeSummary};

use crate::context::AppContext;
use crate::fusion::{picker_cuisines, select_cuisine, variants_for, FusionVariant, PickerCuisine};
use crate::services::recipes::DataSource;

/// Picker list response
#[derive(Debug, Serialize)]
pub struct CuisineListResponse {
    /// Cuisines in display order
    pub cuisines: Vec<PickerCuisine>,
}

/// Variant presenter response
#[derive(Debug, Serialize)]
pub struct FusionVariantsResponse {
    /// Base recipe
    pub base: RecipeSummary,
    /// Canonical cuisine name
    pub cuisine: &'static str,
    /// Subtle, balanced and bold variants
    pub variants: Vec<FusionVariant>,
    /// Source of the base recipe
    pub source: DataSource,
}

/// Fusion routes handler
pub struct FusionRoutes;

impl FusionRoutes {
    /// Create the fusion routes
    pub fn routes(ctx: AppContext) -> Router {
        Router::new()
            .route(routes::CUISINES, get(Self::handle_cuisines))
            .route(
                &format!("{}/:id/fusion/:cuisine", routes::RECIPES),
                get(Self::handle_variants),
            )
            .with_state(ctx)
    }

    /// Handle GET /api/cuisines
    async fn handle_cuisines() -> Json<CuisineListResponse> {
        Json(CuisineListResponse {
            cuisines: picker_cuisines(),
        })
    }

    /// Handle GET /api/recipes/:id/fusion/:cuisine
    async fn handle_variants(
        State(ctx): State<AppContext>,
        Path((id, cuisine)): Path<(RecipeId, String)>,
    ) -> Result<Response, AppError> {
        let cuisine = select_cuisine(&cuisine)?;
        let base = ctx.catalog.get_by_id(id).await?;

        let response = FusionVariantsResponse {
            variants: variants_for(&base.data, cuisine),
            base: RecipeSummary::from(&base.data),
            cuisine,
            source: base.source,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
