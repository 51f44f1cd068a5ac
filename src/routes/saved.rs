// ABOUTME: Saved-recipe toggle endpoints for the signed-in user
// ABOUTME: Anonymous callers get the sign-in prompt; reading the flag anonymously answers false
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use fusion_core::constants::routes;
use fusion_core::errors::AppError;
use fusion_core::models::RecipeId;

use crate::context::AppContext;
use crate::services::saved::SavedRecipeEntry;

/// Optional body for a save
#[derive(Debug, Default, Deserialize)]
pub struct SaveRecipeBody {
    /// Free-text note
    #[serde(default)]
    pub notes: Option<String>,
}

/// Saved flag for one recipe
#[derive(Debug, Serialize)]
pub struct SavedStatusResponse {
    /// Recipe id
    pub recipe_id: RecipeId,
    /// Whether the caller has saved it
    pub saved: bool,
}

/// The caller's saved recipes
#[derive(Debug, Serialize)]
pub struct SavedListResponse {
    /// Newest first
    pub saved: Vec<SavedRecipeEntry>,
    /// Number of entries
    pub count: usize,
}

/// Saved-recipe routes handler
pub struct SavedRoutes;

impl SavedRoutes {
    /// Create the saved-recipe routes
    pub fn routes(ctx: AppContext) -> Router {
        Router::new()
            .route(routes::SAVED, get(Self::handle_list))
            .route(
                &format!("{}/:recipe_id", routes::SAVED),
                get(Self::handle_status)
                    .put(Self::handle_save)
                    .delete(Self::handle_unsave),
            )
            .with_state(ctx)
    }

    /// Handle GET /api/saved
    async fn handle_list(
        State(ctx): State<AppContext>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user = super::current_user(&ctx, &headers).await;
        let saved = ctx.saved.list(user.as_ref()).await?;
        let response = SavedListResponse {
            count: saved.len(),
            saved,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/saved/:recipe_id
    async fn handle_status(
        State(ctx): State<AppContext>,
        headers: HeaderMap,
        Path(recipe_id): Path<RecipeId>,
    ) -> Json<SavedStatusResponse> {
        let user = super::current_user(&ctx, &headers).await;
        let saved = ctx.saved.is_saved(user.as_ref(), recipe_id).await;
        Json(SavedStatusResponse { recipe_id, saved })
    }

    /// Handle PUT /api/saved/:recipe_id
    async fn handle_save(
        State(ctx): State<AppContext>,
        headers: HeaderMap,
        Path(recipe_id): Path<RecipeId>,
        body: Option<Json<SaveRecipeBody>>,
    ) -> Result<Response, AppError> {
        let user = super::current_user(&ctx, &headers).await;
        let notes = body.and_then(|Json(body)| body.notes);
        let saved = ctx.saved.save(user.as_ref(), recipe_id, notes).await?;
        Ok((StatusCode::OK, Json(saved)).into_response())
    }

    /// Handle DELETE /api/saved/:recipe_id
    async fn handle_unsave(
        State(ctx): State<AppContext>,
        headers: HeaderMap,
        Path(recipe_id): Path<RecipeId>,
    ) -> Result<Response, AppError> {
        let user = super::current_user(&ctx, &headers).await;
        ctx.saved.unsave(user.as_ref(), recipe_id).await?;
        Ok((
            StatusCode::OK,
            Json(SavedStatusResponse {
                recipe_id,
                saved: false,
            }),
        )
            .into_response())
    }
}
