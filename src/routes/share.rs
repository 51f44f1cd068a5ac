// ABOUTME: Share link endpoints: decode a link into the shared-recipe view, encode a selection into a link
// ABOUTME: A link missing any parameter decodes to "no shared recipe", never to an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use fusion_core::constants::routes;
use fusion_core::errors::AppError;
use fusion_core::models::{FusionVariantTag, RecipeId};

use crate::context::AppContext;
use crate::fusion::{shared_view, SharedRecipeView};
use crate::services::recipes::DataSource;
use crate::sharing::{encode_share_link, share_cascade, ShareMessage, ShareTarget, SharedLink};

/// Raw share parameters; any may be missing
#[derive(Debug, Default, Deserialize)]
pub struct ShareQuery {
    /// Recipe title or id
    pub recipe: Option<String>,
    /// Fusion cuisine
    pub cuisine: Option<String>,
    /// Variant tag
    pub variant: Option<String>,
}

/// Decoded share response; `shared` is null when the link is incomplete
#[derive(Debug, Serialize)]
pub struct SharedRecipeResponse {
    /// The shared view
    pub shared: Option<SharedRecipeView>,
    /// Source of the base recipe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<DataSource>,
}

/// Selection to encode
#[derive(Debug, Deserialize)]
pub struct CreateShareRequest {
    /// Base recipe id
    pub recipe_id: RecipeId,
    /// Fusion cuisine
    pub cuisine: String,
    /// Variant tag
    #[serde(default)]
    pub variant: FusionVariantTag,
}

/// Encoded link with the share message and fallback cascade
#[derive(Debug, Serialize)]
pub struct CreateShareResponse {
    /// Share link
    pub link: String,
    /// Title, text and link
    pub message: ShareMessage,
    /// Native share, clipboard, then manual copy
    pub cascade: Vec<ShareTarget>,
}

/// Share routes handler
pub struct ShareRoutes;

impl ShareRoutes {
    /// Create the share routes
    pub fn routes(ctx: AppContext) -> Router {
        Router::new()
            .route(
                routes::SHARE,
                get(Self::handle_decode).post(Self::handle_encode),
            )
            .with_state(ctx)
    }

    /// Handle GET /api/share
    async fn handle_decode(
        State(ctx): State<AppContext>,
        Query(query): Query<ShareQuery>,
    ) -> Result<Response, AppError> {
        let Some(link) = SharedLink::from_params(
            query.recipe.as_deref(),
            query.cuisine.as_deref(),
            query.variant.as_deref(),
        ) else {
            debug!("Incomplete share link, no shared recipe");
            let response = SharedRecipeResponse {
                shared: None,
                source: None,
            };
            return Ok((StatusCode::OK, Json(response)).into_response());
        };

        let base = ctx.catalog.resolve(&link.recipe).await?;
        let response = SharedRecipeResponse {
            shared: Some(shared_view(&base.data, &link.cuisine, link.variant)),
            source: Some(base.source),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/share
    async fn handle_encode(
        State(ctx): State<AppContext>,
        Json(request): Json<CreateShareRequest>,
    ) -> Result<Response, AppError> {
        let cuisine = request.cuisine.trim();
        if cuisine.is_empty() {
            return Err(AppError::missing_field("cuisine"));
        }
        let base = ctx.catalog.get_by_id(request.recipe_id).await?.data;

        let link = encode_share_link(
            &ctx.config.public_base_url,
            &base.title,
            cuisine,
            request.variant,
        );
        let message = ShareMessage::new(
            &base.title,
            &base.cuisine,
            cuisine,
            request.variant,
            link.clone(),
        );
        let response = CreateShareResponse {
            cascade: share_cascade(&message),
            link,
            message,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
