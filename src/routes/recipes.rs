// ABOUTME: Recipe list, search, filter and detail endpoints
// ABOUTME: Every response names its data source so clients can tell fallback data apart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use fusion_core::constants::routes;
use fusion_core::errors::AppError;
use fusion_core::models::{Difficulty, Recipe, RecipeId, RecipeSummary};

use crate::context::AppContext;
use crate::services::recipes::{filter, DataSource, PrepBucket, RecipeFilter};

/// Query parameters for `GET /api/recipes`
#[derive(Debug, Default, Deserialize)]
pub struct ListRecipesQuery {
    /// Search text over title and cuisine
    pub q: Option<String>,
    /// Cuisine substring
    pub cuisine: Option<String>,
    /// Difficulty (Easy, Medium, Hard)
    pub difficulty: Option<String>,
    /// Prep bucket (quick, medium, long)
    pub prep: Option<String>,
}

impl ListRecipesQuery {
    fn to_filter(&self) -> Result<RecipeFilter, AppError> {
        let difficulty = self
            .difficulty
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(str::parse::<Difficulty>)
            .transpose()
            .map_err(AppError::invalid_input)?;
        let prep = self
            .prep
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(|p| {
                PrepBucket::parse(p).ok_or_else(|| {
                    AppError::invalid_input(format!(
                        "Invalid prep filter '{p}': expected quick, medium or long"
                    ))
                })
            })
            .transpose()?;
        Ok(RecipeFilter {
            cuisine: self.cuisine.clone(),
            difficulty,
            prep,
        })
    }
}

/// Recipe list response
#[derive(Debug, Serialize)]
pub struct RecipeListResponse {
    /// Matching summaries
    pub recipes: Vec<RecipeSummary>,
    /// Number of summaries
    pub count: usize,
    /// Data source
    pub source: DataSource,
}

/// Recipe detail response
#[derive(Debug, Serialize)]
pub struct RecipeDetailResponse {
    /// The recipe
    pub recipe: Recipe,
    /// Data source
    pub source: DataSource,
    /// Whether the caller has saved it; false when anonymous
    pub saved: bool,
}

/// Recipe routes handler
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create the recipe routes
    pub fn routes(ctx: AppContext) -> Router {
        Router::new()
            .route(routes::RECIPES, get(Self::handle_list))
            .route(&format!("{}/:id", routes::RECIPES), get(Self::handle_get))
            .with_state(ctx)
    }

    /// Handle GET /api/recipes - list, search and filter
    async fn handle_list(
        State(ctx): State<AppContext>,
        Query(query): Query<ListRecipesQuery>,
    ) -> Result<Response, AppError> {
        let criteria = query.to_filter()?;
        let listed = match query.q.as_deref() {
            Some(text) => ctx.catalog.search(text).await,
            None => ctx.catalog.list_all().await,
        };
        let recipes = filter(listed.data, &criteria);

        let response = RecipeListResponse {
            count: recipes.len(),
            recipes,
            source: listed.source,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/recipes/:id - detail with saved flag
    async fn handle_get(
        State(ctx): State<AppContext>,
        headers: HeaderMap,
        Path(id): Path<RecipeId>,
    ) -> Result<Response, AppError> {
        let found = ctx.catalog.get_by_id(id).await?;
        let user = super::current_user(&ctx, &headers).await;
        let saved = ctx.saved.is_saved(user.as_ref(), id).await;

        let response = RecipeDetailResponse {
            recipe: found.data,
            source: found.source,
            saved,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
