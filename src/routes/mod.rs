// ABOUTME: Route module organization for the FusionFlavors HTTP and WebSocket endpoints
// ABOUTME: Each domain module holds route definitions and thin handlers over the services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

//! HTTP routes
//!
//! Handlers are thin: they extract input, resolve the caller from the
//! `Authorization` header when an operation depends on identity, and delegate
//! to the services in [`crate::context::AppContext`].

/// Sign-up, sign-in, sign-out, current user and social sign-in
pub mod auth;
/// Guided cooking: stateless step list and the live WebSocket session
pub mod cook;
/// Cuisine picker and fusion variants
pub mod fusion;
/// Health check and readiness
pub mod health;
/// Recipe list, search, filter and detail
pub mod recipes;
/// Saved-recipe toggle
pub mod saved;
/// Share link decode and encode
pub mod share;

use axum::http::HeaderMap;

use crate::auth::{bearer_token, SessionUser};
use crate::context::AppContext;

pub use auth::AuthRoutes;
pub use cook::CookRoutes;
pub use fusion::FusionRoutes;
pub use health::HealthRoutes;
pub use recipes::RecipeRoutes;
pub use saved::SavedRoutes;
pub use share::ShareRoutes;

/// Resolve the caller from the bearer token, `None` when anonymous
pub(crate) async fn current_user(ctx: &AppContext, headers: &HeaderMap) -> Option<SessionUser> {
    ctx.auth.current_user(bearer_token(headers)).await
}
