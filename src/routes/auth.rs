// ABOUTME: Identity endpoints: sign-up, sign-in, sign-out, current user and social sign-in
// ABOUTME: Provider failures reach the client through the user-facing error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use fusion_core::constants::routes;
use fusion_core::errors::AppError;
use fusion_core::models::AuthenticatedUser;

use crate::auth::{bearer_token, SignInRequest, SignUpRequest};
use crate::context::AppContext;

/// Current user response
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    /// Signed-in user, null when anonymous
    pub user: Option<AuthenticatedUser>,
}

/// Authentication routes handler
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create the authentication routes
    pub fn routes(ctx: AppContext) -> Router {
        let base = routes::AUTH;
        Router::new()
            .route(&format!("{base}/signup"), post(Self::handle_sign_up))
            .route(&format!("{base}/signin"), post(Self::handle_sign_in))
            .route(&format!("{base}/signout"), post(Self::handle_sign_out))
            .route(&format!("{base}/me"), get(Self::handle_me))
            .route(
                &format!("{base}/social/:provider"),
                post(Self::handle_social),
            )
            .with_state(ctx)
    }

    /// Handle POST /api/auth/signup
    async fn handle_sign_up(
        State(ctx): State<AppContext>,
        Json(request): Json<SignUpRequest>,
    ) -> Result<Response, AppError> {
        let outcome = ctx.auth.sign_up(request).await?;
        Ok((StatusCode::CREATED, Json(outcome)).into_response())
    }

    /// Handle POST /api/auth/signin
    async fn handle_sign_in(
        State(ctx): State<AppContext>,
        Json(request): Json<SignInRequest>,
    ) -> Result<Response, AppError> {
        let session = ctx.auth.sign_in(request).await?;
        Ok((StatusCode::OK, Json(session)).into_response())
    }

    /// Handle POST /api/auth/signout
    async fn handle_sign_out(
        State(ctx): State<AppContext>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        ctx.auth.sign_out(bearer_token(&headers)).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }

    /// Handle GET /api/auth/me
    async fn handle_me(State(ctx): State<AppContext>, headers: HeaderMap) -> Json<CurrentUserResponse> {
        let user = super::current_user(&ctx, &headers).await;
        Json(CurrentUserResponse {
            user: user.map(|session| session.user),
        })
    }

    /// Handle POST /api/auth/social/:provider
    async fn handle_social(
        State(ctx): State<AppContext>,
        Path(provider): Path<String>,
    ) -> Result<Response, AppError> {
        let status = ctx.auth.social_sign_in(&provider)?;
        Ok((StatusCode::OK, Json(status)).into_response())
    }
}
