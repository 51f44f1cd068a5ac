// ABOUTME: Guided cooking endpoints: stateless step list and the live WebSocket session
// ABOUTME: Each WebSocket connection owns exactly one cooking session, discarded on close
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use fusion_core::constants::routes;
use fusion_core::errors::{AppError, AppResult};
use fusion_core::models::{FusionSelection, FusionVariantTag};

use crate::context::AppContext;
use crate::cooking::{run_session, CookCommand, CookServerMessage, CookingPlan, CookingSession};
use crate::services::recipes::DataSource;

/// Selection parameters for a cooking plan
#[derive(Debug, Default, Deserialize)]
pub struct CookQuery {
    /// Recipe title or id
    pub recipe: Option<String>,
    /// Fusion cuisine
    pub cuisine: Option<String>,
    /// Variant tag; balanced when absent or unrecognised
    pub variant: Option<String>,
}

/// Step list response
#[derive(Debug, Serialize)]
pub struct CookPlanResponse {
    /// Header and steps
    pub plan: CookingPlan,
    /// Source of the base recipe
    pub source: DataSource,
}

/// Guided cooking routes handler
pub struct CookRoutes;

impl CookRoutes {
    /// Create the guided cooking routes
    pub fn routes(ctx: AppContext) -> Router {
        Router::new()
            .route(routes::COOK_STEPS, get(Self::handle_steps))
            .route(routes::COOK_WS, get(Self::handle_websocket))
            .with_state(ctx)
    }

    async fn plan(ctx: &AppContext, query: &CookQuery) -> AppResult<(CookingPlan, DataSource)> {
        let reference = query
            .recipe
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or_else(|| AppError::missing_field("recipe"))?;
        let cuisine = query
            .cuisine
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::missing_field("cuisine"))?;
        let variant = query
            .variant
            .as_deref()
            .map_or_else(FusionVariantTag::default, FusionVariantTag::parse_lenient);

        let base = ctx.catalog.resolve(reference).await?;
        let selection = FusionSelection::new(base.data.id, cuisine, variant);
        Ok((CookingPlan::new(&base.data, selection), base.source))
    }

    /// Handle GET /api/cook/steps
    async fn handle_steps(
        State(ctx): State<AppContext>,
        Query(query): Query<CookQuery>,
    ) -> Result<Response, AppError> {
        let (plan, source) = Self::plan(&ctx, &query).await?;
        Ok((StatusCode::OK, Json(CookPlanResponse { plan, source })).into_response())
    }

    /// Handle GET /ws/cook - resolve the plan, then upgrade
    ///
    /// Plan errors are answered as plain HTTP errors before the upgrade.
    async fn handle_websocket(
        ws: WebSocketUpgrade,
        State(ctx): State<AppContext>,
        Query(query): Query<CookQuery>,
    ) -> Result<Response, AppError> {
        let (plan, _) = Self::plan(&ctx, &query).await?;
        let session = plan.start_session()?;
        info!(
            recipe_id = plan.selection.recipe_id,
            cuisine = %plan.selection.cuisine,
            variant = %plan.selection.variant,
            steps = session.step_count(),
            "Guided cooking session starting"
        );
        Ok(ws.on_upgrade(move |socket| drive_socket(socket, session)))
    }
}

fn encode(message: &CookServerMessage) -> Option<Message> {
    match serde_json::to_string(message) {
        Ok(json) => Some(Message::Text(json)),
        Err(e) => {
            warn!(error = %e, "Failed to serialize cooking message");
            None
        }
    }
}

/// Bridge one socket to one session
async fn drive_socket(socket: WebSocket, session: CookingSession) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel::<CookServerMessage>();
    let error_tx = update_tx.clone();

    let session_task = tokio::spawn(run_session(session, command_rx, update_tx));

    // Forward session updates to the socket; close it once the session has ended
    let send_task = tokio::spawn(async move {
        while let Some(update) = update_rx.recv().await {
            let ended = matches!(update, CookServerMessage::Ended { .. });
            if let Some(message) = encode(&update) {
                if ws_tx.send(message).await.is_err() {
                    break;
                }
            }
            if ended {
                let _ = ws_tx.send(Message::Close(None)).await;
                break;
            }
        }
    });

    while let Some(message) = ws_rx.next().await {
        match message {
            Ok(Message::Text(text)) => match serde_json::from_str::<CookCommand>(&text) {
                Ok(command) => {
                    if command_tx.send(command).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let reply = CookServerMessage::Error {
                        message: format!("Invalid command: {e}"),
                    };
                    if error_tx.send(reply).is_err() {
                        break;
                    }
                }
            },
            Ok(Message::Close(_)) | Err(_) => break,
            _ => {}
        }
    }

    // Closing the command channel ends a session that is still running
    drop(command_tx);
    drop(error_tx);
    match session_task.await {
        Ok(reason) => debug!(?reason, "Cooking socket closed"),
        Err(e) => warn!(error = %e, "Cooking session task failed"),
    }
    // All update senders are gone now, so the forwarder drains and exits
    if let Err(e) = send_task.await {
        warn!(error = %e, "Cooking socket forwarder failed");
    }
}
