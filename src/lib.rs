// ABOUTME: Main library entry point for the FusionFlavors recipe service
// ABOUTME: Recipe discovery with fallback, fusion variants, sharing, saved recipes and guided cooking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

#![deny(unsafe_code)]

//! # FusionFlavors
//!
//! Users browse base recipes, pick a second cuisine to fuse with a recipe,
//! receive three pre-authored fusion variants, save recipes to their account,
//! share fusions by link, and cook along a step-by-step guide with per-step
//! timers.
//!
//! ## Architecture
//!
//! - **Stores**: recipe table and saved-recipes relation behind traits, with a
//!   hosted `PostgREST` implementation, a local `SQLite` one, and a hardcoded
//!   fallback catalog used whenever the store fails
//! - **Services**: recipe catalog (fallback, search, filter) and saved-recipe toggle
//! - **Fusion**: static cuisine picker, variant content and shared-recipe view
//! - **Cooking**: step timer, session state machine and the live session driver
//! - **Routes**: axum routers over an explicit [`context::AppContext`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fusion_flavors::config::ServerConfig;
//! use fusion_flavors::context::AppContext;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let ctx = AppContext::from_config(config).await?;
//!     fusion_flavors::server::serve(ctx).await
//! }
//! ```

/// Identity provider boundary and credential flows
pub mod auth;

/// Environment configuration
pub mod config;

/// Explicit dependency context for handlers
pub mod context;

/// Guided cooking session
pub mod cooking;

/// Fusion picker, variants and shared view
pub mod fusion;

/// Logging configuration and structured logging helpers
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// HTTP and WebSocket routes
pub mod routes;

/// Router assembly and serving
pub mod server;

/// Recipe catalog and saved-recipe services
pub mod services;

/// Share link encoder/decoder
pub mod sharing;

/// Recipe and saved-recipe stores
pub mod store;

pub use fusion_core::constants;
pub use fusion_core::errors;
pub use fusion_core::models;
