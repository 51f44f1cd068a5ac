// ABOUTME: Core types and constants for the FusionFlavors recipe platform
// ABOUTME: Foundation crate with error handling, recipe and fusion models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

#![deny(unsafe_code)]

//! # Fusion Core
//!
//! Foundation crate providing shared types and constants for the FusionFlavors
//! platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Recipes, fusion selections, saved recipes and users
//! - **constants**: Application-wide constants organized by domain

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models (Recipe, FusionSelection, SavedRecipe, AuthenticatedUser)
pub mod models;

/// Application constants and configuration values organized by domain
pub mod constants;
