// ABOUTME: Service layer between route handlers and the store collaborators
// ABOUTME: Recipe catalog with fallback substitution and the saved-recipe toggle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

//! Domain service layer
//!
//! Services are protocol-agnostic: the HTTP routes and the live cooking
//! connection call the same operations.

/// Recipe catalog: list, search, lookup and filtering with fallback
pub mod recipes;

/// Saved-recipe toggle for the signed-in user
pub mod saved;
