// ABOUTME: Core data models for the FusionFlavors recipe platform
// ABOUTME: Re-exports Recipe, FusionSelection, SavedRecipe and user types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

//! # Data Models
//!
//! Shared data structures for recipes and the selections built on top of them.
//! Storage-side schemas are owned by the store implementations; these types are
//! what the rest of the application consumes.
//!
//! ## Core Models
//!
//! - `Recipe`: A base recipe with ingredients and ordered instructions
//! - `RecipeSummary`: List-view projection of a recipe
//! - `FusionSelection`: (base recipe, fusion cuisine, variant) chosen by a user
//! - `SavedRecipe`: A user's bookmark of a recipe
//! - `AuthenticatedUser`: The opaque user handle issued by the identity provider

mod fusion;
mod recipe;
mod saved;
mod user;

pub use fusion::{FusionSelection, FusionVariantTag};
pub use recipe::{Difficulty, IngredientLine, Recipe, RecipeId, RecipeSummary};
pub use saved::SavedRecipe;
pub use user::{resolve_display_name, AuthenticatedUser};
