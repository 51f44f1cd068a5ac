// ABOUTME: Saved recipe relation linking a user to a recipe
// ABOUTME: Unique per (user, recipe) pair, carries creation time and optional note
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RecipeId;

/// A user's bookmark of a recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedRecipe {
    /// Relation id
    pub id: Uuid,
    /// Owning user id as issued by the identity provider
    pub user_id: String,
    /// Bookmarked recipe
    pub recipe_id: RecipeId,
    /// When the bookmark was created
    pub created_at: DateTime<Utc>,
    /// Optional free-text note
    pub notes: Option<String>,
}

impl SavedRecipe {
    /// New relation stamped with the current time
    #[must_use]
    pub fn new(user_id: impl Into<String>, recipe_id: RecipeId, notes: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            recipe_id,
            created_at: Utc::now(),
            notes,
        }
    }
}
