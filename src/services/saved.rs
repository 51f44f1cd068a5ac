// ABOUTME: Saved-recipe toggle: is-saved check, idempotent save and unsave, per-user listing
// ABOUTME: Every operation takes the current user explicitly; none is read from ambient state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use fusion_core::constants::messages;
use fusion_core::errors::{AppError, AppResult};
use fusion_core::models::{RecipeId, RecipeSummary, SavedRecipe};

use super::recipes::RecipeCatalog;
use crate::auth::SessionUser;
use crate::store::{SavedRecipeStore, StoreError, UserScope};

/// A saved relation joined with its recipe summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedRecipeEntry {
    /// The relation
    #[serde(flatten)]
    pub saved: SavedRecipe,
    /// Recipe summary, absent when the recipe can no longer be found
    pub recipe: Option<RecipeSummary>,
}

/// Saved-recipe operations for the signed-in user
#[derive(Clone)]
pub struct SavedRecipesService {
    store: Option<Arc<dyn SavedRecipeStore>>,
    catalog: RecipeCatalog,
}

impl SavedRecipesService {
    /// Service over a saved-recipe store
    #[must_use]
    pub fn new(store: Arc<dyn SavedRecipeStore>, catalog: RecipeCatalog) -> Self {
        Self {
            store: Some(store),
            catalog,
        }
    }

    /// Service with no saved-recipe store; every write reports the store as unavailable
    #[must_use]
    pub const fn unavailable(catalog: RecipeCatalog) -> Self {
        Self {
            store: None,
            catalog,
        }
    }

    fn store(&self) -> AppResult<&Arc<dyn SavedRecipeStore>> {
        self.store
            .as_ref()
            .ok_or_else(|| AppError::external_unavailable("Saved recipes are not available"))
    }

    fn require_user(user: Option<&SessionUser>) -> AppResult<&SessionUser> {
        user.ok_or_else(|| AppError::auth_required(messages::SIGN_IN_TO_SAVE))
    }

    /// Whether the recipe is saved by the user; false without a user or when the store fails
    pub async fn is_saved(&self, user: Option<&SessionUser>, recipe_id: RecipeId) -> bool {
        let (Some(user), Some(store)) = (user, self.store.as_ref()) else {
            return false;
        };
        match store.find(user.scope(), recipe_id).await {
            Ok(found) => found.is_some(),
            Err(e) => {
                warn!(user_id = %user.user.id, recipe_id, error = %e, "Saved-recipe check failed");
                false
            }
        }
    }

    /// Save a recipe; saving an already-saved recipe returns the existing relation
    ///
    /// # Errors
    ///
    /// Returns an error when no user is signed in, the recipe does not exist,
    /// or the store rejects the write
    pub async fn save(
        &self,
        user: Option<&SessionUser>,
        recipe_id: RecipeId,
        notes: Option<String>,
    ) -> AppResult<SavedRecipe> {
        let user = Self::require_user(user)?;
        let store = self.store()?;
        self.catalog.get_by_id(recipe_id).await?;

        let scope = user.scope();
        if let Some(existing) = store.find(scope, recipe_id).await? {
            debug!(user_id = %user.user.id, recipe_id, "Recipe already saved");
            return Ok(existing);
        }

        match store.insert(scope, recipe_id, notes).await {
            Ok(saved) => {
                info!(user_id = %user.user.id, recipe_id, "Recipe saved");
                Ok(saved)
            }
            Err(StoreError::Duplicate) => {
                debug!(user_id = %user.user.id, recipe_id, "Duplicate save treated as success");
                store.find(scope, recipe_id).await?.ok_or_else(|| {
                    AppError::internal("Saved recipe disappeared after duplicate insert")
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Remove a saved recipe; returns whether a relation was removed
    ///
    /// # Errors
    ///
    /// Returns an error when no user is signed in or the store rejects the delete
    pub async fn unsave(&self, user: Option<&SessionUser>, recipe_id: RecipeId) -> AppResult<bool> {
        let user = Self::require_user(user)?;
        let removed = self.store()?.delete(user.scope(), recipe_id).await?;
        info!(user_id = %user.user.id, recipe_id, removed, "Recipe unsaved");
        Ok(removed)
    }

    /// The user's saved recipes, newest first, joined with summaries
    ///
    /// # Errors
    ///
    /// Returns an error when no user is signed in or the store cannot be read
    pub async fn list(&self, user: Option<&SessionUser>) -> AppResult<Vec<SavedRecipeEntry>> {
        let user = Self::require_user(user)?;
        let mut saved = self.store()?.list_for_user(user.scope()).await?;
        saved.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let summaries: HashMap<RecipeId, RecipeSummary> = self
            .catalog
            .list_all()
            .await
            .data
            .into_iter()
            .map(|summary| (summary.id, summary))
            .collect();

        Ok(saved
            .into_iter()
            .map(|relation| SavedRecipeEntry {
                recipe: summaries.get(&relation.recipe_id).cloned(),
                saved: relation,
            })
            .collect())
    }
}

impl SessionUser {
    /// Scope for store calls made on behalf of this user
    #[must_use]
    pub fn scope(&self) -> UserScope<'_> {
        UserScope {
            user_id: &self.user.id,
            access_token: &self.access_token,
        }
    }
}
