// ABOUTME: Recipe store and saved-recipe store collaborator interfaces
// ABOUTME: Hosted PostgREST and local SQLite implementations plus the hardcoded fallback catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

//! # Stores
//!
//! The recipe table and the saved-recipes relation are external collaborators
//! with "sometimes absent" semantics. Implementations report failures as
//! [`StoreError`]; the services turn recipe read failures into a
//! [`Fetched::Unavailable`] and substitute the fallback catalog.

/// Hardcoded fallback recipes
pub mod fallback;
/// Hosted backend over PostgREST
pub mod remote;
/// Local `SQLite` store
pub mod sqlite;

use async_trait::async_trait;
use thiserror::Error;

use fusion_core::errors::AppError;
use fusion_core::models::{Recipe, RecipeId, RecipeSummary, SavedRecipe};

pub use remote::SupabaseStore;
pub use sqlite::SqliteStore;

/// Collaborator failure
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or answered with a failure
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// The store did not answer in time
    #[error("store call timed out")]
    Timeout,
    /// A unique constraint rejected the write
    #[error("duplicate record")]
    Duplicate,
    /// The store answered with data that could not be decoded
    #[error("invalid store data: {0}")]
    Decode(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Duplicate,
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                Self::Decode(error.to_string())
            }
            _ => Self::Unavailable(error.to_string()),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Unavailable(error.to_string())
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Duplicate => AppError::new(
                fusion_core::errors::ErrorCode::ResourceAlreadyExists,
                error.to_string(),
            ),
            StoreError::Decode(message) => AppError::database(message),
            StoreError::Unavailable(_) | StoreError::Timeout => {
                AppError::external_unavailable(error.to_string())
            }
        }
    }
}

/// Result of a recipe read that may have to fall back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched<T> {
    /// The store answered
    Available(T),
    /// The store failed; the reason is kept for logging
    Unavailable(String),
}

impl<T> Fetched<T> {
    /// Collapse a store result
    pub fn from_result(result: Result<T, StoreError>) -> Self {
        match result {
            Ok(value) => Self::Available(value),
            Err(error) => Self::Unavailable(error.to_string()),
        }
    }

    /// Keep data only when `keep` accepts it, otherwise mark unavailable with `reason`
    #[must_use]
    pub fn filter(self, keep: impl FnOnce(&T) -> bool, reason: &str) -> Self {
        match self {
            Self::Available(value) if keep(&value) => Self::Available(value),
            Self::Available(_) => Self::Unavailable(reason.to_owned()),
            unavailable @ Self::Unavailable(_) => unavailable,
        }
    }
}

/// Identity under which saved-recipe calls are made
#[derive(Debug, Clone, Copy)]
pub struct UserScope<'a> {
    /// Provider-issued user id
    pub user_id: &'a str,
    /// Bearer token for stores that enforce row-level security
    pub access_token: &'a str,
}

/// Read access to the recipe table
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Recipe by id, `None` when absent
    async fn get_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, StoreError>;

    /// Recipe by exact title, case-insensitive
    async fn find_by_title(&self, title: &str) -> Result<Option<Recipe>, StoreError>;

    /// All recipe summaries ordered by title
    async fn list_all(&self) -> Result<Vec<RecipeSummary>, StoreError>;

    /// Summaries whose title or cuisine contains `text`, case-insensitive
    async fn search(&self, text: &str) -> Result<Vec<RecipeSummary>, StoreError>;
}

/// The per-user saved-recipes relation, unique per (user, recipe)
#[async_trait]
pub trait SavedRecipeStore: Send + Sync {
    /// Relation for (user, recipe) if present
    async fn find(
        &self,
        scope: UserScope<'_>,
        recipe_id: RecipeId,
    ) -> Result<Option<SavedRecipe>, StoreError>;

    /// Insert a relation; [`StoreError::Duplicate`] when it already exists
    async fn insert(
        &self,
        scope: UserScope<'_>,
        recipe_id: RecipeId,
        notes: Option<String>,
    ) -> Result<SavedRecipe, StoreError>;

    /// Delete the relation; `Ok(false)` when there was none
    async fn delete(&self, scope: UserScope<'_>, recipe_id: RecipeId) -> Result<bool, StoreError>;

    /// The user's relations, newest first
    async fn list_for_user(&self, scope: UserScope<'_>) -> Result<Vec<SavedRecipe>, StoreError>;
}
