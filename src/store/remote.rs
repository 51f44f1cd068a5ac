// ABOUTME: Hosted backend store speaking the PostgREST dialect over reqwest
// ABOUTME: Reads the recipes table and manages the saved_recipes relation under the caller's token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

//! Supabase `PostgREST` store
//!
//! Recipe reads use the anon key. Saved-recipe calls forward the signed-in
//! user's access token so row-level security applies on the server.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use fusion_core::models::{
    Difficulty, IngredientLine, Recipe, RecipeId, RecipeSummary, SavedRecipe,
};

use super::{RecipeStore, SavedRecipeStore, StoreError, UserScope};
use crate::config::SupabaseConfig;

const RECIPE_SELECT: &str =
    "id,title,cuisine,prep_time,difficulty,image_url,servings,ingredients,steps";
const SUMMARY_SELECT: &str = "id,title,cuisine,prep_time,difficulty,image_url,servings";
const SAVED_SELECT: &str = "id,user_id,recipe_id,created_at,notes";
/// Postgres unique violation
const UNIQUE_VIOLATION: &str = "23505";

/// Recipe row as stored remotely; `steps` holds the instruction list
#[derive(Debug, Deserialize)]
struct RecipeRow {
    id: RecipeId,
    title: String,
    cuisine: String,
    prep_time: String,
    difficulty: Difficulty,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    servings: Option<u32>,
    #[serde(default)]
    ingredients: Vec<IngredientLine>,
    #[serde(default)]
    steps: Vec<String>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            cuisine: row.cuisine,
            prep_time: row.prep_time,
            difficulty: row.difficulty,
            image_url: row.image_url.unwrap_or_default(),
            servings: row.servings.unwrap_or(1),
            ingredients: row.ingredients,
            instructions: row.steps,
        }
    }
}

impl From<RecipeRow> for RecipeSummary {
    fn from(row: RecipeRow) -> Self {
        Self::from(&Recipe::from(row))
    }
}

#[derive(Debug, Deserialize)]
struct SavedRow {
    id: Uuid,
    user_id: String,
    recipe_id: RecipeId,
    created_at: DateTime<Utc>,
    #[serde(default)]
    notes: Option<String>,
}

impl From<SavedRow> for SavedRecipe {
    fn from(row: SavedRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            recipe_id: row.recipe_id,
            created_at: row.created_at,
            notes: row.notes,
        }
    }
}

#[derive(Debug, Serialize)]
struct NewSavedRow<'a> {
    user_id: &'a str,
    recipe_id: RecipeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
}

/// Error body returned by `PostgREST`
#[derive(Debug, Default, Deserialize)]
struct PostgrestError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Recipe and saved-recipe store backed by a Supabase project
#[derive(Clone)]
pub struct SupabaseStore {
    client: Client,
    rest_url: String,
    anon_key: String,
}

impl SupabaseStore {
    /// Build a store for the configured project
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed
    pub fn new(config: &SupabaseConfig, timeout: Duration) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            rest_url: format!("{}/rest/v1", config.url.trim_end_matches('/')),
            anon_key: config.anon_key.clone(),
        })
    }

    fn table(&self, name: &str) -> String {
        format!("{}/{name}", self.rest_url)
    }

    fn authorize(&self, request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(token.unwrap_or(&self.anon_key))
    }

    async fn fetch_rows<T: for<'de> Deserialize<'de>>(
        &self,
        request: RequestBuilder,
    ) -> Result<Vec<T>, StoreError> {
        let response = check_status(request.send().await?).await?;
        Ok(response.json::<Vec<T>>().await?)
    }

    async fn recipe_where(&self, filter: (&str, String)) -> Result<Option<Recipe>, StoreError> {
        let request = self.authorize(
            self.client
                .get(self.table("recipes"))
                .query(&[("select", RECIPE_SELECT.to_owned()), (filter.0, filter.1)])
                .query(&[("limit", "1")]),
            None,
        );
        let rows: Vec<RecipeRow> = self.fetch_rows(request).await?;
        Ok(rows.into_iter().next().map(Recipe::from))
    }

    async fn summaries(&self, extra: &[(&str, String)]) -> Result<Vec<RecipeSummary>, StoreError> {
        let request = self.authorize(
            self.client
                .get(self.table("recipes"))
                .query(&[("select", SUMMARY_SELECT), ("order", "title.asc")])
                .query(extra),
            None,
        );
        let rows: Vec<RecipeRow> = self.fetch_rows(request).await?;
        Ok(rows.into_iter().map(RecipeSummary::from).collect())
    }
}

/// Map non-success responses to store errors, keeping the `PostgREST` detail
async fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body: PostgrestError = response.json().await.unwrap_or_default();
    if status == StatusCode::CONFLICT || body.code.as_deref() == Some(UNIQUE_VIOLATION) {
        return Err(StoreError::Duplicate);
    }
    Err(StoreError::Unavailable(format!(
        "HTTP {status}: {}",
        body.message.unwrap_or_else(|| "no detail".to_owned())
    )))
}

/// Escape a value for use inside an `ilike` pattern
fn ilike_literal(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '(' | ')' | '*'))
        .collect()
}

#[async_trait]
impl RecipeStore for SupabaseStore {
    async fn get_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, StoreError> {
        self.recipe_where(("id", format!("eq.{id}"))).await
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Recipe>, StoreError> {
        self.recipe_where(("title", format!("ilike.{}", ilike_literal(title))))
            .await
    }

    async fn list_all(&self) -> Result<Vec<RecipeSummary>, StoreError> {
        self.summaries(&[]).await
    }

    async fn search(&self, text: &str) -> Result<Vec<RecipeSummary>, StoreError> {
        let needle = ilike_literal(text);
        debug!(query = %needle, "Searching remote recipes");
        self.summaries(&[(
            "or",
            format!("(title.ilike.*{needle}*,cuisine.ilike.*{needle}*)"),
        )])
        .await
    }
}

#[async_trait]
impl SavedRecipeStore for SupabaseStore {
    async fn find(
        &self,
        scope: UserScope<'_>,
        recipe_id: RecipeId,
    ) -> Result<Option<SavedRecipe>, StoreError> {
        let request = self.authorize(
            self.client.get(self.table("saved_recipes")).query(&[
                ("select", SAVED_SELECT.to_owned()),
                ("user_id", format!("eq.{}", scope.user_id)),
                ("recipe_id", format!("eq.{recipe_id}")),
                ("limit", "1".to_owned()),
            ]),
            Some(scope.access_token),
        );
        let rows: Vec<SavedRow> = self.fetch_rows(request).await?;
        Ok(rows.into_iter().next().map(SavedRecipe::from))
    }

    async fn insert(
        &self,
        scope: UserScope<'_>,
        recipe_id: RecipeId,
        notes: Option<String>,
    ) -> Result<SavedRecipe, StoreError> {
        let body = NewSavedRow {
            user_id: scope.user_id,
            recipe_id,
            notes: notes.as_deref(),
        };
        let request = self.authorize(
            self.client
                .post(self.table("saved_recipes"))
                .header("Prefer", "return=representation")
                .json(&body),
            Some(scope.access_token),
        );
        let rows: Vec<SavedRow> = self.fetch_rows(request).await?;
        rows.into_iter()
            .next()
            .map(SavedRecipe::from)
            .ok_or_else(|| StoreError::Decode("insert returned no representation".to_owned()))
    }

    async fn delete(&self, scope: UserScope<'_>, recipe_id: RecipeId) -> Result<bool, StoreError> {
        let request = self.authorize(
            self.client
                .delete(self.table("saved_recipes"))
                .header("Prefer", "return=representation")
                .query(&[
                    ("user_id", format!("eq.{}", scope.user_id)),
                    ("recipe_id", format!("eq.{recipe_id}")),
                ]),
            Some(scope.access_token),
        );
        let rows: Vec<SavedRow> = self.fetch_rows(request).await?;
        Ok(!rows.is_empty())
    }

    async fn list_for_user(&self, scope: UserScope<'_>) -> Result<Vec<SavedRecipe>, StoreError> {
        let request = self.authorize(
            self.client.get(self.table("saved_recipes")).query(&[
                ("select", SAVED_SELECT.to_owned()),
                ("user_id", format!("eq.{}", scope.user_id)),
                ("order", "created_at.desc".to_owned()),
            ]),
            Some(scope.access_token),
        );
        let rows: Vec<SavedRow> = self.fetch_rows(request).await?;
        Ok(rows.into_iter().map(SavedRecipe::from).collect())
    }
}
