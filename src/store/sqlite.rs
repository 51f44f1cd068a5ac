// ABOUTME: Local SQLite implementation of the recipe store and saved-recipes relation
// ABOUTME: Used when no hosted backend is configured, and by the seed-recipes binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use tracing::{debug, info};
use uuid::Uuid;

use fusion_core::models::{
    Difficulty, IngredientLine, Recipe, RecipeId, RecipeSummary, SavedRecipe,
};

use super::{RecipeStore, SavedRecipeStore, StoreError, UserScope};

const SUMMARY_COLUMNS: &str = "id, title, cuisine, prep_time, difficulty, image_url, servings";
const RECIPE_COLUMNS: &str =
    "id, title, cuisine, prep_time, difficulty, image_url, servings, ingredients, steps";

/// Recipe table and saved-recipes relation in a local `SQLite` database
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Wrap an existing pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `url`
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the database cannot be opened
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        // In-memory databases exist per connection; keep a single one alive so every query sees the schema
        let pool = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?
        };
        Ok(Self { pool })
    }

    /// Underlying pool, shared with the local identity provider
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the recipe and saved-recipe tables
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                cuisine TEXT NOT NULL,
                prep_time TEXT NOT NULL,
                difficulty TEXT NOT NULL CHECK (difficulty IN ('Easy', 'Medium', 'Hard')),
                image_url TEXT NOT NULL DEFAULT '',
                servings INTEGER NOT NULL DEFAULT 1,
                ingredients TEXT NOT NULL DEFAULT '[]',
                steps TEXT NOT NULL DEFAULT '[]',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS saved_recipes (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                recipe_id INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                notes TEXT,
                UNIQUE (user_id, recipe_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_saved_recipes_user ON saved_recipes(user_id, created_at)",
        )
        .execute(&self.pool)
        .await?;

        info!("Recipe store schema ready");
        Ok(())
    }

    /// Insert or replace a recipe record
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub async fn upsert_recipe(&self, recipe: &Recipe) -> Result<(), StoreError> {
        let now = Utc::now().to_rfc3339();
        let ingredients = serde_json::to_string(&recipe.ingredients)?;
        let steps = serde_json::to_string(&recipe.instructions)?;

        sqlx::query(
            r"
            INSERT INTO recipes (
                id, title, cuisine, prep_time, difficulty, image_url, servings,
                ingredients, steps, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                cuisine = excluded.cuisine,
                prep_time = excluded.prep_time,
                difficulty = excluded.difficulty,
                image_url = excluded.image_url,
                servings = excluded.servings,
                ingredients = excluded.ingredients,
                steps = excluded.steps,
                updated_at = excluded.updated_at
            ",
        )
        .bind(recipe.id)
        .bind(&recipe.title)
        .bind(&recipe.cuisine)
        .bind(&recipe.prep_time)
        .bind(recipe.difficulty.as_str())
        .bind(&recipe.image_url)
        .bind(i64::from(recipe.servings))
        .bind(&ingredients)
        .bind(&steps)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        debug!(recipe_id = recipe.id, title = %recipe.title, "Recipe upserted");
        Ok(())
    }

    /// Number of recipe records
    ///
    /// # Errors
    ///
    /// Returns an error if the count query fails
    pub async fn recipe_count(&self) -> Result<i64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM recipes")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("count"))
    }
}

#[async_trait]
impl RecipeStore for SqliteStore {
    async fn get_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, StoreError> {
        let row = sqlx::query(&format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_recipe(&r)).transpose()
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Recipe>, StoreError> {
        let row = sqlx::query(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes WHERE lower(title) = lower($1) LIMIT 1"
        ))
        .bind(title.trim())
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_recipe(&r)).transpose()
    }

    async fn list_all(&self) -> Result<Vec<RecipeSummary>, StoreError> {
        let rows = sqlx::query(&format!("SELECT {SUMMARY_COLUMNS} FROM recipes ORDER BY title"))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_summary).collect()
    }

    async fn search(&self, text: &str) -> Result<Vec<RecipeSummary>, StoreError> {
        let pattern = format!("%{}%", like_literal(&text.trim().to_lowercase()));
        let rows = sqlx::query(&format!(
            r"SELECT {SUMMARY_COLUMNS} FROM recipes
             WHERE lower(title) LIKE $1 ESCAPE '\' OR lower(cuisine) LIKE $1 ESCAPE '\'
             ORDER BY title"
        ))
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_summary).collect()
    }
}

/// Escape `LIKE` wildcards so the text matches literally under `ESCAPE '\'`
fn like_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl SavedRecipeStore for SqliteStore {
    async fn find(
        &self,
        scope: UserScope<'_>,
        recipe_id: RecipeId,
    ) -> Result<Option<SavedRecipe>, StoreError> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, recipe_id, created_at, notes
            FROM saved_recipes
            WHERE user_id = $1 AND recipe_id = $2
            ",
        )
        .bind(scope.user_id)
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_saved(&r)).transpose()
    }

    async fn insert(
        &self,
        scope: UserScope<'_>,
        recipe_id: RecipeId,
        notes: Option<String>,
    ) -> Result<SavedRecipe, StoreError> {
        let saved = SavedRecipe::new(scope.user_id, recipe_id, notes);
        sqlx::query(
            r"
            INSERT INTO saved_recipes (id, user_id, recipe_id, created_at, notes)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(saved.id.to_string())
        .bind(&saved.user_id)
        .bind(saved.recipe_id)
        .bind(saved.created_at.to_rfc3339())
        .bind(&saved.notes)
        .execute(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete(&self, scope: UserScope<'_>, recipe_id: RecipeId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM saved_recipes WHERE user_id = $1 AND recipe_id = $2")
            .bind(scope.user_id)
            .bind(recipe_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_for_user(&self, scope: UserScope<'_>) -> Result<Vec<SavedRecipe>, StoreError> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, recipe_id, created_at, notes
            FROM saved_recipes
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(scope.user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_saved).collect()
    }
}

fn parse_difficulty(row: &SqliteRow) -> Result<Difficulty, StoreError> {
    let raw: String = row.try_get("difficulty")?;
    raw.parse().map_err(StoreError::Decode)
}

fn servings(row: &SqliteRow) -> Result<u32, StoreError> {
    let raw: i64 = row.try_get("servings")?;
    u32::try_from(raw).map_err(|e| StoreError::Decode(format!("Invalid servings {raw}: {e}")))
}

fn row_to_summary(row: &SqliteRow) -> Result<RecipeSummary, StoreError> {
    Ok(RecipeSummary {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        cuisine: row.try_get("cuisine")?,
        prep_time: row.try_get("prep_time")?,
        difficulty: parse_difficulty(row)?,
        image_url: row.try_get("image_url")?,
        servings: servings(row)?,
    })
}

fn row_to_recipe(row: &SqliteRow) -> Result<Recipe, StoreError> {
    let ingredients_json: String = row.try_get("ingredients")?;
    let steps_json: String = row.try_get("steps")?;
    let ingredients: Vec<IngredientLine> = serde_json::from_str(&ingredients_json)?;
    let instructions: Vec<String> = serde_json::from_str(&steps_json)?;

    Ok(Recipe {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        cuisine: row.try_get("cuisine")?,
        prep_time: row.try_get("prep_time")?,
        difficulty: parse_difficulty(row)?,
        image_url: row.try_get("image_url")?,
        servings: servings(row)?,
        ingredients,
        instructions,
    })
}

fn row_to_saved(row: &SqliteRow) -> Result<SavedRecipe, StoreError> {
    let id_str: String = row.try_get("id")?;
    let created_at_str: String = row.try_get("created_at")?;

    Ok(SavedRecipe {
        id: Uuid::parse_str(&id_str)
            .map_err(|e| StoreError::Decode(format!("Invalid UUID: {e}")))?,
        user_id: row.try_get("user_id")?,
        recipe_id: row.try_get("recipe_id")?,
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| StoreError::Decode(format!("Invalid timestamp: {e}")))?
            .with_timezone(&Utc),
        notes: row.try_get("notes")?,
    })
}
