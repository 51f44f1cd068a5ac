// ABOUTME: Recipe catalog service: store reads with timeout and fallback substitution
// ABOUTME: Also hosts the client-side cuisine/difficulty/prep-time filter over summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;

use fusion_core::constants::{messages, routes};
use fusion_core::errors::{AppError, AppResult};
use fusion_core::models::{Difficulty, Recipe, RecipeId, RecipeSummary};

use crate::logging::AppLogger;
use crate::store::fallback::{
    fallback_by_id, fallback_by_title, fallback_summaries, sort_featured_first,
};
use crate::store::{Fetched, RecipeStore, StoreError};

/// Where a response's data came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// The recipe store answered
    Store,
    /// The hardcoded fallback set was substituted
    Fallback,
}

/// Data tagged with its source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sourced<T> {
    /// Payload
    pub data: T,
    /// Origin of the payload
    pub source: DataSource,
}

impl<T> Sourced<T> {
    const fn store(data: T) -> Self {
        Self {
            data,
            source: DataSource::Store,
        }
    }

    const fn fallback(data: T) -> Self {
        Self {
            data,
            source: DataSource::Fallback,
        }
    }
}

/// Prep-time bucket over the leading minute count of a prep-time label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PrepBucket {
    /// Up to 20 minutes
    Quick,
    /// 21 to 40 minutes
    Medium,
    /// Over 40 minutes
    Long,
}

impl PrepBucket {
    /// Whether `minutes` falls into this bucket
    #[must_use]
    pub const fn contains(self, minutes: u32) -> bool {
        match self {
            Self::Quick => minutes <= 20,
            Self::Medium => minutes > 20 && minutes <= 40,
            Self::Long => minutes > 40,
        }
    }

    /// Parse a bucket name, case-insensitive
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quick" => Some(Self::Quick),
            "medium" => Some(Self::Medium),
            "long" => Some(Self::Long),
            _ => None,
        }
    }
}

/// Client-side refinement over a summary list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    /// Case-insensitive substring of the cuisine name
    pub cuisine: Option<String>,
    /// Exact difficulty
    pub difficulty: Option<Difficulty>,
    /// Prep-time bucket
    pub prep: Option<PrepBucket>,
}

impl RecipeFilter {
    /// True when no criterion is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cuisine.as_deref().map_or(true, |c| c.trim().is_empty())
            && self.difficulty.is_none()
            && self.prep.is_none()
    }

    /// Whether a summary passes every set criterion
    #[must_use]
    pub fn accepts(&self, summary: &RecipeSummary) -> bool {
        let cuisine_ok = self
            .cuisine
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map_or(true, |c| {
                summary.cuisine.to_lowercase().contains(&c.to_lowercase())
            });
        let difficulty_ok = self.difficulty.map_or(true, |d| summary.difficulty == d);
        // A label without a leading number cannot be bucketed and is kept out
        let prep_ok = self.prep.map_or(true, |bucket| {
            summary.prep_minutes().is_some_and(|m| bucket.contains(m))
        });
        cuisine_ok && difficulty_ok && prep_ok
    }
}

/// Apply a filter, preserving order
#[must_use]
pub fn filter(summaries: Vec<RecipeSummary>, criteria: &RecipeFilter) -> Vec<RecipeSummary> {
    if criteria.is_empty() {
        return summaries;
    }
    summaries
        .into_iter()
        .filter(|summary| criteria.accepts(summary))
        .collect()
}

/// Recipe reads with fallback to the hardcoded set
///
/// The store is optional: with no store configured every read is served from
/// the fallback catalog. Store calls are bounded by `timeout`; a slow call is
/// treated exactly like a failed one.
#[derive(Clone)]
pub struct RecipeCatalog {
    store: Option<Arc<dyn RecipeStore>>,
    timeout: Duration,
}

impl RecipeCatalog {
    /// Catalog over a store
    #[must_use]
    pub fn new(store: Arc<dyn RecipeStore>, timeout: Duration) -> Self {
        Self {
            store: Some(store),
            timeout,
        }
    }

    /// Catalog that only serves the fallback set
    #[must_use]
    pub const fn fallback_only() -> Self {
        Self {
            store: None,
            timeout: Duration::from_secs(0),
        }
    }

    async fn call<T, F>(&self, op: impl FnOnce(Arc<dyn RecipeStore>) -> F) -> Fetched<T>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        let Some(store) = self.store.clone() else {
            return Fetched::Unavailable("no recipe store configured".to_owned());
        };
        match tokio::time::timeout(self.timeout, op(store)).await {
            Ok(result) => Fetched::from_result(result),
            Err(_) => Fetched::from_result(Err(StoreError::Timeout)),
        }
    }

    /// All summaries, featured recipe first then by title
    pub async fn list_all(&self) -> Sourced<Vec<RecipeSummary>> {
        let fetched = self
            .call(|store| async move { store.list_all().await })
            .await
            .filter(|rows| !rows.is_empty(), "store returned no recipes");
        match fetched {
            Fetched::Available(mut rows) => {
                sort_featured_first(&mut rows);
                Sourced::store(rows)
            }
            Fetched::Unavailable(reason) => {
                AppLogger::log_fallback("list_recipes", &reason);
                Sourced::fallback(fallback_summaries())
            }
        }
    }

    /// Summaries whose title or cuisine contains `text`; blank text lists everything
    pub async fn search(&self, text: &str) -> Sourced<Vec<RecipeSummary>> {
        let query = text.trim().to_owned();
        if query.is_empty() {
            return self.list_all().await;
        }
        let needle = query.clone();
        let fetched = self
            .call(|store| async move { store.search(&needle).await })
            .await
            .filter(|rows| !rows.is_empty(), "store search returned no hits");
        match fetched {
            Fetched::Available(mut rows) => {
                rows.sort_by(|a, b| a.title.cmp(&b.title));
                Sourced::store(rows)
            }
            Fetched::Unavailable(reason) => {
                AppLogger::log_fallback("search_recipes", &reason);
                let hits = fallback_summaries()
                    .into_iter()
                    .filter(|summary| summary.matches_text(&query))
                    .collect();
                Sourced::fallback(hits)
            }
        }
    }

    /// One recipe by id
    ///
    /// # Errors
    ///
    /// Returns a not-found error when neither the store nor the fallback set has the id
    pub async fn get_by_id(&self, id: RecipeId) -> AppResult<Sourced<Recipe>> {
        let fetched = self
            .call(|store| async move { store.get_by_id(id).await })
            .await;
        match fetched {
            Fetched::Available(Some(recipe)) => Ok(Sourced::store(recipe)),
            Fetched::Available(None) => {
                AppLogger::log_fallback("get_recipe", "recipe absent from store");
                fallback_by_id(id).map(Sourced::fallback).ok_or_else(not_found)
            }
            Fetched::Unavailable(reason) => {
                AppLogger::log_fallback("get_recipe", &reason);
                fallback_by_id(id).map(Sourced::fallback).ok_or_else(not_found)
            }
        }
    }

    /// One recipe by exact title, case-insensitive
    ///
    /// # Errors
    ///
    /// Returns a not-found error when neither the store nor the fallback set has the title
    pub async fn get_by_title(&self, title: &str) -> AppResult<Sourced<Recipe>> {
        let wanted = title.trim().to_owned();
        let lookup = wanted.clone();
        let fetched = self
            .call(|store| async move { store.find_by_title(&lookup).await })
            .await;
        let reason = match fetched {
            Fetched::Available(Some(recipe)) => return Ok(Sourced::store(recipe)),
            Fetched::Available(None) => "recipe absent from store".to_owned(),
            Fetched::Unavailable(reason) => reason,
        };
        AppLogger::log_fallback("get_recipe_by_title", &reason);
        fallback_by_title(&wanted)
            .map(Sourced::fallback)
            .ok_or_else(not_found)
    }

    /// Resolve a reference that is either a numeric id or a title
    ///
    /// # Errors
    ///
    /// Returns a not-found error when nothing matches
    pub async fn resolve(&self, reference: &str) -> AppResult<Sourced<Recipe>> {
        match reference.trim().parse::<RecipeId>() {
            Ok(id) => self.get_by_id(id).await,
            Err(_) => self.get_by_title(reference).await,
        }
    }
}

fn not_found() -> AppError {
    AppError::not_found("Recipe").with_details(json!({
        "message": messages::RECIPE_NOT_FOUND,
        "recovery": { "label": "Back to recipes", "href": routes::RECIPES },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(title: &str, cuisine: &str, prep: &str, difficulty: Difficulty) -> RecipeSummary {
        RecipeSummary {
            id: 1,
            title: title.to_owned(),
            cuisine: cuisine.to_owned(),
            prep_time: prep.to_owned(),
            difficulty,
            image_url: String::new(),
            servings: 2,
        }
    }

    #[test]
    fn test_prep_buckets_boundaries() {
        assert!(PrepBucket::Quick.contains(20));
        assert!(!PrepBucket::Quick.contains(21));
        assert!(PrepBucket::Medium.contains(21));
        assert!(PrepBucket::Medium.contains(40));
        assert!(PrepBucket::Long.contains(41));
    }

    #[test]
    fn test_filter_combines_criteria() {
        let rows = vec![
            summary("Pad Thai", "Thai", "30 min", Difficulty::Medium),
            summary("Açaí Bowl", "Brazilian", "10 min", Difficulty::Easy),
            summary("Beef Bourguignon", "French", "3 hours", Difficulty::Hard),
        ];
        let criteria = RecipeFilter {
            cuisine: Some("THA".into()),
            difficulty: Some(Difficulty::Medium),
            prep: Some(PrepBucket::Medium),
        };
        let kept = filter(rows.clone(), &criteria);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Pad Thai");

        let quick = RecipeFilter {
            prep: Some(PrepBucket::Quick),
            ..RecipeFilter::default()
        };
        assert_eq!(filter(rows.clone(), &quick)[0].title, "Açaí Bowl");
        assert_eq!(filter(rows, &RecipeFilter::default()).len(), 3);
    }

    #[tokio::test]
    async fn test_fallback_only_catalog_serves_fallback() {
        let catalog = RecipeCatalog::fallback_only();
        let listed = catalog.list_all().await;
        assert_eq!(listed.source, DataSource::Fallback);
        assert_eq!(listed.data.len(), 9);

        let err = catalog.get_by_id(999).await.unwrap_err();
        assert_eq!(err.message, "Recipe not found");
    }
}
