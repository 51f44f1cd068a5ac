// ABOUTME: Recipe record, list summary, difficulty and ingredient line types
// ABOUTME: Mirrors the recipe table columns consumed from the recipe store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable numeric recipe identifier
pub type RecipeId = i64;

/// Cooking difficulty of a recipe
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Beginner friendly
    Easy,
    /// Some technique required
    Medium,
    /// Demanding technique or long preparation
    Hard,
}

impl Difficulty {
    /// Label as stored and displayed
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// One ingredient line, either free text or an amount/item pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum IngredientLine {
    /// "400g spaghetti pasta"
    Plain(String),
    /// `{ "amount": "400g", "item": "spaghetti pasta" }`
    Measured {
        /// Quantity with unit
        amount: String,
        /// Ingredient name
        item: String,
    },
}

impl IngredientLine {
    /// Text shown to the user for this line
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Plain(text) => text.clone(),
            Self::Measured { amount, item } => format!("{amount} {item}"),
        }
    }
}

impl From<&str> for IngredientLine {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_owned())
    }
}

/// A base recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    /// Stable unique id
    pub id: RecipeId,
    /// Display title
    pub title: String,
    /// Cuisine name, e.g. "Italian"
    pub cuisine: String,
    /// Preparation time label, e.g. "25 min"
    pub prep_time: String,
    /// Difficulty rating
    pub difficulty: Difficulty,
    /// Image reference
    pub image_url: String,
    /// Number of servings
    pub servings: u32,
    /// Ordered ingredient lines
    pub ingredients: Vec<IngredientLine>,
    /// Ordered instruction strings
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Minutes encoded as the leading integer of the prep-time label
    #[must_use]
    pub fn prep_minutes(&self) -> Option<u32> {
        leading_minutes(&self.prep_time)
    }

    /// Case-insensitive substring match over title or cuisine
    #[must_use]
    pub fn matches_text(&self, query: &str) -> bool {
        matches_text(&self.title, &self.cuisine, query)
    }
}

/// List-view projection of a recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeSummary {
    /// Stable unique id
    pub id: RecipeId,
    /// Display title
    pub title: String,
    /// Cuisine name
    pub cuisine: String,
    /// Preparation time label
    pub prep_time: String,
    /// Difficulty rating
    pub difficulty: Difficulty,
    /// Image reference
    pub image_url: String,
    /// Number of servings
    pub servings: u32,
}

impl RecipeSummary {
    /// Minutes encoded as the leading integer of the prep-time label
    #[must_use]
    pub fn prep_minutes(&self) -> Option<u32> {
        leading_minutes(&self.prep_time)
    }

    /// Case-insensitive substring match over title or cuisine
    #[must_use]
    pub fn matches_text(&self, query: &str) -> bool {
        matches_text(&self.title, &self.cuisine, query)
    }
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title.clone(),
            cuisine: recipe.cuisine.clone(),
            prep_time: recipe.prep_time.clone(),
            difficulty: recipe.difficulty,
            image_url: recipe.image_url.clone(),
            servings: recipe.servings,
        }
    }
}

fn leading_minutes(label: &str) -> Option<u32> {
    let digits: String = label
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

fn matches_text(title: &str, cuisine: &str, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    title.to_lowercase().contains(&needle) || cuisine.to_lowercase().contains(&needle)
}
