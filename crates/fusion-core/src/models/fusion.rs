// ABOUTME: Fusion variant tag and the fusion selection a cooking session is built from
// ABOUTME: A selection is immutable once a guided cooking session starts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::RecipeId;

/// Intensity of a fusion variant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FusionVariantTag {
    /// Keeps the base recipe mostly intact
    Subtle,
    /// Even blend of both cuisines
    #[default]
    Balanced,
    /// Reimagines the base recipe
    Bold,
}

impl FusionVariantTag {
    /// All variants in presentation order
    pub const ALL: [Self; 3] = [Self::Subtle, Self::Balanced, Self::Bold];

    /// Wire tag used in share links
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subtle => "subtle",
            Self::Balanced => "balanced",
            Self::Bold => "bold",
        }
    }

    /// Capitalized label, e.g. "Bold"
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Subtle => "Subtle",
            Self::Balanced => "Balanced",
            Self::Bold => "Bold",
        }
    }

    /// Variant title, e.g. "Bold Twist"
    #[must_use]
    pub fn title(self) -> String {
        format!("{} Twist", self.label())
    }

    /// Minutes added to the base preparation time
    #[must_use]
    pub const fn time_delta_minutes(self) -> u32 {
        match self {
            Self::Subtle => 3,
            Self::Balanced => 7,
            Self::Bold => 12,
        }
    }

    /// Parse a tag, treating anything unrecognised as `Balanced`
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for FusionVariantTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FusionVariantTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "subtle" => Ok(Self::Subtle),
            "balanced" => Ok(Self::Balanced),
            "bold" => Ok(Self::Bold),
            other => Err(format!("unknown fusion variant: {other}")),
        }
    }
}

/// The (base recipe, fusion cuisine, variant) triple chosen by a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FusionSelection {
    /// Base recipe the fusion is built from
    pub recipe_id: RecipeId,
    /// Fusion cuisine name, e.g. "Japanese"
    pub cuisine: String,
    /// Variant intensity
    pub variant: FusionVariantTag,
}

impl FusionSelection {
    /// Create a selection
    #[must_use]
    pub fn new(recipe_id: RecipeId, cuisine: impl Into<String>, variant: FusionVariantTag) -> Self {
        Self {
            recipe_id,
            cuisine: cuisine.into(),
            variant,
        }
    }
}
