// ABOUTME: Shared-recipe view rendered from a decoded share link
// ABOUTME: Combines the base recipe with the chosen variant's ingredients and key changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use serde::{Deserialize, Serialize};

use fusion_core::models::{Difficulty, FusionVariantTag, Recipe, RecipeId};

use super::variants::{authored_for, fused_header, to_strings, variants_for};

/// What a recipient of a share link sees
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SharedRecipeView {
    /// Base recipe id, used for save and cook actions
    pub recipe_id: RecipeId,
    /// "{cuisine}-{base cuisine} {base title}"
    pub fusion_title: String,
    /// Base recipe title
    pub base_title: String,
    /// Base recipe cuisine
    pub base_cuisine: String,
    /// Fusion cuisine
    pub cuisine: String,
    /// Variant shown
    pub variant: FusionVariantTag,
    /// "{Variant} Twist"
    pub variant_title: String,
    /// Variant description
    pub description: String,
    /// Fused prep time
    pub prep_time: String,
    /// Difficulty of the fused dish
    pub difficulty: Difficulty,
    /// Servings
    pub servings: u32,
    /// Image reference
    pub image_url: String,
    /// Ingredient list of the fused dish
    pub ingredients: Vec<String>,
    /// What changes compared to the base recipe
    pub key_changes: Vec<String>,
}

/// Build the shared view for `recipe` fused with `cuisine` under `variant`
#[must_use]
pub fn shared_view(recipe: &Recipe, cuisine: &str, variant: FusionVariantTag) -> SharedRecipeView {
    let cuisine = cuisine.trim();
    let header = fused_header(recipe, cuisine, variant);
    let presented = variants_for(recipe, cuisine)
        .into_iter()
        .find(|candidate| candidate.id == variant);
    let authored = authored_for(&recipe.title, cuisine)
        .and_then(|fusion| fusion.variants.iter().find(|content| content.tag == variant));

    let (ingredients, difficulty) = authored.map_or_else(
        || {
            (
                recipe
                    .ingredients
                    .iter()
                    .map(fusion_core::models::IngredientLine::display_text)
                    .collect(),
                templated_difficulty(recipe.difficulty, variant),
            )
        },
        |content| (to_strings(content.ingredients), content.difficulty),
    );
    let (description, key_changes) = presented.map_or_else(
        || (String::new(), Vec::new()),
        |presented| (presented.description, presented.ingredient_swaps),
    );

    SharedRecipeView {
        recipe_id: recipe.id,
        fusion_title: header.title,
        base_title: recipe.title.clone(),
        base_cuisine: recipe.cuisine.clone(),
        cuisine: cuisine.to_owned(),
        variant,
        variant_title: header.variant_label,
        description,
        prep_time: header.prep_time,
        difficulty,
        servings: recipe.servings,
        image_url: recipe.image_url.clone(),
        ingredients,
        key_changes,
    }
}

/// Bold variants are one level harder than the base recipe
const fn templated_difficulty(base: Difficulty, variant: FusionVariantTag) -> Difficulty {
    match (variant, base) {
        (FusionVariantTag::Bold, Difficulty::Easy) => Difficulty::Medium,
        (FusionVariantTag::Bold, _) => Difficulty::Hard,
        (_, base) => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fusion_core::models::IngredientLine;

    fn carbonara() -> Recipe {
        Recipe {
            id: 1,
            title: "Spaghetti Carbonara".into(),
            cuisine: "Italian".into(),
            prep_time: "25 min".into(),
            difficulty: Difficulty::Medium,
            image_url: "https://img.example/carbonara.jpg".into(),
            servings: 4,
            ingredients: vec![IngredientLine::from("400g spaghetti pasta")],
            instructions: Vec::new(),
        }
    }

    #[test]
    fn test_authored_shared_view() {
        let view = shared_view(&carbonara(), "Japanese", FusionVariantTag::Bold);
        assert_eq!(view.fusion_title, "Japanese-Italian Spaghetti Carbonara");
        assert_eq!(view.variant_title, "Bold Twist");
        assert_eq!(view.prep_time, "37 min");
        assert_eq!(view.difficulty, Difficulty::Hard);
        assert_eq!(view.ingredients[0], "400g fresh ramen noodles");
        assert_eq!(view.key_changes.len(), 5);
    }

    #[test]
    fn test_templated_shared_view_uses_base_ingredients() {
        let view = shared_view(&carbonara(), "Korean", FusionVariantTag::Subtle);
        assert_eq!(view.ingredients, vec!["400g spaghetti pasta"]);
        assert_eq!(view.difficulty, Difficulty::Medium);
        assert!(!view.key_changes.is_empty());
    }

    #[test]
    fn test_templated_bold_is_harder() {
        assert_eq!(
            templated_difficulty(Difficulty::Easy, FusionVariantTag::Bold),
            Difficulty::Medium
        );
        assert_eq!(
            templated_difficulty(Difficulty::Easy, FusionVariantTag::Balanced),
            Difficulty::Easy
        );
    }
}
