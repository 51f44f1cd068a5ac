// ABOUTME: Fusion variant presenter: static subtle, balanced and bold variants per base recipe and cuisine
// ABOUTME: Authored content where it exists, a generic template naming the cuisine everywhere else
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

//! Fusion variants
//!
//! Variants are hand-authored content looked up by (base recipe title, cuisine).
//! Pairs without authored content get a template. Nothing here is generated
//! from the recipe text.

use serde::{Deserialize, Serialize};

use fusion_core::models::{Difficulty, FusionVariantTag, Recipe, RecipeId};

/// Authored content for one variant
pub(crate) struct AuthoredVariant {
    pub(crate) tag: FusionVariantTag,
    pub(crate) description: &'static str,
    pub(crate) ingredient_swaps: &'static [&'static str],
    pub(crate) step_highlights: &'static [&'static str],
    /// Full ingredient list of the fused dish, used by the shared view
    pub(crate) ingredients: &'static [&'static str],
    pub(crate) difficulty: Difficulty,
}

/// Authored variants for a (base recipe, cuisine) pair
pub(crate) struct AuthoredFusion {
    pub(crate) base_title: &'static str,
    pub(crate) cuisine: &'static str,
    pub(crate) variants: [AuthoredVariant; 3],
}

const CARBONARA: &str = "Spaghetti Carbonara";

pub(crate) const AUTHORED: &[AuthoredFusion] = &[
    AuthoredFusion {
        base_title: CARBONARA,
        cuisine: "Japanese",
        variants: [
            AuthoredVariant {
                tag: FusionVariantTag::Subtle,
                description: "A gentle fusion that maintains the classic carbonara base while adding subtle Japanese flavors.",
                ingredient_swaps: &[
                    "Add 2 tbsp miso paste to the egg mixture",
                    "Replace pancetta with thinly sliced shiitake mushrooms",
                    "Garnish with nori flakes and sesame seeds",
                ],
                step_highlights: &[
                    "Sauté shiitake mushrooms until golden and crispy",
                    "Whisk miso paste into the egg and cheese mixture",
                    "Finish with a sprinkle of toasted sesame seeds",
                ],
                ingredients: &[
                    "400g spaghetti pasta",
                    "200g shiitake mushrooms, sliced thin",
                    "4 large eggs",
                    "100g Pecorino Romano cheese, grated",
                    "50g Parmesan cheese, grated",
                    "2 tbsp miso paste",
                    "2 tbsp olive oil",
                    "Freshly ground black pepper",
                    "Nori flakes for garnish",
                    "Sesame seeds for garnish",
                ],
                difficulty: Difficulty::Medium,
            },
            AuthoredVariant {
                tag: FusionVariantTag::Balanced,
                description: "Perfect harmony between Italian and Japanese cuisines with complementary flavors and techniques.",
                ingredient_swaps: &[
                    "Use udon noodles instead of spaghetti",
                    "Add dashi powder to the cooking water",
                    "Include edamame and cherry tomatoes",
                    "Finish with Japanese mayo drizzle",
                ],
                step_highlights: &[
                    "Cook udon noodles in dashi-infused water",
                    "Blanch edamame and halve cherry tomatoes",
                    "Create a creamy sauce with traditional carbonara technique",
                    "Plate with artistic Japanese mayo drizzle",
                ],
                ingredients: &[
                    "400g udon noodles",
                    "200g shiitake mushrooms",
                    "4 large eggs",
                    "100g Pecorino Romano cheese",
                    "2 tbsp miso paste",
                    "1 cup edamame, shelled",
                    "200g cherry tomatoes, halved",
                    "Japanese mayo for drizzle",
                    "Dashi powder",
                    "Sesame oil",
                ],
                difficulty: Difficulty::Medium,
            },
            AuthoredVariant {
                tag: FusionVariantTag::Bold,
                description: "An adventurous fusion that completely reimagines carbonara with bold Japanese flavors and presentation.",
                ingredient_swaps: &[
                    "Replace pasta with fresh ramen noodles",
                    "Use Japanese chashu pork instead of pancetta",
                    "Add soft-boiled ajitsuke egg on top",
                    "Include wakame seaweed and bamboo shoots",
                    "Finish with spicy miso tare",
                ],
                step_highlights: &[
                    "Prepare ajitsuke eggs 24 hours in advance",
                    "Slow-cook chashu pork until tender",
                    "Make spicy miso tare with garlic and chili oil",
                    "Assemble ramen-style with traditional toppings",
                    "Serve in authentic Japanese ramen bowls",
                ],
                ingredients: &[
                    "400g fresh ramen noodles",
                    "300g chashu pork, sliced",
                    "4 ajitsuke eggs (marinated soft-boiled)",
                    "100g Pecorino Romano cheese",
                    "3 tbsp spicy miso tare",
                    "Wakame seaweed",
                    "Bamboo shoots",
                    "Green onions, sliced",
                    "Nori sheets",
                    "Chili oil",
                ],
                difficulty: Difficulty::Hard,
            },
        ],
    },
    AuthoredFusion {
        base_title: CARBONARA,
        cuisine: "Mexican",
        variants: [
            AuthoredVariant {
                tag: FusionVariantTag::Subtle,
                description: "The classic carbonara with a smoky Mexican accent in the sauce and garnish.",
                ingredient_swaps: &[
                    "Replace pancetta with crumbled chorizo",
                    "Whisk a spoonful of chipotle in adobo into the eggs",
                    "Garnish with cilantro and lime",
                ],
                step_highlights: &[
                    "Render chorizo until crispy",
                    "Blend chipotle into the egg and cheese mixture",
                    "Finish with chopped cilantro and a squeeze of lime",
                ],
                ingredients: &[
                    "400g spaghetti pasta",
                    "200g fresh chorizo, crumbled",
                    "4 large eggs",
                    "100g Pecorino Romano cheese, grated",
                    "50g cotija cheese, crumbled",
                    "1 tbsp chipotle in adobo",
                    "Freshly ground black pepper",
                    "Cilantro and lime for garnish",
                ],
                difficulty: Difficulty::Medium,
            },
            AuthoredVariant {
                tag: FusionVariantTag::Balanced,
                description: "Italian technique meets Mexican pantry staples for a creamy, smoky pasta.",
                ingredient_swaps: &[
                    "Use cotija alongside the Pecorino",
                    "Add roasted poblano strips",
                    "Toast pepitas for crunch",
                    "Finish with crema drizzle",
                ],
                step_highlights: &[
                    "Char and peel poblano peppers",
                    "Toast pepitas in a dry pan",
                    "Build the sauce off the heat with the classic method",
                    "Drizzle crema just before serving",
                ],
                ingredients: &[
                    "400g spaghetti pasta",
                    "200g chorizo",
                    "4 large eggs",
                    "60g Pecorino Romano cheese",
                    "60g cotija cheese",
                    "2 poblano peppers, roasted",
                    "3 tbsp pepitas",
                    "Mexican crema",
                ],
                difficulty: Difficulty::Medium,
            },
            AuthoredVariant {
                tag: FusionVariantTag::Bold,
                description: "Carbonara rebuilt as a street-food bowl with bold Mexican heat.",
                ingredient_swaps: &[
                    "Replace spaghetti with fideo noodles toasted in lard",
                    "Use al pastor pork instead of pancetta",
                    "Top with pickled red onion and charred corn",
                    "Finish with salsa macha",
                ],
                step_highlights: &[
                    "Marinate and sear al pastor pork",
                    "Toast fideo until deep golden",
                    "Quick-pickle red onions",
                    "Spoon salsa macha over each bowl",
                ],
                ingredients: &[
                    "400g fideo noodles",
                    "300g al pastor pork",
                    "4 large eggs",
                    "100g cotija cheese",
                    "1 red onion, pickled",
                    "1 cup charred corn",
                    "Salsa macha",
                    "Lime wedges",
                ],
                difficulty: Difficulty::Hard,
            },
        ],
    },
    AuthoredFusion {
        base_title: CARBONARA,
        cuisine: "Indian",
        variants: [
            AuthoredVariant {
                tag: FusionVariantTag::Subtle,
                description: "A familiar carbonara lifted with warm Indian spices.",
                ingredient_swaps: &[
                    "Replace pancetta with golden paneer",
                    "Add a pinch of garam masala to the eggs",
                    "Garnish with fresh coriander",
                ],
                step_highlights: &[
                    "Brown paneer cubes in ghee",
                    "Whisk garam masala into the egg mixture",
                    "Scatter coriander over the finished pasta",
                ],
                ingredients: &[
                    "400g spaghetti pasta",
                    "200g paneer, cubed",
                    "4 large eggs",
                    "100g Pecorino Romano cheese, grated",
                    "1 tsp garam masala",
                    "1 tbsp ghee",
                    "Fresh coriander",
                ],
                difficulty: Difficulty::Medium,
            },
            AuthoredVariant {
                tag: FusionVariantTag::Balanced,
                description: "Equal parts Roman and Punjabi, with a tadka folded into the sauce.",
                ingredient_swaps: &[
                    "Temper cumin and curry leaves in ghee",
                    "Fold green peas into the pasta",
                    "Swap black pepper for toasted Kashmiri chili",
                ],
                step_highlights: &[
                    "Prepare a cumin and curry leaf tadka",
                    "Cook peas with the pasta for the final minute",
                    "Finish the sauce off the heat",
                ],
                ingredients: &[
                    "400g spaghetti pasta",
                    "200g paneer",
                    "4 large eggs",
                    "80g Pecorino Romano cheese",
                    "1 cup green peas",
                    "1 tsp cumin seeds",
                    "10 curry leaves",
                    "Kashmiri chili powder",
                ],
                difficulty: Difficulty::Medium,
            },
            AuthoredVariant {
                tag: FusionVariantTag::Bold,
                description: "A tikka-spiced reinvention of carbonara with smoky chicken and a makhani-style sauce.",
                ingredient_swaps: &[
                    "Use tandoori chicken instead of pancetta",
                    "Enrich the egg sauce with butter and tomato",
                    "Serve over bucatini with crispy fried onions",
                ],
                step_highlights: &[
                    "Marinate chicken in yogurt and tikka spices overnight",
                    "Char chicken under a hot grill",
                    "Emulsify butter and tomato into the egg sauce",
                ],
                ingredients: &[
                    "400g bucatini",
                    "400g chicken thighs, tikka-marinated",
                    "4 large eggs",
                    "60g Pecorino Romano cheese",
                    "2 tbsp butter",
                    "3 tbsp tomato passata",
                    "Crispy fried onions",
                ],
                difficulty: Difficulty::Hard,
            },
        ],
    },
];

/// Find authored content for a (base recipe, cuisine) pair
pub(crate) fn authored_for(base_title: &str, cuisine: &str) -> Option<&'static AuthoredFusion> {
    AUTHORED.iter().find(|fusion| {
        fusion.base_title.eq_ignore_ascii_case(base_title.trim())
            && fusion.cuisine.eq_ignore_ascii_case(cuisine.trim())
    })
}

/// One presented fusion variant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FusionVariant {
    /// subtle, balanced or bold
    pub id: FusionVariantTag,
    /// "Subtle Twist"
    pub title: String,
    /// Short description
    pub description: String,
    /// "+3 min"
    pub time_change: String,
    /// Ingredient swaps
    pub ingredient_swaps: Vec<String>,
    /// Modified steps
    pub step_highlights: Vec<String>,
    /// Header of the fused recipe under this variant
    pub header: FusedHeader,
}

/// Header of a fused recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FusedHeader {
    /// Base recipe; fusion variants have no records of their own
    pub base_recipe_id: RecipeId,
    /// "{cuisine}-{base cuisine} {base title}"
    pub title: String,
    /// "{Variant} Twist"
    pub variant_label: String,
    /// Base prep time plus the variant's delta
    pub prep_time: String,
    /// Servings of the base recipe
    pub servings: u32,
}

/// Build the fused header for `recipe` under `cuisine` and `variant`
#[must_use]
pub fn fused_header(recipe: &Recipe, cuisine: &str, variant: FusionVariantTag) -> FusedHeader {
    let delta = variant.time_delta_minutes();
    let prep_time = recipe.prep_minutes().map_or_else(
        || format!("{} +{delta} min", recipe.prep_time),
        |base| format!("{} min", base + delta),
    );
    FusedHeader {
        base_recipe_id: recipe.id,
        title: format!("{}-{} {}", cuisine.trim(), recipe.cuisine, recipe.title),
        variant_label: variant.title(),
        prep_time,
        servings: recipe.servings,
    }
}

/// The three variants for `recipe` fused with `cuisine`, in subtle, balanced, bold order
#[must_use]
pub fn variants_for(recipe: &Recipe, cuisine: &str) -> Vec<FusionVariant> {
    let cuisine = cuisine.trim();
    let authored = authored_for(&recipe.title, cuisine);

    FusionVariantTag::ALL
        .iter()
        .map(|&tag| {
            let header = fused_header(recipe, cuisine, tag);
            let time_change = format!("+{} min", tag.time_delta_minutes());
            match authored.and_then(|fusion| fusion.variants.iter().find(|v| v.tag == tag)) {
                Some(content) => FusionVariant {
                    id: tag,
                    title: tag.title(),
                    description: content.description.to_owned(),
                    time_change,
                    ingredient_swaps: to_strings(content.ingredient_swaps),
                    step_highlights: to_strings(content.step_highlights),
                    header,
                },
                None => templated_variant(recipe, cuisine, tag, time_change, header),
            }
        })
        .collect()
}

fn templated_variant(
    recipe: &Recipe,
    cuisine: &str,
    tag: FusionVariantTag,
    time_change: String,
    header: FusedHeader,
) -> FusionVariant {
    let base = &recipe.title;
    let base_cuisine = &recipe.cuisine;
    let (description, swaps, highlights) = match tag {
        FusionVariantTag::Subtle => (
            format!("A gentle fusion that keeps the classic {base} while adding subtle {cuisine} flavors."),
            vec![
                format!("Season the main sauce with a signature {cuisine} condiment"),
                format!("Garnish with a traditional {cuisine} topping"),
            ],
            vec![
                format!("Stir the {cuisine} seasoning in at the end of cooking"),
                "Taste and balance salt before plating".to_owned(),
            ],
        ),
        FusionVariantTag::Balanced => (
            format!("Even harmony between {base_cuisine} and {cuisine} cuisines with complementary flavors and techniques."),
            vec![
                format!("Swap the starch for a {cuisine} staple"),
                format!("Add a {cuisine} aromatic base"),
                format!("Finish with a {cuisine} sauce"),
            ],
            vec![
                format!("Build the aromatic base the {cuisine} way"),
                format!("Keep the core {base_cuisine} technique for the main component"),
                "Plate with the finishing sauce".to_owned(),
            ],
        ),
        FusionVariantTag::Bold => (
            format!("An adventurous fusion that reimagines {base} with bold {cuisine} flavors and presentation."),
            vec![
                format!("Replace the main protein with a {cuisine} classic"),
                format!("Use {cuisine} spices throughout"),
                format!("Serve in {cuisine} style"),
            ],
            vec![
                "Marinate the protein ahead of time".to_owned(),
                format!("Cook with high-heat {cuisine} technique"),
                format!("Assemble and garnish the {cuisine} way"),
            ],
        ),
    };
    FusionVariant {
        id: tag,
        title: tag.title(),
        description,
        time_change,
        ingredient_swaps: swaps,
        step_highlights: highlights,
        header,
    }
}

pub(crate) fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|&item| item.to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str, cuisine: &str, prep: &str) -> Recipe {
        Recipe {
            id: 1,
            title: title.into(),
            cuisine: cuisine.into(),
            prep_time: prep.into(),
            difficulty: Difficulty::Medium,
            image_url: String::new(),
            servings: 4,
            ingredients: Vec::new(),
            instructions: Vec::new(),
        }
    }

    #[test]
    fn test_fused_header_adds_variant_delta() {
        let carbonara = recipe("Spaghetti Carbonara", "Italian", "25 min");
        let times: Vec<String> = FusionVariantTag::ALL
            .iter()
            .map(|&tag| fused_header(&carbonara, "Japanese", tag).prep_time)
            .collect();
        assert_eq!(times, vec!["28 min", "32 min", "37 min"]);

        let header = fused_header(&carbonara, "Japanese", FusionVariantTag::Bold);
        assert_eq!(header.title, "Japanese-Italian Spaghetti Carbonara");
        assert_eq!(header.variant_label, "Bold Twist");
    }

    #[test]
    fn test_authored_content_used_for_known_pair() {
        let variants = variants_for(&recipe("spaghetti carbonara", "Italian", "25 min"), "japanese");
        assert_eq!(variants.len(), 3);
        assert_eq!(variants[2].ingredient_swaps.len(), 5);
        assert!(variants[0].description.contains("Japanese"));
        assert_eq!(variants[1].time_change, "+7 min");
    }

    #[test]
    fn test_template_names_cuisine_and_base() {
        let variants = variants_for(&recipe("Pad Thai", "Thai", "20 min"), "Korean");
        assert!(variants[0].description.contains("Pad Thai"));
        assert!(variants[0].description.contains("Korean"));
        assert!(variants[1].description.contains("Thai and Korean"));
    }

    #[test]
    fn test_unparseable_prep_time_keeps_label() {
        let header = fused_header(&recipe("Stew", "French", "overnight"), "Thai", FusionVariantTag::Subtle);
        assert_eq!(header.prep_time, "overnight +3 min");
    }
}
