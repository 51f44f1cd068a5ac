// ABOUTME: Hardcoded fallback recipe catalog used when the recipe store is unavailable
// ABOUTME: Never written back to a store and not kept consistent with one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use fusion_core::constants::cuisines::FEATURED_RECIPE_TITLE;
use fusion_core::models::{Difficulty, IngredientLine, Recipe, RecipeId, RecipeSummary};

struct FallbackRecipe {
    id: RecipeId,
    title: &'static str,
    cuisine: &'static str,
    prep_time: &'static str,
    difficulty: Difficulty,
    image_url: &'static str,
    servings: u32,
    ingredients: &'static [&'static str],
    instructions: &'static [&'static str],
}

const PEXELS_SIZE: &str = "?auto=compress&cs=tinysrgb&w=800&h=600&fit=crop";

const CATALOG: &[FallbackRecipe] = &[
    FallbackRecipe {
        id: 1,
        title: "Spaghetti Carbonara",
        cuisine: "Italian",
        prep_time: "25 min",
        difficulty: Difficulty::Medium,
        image_url: "https://images.pexels.com/photos/1279330/pexels-photo-1279330.jpeg",
        servings: 4,
        ingredients: &[
            "400g spaghetti pasta",
            "200g pancetta or guanciale, diced",
            "4 large eggs",
            "100g Pecorino Romano cheese, grated",
            "50g Parmesan cheese, grated",
            "2 cloves garlic, minced",
            "Freshly ground black pepper",
            "Salt to taste",
            "2 tablespoons olive oil",
        ],
        instructions: &[
            "Bring a large pot of salted water to boil. Cook spaghetti according to package directions until al dente.",
            "While pasta cooks, heat olive oil in a large skillet over medium heat. Add pancetta and cook until crispy, about 5-7 minutes.",
            "In a bowl, whisk together eggs, Pecorino Romano, Parmesan, and a generous amount of black pepper.",
            "Reserve 1 cup of pasta cooking water, then drain the pasta.",
            "Add the hot pasta to the skillet with pancetta. Remove from heat.",
            "Quickly pour the egg mixture over the pasta, tossing constantly to create a creamy sauce. Add pasta water as needed.",
            "Season with salt and additional pepper. Serve immediately with extra cheese.",
        ],
    },
    FallbackRecipe {
        id: 2,
        title: "Chicken Teriyaki",
        cuisine: "Japanese",
        prep_time: "30 min",
        difficulty: Difficulty::Easy,
        image_url: "https://images.pexels.com/photos/2338407/pexels-photo-2338407.jpeg",
        servings: 4,
        ingredients: &[
            "4 chicken thighs",
            "1/4 cup soy sauce",
            "2 tbsp mirin",
            "2 tbsp sake",
            "2 tbsp sugar",
            "1 tbsp vegetable oil",
            "2 green onions, sliced",
            "1 tsp sesame seeds",
        ],
        instructions: &[
            "Mix soy sauce, mirin, sake, and sugar to make teriyaki sauce.",
            "Heat oil in a pan and cook chicken skin-side down until golden.",
            "Flip chicken and cook until done.",
            "Add teriyaki sauce and simmer until glossy.",
            "Garnish with green onions and sesame seeds.",
        ],
    },
    FallbackRecipe {
        id: 3,
        title: "Beef Bourguignon",
        cuisine: "French",
        prep_time: "45 min",
        difficulty: Difficulty::Hard,
        image_url: "https://images.pexels.com/photos/4518843/pexels-photo-4518843.jpeg",
        servings: 6,
        ingredients: &[
            "2 lbs beef chuck, cubed",
            "6 strips bacon",
            "1 onion, diced",
            "2 carrots, sliced",
            "3 cloves garlic",
            "3 tbsp tomato paste",
            "1 bottle red wine",
            "2 cups beef broth",
            "2 bay leaves",
            "Fresh thyme",
            "8 oz mushrooms",
            "Pearl onions",
        ],
        instructions: &[
            "Cook bacon until crispy, remove and set aside.",
            "Brown beef cubes in bacon fat.",
            "Add onions, carrots, and garlic, cook until soft.",
            "Add tomato paste and cook 1 minute.",
            "Add wine and broth, bring to simmer.",
            "Add herbs and simmer 2 hours until tender.",
            "Add mushrooms and pearl onions in last 30 minutes.",
        ],
    },
    FallbackRecipe {
        id: 4,
        title: "Pad Thai",
        cuisine: "Thai",
        prep_time: "20 min",
        difficulty: Difficulty::Medium,
        image_url: "https://images.pexels.com/photos/4518843/pexels-photo-4518843.jpeg",
        servings: 2,
        ingredients: &[
            "8 oz rice noodles",
            "2 tbsp tamarind paste",
            "2 tbsp fish sauce",
            "2 tbsp palm sugar",
            "2 eggs",
            "1 cup bean sprouts",
            "3 green onions",
            "1/4 cup peanuts",
            "Lime wedges",
            "2 tbsp vegetable oil",
        ],
        instructions: &[
            "Soak rice noodles in warm water until soft.",
            "Mix tamarind paste, fish sauce, and palm sugar for sauce.",
            "Heat oil in wok, scramble eggs.",
            "Add drained noodles and sauce, toss to combine.",
            "Add bean sprouts and green onions.",
            "Serve with peanuts and lime wedges.",
        ],
    },
    FallbackRecipe {
        id: 5,
        title: "Kung Pao Chicken",
        cuisine: "Chinese",
        prep_time: "25 min",
        difficulty: Difficulty::Medium,
        image_url: "https://images.pexels.com/photos/5410400/pexels-photo-5410400.jpeg",
        servings: 4,
        ingredients: &[
            "1 lb chicken breast, cubed",
            "1/2 cup peanuts",
            "3 dried chilies",
            "2 tbsp soy sauce",
            "1 tbsp rice wine",
            "1 tsp cornstarch",
            "2 tbsp vegetable oil",
            "2 cloves garlic",
            "1 inch ginger",
            "2 green onions",
        ],
        instructions: &[
            "Marinate chicken with soy sauce, rice wine, and cornstarch.",
            "Heat oil in wok, stir-fry chicken until cooked.",
            "Add garlic, ginger, and dried chilies.",
            "Add peanuts and green onions.",
            "Toss everything together and serve hot.",
        ],
    },
    FallbackRecipe {
        id: 6,
        title: "Açaí Bowl",
        cuisine: "Brazilian",
        prep_time: "10 min",
        difficulty: Difficulty::Easy,
        image_url: "https://images.pexels.com/photos/1092730/pexels-photo-1092730.jpeg",
        servings: 2,
        ingredients: &[
            "2 açaí packets",
            "1 banana",
            "1/2 cup blueberries",
            "1/4 cup granola",
            "2 tbsp coconut flakes",
            "1 tbsp honey",
            "1/4 cup almond milk",
        ],
        instructions: &[
            "Blend açaí packets with half banana and almond milk.",
            "Pour into bowl.",
            "Top with sliced banana, blueberries, granola.",
            "Sprinkle with coconut flakes and drizzle honey.",
            "Serve immediately.",
        ],
    },
    FallbackRecipe {
        id: 7,
        title: "Bibimbap",
        cuisine: "Korean",
        prep_time: "45 min",
        difficulty: Difficulty::Medium,
        image_url: "https://images.pexels.com/photos/4518843/pexels-photo-4518843.jpeg",
        servings: 4,
        ingredients: &[
            "2 cups cooked rice",
            "1 lb beef bulgogi",
            "1 cup spinach",
            "1 cup bean sprouts",
            "1 carrot, julienned",
            "4 shiitake mushrooms",
            "4 eggs",
            "Gochujang sauce",
            "Sesame oil",
            "Garlic",
        ],
        instructions: &[
            "Prepare and season each vegetable separately.",
            "Cook beef bulgogi until tender.",
            "Fry eggs sunny-side up.",
            "Arrange rice in bowls.",
            "Top with vegetables, beef, and egg.",
            "Serve with gochujang sauce.",
        ],
    },
    FallbackRecipe {
        id: 8,
        title: "Butter Croissant",
        cuisine: "French",
        prep_time: "180 min",
        difficulty: Difficulty::Hard,
        image_url: "https://images.pexels.com/photos/2135/food-france-morning-breakfast.jpg",
        servings: 8,
        ingredients: &[
            "3 cups bread flour",
            "1/4 cup sugar",
            "1 tsp salt",
            "1 packet active dry yeast",
            "1 cup warm milk",
            "1 cup cold butter",
            "1 egg for wash",
        ],
        instructions: &[
            "Make dough with flour, sugar, salt, yeast, and milk.",
            "Chill dough for 1 hour.",
            "Roll out butter into rectangle.",
            "Encase butter in dough and fold.",
            "Repeat folding process 3 times with chilling.",
            "Roll out and cut into triangles.",
            "Shape into croissants and proof.",
            "Brush with egg wash and bake until golden.",
        ],
    },
    FallbackRecipe {
        id: 9,
        title: "Chicken Tikka",
        cuisine: "Indian",
        prep_time: "50 min",
        difficulty: Difficulty::Medium,
        image_url: "https://images.pexels.com/photos/5410400/pexels-photo-5410400.jpeg",
        servings: 4,
        ingredients: &[
            "2 lbs chicken breast, cubed",
            "1 cup yogurt",
            "2 tbsp lemon juice",
            "2 tsp garam masala",
            "1 tsp turmeric",
            "1 tsp cumin",
            "3 cloves garlic",
            "1 inch ginger",
            "2 tbsp vegetable oil",
        ],
        instructions: &[
            "Mix yogurt with all spices, garlic, and ginger.",
            "Marinate chicken for at least 30 minutes.",
            "Thread chicken onto skewers.",
            "Grill or broil until cooked through.",
            "Serve with naan and chutney.",
        ],
    },
];

impl FallbackRecipe {
    fn to_recipe(&self) -> Recipe {
        Recipe {
            id: self.id,
            title: self.title.to_owned(),
            cuisine: self.cuisine.to_owned(),
            prep_time: self.prep_time.to_owned(),
            difficulty: self.difficulty,
            image_url: format!("{}{PEXELS_SIZE}", self.image_url),
            servings: self.servings,
            ingredients: self.ingredients.iter().map(|&line| IngredientLine::from(line)).collect(),
            instructions: self.instructions.iter().map(|&step| step.to_owned()).collect(),
        }
    }
}

/// Every fallback recipe in id order
#[must_use]
pub fn fallback_recipes() -> Vec<Recipe> {
    CATALOG.iter().map(FallbackRecipe::to_recipe).collect()
}

/// Fallback recipe by id
#[must_use]
pub fn fallback_by_id(id: RecipeId) -> Option<Recipe> {
    CATALOG
        .iter()
        .find(|recipe| recipe.id == id)
        .map(FallbackRecipe::to_recipe)
}

/// Fallback recipe by title, case-insensitive
#[must_use]
pub fn fallback_by_title(title: &str) -> Option<Recipe> {
    let wanted = title.trim();
    CATALOG
        .iter()
        .find(|recipe| recipe.title.to_lowercase() == wanted.to_lowercase())
        .map(FallbackRecipe::to_recipe)
}

/// Fallback summaries, featured recipe first then alphabetical
#[must_use]
pub fn fallback_summaries() -> Vec<RecipeSummary> {
    let mut summaries: Vec<RecipeSummary> = CATALOG
        .iter()
        .map(|recipe| RecipeSummary::from(&recipe.to_recipe()))
        .collect();
    sort_featured_first(&mut summaries);
    summaries
}

/// Order summaries with the featured recipe first, the rest by title
pub fn sort_featured_first(summaries: &mut [RecipeSummary]) {
    summaries.sort_by(|a, b| {
        let a_featured = a.title == FEATURED_RECIPE_TITLE;
        let b_featured = b.title == FEATURED_RECIPE_TITLE;
        b_featured
            .cmp(&a_featured)
            .then_with(|| a.title.cmp(&b.title))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_nine_recipes_with_unique_ids() {
        let recipes = fallback_recipes();
        assert_eq!(recipes.len(), 9);
        let mut ids: Vec<RecipeId> = recipes.iter().map(|r| r.id).collect();
        ids.dedup();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
        assert!(recipes.iter().all(|r| !r.instructions.is_empty()));
    }

    #[test]
    fn test_featured_first_then_alphabetical() {
        let titles: Vec<String> = fallback_summaries().into_iter().map(|s| s.title).collect();
        assert_eq!(titles[0], "Spaghetti Carbonara");
        assert_eq!(titles[1], "Açaí Bowl");
        assert_eq!(titles[2], "Beef Bourguignon");
        assert_eq!(titles.last().map(String::as_str), Some("Pad Thai"));
    }

    #[test]
    fn test_lookup_by_title_ignores_case() {
        assert_eq!(fallback_by_title("pad thai").map(|r| r.id), Some(4));
        assert!(fallback_by_id(42).is_none());
    }
}
