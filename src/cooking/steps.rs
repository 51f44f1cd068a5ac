// ABOUTME: Derives the ordered cooking steps for a fusion selection
// ABOUTME: Authored guides plus a (cuisine, position) substitution table; unknown cuisines keep base text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

//! Step-list derivation
//!
//! A step list is computed once from the base recipe and the fusion cuisine
//! and never changes afterwards. Recipes with an authored guide use it;
//! every other recipe is guided through its own instructions, with suggested
//! durations read from phrases like "about 5-7 minutes" or "2 hours".
//!
//! Substitutions are rows in [`SUBSTITUTIONS`]. Adding a cuisine means adding
//! rows, not branches.

use serde::{Deserialize, Serialize};

use fusion_core::models::Recipe;

/// One step of a guided cooking session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CookingStep {
    /// 0-based sequence position
    pub position: usize,
    /// Instruction text
    pub instruction: String,
    /// Suggested timer length in minutes
    pub duration_minutes: Option<u32>,
    /// Optional tip
    pub tip: Option<String>,
}

struct GuideStep {
    instruction: &'static str,
    duration_minutes: Option<u32>,
    tip: &'static str,
}

struct AuthoredGuide {
    title: &'static str,
    steps: &'static [GuideStep],
}

/// Replacement for one step of an authored guide when fusing with `cuisine`
struct Substitution {
    guide: &'static str,
    cuisine: &'static str,
    position: usize,
    instruction: &'static str,
    tip: Option<&'static str>,
}

const CARBONARA: &str = "Spaghetti Carbonara";

const CARBONARA_GUIDE: &[GuideStep] = &[
    GuideStep {
        instruction: "Bring a large pot of salted water to boil. This will be used for cooking the pasta.",
        duration_minutes: None,
        tip: "Use about 1 tablespoon of salt per liter of water for properly seasoned pasta.",
    },
    GuideStep {
        instruction: "Heat olive oil in a large skillet over medium heat. Add pancetta and cook until crispy.",
        duration_minutes: Some(7),
        tip: "Cook pancetta until it renders its fat and becomes crispy but not burnt.",
    },
    GuideStep {
        instruction: "In a bowl, whisk together eggs, Pecorino Romano, Parmesan, and a generous amount of black pepper.",
        duration_minutes: None,
        tip: "The egg mixture should be smooth and well combined. This creates the creamy sauce base.",
    },
    GuideStep {
        instruction: "Add pasta to the boiling water and cook according to package directions until al dente.",
        duration_minutes: Some(10),
        tip: "Stir occasionally to prevent sticking. Taste test a minute before the package time.",
    },
    GuideStep {
        instruction: "Reserve 1 cup of pasta cooking water, then drain the pasta. The starchy water helps create a silky sauce.",
        duration_minutes: None,
        tip: "Don't forget this step! The pasta water is crucial for the perfect sauce consistency.",
    },
    GuideStep {
        instruction: "Add the hot pasta to the skillet with the cooked ingredients. Remove from heat immediately.",
        duration_minutes: None,
        tip: "Working off the heat prevents the eggs from scrambling when you add them.",
    },
    GuideStep {
        instruction: "Quickly pour the egg mixture over the pasta, tossing constantly to create a creamy sauce. Add pasta water as needed.",
        duration_minutes: None,
        tip: "Toss vigorously and continuously to create a smooth, creamy sauce without scrambled eggs.",
    },
];

const GUIDES: &[AuthoredGuide] = &[AuthoredGuide {
    title: CARBONARA,
    steps: CARBONARA_GUIDE,
}];

const SUBSTITUTIONS: &[Substitution] = &[
    Substitution {
        guide: CARBONARA,
        cuisine: "Japanese",
        position: 1,
        instruction: "Heat olive oil in a large skillet over medium heat. Add diced shiitake mushrooms and cook until golden and crispy.",
        tip: Some("Shiitake mushrooms should be sliced thin and cooked until they release their moisture and become golden."),
    },
    Substitution {
        guide: CARBONARA,
        cuisine: "Japanese",
        position: 2,
        instruction: "In a bowl, whisk together eggs, Pecorino Romano, Parmesan, miso paste, and a generous amount of black pepper.",
        tip: None,
    },
    Substitution {
        guide: CARBONARA,
        cuisine: "Japanese",
        position: 6,
        instruction: "Quickly pour the egg mixture over the pasta, tossing constantly. Add pasta water as needed. Finish with nori flakes and sesame seeds.",
        tip: None,
    },
    Substitution {
        guide: CARBONARA,
        cuisine: "Mexican",
        position: 1,
        instruction: "Heat olive oil in a large skillet over medium heat. Add crumbled chorizo and cook until crispy.",
        tip: Some("Let the chorizo release its paprika-red fat; it seasons the whole sauce."),
    },
    Substitution {
        guide: CARBONARA,
        cuisine: "Mexican",
        position: 2,
        instruction: "In a bowl, whisk together eggs, Pecorino Romano, cotija, a spoonful of chipotle in adobo, and black pepper.",
        tip: None,
    },
    Substitution {
        guide: CARBONARA,
        cuisine: "Mexican",
        position: 6,
        instruction: "Quickly pour the egg mixture over the pasta, tossing constantly. Add pasta water as needed. Finish with chopped cilantro and a squeeze of lime.",
        tip: None,
    },
    Substitution {
        guide: CARBONARA,
        cuisine: "Indian",
        position: 1,
        instruction: "Heat ghee in a large skillet over medium heat. Add cubed paneer and cook until golden on all sides.",
        tip: Some("Pat the paneer dry first so it browns instead of steaming."),
    },
    Substitution {
        guide: CARBONARA,
        cuisine: "Indian",
        position: 2,
        instruction: "In a bowl, whisk together eggs, Pecorino Romano, Parmesan, a pinch of garam masala, and black pepper.",
        tip: None,
    },
];

/// Build the ordered step list for `recipe` fused with `cuisine`.
///
/// Never fails: an unknown cuisine keeps the base text, and a recipe without
/// instructions yields a single step telling the cook to follow the recipe card.
#[must_use]
pub fn derive_steps(recipe: &Recipe, cuisine: &str) -> Vec<CookingStep> {
    if let Some(guide) = GUIDES
        .iter()
        .find(|guide| guide.title.eq_ignore_ascii_case(recipe.title.trim()))
    {
        return guide
            .steps
            .iter()
            .enumerate()
            .map(|(position, step)| {
                let substitution = find_substitution(guide.title, cuisine, position);
                CookingStep {
                    position,
                    instruction: substitution
                        .map_or(step.instruction, |sub| sub.instruction)
                        .to_owned(),
                    duration_minutes: step.duration_minutes,
                    tip: Some(
                        substitution
                            .and_then(|sub| sub.tip)
                            .unwrap_or(step.tip)
                            .to_owned(),
                    ),
                }
            })
            .collect();
    }

    let steps: Vec<CookingStep> = recipe
        .instructions
        .iter()
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .enumerate()
        .map(|(position, text)| CookingStep {
            position,
            instruction: text.to_owned(),
            duration_minutes: parse_duration_minutes(text),
            tip: None,
        })
        .collect();

    if steps.is_empty() {
        vec![CookingStep {
            position: 0,
            instruction: format!("Prepare {} following the recipe card.", recipe.title),
            duration_minutes: None,
            tip: None,
        }]
    } else {
        steps
    }
}

fn find_substitution(guide: &str, cuisine: &str, position: usize) -> Option<&'static Substitution> {
    SUBSTITUTIONS.iter().find(|sub| {
        sub.guide == guide && sub.position == position && sub.cuisine.eq_ignore_ascii_case(cuisine.trim())
    })
}

/// First "N minutes", "N-M minutes" or "N hours" phrase in `text`, in minutes.
/// Ranges resolve to their upper bound.
#[must_use]
pub fn parse_duration_minutes(text: &str) -> Option<u32> {
    let words: Vec<String> = text
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_ascii_alphanumeric() && c != '-')
                .to_lowercase()
        })
        .collect();

    words.windows(2).find_map(|pair| {
        let amount = parse_amount(&pair[0])?;
        let unit = pair[1].as_str();
        if unit.starts_with("min") {
            Some(amount)
        } else if unit.starts_with("hour") || unit == "hr" || unit == "hrs" {
            Some(amount.saturating_mul(60))
        } else {
            None
        }
    })
}

fn parse_amount(word: &str) -> Option<u32> {
    match word.split_once('-') {
        Some((_, upper)) => upper.parse().ok(),
        None => word.parse().ok(),
    }
}
