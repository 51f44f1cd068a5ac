// ABOUTME: Recipe seeding utility for the local SQLite store
// ABOUTME: Writes the built-in recipe set into the recipes table so the local store answers without fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

//! Recipe seeder for the local `SQLite` store.
//!
//! Usage:
//! ```bash
//! # Seed recipes (uses DATABASE_URL from environment)
//! cargo run --bin seed-recipes
//!
//! # Override database URL
//! cargo run --bin seed-recipes -- --database-url sqlite:./data/fusion_flavors.db
//!
//! # Re-seed even when recipes already exist
//! cargo run --bin seed-recipes -- --force
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use tracing::info;

use fusion_flavors::config::DatabaseUrl;
use fusion_flavors::constants::{defaults, env_keys};
use fusion_flavors::store::fallback::fallback_recipes;
use fusion_flavors::store::SqliteStore;

#[derive(Parser)]
#[command(
    name = "seed-recipes",
    about = "FusionFlavors recipe seeder",
    long_about = "Write the built-in recipe set into the local SQLite recipe store"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Upsert even if recipes already exist
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== FusionFlavors Recipe Seeder ===");

    let database_url = DatabaseUrl::parse_url(
        &args
            .database_url
            .or_else(|| env::var(env_keys::DATABASE_URL).ok())
            .unwrap_or_else(|| defaults::DATABASE_URL.to_owned()),
    );
    if let DatabaseUrl::SQLite { path } = &database_url {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
    }

    info!("Connecting to database: {}", database_url);
    let store = SqliteStore::connect(&database_url.to_connection_string()).await?;
    store.migrate().await?;

    let existing = store.recipe_count().await?;
    if existing > 0 && !args.force {
        info!(
            "Recipes already seeded ({} recipes found). Use --force to re-seed.",
            existing
        );
        return Ok(());
    }

    let recipes = fallback_recipes();
    info!("Seeding {} recipes...", recipes.len());
    for recipe in &recipes {
        store.upsert_recipe(recipe).await?;
        info!("  {} ({})", recipe.title, recipe.cuisine);
    }

    info!("=== Seeding Complete ===");
    info!("Recipe store now holds {} recipes", store.recipe_count().await?);
    Ok(())
}
