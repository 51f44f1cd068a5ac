// ABOUTME: FusionFlavors HTTP and WebSocket server binary
// ABOUTME: Loads configuration from the environment, wires the context, serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

//! # FusionFlavors Server Binary
//!
//! Serves the recipe API and the guided-cooking WebSocket. With
//! `SUPABASE_URL` and `SUPABASE_ANON_KEY` set it talks to the hosted backend;
//! otherwise it runs on the local `SQLite` store.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use fusion_flavors::{config::ServerConfig, context::AppContext, logging, server};

#[derive(Parser)]
#[command(name = "fusion-flavors-server")]
#[command(about = "FusionFlavors - recipe discovery, fusion variants and guided cooking")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logging first so configuration warnings are visible
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting FusionFlavors server");
    info!("{}", config.summary());

    let ctx = AppContext::from_config(config).await?;

    if let Err(e) = server::serve(ctx).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    info!("Server stopped");
    Ok(())
}
