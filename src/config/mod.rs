// ABOUTME: Configuration management module for server settings
// ABOUTME: Re-exports the environment-driven server configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

//! Configuration module for the FusionFlavors server

/// Environment and server configuration
pub mod environment;

pub use environment::{DatabaseUrl, Environment, ServerConfig, SupabaseConfig};
