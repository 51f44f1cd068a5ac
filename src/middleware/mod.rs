// ABOUTME: HTTP middleware for the FusionFlavors router
// ABOUTME: CORS configuration; request tracing comes from tower-http's TraceLayer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

/// CORS configuration
pub mod cors;

pub use cors::setup_cors;
