// ABOUTME: CORS middleware configuration for the HTTP API and the cooking WebSocket
// ABOUTME: Origins come from CORS_ORIGINS; "*" or an empty list allows any origin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use axum::http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::ServerConfig;

/// Configure CORS from the server configuration
///
/// Browser clients send the bearer token in `authorization`, so that header is
/// always allowed.
///
/// ```bash
/// # Allow all origins (development)
/// export CORS_ORIGINS="*"
///
/// # Allow specific origins (production)
/// export CORS_ORIGINS="https://fusionflavors.app,https://www.fusionflavors.app"
/// ```
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let wildcard = config.cors_origins.is_empty() || config.cors_origins.iter().any(|o| o == "*");
    let allow_origin = if wildcard {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin.trim()).ok())
            .collect();
        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_builds_for_origin_lists() {
        let mut config = ServerConfig::default();
        let _any = setup_cors(&config);
        config.cors_origins = vec!["https://fusionflavors.app".into(), "not a header\n".into()];
        let _listed = setup_cors(&config);
    }
}
