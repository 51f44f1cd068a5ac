// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for routes, ports, defaults, cuisines and user-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

//! Constants module
//!
//! Application constants grouped by domain rather than kept in one flat list.

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8080;
}

/// Service defaults
pub mod defaults {
    /// Default SQLite database location
    pub const DATABASE_URL: &str = "sqlite:./data/fusion_flavors.db";
    /// Origin used in generated share links
    pub const PUBLIC_BASE_URL: &str = "http://localhost:8080";
    /// Seconds before a slow store call degrades to fallback data
    pub const STORE_TIMEOUT_SECS: u64 = 5;
    /// Seconds allowed for in-flight requests during shutdown
    pub const SHUTDOWN_GRACE_SECS: u64 = 10;
    /// Minimum password length accepted at sign-up
    pub const MIN_PASSWORD_LENGTH: usize = 6;
}

/// Environment variable names
pub mod env_keys {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Local database URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Hosted backend project URL
    pub const SUPABASE_URL: &str = "SUPABASE_URL";
    /// Hosted backend anonymous key
    pub const SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";
    /// Origin for share links
    pub const PUBLIC_BASE_URL: &str = "PUBLIC_BASE_URL";
    /// Allowed CORS origins
    pub const CORS_ORIGINS: &str = "CORS_ORIGINS";
    /// Store call timeout
    pub const STORE_TIMEOUT_SECS: &str = "STORE_TIMEOUT_SECS";
    /// Run migrations at startup
    pub const AUTO_MIGRATE: &str = "AUTO_MIGRATE";
    /// Log output format
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// API routes
pub mod routes {
    /// Liveness
    pub const HEALTH: &str = "/health";
    /// Readiness
    pub const READY: &str = "/ready";
    /// Recipe list
    pub const RECIPES: &str = "/api/recipes";
    /// Picker cuisines
    pub const CUISINES: &str = "/api/cuisines";
    /// Share encode/decode
    pub const SHARE: &str = "/api/share";
    /// Saved recipes
    pub const SAVED: &str = "/api/saved";
    /// Auth base
    pub const AUTH: &str = "/api/auth";
    /// Stateless cooking steps
    pub const COOK_STEPS: &str = "/api/cook/steps";
    /// Live guided cooking socket
    pub const COOK_WS: &str = "/ws/cook";
}

/// Fusion cuisine picker
pub mod cuisines {
    /// Cuisines offered by the picker, with display flag
    pub const PICKER: [(&str, &str); 8] = [
        ("Italian", "🇮🇹"),
        ("Japanese", "🇯🇵"),
        ("Mexican", "🇲🇽"),
        ("Indian", "🇮🇳"),
        ("French", "🇫🇷"),
        ("Thai", "🇹🇭"),
        ("Chinese", "🇨🇳"),
        ("Korean", "🇰🇷"),
    ];

    /// Recipe listed first in every catalog listing
    pub const FEATURED_RECIPE_TITLE: &str = "Spaghetti Carbonara";
}

/// User-facing messages
pub mod messages {
    /// Prompt shown when an identity-requiring action has no user
    pub const SIGN_IN_TO_SAVE: &str = "Please sign in to save recipes";
    /// Detail view miss after fallback
    pub const RECIPE_NOT_FOUND: &str = "Recipe not found";
    /// Sign-up confirmation mismatch
    pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
    /// Sign-up password too short
    pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long";
    /// Sign-up email malformed
    pub const INVALID_EMAIL: &str = "Please enter a valid email address";
    /// Duplicate registration
    pub const EMAIL_ALREADY_REGISTERED: &str =
        "This email is already registered. Please sign in instead, or use a different email address.";
    /// Sign-in rejected because the upstream requires email confirmation
    pub const EMAIL_CONFIRMATION_DIAGNOSTIC: &str = "SETUP REQUIRED: Email confirmation is still enabled in Supabase. Disable \"Confirm email\" in your Supabase Dashboard (Authentication > Sign In / Providers) for sign-in to work.";
    /// Sign-up succeeded
    pub const ACCOUNT_CREATED: &str = "Account created successfully! You can now sign in.";
    /// No identity provider configured
    pub const AUTH_NOT_CONFIGURED: &str =
        "Authentication service is not configured. Please check your Supabase settings.";
    /// Shown after a clipboard share
    pub const COPIED_TO_CLIPBOARD: &str =
        "Recipe link copied to clipboard! You can now paste it anywhere to share.";
    /// Manual share prompt
    pub const MANUAL_COPY_PROMPT: &str = "Copy this link to share the recipe:";
    /// Email subject for share intents
    pub const SHARE_EMAIL_SUBJECT: &str = "Amazing Fusion Recipe!";
}
