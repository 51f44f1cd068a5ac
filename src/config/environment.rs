// ABOUTME: Environment configuration for the FusionFlavors server
// ABOUTME: Parses ports, database URL, hosted backend credentials, CORS and store timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

//! Environment-based configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use fusion_core::constants::{defaults, env_keys, ports};

/// Environment type for deployment-dependent behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe local database location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// File path
        path: PathBuf,
    },
    /// In-memory `SQLite` (tests, throwaway runs)
    Memory,
}

impl DatabaseUrl {
    /// Parse a `sqlite:` URL; bare paths are treated as `SQLite` files
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Convert to a sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(defaults::DATABASE_URL)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Hosted backend (recipe table, saved-recipes relation, identity provider)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Anonymous API key
    #[serde(skip_serializing)]
    pub anon_key: String,
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Local database used when no hosted backend is configured
    pub database_url: DatabaseUrl,
    /// Run local migrations on startup
    pub auto_migrate: bool,
    /// Hosted backend, when fully configured
    pub supabase: Option<SupabaseConfig>,
    /// Origin used in share links
    pub public_base_url: String,
    /// Allowed CORS origins (`*` for any)
    pub cors_origins: Vec<String>,
    /// Seconds before a slow store call degrades to fallback data
    pub store_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: ports::DEFAULT_HTTP_PORT,
            environment: Environment::Development,
            database_url: DatabaseUrl::default(),
            auto_migrate: true,
            supabase: None,
            public_base_url: defaults::PUBLIC_BASE_URL.to_owned(),
            cors_origins: vec!["*".to_owned()],
            store_timeout_secs: defaults::STORE_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or boolean variable cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_var_or(env_keys::HTTP_PORT, &ports::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_keys::ENVIRONMENT,
                "development",
            )),
            database_url: DatabaseUrl::parse_url(&env_var_or(
                env_keys::DATABASE_URL,
                defaults::DATABASE_URL,
            )),
            auto_migrate: env_var_or(env_keys::AUTO_MIGRATE, "true")
                .parse()
                .context("Invalid AUTO_MIGRATE value")?,
            supabase: supabase_from_env(),
            public_base_url: env_var_or(env_keys::PUBLIC_BASE_URL, defaults::PUBLIC_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            cors_origins: parse_origins(&env_var_or(env_keys::CORS_ORIGINS, "*")),
            store_timeout_secs: env_var_or(
                env_keys::STORE_TIMEOUT_SECS,
                &defaults::STORE_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid STORE_TIMEOUT_SECS value")?,
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP port or the store timeout is zero, or if the
    /// public base URL is not an absolute URL free of query and fragment
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            anyhow::bail!("HTTP_PORT must be greater than zero");
        }
        if self.store_timeout_secs == 0 {
            anyhow::bail!("STORE_TIMEOUT_SECS must be greater than zero");
        }
        let base =
            url::Url::parse(&self.public_base_url).context("Invalid PUBLIC_BASE_URL value")?;
        // Share links append their own query string
        if base.query().is_some() || base.fragment().is_some() {
            anyhow::bail!("PUBLIC_BASE_URL must not carry a query string or fragment");
        }
        if self.environment.is_production() && self.supabase.is_none() {
            warn!("Production environment without a hosted backend; serving from the local store");
        }
        Ok(())
    }

    /// Store call timeout as a `Duration`
    #[must_use]
    pub const fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs)
    }

    /// Configuration summary for startup logging, free of secrets
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "FusionFlavors Configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - Backend: {}\n\
             - Local Database: {}\n\
             - Auto Migrate: {}\n\
             - Public Base URL: {}\n\
             - CORS Origins: {}\n\
             - Store Timeout: {}s",
            self.http_port,
            self.environment,
            self.supabase
                .as_ref()
                .map_or_else(|| "Local".to_owned(), |backend| format!("Supabase ({})", backend.url)),
            self.database_url,
            self.auto_migrate,
            self.public_base_url,
            self.cors_origins.join(","),
            self.store_timeout_secs,
        )
    }
}

/// Both URL and key must be present; a half-configured backend falls back to local mode
fn supabase_from_env() -> Option<SupabaseConfig> {
    let url = env::var(env_keys::SUPABASE_URL)
        .ok()
        .filter(|value| !value.trim().is_empty());
    let anon_key = env::var(env_keys::SUPABASE_ANON_KEY)
        .ok()
        .filter(|value| !value.trim().is_empty());

    match (url, anon_key) {
        (Some(url), Some(anon_key)) => Some(SupabaseConfig {
            url: url.trim_end_matches('/').to_owned(),
            anon_key,
        }),
        (None, None) => None,
        (Some(_), None) => {
            warn!("SUPABASE_URL is set without SUPABASE_ANON_KEY; using local store");
            None
        }
        (None, Some(_)) => {
            warn!("SUPABASE_ANON_KEY is set without SUPABASE_URL; using local store");
            None
        }
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_origins(origins_str: &str) -> Vec<String> {
    origins_str
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
