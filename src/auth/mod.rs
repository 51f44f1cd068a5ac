// ABOUTME: Identity provider boundary, credential validation and user-facing error mapping
// ABOUTME: Hosted GoTrue and local SQLite providers implement the same trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

//! # Authentication
//!
//! The application never owns credentials itself; it calls sign-up, sign-in,
//! sign-out and current-user on an [`IdentityProvider`]. Sessions are opaque
//! bearer tokens issued by the provider.

/// Local provider over `SQLite`
pub mod local;
/// Hosted Supabase `GoTrue` provider
pub mod supabase;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{header::AUTHORIZATION, HeaderMap};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use fusion_core::constants::{defaults, messages};
use fusion_core::errors::{AppError, AppResult, ErrorCode};
use fusion_core::models::AuthenticatedUser;

use crate::logging::AppLogger;

pub use local::LocalIdentityProvider;
pub use supabase::SupabaseIdentityProvider;

/// Provider code for an already registered email
pub const CODE_USER_ALREADY_EXISTS: &str = "user_already_exists";
/// Provider code for rejected credentials
pub const CODE_INVALID_CREDENTIALS: &str = "invalid_credentials";
/// Provider code when the provider cannot be reached
pub const CODE_UNAVAILABLE: &str = "unavailable";
/// Provider message for rejected credentials
const INVALID_LOGIN_CREDENTIALS: &str = "Invalid login credentials";

/// Failure reported by an identity provider
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct IdentityError {
    /// Provider error code
    pub code: String,
    /// Provider message
    pub message: String,
}

impl IdentityError {
    /// Error with a provider code
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Provider could not be reached
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(CODE_UNAVAILABLE, message)
    }
}

/// A signed-in session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSession {
    /// Bearer token for subsequent calls
    pub access_token: String,
    /// The signed-in user
    pub user: AuthenticatedUser,
}

/// Current user resolved from a request, with the token it was resolved from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    /// The user
    pub user: AuthenticatedUser,
    /// Bearer token presented by the caller
    pub access_token: String,
}

/// Identity provider operations
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &'static str;

    /// Register a new account
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<AuthenticatedUser, IdentityError>;

    /// Exchange credentials for a session
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, IdentityError>;

    /// Invalidate a session token
    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError>;

    /// User for a token, `None` when the token is unknown or expired
    async fn current_user(
        &self,
        access_token: &str,
    ) -> Result<Option<AuthenticatedUser>, IdentityError>;
}

/// Sign-up form
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpRequest {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
    /// Password confirmation
    pub confirm_password: String,
    /// Display name; defaults to the email local part
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Sign-in form
#[derive(Debug, Clone, Deserialize)]
pub struct SignInRequest {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

/// Result of a successful sign-up
#[derive(Debug, Clone, Serialize)]
pub struct SignUpOutcome {
    /// The new user
    pub user: AuthenticatedUser,
    /// Confirmation shown to the user
    pub message: String,
}

/// Declared social sign-in providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    /// Google
    Google,
    /// Facebook
    Facebook,
}

impl SocialProvider {
    /// Parse a provider name, case-insensitive
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "google" => Some(Self::Google),
            "facebook" => Some(Self::Facebook),
            _ => None,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Facebook => "Facebook",
        }
    }
}

/// Social sign-in answer; providers are declared but not enabled
#[derive(Debug, Clone, Serialize)]
pub struct SocialSignInStatus {
    /// Provider asked for
    pub provider: SocialProvider,
    /// Always false
    pub available: bool,
    /// "… will be available soon!"
    pub message: String,
}

/// Validate a sign-up form before it reaches the provider
///
/// # Errors
///
/// Returns an invalid-input error naming the first failed rule
pub fn validate_sign_up(request: &SignUpRequest) -> AppResult<()> {
    if request.password != request.confirm_password {
        return Err(AppError::invalid_input(messages::PASSWORDS_DO_NOT_MATCH));
    }
    if request.password.chars().count() < defaults::MIN_PASSWORD_LENGTH {
        return Err(AppError::invalid_input(messages::PASSWORD_TOO_SHORT));
    }
    if !request.email.contains('@') {
        return Err(AppError::invalid_input(messages::INVALID_EMAIL));
    }
    Ok(())
}

/// Map a provider failure to the message shown to the user
#[must_use]
pub fn map_identity_error(error: IdentityError) -> AppError {
    match error.code.as_str() {
        CODE_USER_ALREADY_EXISTS => AppError::new(
            ErrorCode::ResourceAlreadyExists,
            messages::EMAIL_ALREADY_REGISTERED,
        ),
        CODE_INVALID_CREDENTIALS => AppError::auth_invalid(messages::EMAIL_CONFIRMATION_DIAGNOSTIC),
        CODE_UNAVAILABLE => AppError::external_unavailable(error.message),
        _ if error.message.contains(INVALID_LOGIN_CREDENTIALS) => {
            AppError::auth_invalid(messages::EMAIL_CONFIRMATION_DIAGNOSTIC)
        }
        _ => AppError::auth_invalid(error.message),
    }
}

/// Token from an `Authorization: Bearer <token>` header
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Credential flows over an optional identity provider
#[derive(Clone)]
pub struct AuthService {
    provider: Option<Arc<dyn IdentityProvider>>,
}

impl AuthService {
    /// Service over a provider
    #[must_use]
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Service with no provider; every credential call reports it as not configured
    #[must_use]
    pub const fn not_configured() -> Self {
        Self { provider: None }
    }

    /// Whether an identity provider is configured
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    fn provider(&self) -> AppResult<&Arc<dyn IdentityProvider>> {
        self.provider
            .as_ref()
            .ok_or_else(|| AppError::external_unavailable(messages::AUTH_NOT_CONFIGURED))
    }

    /// Validate and register a new account
    ///
    /// # Errors
    ///
    /// Returns a validation error, or the mapped provider error
    pub async fn sign_up(&self, request: SignUpRequest) -> AppResult<SignUpOutcome> {
        validate_sign_up(&request)?;
        let provider = self.provider()?;
        let email = request.email.trim();
        let display_name = request
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| email_local_part(email));

        match provider.sign_up(email, &request.password, display_name).await {
            Ok(user) => {
                AppLogger::log_auth_event(email, "sign_up", true, None);
                Ok(SignUpOutcome {
                    user,
                    message: messages::ACCOUNT_CREATED.to_owned(),
                })
            }
            Err(e) => {
                AppLogger::log_auth_event(email, "sign_up", false, Some(&e.code));
                Err(map_identity_error(e))
            }
        }
    }

    /// Exchange credentials for a session
    ///
    /// # Errors
    ///
    /// Returns the mapped provider error
    pub async fn sign_in(&self, request: SignInRequest) -> AppResult<AuthSession> {
        let provider = self.provider()?;
        let email = request.email.trim();
        match provider.sign_in(email, &request.password).await {
            Ok(session) => {
                AppLogger::log_auth_event(email, "sign_in", true, None);
                Ok(session)
            }
            Err(e) => {
                AppLogger::log_auth_event(email, "sign_in", false, Some(&e.code));
                Err(map_identity_error(e))
            }
        }
    }

    /// Invalidate the caller's session
    ///
    /// # Errors
    ///
    /// Returns an auth-required error without a token, or the mapped provider error
    pub async fn sign_out(&self, access_token: Option<&str>) -> AppResult<()> {
        let token = access_token.ok_or_else(|| AppError::auth_required("Not signed in"))?;
        self.provider()?
            .sign_out(token)
            .await
            .map_err(map_identity_error)
    }

    /// Resolve the current user; `None` without a provider, token, or valid session
    pub async fn current_user(&self, access_token: Option<&str>) -> Option<SessionUser> {
        let (Some(provider), Some(token)) = (self.provider.as_ref(), access_token) else {
            return None;
        };
        match provider.current_user(token).await {
            Ok(user) => user.map(|user| SessionUser {
                user,
                access_token: token.to_owned(),
            }),
            Err(e) => {
                warn!(provider = provider.name(), error = %e, "Current user lookup failed");
                None
            }
        }
    }

    /// Social sign-in: declared providers answer "coming soon"
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for undeclared providers
    pub fn social_sign_in(&self, provider: &str) -> AppResult<SocialSignInStatus> {
        let provider = SocialProvider::parse(provider)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown sign-in provider: {provider}")))?;
        Ok(SocialSignInStatus {
            provider,
            available: false,
            message: format!("{} Sign-In will be available soon!", provider.label()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str, confirm: &str) -> SignUpRequest {
        SignUpRequest {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
            display_name: None,
        }
    }

    #[test]
    fn test_validation_order() {
        let err = validate_sign_up(&form("a@b.c", "secret1", "secret2")).unwrap_err();
        assert_eq!(err.message, messages::PASSWORDS_DO_NOT_MATCH);
        let err = validate_sign_up(&form("a@b.c", "abc", "abc")).unwrap_err();
        assert_eq!(err.message, messages::PASSWORD_TOO_SHORT);
        let err = validate_sign_up(&form("nobody", "secret1", "secret1")).unwrap_err();
        assert_eq!(err.message, messages::INVALID_EMAIL);
        assert!(validate_sign_up(&form("cook@example.com", "secret1", "secret1")).is_ok());
    }

    #[test]
    fn test_error_mapping() {
        let mapped = map_identity_error(IdentityError::new(CODE_USER_ALREADY_EXISTS, "exists"));
        assert_eq!(mapped.message, messages::EMAIL_ALREADY_REGISTERED);

        let mapped = map_identity_error(IdentityError::new("400", "Invalid login credentials"));
        assert_eq!(mapped.message, messages::EMAIL_CONFIRMATION_DIAGNOSTIC);

        let mapped = map_identity_error(IdentityError::new("weak_password", "Password is too weak"));
        assert_eq!(mapped.message, "Password is too weak");
    }

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);
        headers.insert(AUTHORIZATION, "Bearer abc123".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc123"));
        headers.insert(AUTHORIZATION, "Basic abc".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_social_coming_soon() {
        let service = AuthService::not_configured();
        let status = service.social_sign_in("Google").unwrap();
        assert!(!status.available);
        assert_eq!(status.message, "Google Sign-In will be available soon!");
        assert!(service.social_sign_in("myspace").is_err());
    }
}
