// ABOUTME: Supabase GoTrue identity provider client over reqwest
// ABOUTME: Sign-up stores the display name as full_name metadata; sessions are GoTrue access tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use fusion_core::models::{resolve_display_name, AuthenticatedUser};

use super::{AuthSession, IdentityError, IdentityProvider, CODE_UNAVAILABLE};
use crate::config::SupabaseConfig;

#[derive(Debug, Deserialize)]
struct GoTrueUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: Option<Value>,
}

impl From<GoTrueUser> for AuthenticatedUser {
    fn from(user: GoTrueUser) -> Self {
        let display_name = resolve_display_name(user.user_metadata.as_ref(), user.email.as_deref());
        Self {
            id: user.id,
            email: user.email.unwrap_or_default(),
            display_name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GoTrueSession {
    access_token: String,
    user: GoTrueUser,
}

/// Sign-up answers with a bare user, or with a session when confirmation is off
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(GoTrueSession),
    User(GoTrueUser),
}

/// `GoTrue` error bodies come in two generations
#[derive(Debug, Default, Deserialize)]
struct GoTrueError {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl GoTrueError {
    fn into_identity_error(self, status: StatusCode) -> IdentityError {
        let message = self
            .msg
            .or(self.error_description)
            .or(self.message)
            .unwrap_or_else(|| format!("Authentication failed ({status})"));
        let code = self
            .error_code
            .or(self.error)
            .unwrap_or_else(|| status.as_u16().to_string());
        IdentityError::new(code, message)
    }
}

/// Identity provider backed by a Supabase project's `GoTrue` service
#[derive(Clone)]
pub struct SupabaseIdentityProvider {
    client: Client,
    auth_url: String,
    anon_key: String,
}

impl SupabaseIdentityProvider {
    /// Build a provider for the configured project
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed
    pub fn new(config: &SupabaseConfig, timeout: Duration) -> Result<Self, IdentityError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| IdentityError::unavailable(e.to_string()))?;
        Ok(Self {
            client,
            auth_url: format!("{}/auth/v1", config.url.trim_end_matches('/')),
            anon_key: config.anon_key.clone(),
        })
    }

    fn request(&self, builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        builder
            .header("apikey", &self.anon_key)
            .bearer_auth(token.unwrap_or(&self.anon_key))
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, IdentityError> {
        let response = builder
            .send()
            .await
            .map_err(|e| IdentityError::unavailable(format!("Identity provider unreachable: {e}")))?;
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body: GoTrueError = response.json().await.unwrap_or_default();
        Err(body.into_identity_error(status))
    }
}

fn decode_error(error: &reqwest::Error) -> IdentityError {
    IdentityError::new(CODE_UNAVAILABLE, format!("Invalid identity response: {error}"))
}

#[async_trait]
impl IdentityProvider for SupabaseIdentityProvider {
    fn name(&self) -> &'static str {
        "supabase"
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<AuthenticatedUser, IdentityError> {
        let body = json!({
            "email": email,
            "password": password,
            "data": { "full_name": display_name },
        });
        let response = self
            .send(self.request(
                self.client.post(format!("{}/signup", self.auth_url)).json(&body),
                None,
            ))
            .await?;
        let user = match response.json::<SignUpResponse>().await.map_err(|e| decode_error(&e))? {
            SignUpResponse::Session(session) => session.user,
            SignUpResponse::User(user) => user,
        };
        Ok(user.into())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, IdentityError> {
        let response = self
            .send(self.request(
                self.client
                    .post(format!("{}/token", self.auth_url))
                    .query(&[("grant_type", "password")])
                    .json(&json!({ "email": email, "password": password })),
                None,
            ))
            .await?;
        let session: GoTrueSession = response.json().await.map_err(|e| decode_error(&e))?;
        Ok(AuthSession {
            access_token: session.access_token,
            user: session.user.into(),
        })
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError> {
        self.send(self.request(
            self.client.post(format!("{}/logout", self.auth_url)),
            Some(access_token),
        ))
        .await?;
        Ok(())
    }

    async fn current_user(
        &self,
        access_token: &str,
    ) -> Result<Option<AuthenticatedUser>, IdentityError> {
        let result = self
            .send(self.request(
                self.client.get(format!("{}/user", self.auth_url)),
                Some(access_token),
            ))
            .await;
        match result {
            Ok(response) => {
                let user: GoTrueUser = response.json().await.map_err(|e| decode_error(&e))?;
                Ok(Some(user.into()))
            }
            Err(e) if e.code != CODE_UNAVAILABLE => {
                debug!(code = %e.code, "Access token rejected by identity provider");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
