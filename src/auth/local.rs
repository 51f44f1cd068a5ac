// ABOUTME: Local identity provider over SQLite for running without a hosted backend
// ABOUTME: Argon2 password hashes, random bearer tokens stored as SHA-256 digests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::RngCore;
use sha2::{Digest, Sha256};
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};
use uuid::Uuid;

use fusion_core::models::AuthenticatedUser;

use super::{AuthSession, IdentityError, IdentityProvider, CODE_UNAVAILABLE, CODE_USER_ALREADY_EXISTS};

/// Code for rejected local credentials
pub const CODE_INVALID_PASSWORD: &str = "invalid_password";
/// Session lifetime
const SESSION_TTL_DAYS: i64 = 7;
const TOKEN_BYTES: usize = 32;

fn db_error(error: &sqlx::Error) -> IdentityError {
    IdentityError::new(CODE_UNAVAILABLE, format!("Identity store error: {error}"))
}

fn rejected() -> IdentityError {
    IdentityError::new(CODE_INVALID_PASSWORD, "Invalid email or password")
}

fn token_digest(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

fn generate_token() -> String {
    let mut bytes = [0_u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Identity provider storing accounts and sessions in `SQLite`
#[derive(Clone)]
pub struct LocalIdentityProvider {
    pool: SqlitePool,
}

impl LocalIdentityProvider {
    /// Provider over an existing pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the users and sessions tables
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails
    pub async fn migrate(&self) -> Result<(), IdentityError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT NOT NULL UNIQUE COLLATE NOCASE,
                password_hash TEXT NOT NULL,
                display_name TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| db_error(&e))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS auth_sessions (
                token_hash TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                created_at TEXT NOT NULL,
                expires_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| db_error(&e))?;

        Ok(())
    }

    fn hash_password(password: &str) -> Result<String, IdentityError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| IdentityError::new("hash_failed", format!("Password hashing failed: {e}")))
    }

    fn verify_password(password: &str, stored_hash: &str) -> bool {
        PasswordHash::new(stored_hash).is_ok_and(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<AuthenticatedUser, IdentityError> {
        let user = AuthenticatedUser {
            id: Uuid::new_v4().to_string(),
            email: email.to_owned(),
            display_name: display_name.to_owned(),
        };
        let password_hash = Self::hash_password(password)?;

        sqlx::query(
            r"
            INSERT INTO users (id, email, password_hash, display_name, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&password_hash)
        .bind(&user.display_name)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                IdentityError::new(CODE_USER_ALREADY_EXISTS, "User already registered")
            }
            _ => db_error(&e),
        })?;

        info!(user_id = %user.id, "Local account created");
        Ok(user)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, IdentityError> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, display_name FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error(&e))?
        .ok_or_else(rejected)?;

        let stored_hash: String = row.try_get("password_hash").map_err(|e| db_error(&e))?;
        if !Self::verify_password(password, &stored_hash) {
            return Err(rejected());
        }

        let user = AuthenticatedUser {
            id: row.try_get("id").map_err(|e| db_error(&e))?,
            email: row.try_get("email").map_err(|e| db_error(&e))?,
            display_name: row.try_get("display_name").map_err(|e| db_error(&e))?,
        };

        let token = generate_token();
        let now = Utc::now();
        sqlx::query(
            r"
            INSERT INTO auth_sessions (token_hash, user_id, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(token_digest(&token))
        .bind(&user.id)
        .bind(now.to_rfc3339())
        .bind((now + Duration::days(SESSION_TTL_DAYS)).to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error(&e))?;

        Ok(AuthSession {
            access_token: token,
            user,
        })
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError> {
        let result = sqlx::query("DELETE FROM auth_sessions WHERE token_hash = $1")
            .bind(token_digest(access_token))
            .execute(&self.pool)
            .await
            .map_err(|e| db_error(&e))?;
        debug!(removed = result.rows_affected(), "Local session signed out");
        Ok(())
    }

    async fn current_user(
        &self,
        access_token: &str,
    ) -> Result<Option<AuthenticatedUser>, IdentityError> {
        let row = sqlx::query(
            r"
            SELECT u.id, u.email, u.display_name
            FROM auth_sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.token_hash = $1 AND s.expires_at > $2
            ",
        )
        .bind(token_digest(access_token))
        .bind(Utc::now().to_rfc3339())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error(&e))?;

        row.map(|r| {
            Ok(AuthenticatedUser {
                id: r.try_get("id").map_err(|e| db_error(&e))?,
                email: r.try_get("email").map_err(|e| db_error(&e))?,
                display_name: r.try_get("display_name").map_err(|e| db_error(&e))?,
            })
        })
        .transpose()
    }
}
