// ABOUTME: Integration tests for identity against the local SQLite provider
// ABOUTME: Sign-up validation, duplicate accounts, credential rejection, sessions and social sign-in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use fusion_flavors::auth::{AuthService, SignInRequest, SignUpRequest};
use fusion_flavors::constants::messages;
use fusion_flavors::errors::ErrorCode;

use helpers::{local_context, sign_in_new_user, TEST_PASSWORD};

fn sign_up_form(email: &str, display_name: Option<&str>) -> SignUpRequest {
    SignUpRequest {
        email: email.to_owned(),
        password: TEST_PASSWORD.to_owned(),
        confirm_password: TEST_PASSWORD.to_owned(),
        display_name: display_name.map(ToOwned::to_owned),
    }
}

#[tokio::test]
async fn test_sign_up_defaults_display_name_to_email_local_part() {
    let ctx = local_context(false).await;

    let outcome = ctx
        .auth
        .sign_up(sign_up_form("maria.rossi@example.com", None))
        .await
        .unwrap();
    assert_eq!(outcome.user.display_name, "maria.rossi");
    assert_eq!(outcome.message, messages::ACCOUNT_CREATED);

    let outcome = ctx
        .auth
        .sign_up(sign_up_form("kenji@example.com", Some("Kenji")))
        .await
        .unwrap();
    assert_eq!(outcome.user.display_name, "Kenji");
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let ctx = local_context(false).await;
    ctx.auth
        .sign_up(sign_up_form("cook@example.com", None))
        .await
        .unwrap();

    let error = ctx
        .auth
        .sign_up(sign_up_form("Cook@Example.com", None))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(error.message, messages::EMAIL_ALREADY_REGISTERED);
}

#[tokio::test]
async fn test_invalid_forms_never_reach_the_provider() {
    let ctx = local_context(false).await;

    let mut form = sign_up_form("cook@example.com", None);
    form.confirm_password = "something-else".to_owned();
    let error = ctx.auth.sign_up(form).await.unwrap_err();
    assert_eq!(error.message, messages::PASSWORDS_DO_NOT_MATCH);

    // Validation runs before the provider check
    let error = AuthService::not_configured()
        .sign_up(sign_up_form("no-at-sign", None))
        .await
        .unwrap_err();
    assert_eq!(error.message, messages::INVALID_EMAIL);
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let ctx = local_context(false).await;
    sign_in_new_user(&ctx.auth, "cook@example.com").await;

    let error = ctx
        .auth
        .sign_in(SignInRequest {
            email: "cook@example.com".to_owned(),
            password: "wrong-password".to_owned(),
        })
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthInvalid);
    assert_eq!(error.message, "Invalid email or password");

    let error = ctx
        .auth
        .sign_in(SignInRequest {
            email: "nobody@example.com".to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthInvalid);
}

#[tokio::test]
async fn test_session_lifecycle() {
    let ctx = local_context(false).await;
    let session = sign_in_new_user(&ctx.auth, "cook@example.com").await;

    let user = ctx
        .auth
        .current_user(Some(&session.access_token))
        .await
        .unwrap();
    assert_eq!(user.user.email, "cook@example.com");
    assert_eq!(user.user.id, session.user.id);

    ctx.auth
        .sign_out(Some(&session.access_token))
        .await
        .unwrap();
    assert!(ctx
        .auth
        .current_user(Some(&session.access_token))
        .await
        .is_none());
}

#[tokio::test]
async fn test_unknown_or_missing_token_is_anonymous() {
    let ctx = local_context(false).await;
    assert!(ctx.auth.current_user(Some("not-a-token")).await.is_none());
    assert!(ctx.auth.current_user(None).await.is_none());

    let error = ctx.auth.sign_out(None).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthRequired);
}

#[tokio::test]
async fn test_each_sign_in_issues_a_new_token() {
    let ctx = local_context(false).await;
    let first = sign_in_new_user(&ctx.auth, "cook@example.com").await;
    let second = ctx
        .auth
        .sign_in(SignInRequest {
            email: "cook@example.com".to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await
        .unwrap();

    assert_ne!(first.access_token, second.access_token);
    ctx.auth.sign_out(Some(&first.access_token)).await.unwrap();
    assert!(ctx
        .auth
        .current_user(Some(&second.access_token))
        .await
        .is_some());
}

#[test]
fn test_social_sign_in_is_declared_but_unavailable() {
    let auth = AuthService::not_configured();

    let status = auth.social_sign_in("Google").unwrap();
    assert!(!status.available);
    assert_eq!(status.message, "Google Sign-In will be available soon!");

    let status = auth.social_sign_in("facebook").unwrap();
    assert_eq!(status.message, "Facebook Sign-In will be available soon!");

    let error = auth.social_sign_in("myspace").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_unconfigured_identity_is_unavailable() {
    let auth = AuthService::not_configured();
    assert!(!auth.is_configured());

    let error = auth
        .sign_in(SignInRequest {
            email: "cook@example.com".to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
}
