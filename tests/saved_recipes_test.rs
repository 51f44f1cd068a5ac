// ABOUTME: Integration tests for the saved-recipe toggle
// ABOUTME: One relation per (user, recipe), sign-in prompt for anonymous callers, idempotent unsave
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::time::Duration;

use fusion_flavors::constants::messages;
use fusion_flavors::errors::ErrorCode;

use helpers::{fallback_context, local_context, session_user};

#[tokio::test]
async fn test_double_save_keeps_one_relation() {
    let ctx = local_context(true).await;
    let user = session_user(&ctx.auth, "cook@example.com").await;

    let first = ctx.saved.save(Some(&user), 1, None).await.unwrap();
    let second = ctx
        .saved
        .save(Some(&user), 1, Some("again".into()))
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.notes, None);
    let listed = ctx.saved.list(Some(&user)).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert!(ctx.saved.is_saved(Some(&user), 1).await);
}

#[tokio::test]
async fn test_anonymous_save_prompts_sign_in() {
    let ctx = local_context(true).await;

    let error = ctx.saved.save(None, 1, None).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthRequired);
    assert_eq!(error.message, messages::SIGN_IN_TO_SAVE);

    let error = ctx.saved.unsave(None, 1).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthRequired);

    assert!(!ctx.saved.is_saved(None, 1).await);
}

#[tokio::test]
async fn test_unsave_is_idempotent() {
    let ctx = local_context(true).await;
    let user = session_user(&ctx.auth, "cook@example.com").await;

    ctx.saved.save(Some(&user), 4, None).await.unwrap();
    assert!(ctx.saved.unsave(Some(&user), 4).await.unwrap());
    assert!(!ctx.saved.unsave(Some(&user), 4).await.unwrap());
    assert!(!ctx.saved.is_saved(Some(&user), 4).await);
}

#[tokio::test]
async fn test_saving_unknown_recipe_is_not_found() {
    let ctx = local_context(true).await;
    let user = session_user(&ctx.auth, "cook@example.com").await;

    let error = ctx.saved.save(Some(&user), 4242, None).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(ctx.saved.list(Some(&user)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fallback_recipe_can_be_saved_from_empty_store() {
    let ctx = local_context(false).await;
    let user = session_user(&ctx.auth, "cook@example.com").await;

    ctx.saved.save(Some(&user), 9, None).await.unwrap();
    let listed = ctx.saved.list(Some(&user)).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].recipe.as_ref().unwrap().title, "Chicken Tikka");
}

#[tokio::test]
async fn test_list_is_newest_first_and_per_user() {
    let ctx = local_context(true).await;
    let alice = session_user(&ctx.auth, "alice@example.com").await;
    let bob = session_user(&ctx.auth, "bob@example.com").await;

    ctx.saved.save(Some(&alice), 2, None).await.unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    ctx.saved
        .save(Some(&alice), 3, Some("for sunday".into()))
        .await
        .unwrap();
    ctx.saved.save(Some(&bob), 5, None).await.unwrap();

    let listed = ctx.saved.list(Some(&alice)).await.unwrap();
    let ids: Vec<i64> = listed.iter().map(|entry| entry.saved.recipe_id).collect();
    assert_eq!(ids, vec![3, 2]);
    assert_eq!(listed[0].saved.notes.as_deref(), Some("for sunday"));
    assert_eq!(listed[0].recipe.as_ref().unwrap().title, "Beef Bourguignon");

    assert!(!ctx.saved.is_saved(Some(&bob), 2).await);
    assert!(ctx.saved.is_saved(Some(&bob), 5).await);
}

#[tokio::test]
async fn test_missing_store_reports_unavailable() {
    let ctx = fallback_context();
    let local = local_context(true).await;
    let user = session_user(&local.auth, "cook@example.com").await;

    let error = ctx.saved.save(Some(&user), 1, None).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    assert!(!ctx.saved.is_saved(Some(&user), 1).await);
}
