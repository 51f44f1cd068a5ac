// ABOUTME: HTTP integration tests for the full FusionFlavors router
// ABOUTME: Recipes, fusion picker, sharing, saved toggle, identity and cooking plans over tower oneshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use serde_json::{json, Value};

use fusion_flavors::server::build_router;
use fusion_flavors::sharing::decode_share_url;

use helpers::axum_test::AxumTestRequest;
use helpers::{fallback_context, local_context, sign_in_new_user};

fn titles(body: &Value) -> Vec<String> {
    body["recipes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|recipe| recipe["title"].as_str().unwrap().to_owned())
        .collect()
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_and_ready() {
    let app = build_router(fallback_context());

    let response = AxumTestRequest::get("/health").send(app.clone()).await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "fusion-flavors");

    let response = AxumTestRequest::get("/ready").send(app).await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["recipe_source"], "fallback");
    assert_eq!(body["store_available"], false);
    assert_eq!(body["auth_configured"], false);
}

#[tokio::test]
async fn test_ready_reports_seeded_store() {
    let app = build_router(local_context(true).await);
    let body: Value = AxumTestRequest::get("/ready").send(app).await.json();
    assert_eq!(body["recipe_source"], "store");
    assert_eq!(body["auth_configured"], true);
}

// ============================================================================
// Recipes
// ============================================================================

#[tokio::test]
async fn test_list_recipes_from_fallback() {
    let app = build_router(fallback_context());
    let response = AxumTestRequest::get("/api/recipes").send(app).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["source"], "fallback");
    assert_eq!(body["count"], 9);
    assert_eq!(titles(&body)[0], "Spaghetti Carbonara");
}

#[tokio::test]
async fn test_list_recipes_with_search_and_filters() {
    let app = build_router(local_context(true).await);

    let body: Value = AxumTestRequest::get("/api/recipes?q=chicken")
        .send(app.clone())
        .await
        .json();
    assert_eq!(body["source"], "store");
    assert_eq!(
        titles(&body),
        vec!["Chicken Teriyaki", "Chicken Tikka", "Kung Pao Chicken"]
    );

    let body: Value = AxumTestRequest::get("/api/recipes?difficulty=Easy&prep=quick")
        .send(app.clone())
        .await
        .json();
    assert_eq!(titles(&body), vec!["Açaí Bowl"]);

    let body: Value = AxumTestRequest::get("/api/recipes?cuisine=french&prep=long")
        .send(app)
        .await
        .json();
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn test_invalid_filters_are_rejected() {
    let app = build_router(fallback_context());

    let response = AxumTestRequest::get("/api/recipes?prep=forever")
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 400);

    let response = AxumTestRequest::get("/api/recipes?difficulty=Impossible")
        .send(app)
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_recipe_detail_and_not_found() {
    let app = build_router(fallback_context());

    let response = AxumTestRequest::get("/api/recipes/3").send(app.clone()).await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["recipe"]["title"], "Beef Bourguignon");
    assert_eq!(body["saved"], false);
    assert!(body["recipe"]["instructions"].as_array().unwrap().len() > 1);

    let response = AxumTestRequest::get("/api/recipes/404").send(app).await;
    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(body["error"]["details"]["recovery"]["label"], "Back to recipes");
}

// ============================================================================
// Fusion picker
// ============================================================================

#[tokio::test]
async fn test_cuisines_and_variants() {
    let app = build_router(fallback_context());

    let body: Value = AxumTestRequest::get("/api/cuisines")
        .send(app.clone())
        .await
        .json();
    assert_eq!(body["cuisines"].as_array().unwrap().len(), 8);
    assert_eq!(body["cuisines"][0]["name"], "Italian");

    let response = AxumTestRequest::get("/api/recipes/1/fusion/japanese")
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["cuisine"], "Japanese");
    assert_eq!(body["base"]["title"], "Spaghetti Carbonara");
    let variants = body["variants"].as_array().unwrap();
    assert_eq!(variants.len(), 3);
    assert_eq!(variants[2]["id"], "bold");
    assert_eq!(variants[2]["header"]["prep_time"], "37 min");

    let response = AxumTestRequest::get("/api/recipes/1/fusion/Martian")
        .send(app)
        .await;
    assert_eq!(response.status(), 400);
}

// ============================================================================
// Sharing
// ============================================================================

#[tokio::test]
async fn test_share_encode_then_open() {
    let app = build_router(fallback_context());

    let response = AxumTestRequest::post("/api/share")
        .json(&json!({ "recipe_id": 1, "cuisine": "Mexican", "variant": "subtle" }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    let link = body["link"].as_str().unwrap().to_owned();
    assert!(link.starts_with("https://fusionflavors.test?"));
    assert_eq!(body["cascade"][0]["method"], "native");
    assert_eq!(body["cascade"][2]["method"], "manual");

    let decoded = decode_share_url(&link).unwrap();
    assert_eq!(decoded.recipe, "Spaghetti Carbonara");

    let query = link.split_once('?').unwrap().1;
    let body: Value = AxumTestRequest::get(&format!("/api/share?{query}"))
        .send(app)
        .await
        .json();
    assert_eq!(body["shared"]["recipe_id"], 1);
    assert_eq!(body["shared"]["variant"], "subtle");
    assert_eq!(
        body["shared"]["fusion_title"],
        "Mexican-Italian Spaghetti Carbonara"
    );
}

#[tokio::test]
async fn test_incomplete_share_link_is_not_an_error() {
    let app = build_router(fallback_context());
    let response = AxumTestRequest::get("/api/share?recipe=Bibimbap&cuisine=Thai")
        .send(app)
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert!(body["shared"].is_null());
}

#[tokio::test]
async fn test_share_link_to_unknown_recipe_is_not_found() {
    let app = build_router(fallback_context());
    let response =
        AxumTestRequest::get("/api/share?recipe=Moon%20Cheese&cuisine=Thai&variant=bold")
            .send(app)
            .await;
    assert_eq!(response.status(), 404);
}

// ============================================================================
// Identity and saved recipes
// ============================================================================

#[tokio::test]
async fn test_sign_up_sign_in_and_me() {
    let app = build_router(local_context(false).await);

    let response = AxumTestRequest::post("/api/auth/signup")
        .json(&json!({
            "email": "cook@example.com",
            "password": "secret-pass",
            "confirm_password": "secret-pass"
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);

    let response = AxumTestRequest::post("/api/auth/signup")
        .json(&json!({
            "email": "cook@example.com",
            "password": "secret-pass",
            "confirm_password": "secret-pass"
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 409);

    let response = AxumTestRequest::post("/api/auth/signin")
        .json(&json!({ "email": "cook@example.com", "password": "secret-pass" }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let session: Value = response.json();
    let token = session["access_token"].as_str().unwrap().to_owned();

    let body: Value = AxumTestRequest::get("/api/auth/me")
        .bearer(&token)
        .send(app.clone())
        .await
        .json();
    assert_eq!(body["user"]["display_name"], "cook");

    let response = AxumTestRequest::post("/api/auth/signout")
        .bearer(&token)
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 204);

    let body: Value = AxumTestRequest::get("/api/auth/me")
        .bearer(&token)
        .send(app)
        .await
        .json();
    assert!(body["user"].is_null());
}

#[tokio::test]
async fn test_social_sign_in_placeholder() {
    let app = build_router(fallback_context());

    let response = AxumTestRequest::post("/api/auth/social/google")
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["available"], false);
    assert_eq!(body["message"], "Google Sign-In will be available soon!");

    let response = AxumTestRequest::post("/api/auth/social/aol").send(app).await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_saved_toggle_round_trip() {
    let ctx = local_context(true).await;
    let session = sign_in_new_user(&ctx.auth, "cook@example.com").await;
    let token = session.access_token;
    let app = build_router(ctx);

    let response = AxumTestRequest::put("/api/saved/2").send(app.clone()).await;
    assert_eq!(response.status(), 401);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Please sign in to save recipes");

    for _ in 0..2 {
        let response = AxumTestRequest::put("/api/saved/2")
            .bearer(&token)
            .json(&json!({ "notes": "weeknight" }))
            .send(app.clone())
            .await;
        assert_eq!(response.status(), 200);
    }

    let body: Value = AxumTestRequest::get("/api/recipes/2")
        .bearer(&token)
        .send(app.clone())
        .await
        .json();
    assert_eq!(body["saved"], true);

    let body: Value = AxumTestRequest::get("/api/saved")
        .bearer(&token)
        .send(app.clone())
        .await
        .json();
    assert_eq!(body["count"], 1);
    assert_eq!(body["saved"][0]["recipe_id"], 2);
    assert_eq!(body["saved"][0]["recipe"]["title"], "Chicken Teriyaki");

    let response = AxumTestRequest::delete("/api/saved/2")
        .bearer(&token)
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = AxumTestRequest::get("/api/saved/2")
        .bearer(&token)
        .send(app)
        .await
        .json();
    assert_eq!(body["saved"], false);
}

// ============================================================================
// Cooking plans
// ============================================================================

#[tokio::test]
async fn test_cooking_plan_by_title_and_id() {
    let app = build_router(fallback_context());

    let response =
        AxumTestRequest::get("/api/cook/steps?recipe=Spaghetti%20Carbonara&cuisine=Japanese&variant=bold")
            .send(app.clone())
            .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["plan"]["steps"].as_array().unwrap().len(), 7);
    assert_eq!(body["plan"]["header"]["variant_label"], "Bold Twist");
    assert_eq!(body["plan"]["selection"]["recipe_id"], 1);

    let body: Value = AxumTestRequest::get("/api/cook/steps?recipe=4&cuisine=Korean")
        .send(app.clone())
        .await
        .json();
    assert_eq!(body["plan"]["selection"]["variant"], "balanced");

    let response = AxumTestRequest::get("/api/cook/steps?recipe=4")
        .send(app)
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
}
