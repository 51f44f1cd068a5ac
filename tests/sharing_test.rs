// ABOUTME: Integration tests for share link encoding, decoding and the share fallback cascade
// ABOUTME: Incomplete links decode to no shared recipe; special characters survive a round trip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fusion_flavors::models::FusionVariantTag;
use fusion_flavors::sharing::{
    decode_share_query, decode_share_url, encode_share_link, share_cascade, ShareMessage,
    ShareTarget, SharedLink,
};

const BASE: &str = "https://fusionflavors.test/";

#[test]
fn test_link_decodes_to_same_selection() {
    let link = encode_share_link(BASE, "Açaí Bowl", "Japanese", FusionVariantTag::Bold);
    assert!(link.starts_with("https://fusionflavors.test?recipe="));
    assert!(!link.contains(' '));

    let decoded = decode_share_url(&link).unwrap();
    assert_eq!(
        decoded,
        SharedLink {
            recipe: "Açaí Bowl".to_owned(),
            cuisine: "Japanese".to_owned(),
            variant: FusionVariantTag::Bold,
        }
    );
}

#[test]
fn test_reserved_characters_are_escaped() {
    let link = encode_share_link(BASE, "Mac & Cheese = Love?", "Thai", FusionVariantTag::Subtle);
    let query = link.split_once('?').unwrap().1;
    assert_eq!(query.matches('&').count(), 2);

    let decoded = decode_share_query(query).unwrap();
    assert_eq!(decoded.recipe, "Mac & Cheese = Love?");
}

#[test]
fn test_missing_parameter_means_no_shared_recipe() {
    assert!(decode_share_query("recipe=Pad%20Thai&cuisine=Korean").is_none());
    assert!(decode_share_query("cuisine=Korean&variant=bold").is_none());
    assert!(decode_share_query("recipe=Pad%20Thai&variant=bold").is_none());
    assert!(decode_share_query("recipe=&cuisine=Korean&variant=bold").is_none());
    assert!(decode_share_query("").is_none());
    assert!(decode_share_url("https://fusionflavors.test/").is_none());
    assert!(decode_share_url("not a url").is_none());
}

#[test]
fn test_unknown_variant_reads_as_balanced() {
    let decoded = decode_share_query("?recipe=Bibimbap&cuisine=Mexican&variant=extreme").unwrap();
    assert_eq!(decoded.variant, FusionVariantTag::Balanced);
}

#[test]
fn test_numeric_recipe_parameter_is_an_id() {
    let decoded = decode_share_query("recipe=7&cuisine=Indian&variant=subtle").unwrap();
    assert_eq!(decoded.recipe_id(), Some(7));

    let decoded = decode_share_query("recipe=Bibimbap&cuisine=Indian&variant=subtle").unwrap();
    assert_eq!(decoded.recipe_id(), None);
}

#[test]
fn test_cascade_ends_with_manual_copy() {
    let link = encode_share_link(
        BASE,
        "Spaghetti Carbonara",
        "Japanese",
        FusionVariantTag::Balanced,
    );
    let message = ShareMessage::new(
        "Spaghetti Carbonara",
        "Italian",
        "Japanese",
        FusionVariantTag::Balanced,
        link.clone(),
    );
    assert_eq!(message.title, "Balanced Twist - FusionFlavors");
    assert!(message.text.contains("Japanese-Italian fusion"));

    let cascade = share_cascade(&message);
    assert_eq!(cascade.len(), 3);
    assert!(matches!(cascade[0], ShareTarget::Native { .. }));
    assert!(matches!(cascade[1], ShareTarget::Clipboard { .. }));
    match &cascade[2] {
        ShareTarget::Manual {
            content, intents, ..
        } => {
            assert!(content.ends_with(&link));
            let names: Vec<&str> = intents.iter().map(|i| i.name.as_str()).collect();
            assert_eq!(names, vec!["WhatsApp", "Twitter", "Facebook", "Email"]);
        }
        other => panic!("Expected manual copy last, got {other:?}"),
    }
}
