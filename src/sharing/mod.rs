// ABOUTME: Share link encoder/decoder and share message construction
// ABOUTME: Produces an ordered fallback cascade that always ends with a manual copy option
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

//! Sharing
//!
//! A share link carries three percent-encoded query parameters: `recipe`
//! (title or id), `cuisine` and `variant`. Decoding needs all three; anything
//! less means "no shared recipe", which is not an error.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use fusion_core::constants::messages;
use fusion_core::models::FusionVariantTag;

/// Query parameter carrying the recipe title or id
pub const PARAM_RECIPE: &str = "recipe";
/// Query parameter carrying the fusion cuisine
pub const PARAM_CUISINE: &str = "cuisine";
/// Query parameter carrying the variant tag
pub const PARAM_VARIANT: &str = "variant";

/// A decoded share link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SharedLink {
    /// Recipe title or numeric id
    pub recipe: String,
    /// Fusion cuisine
    pub cuisine: String,
    /// Variant tag; unrecognised tags read as balanced
    pub variant: FusionVariantTag,
}

impl SharedLink {
    /// Build from optional parameters; `None` unless all three are present and non-blank
    #[must_use]
    pub fn from_params(
        recipe: Option<&str>,
        cuisine: Option<&str>,
        variant: Option<&str>,
    ) -> Option<Self> {
        fn present(value: Option<&str>) -> Option<&str> {
            value.map(str::trim).filter(|v| !v.is_empty())
        }
        Some(Self {
            recipe: present(recipe)?.to_owned(),
            cuisine: present(cuisine)?.to_owned(),
            variant: FusionVariantTag::parse_lenient(present(variant)?),
        })
    }

    /// Numeric id when the recipe parameter is one
    #[must_use]
    pub fn recipe_id(&self) -> Option<i64> {
        self.recipe.parse().ok()
    }
}

/// Encode a share link under `base_url`
#[must_use]
pub fn encode_share_link(
    base_url: &str,
    recipe: &str,
    cuisine: &str,
    variant: FusionVariantTag,
) -> String {
    format!(
        "{}?{PARAM_RECIPE}={}&{PARAM_CUISINE}={}&{PARAM_VARIANT}={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(recipe),
        urlencoding::encode(cuisine),
        urlencoding::encode(variant.as_str()),
    )
}

/// Decode a raw query string (with or without a leading `?`)
#[must_use]
pub fn decode_share_query(query: &str) -> Option<SharedLink> {
    let mut recipe = None;
    let mut cuisine = None;
    let mut variant = None;
    for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
        match key.as_ref() {
            PARAM_RECIPE => recipe = Some(value.into_owned()),
            PARAM_CUISINE => cuisine = Some(value.into_owned()),
            PARAM_VARIANT => variant = Some(value.into_owned()),
            _ => {}
        }
    }
    SharedLink::from_params(recipe.as_deref(), cuisine.as_deref(), variant.as_deref())
}

/// Decode the query part of a full link
#[must_use]
pub fn decode_share_url(link: &str) -> Option<SharedLink> {
    let parsed = url::Url::parse(link).ok()?;
    decode_share_query(parsed.query()?)
}

/// Title, text and link for a share action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShareMessage {
    /// "{variant title} - FusionFlavors"
    pub title: String,
    /// Message body
    pub text: String,
    /// Share link
    pub url: String,
}

impl ShareMessage {
    /// Build the share message for a fused recipe
    #[must_use]
    pub fn new(
        base_title: &str,
        base_cuisine: &str,
        cuisine: &str,
        variant: FusionVariantTag,
        url: String,
    ) -> Self {
        let style = variant.title();
        Self {
            title: format!("{style} - FusionFlavors"),
            text: format!(
                "Check out this amazing {cuisine}-{base_cuisine} fusion recipe: {style}!\n\n\
                 🍽️ Base: {base_title}\n\
                 🌍 Fusion: {cuisine} cuisine\n\
                 ✨ Style: {style}\n\n\
                 Try it yourself:"
            ),
            url,
        }
    }

    /// Text and link together, as copied to a clipboard
    #[must_use]
    pub fn full_content(&self) -> String {
        format!("{}\n\n{}", self.text, self.url)
    }
}

/// A social share intent link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialIntent {
    /// Network name
    pub name: String,
    /// Intent URL
    pub url: String,
}

/// One stage of the share fallback cascade
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ShareTarget {
    /// Platform share sheet
    Native {
        /// Share title
        title: String,
        /// Share text
        text: String,
        /// Share link
        url: String,
    },
    /// Copy to clipboard
    Clipboard {
        /// Content to copy
        content: String,
        /// Confirmation shown after copying
        confirmation: String,
    },
    /// Manual copy, always available
    Manual {
        /// Prompt shown next to the content
        prompt: String,
        /// Content to copy by hand
        content: String,
        /// Social intent links
        intents: Vec<SocialIntent>,
    },
}

/// Ordered share options: native, clipboard, then manual
#[must_use]
pub fn share_cascade(message: &ShareMessage) -> Vec<ShareTarget> {
    vec![
        ShareTarget::Native {
            title: message.title.clone(),
            text: message.text.clone(),
            url: message.url.clone(),
        },
        ShareTarget::Clipboard {
            content: message.full_content(),
            confirmation: messages::COPIED_TO_CLIPBOARD.to_owned(),
        },
        ShareTarget::Manual {
            prompt: messages::MANUAL_COPY_PROMPT.to_owned(),
            content: message.full_content(),
            intents: social_intents(message),
        },
    ]
}

/// WhatsApp, Twitter, Facebook and Email intents for a message
#[must_use]
pub fn social_intents(message: &ShareMessage) -> Vec<SocialIntent> {
    let text = urlencoding::encode(&message.text);
    let url = urlencoding::encode(&message.url);
    let subject = urlencoding::encode(messages::SHARE_EMAIL_SUBJECT);
    [
        ("WhatsApp", format!("https://wa.me/?text={text}%20{url}")),
        (
            "Twitter",
            format!("https://twitter.com/intent/tweet?text={text}&url={url}"),
        ),
        (
            "Facebook",
            format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
        ),
        ("Email", format!("mailto:?subject={subject}&body={text}%20{url}")),
    ]
    .into_iter()
    .map(|(name, url)| SocialIntent {
        name: name.to_owned(),
        url,
    })
    .collect()
}
