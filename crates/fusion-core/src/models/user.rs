// ABOUTME: Authenticated user handle issued by the identity provider
// ABOUTME: Includes display name resolution from provider metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque authenticated-user handle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Provider-issued user id
    pub id: String,
    /// Account email
    pub email: String,
    /// Name shown in the UI
    pub display_name: String,
}

/// Resolve a display name: `full_name`, then `name`, then the email local part, then "User"
#[must_use]
pub fn resolve_display_name(metadata: Option<&Value>, email: Option<&str>) -> String {
    let from_metadata = |key: &str| {
        metadata
            .and_then(|meta| meta.get(key))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToOwned::to_owned)
    };

    from_metadata("full_name")
        .or_else(|| from_metadata("name"))
        .or_else(|| {
            email
                .and_then(|address| address.split('@').next())
                .filter(|local| !local.is_empty())
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| "User".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_name_precedence() {
        let meta = json!({ "full_name": "Ada Lovelace", "name": "ada" });
        assert_eq!(resolve_display_name(Some(&meta), Some("a@b.c")), "Ada Lovelace");

        let meta = json!({ "name": "ada" });
        assert_eq!(resolve_display_name(Some(&meta), Some("a@b.c")), "ada");

        assert_eq!(resolve_display_name(None, Some("chef@example.com")), "chef");
        assert_eq!(resolve_display_name(None, None), "User");
    }

    #[test]
    fn test_blank_metadata_is_skipped() {
        let meta = json!({ "full_name": "  " });
        assert_eq!(resolve_display_name(Some(&meta), Some("cook@x.io")), "cook");
    }
}
