// ABOUTME: Fusion module: cuisine picker, variant presenter and shared-recipe view
// ABOUTME: All fusion content is static and selected by lookup, never generated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

//! Fusion cuisine picker and variant presentation

/// Picker cuisine list and validation
pub mod cuisines;
/// Shared-recipe view
pub mod shared;
/// Variant content and fused headers
pub mod variants;

pub use cuisines::{picker_cuisines, select_cuisine, PickerCuisine};
pub use shared::{shared_view, SharedRecipeView};
pub use variants::{fused_header, variants_for, FusedHeader, FusionVariant};
