// ABOUTME: Fusion cuisine picker backed by a fixed list of eight cuisines
// ABOUTME: Selection is validated case-insensitively and canonicalized to the list's spelling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use serde::Serialize;

use fusion_core::constants::cuisines::PICKER;
use fusion_core::errors::{AppError, AppResult};

/// A cuisine offered by the picker
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PickerCuisine {
    /// Cuisine name
    pub name: &'static str,
    /// Flag emoji
    pub flag: &'static str,
}

/// All picker cuisines in display order
#[must_use]
pub fn picker_cuisines() -> Vec<PickerCuisine> {
    PICKER
        .iter()
        .map(|&(name, flag)| PickerCuisine { name, flag })
        .collect()
}

/// Validate a picked cuisine and return its canonical name
///
/// # Errors
///
/// Returns an invalid-input error when `name` is not one of the picker cuisines
pub fn select_cuisine(name: &str) -> AppResult<&'static str> {
    let wanted = name.trim();
    PICKER
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(wanted))
        .map(|&(candidate, _)| candidate)
        .ok_or_else(|| {
            AppError::invalid_input(format!(
                "Unknown fusion cuisine '{wanted}'. Choose one of: {}",
                PICKER
                    .iter()
                    .map(|(candidate, _)| *candidate)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_lists_eight_cuisines_in_order() {
        let names: Vec<&str> = picker_cuisines().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["Italian", "Japanese", "Mexican", "Indian", "French", "Thai", "Chinese", "Korean"]
        );
    }

    #[test]
    fn test_select_is_case_insensitive() {
        assert_eq!(select_cuisine(" japanese ").unwrap(), "Japanese");
    }

    #[test]
    fn test_unknown_cuisine_rejected() {
        let err = select_cuisine("Martian").unwrap_err();
        assert!(err.message.contains("Martian"));
    }
}
