// ABOUTME: Guided cooking module: step timer, session state machine, step derivation, live driver
// ABOUTME: Builds a cooking plan from a base recipe and a fusion selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

//! Guided cooking

/// Live session driver fed by client commands
pub mod live;
/// Session state machine
pub mod session;
/// Step-list derivation
pub mod steps;
/// Per-step countdown timer
pub mod timer;

use serde::{Deserialize, Serialize};

use fusion_core::errors::AppResult;
use fusion_core::models::{FusionSelection, Recipe};

use crate::fusion::variants::{fused_header, FusedHeader};

pub use live::{run_session, CookCommand, CookServerMessage, SessionEndReason};
pub use session::{CookingSession, SessionSnapshot, TimerSnapshot};
pub use steps::{derive_steps, CookingStep};
pub use timer::{format_clock, StepTimer, TimerState};

/// Everything a guided-cook view needs before the first step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookingPlan {
    /// Selection the plan was built from
    pub selection: FusionSelection,
    /// Fused recipe header
    pub header: FusedHeader,
    /// Ordered steps
    pub steps: Vec<CookingStep>,
}

impl CookingPlan {
    /// Derive the plan for `recipe` under `selection`
    #[must_use]
    pub fn new(recipe: &Recipe, selection: FusionSelection) -> Self {
        Self {
            header: fused_header(recipe, &selection.cuisine, selection.variant),
            steps: derive_steps(recipe, &selection.cuisine),
            selection,
        }
    }

    /// Start a session over this plan's steps
    ///
    /// # Errors
    ///
    /// Returns an error if the plan has no steps
    pub fn start_session(&self) -> AppResult<CookingSession> {
        CookingSession::new(self.steps.clone())
    }
}
