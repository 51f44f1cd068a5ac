// ABOUTME: Guided cooking session state machine with step navigation and completion tracking
// ABOUTME: Every step change resets the step timer; invalid navigation is a silent no-op
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

//! # Guided Cooking Session
//!
//! Owns an ordered, immutable list of [`CookingStep`]s, a current-step pointer,
//! the set of completed step indices and the current step's [`StepTimer`].
//!
//! Completion is independent of traversal order: a cook may jump ahead and mark
//! a later step done while earlier ones are still open. Progress is reported
//! from the current index, not from the completed set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use fusion_core::errors::{AppError, AppResult};

use super::steps::CookingStep;
use super::timer::{StepTimer, TimerState};

/// Label of the primary action on any step but the last
pub const MARK_AS_DONE: &str = "Mark as Done";
/// Label of the primary action on the last step
pub const COMPLETE_RECIPE: &str = "Complete Recipe!";

/// Live state of one guided cooking walkthrough
#[derive(Debug, Clone)]
pub struct CookingSession {
    steps: Vec<CookingStep>,
    current: usize,
    completed: BTreeSet<usize>,
    timer: StepTimer,
}

impl CookingSession {
    /// Start a session at step 0 with an idle timer
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is empty
    pub fn new(steps: Vec<CookingStep>) -> AppResult<Self> {
        if steps.is_empty() {
            return Err(AppError::invalid_input(
                "A cooking session needs at least one step",
            ));
        }
        Ok(Self {
            steps,
            current: 0,
            completed: BTreeSet::new(),
            timer: StepTimer::new(),
        })
    }

    /// All steps in order
    #[must_use]
    pub fn steps(&self) -> &[CookingStep] {
        &self.steps
    }

    /// Number of steps
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Index of the current step
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// The current step
    #[must_use]
    pub fn current_step(&self) -> &CookingStep {
        &self.steps[self.current]
    }

    /// Completed step indices in ascending order
    #[must_use]
    pub const fn completed(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    /// The current step's timer
    #[must_use]
    pub const fn timer(&self) -> &StepTimer {
        &self.timer
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    ///
    /// Returns `true` when the step changed hands (including re-selecting the current step).
    pub fn go_to_step(&mut self, index: usize) -> bool {
        if index >= self.steps.len() {
            return false;
        }
        self.current = index;
        self.timer.reset();
        true
    }

    /// Move to the following step, no-op on the last step
    pub fn next(&mut self) -> bool {
        self.go_to_step(self.current + 1)
    }

    /// Move to the preceding step, no-op on the first step
    pub fn previous(&mut self) -> bool {
        self.current
            .checked_sub(1)
            .is_some_and(|index| self.go_to_step(index))
    }

    /// Mark the current step done and advance by one unless it is the last step
    pub fn mark_complete(&mut self) {
        self.completed.insert(self.current);
        if self.current + 1 < self.steps.len() {
            self.current += 1;
        }
        self.timer.reset();
    }

    /// Start the timer with the current step's suggested duration, if it has one
    pub fn start_timer(&mut self) {
        if let Some(minutes) = self.current_step().duration_minutes {
            self.timer.start(minutes);
        }
    }

    /// Start the timer with an explicit duration
    pub fn start_timer_minutes(&mut self, minutes: u32) {
        self.timer.start(minutes);
    }

    /// Pause a running timer
    pub fn pause_timer(&mut self) {
        self.timer.pause();
    }

    /// Resume a paused timer
    pub fn resume_timer(&mut self) {
        self.timer.resume();
    }

    /// Return the timer to idle
    pub fn reset_timer(&mut self) {
        self.timer.reset();
    }

    /// Apply one elapsed second to the timer
    pub fn tick(&mut self) -> bool {
        self.timer.tick()
    }

    /// Whether the current step is the first
    #[must_use]
    pub const fn is_first_step(&self) -> bool {
        self.current == 0
    }

    /// Whether the current step is the last
    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    /// Number of completed steps
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// `(current + 1) / step_count`
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        (self.current + 1) as f64 / self.steps.len() as f64
    }

    /// The last step has been marked done; there is nowhere further to go
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_last_step() && self.completed.contains(&self.current)
    }

    /// Label for the primary action button
    #[must_use]
    pub fn primary_action_label(&self) -> &'static str {
        if self.is_last_step() {
            COMPLETE_RECIPE
        } else {
            MARK_AS_DONE
        }
    }

    /// Serializable view of the whole session
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_index: self.current,
            step_count: self.steps.len(),
            step: self.current_step().clone(),
            completed: self.completed.iter().copied().collect(),
            completed_count: self.completed_count(),
            progress_fraction: self.progress_fraction(),
            is_first_step: self.is_first_step(),
            is_last_step: self.is_last_step(),
            primary_action: self.primary_action_label().to_owned(),
            timer: TimerSnapshot {
                state: self.timer.state(),
                remaining_secs: self.timer.remaining_secs(),
                started_with_secs: self.timer.started_with_secs(),
                display: self.timer.display(),
            },
        }
    }
}

/// Serializable session state sent to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    /// Index of the current step
    pub current_index: usize,
    /// Total number of steps
    pub step_count: usize,
    /// The current step
    pub step: CookingStep,
    /// Completed indices, ascending
    pub completed: Vec<usize>,
    /// Number of completed steps
    pub completed_count: usize,
    /// `(current + 1) / step_count`
    pub progress_fraction: f64,
    /// Current step is the first
    pub is_first_step: bool,
    /// Current step is the last
    pub is_last_step: bool,
    /// "Mark as Done" or "Complete Recipe!"
    pub primary_action: String,
    /// Timer view
    pub timer: TimerSnapshot,
}

/// Serializable timer state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimerSnapshot {
    /// Countdown state
    pub state: TimerState,
    /// Seconds left
    pub remaining_secs: u32,
    /// Seconds the countdown started with
    pub started_with_secs: u32,
    /// Remaining time as `m:ss`
    pub display: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(n: usize) -> Vec<CookingStep> {
        (0..n)
            .map(|position| CookingStep {
                position,
                instruction: format!("Step {position}"),
                duration_minutes: (position % 2 == 1).then_some(2),
                tip: None,
            })
            .collect()
    }

    #[test]
    fn test_empty_step_list_is_rejected() {
        assert!(CookingSession::new(Vec::new()).is_err());
    }

    #[test]
    fn test_previous_is_noop_on_first_step() {
        let mut session = CookingSession::new(steps(3)).unwrap();
        assert!(!session.previous());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_next_is_noop_on_last_step() {
        let mut session = CookingSession::new(steps(3)).unwrap();
        session.go_to_step(2);
        assert!(!session.next());
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn test_start_timer_without_duration_stays_idle() {
        let mut session = CookingSession::new(steps(3)).unwrap();
        session.start_timer();
        assert_eq!(session.timer().state(), TimerState::Idle);
        session.next();
        session.start_timer();
        assert_eq!(session.timer().remaining_secs(), 120);
    }

    #[test]
    fn test_primary_action_label_on_last_step() {
        let mut session = CookingSession::new(steps(2)).unwrap();
        assert_eq!(session.primary_action_label(), MARK_AS_DONE);
        session.next();
        assert_eq!(session.primary_action_label(), COMPLETE_RECIPE);
    }

    #[test]
    fn test_finishing_last_step_keeps_index() {
        let mut session = CookingSession::new(steps(2)).unwrap();
        session.mark_complete();
        session.mark_complete();
        assert_eq!(session.current_index(), 1);
        assert!(session.is_finished());
        assert_eq!(session.completed_count(), 2);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = CookingSession::new(steps(4)).unwrap();
        session.go_to_step(1);
        session.start_timer();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.current_index, 1);
        assert!((snapshot.progress_fraction - 0.5).abs() < f64::EPSILON);
        assert_eq!(snapshot.timer.state, TimerState::Running);
        assert_eq!(snapshot.timer.display, "2:00");
    }
}
