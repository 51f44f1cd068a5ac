// ABOUTME: Per-step countdown timer with idle, running, paused and finished states
// ABOUTME: Ticks only while running and never carries over between cooking steps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use serde::{Deserialize, Serialize};

/// Countdown state of the current step's timer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimerState {
    /// No countdown started for the current step
    #[default]
    Idle,
    /// Counting down once per second
    Running,
    /// Countdown suspended, remaining time preserved
    Paused,
    /// Reached zero
    Finished,
}

/// Countdown timer attached to the current cooking step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepTimer {
    state: TimerState,
    remaining_secs: u32,
    started_with_secs: u32,
}

impl StepTimer {
    /// A fresh idle timer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Seconds left on the countdown
    #[must_use]
    pub const fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Seconds the countdown was started with
    #[must_use]
    pub const fn started_with_secs(&self) -> u32 {
        self.started_with_secs
    }

    /// Whether ticks currently apply
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running)
    }

    /// Start counting down from `duration_minutes`.
    ///
    /// Only an idle or finished timer can be started; a zero duration is ignored.
    pub fn start(&mut self, duration_minutes: u32) {
        if duration_minutes == 0 || !matches!(self.state, TimerState::Idle | TimerState::Finished)
        {
            return;
        }
        let secs = duration_minutes.saturating_mul(60);
        self.state = TimerState::Running;
        self.remaining_secs = secs;
        self.started_with_secs = secs;
    }

    /// Running -> Paused, no-op otherwise
    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
        }
    }

    /// Paused -> Running, no-op otherwise
    pub fn resume(&mut self) {
        if self.state == TimerState::Paused {
            self.state = TimerState::Running;
        }
    }

    /// Any state -> Idle with nothing remaining
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply one elapsed second. Returns `true` when the tick was applied.
    pub fn tick(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = TimerState::Finished;
        }
        true
    }

    /// Remaining time as `m:ss`
    #[must_use]
    pub fn display(&self) -> String {
        format_clock(self.remaining_secs)
    }
}

/// Format seconds as `m:ss`
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
