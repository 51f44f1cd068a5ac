// ABOUTME: Integration tests for the live cooking session driver under paused tokio time
// ABOUTME: One-second ticks while running only, pause and resume keep remaining time, session end reasons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use fusion_flavors::cooking::{
    derive_steps, run_session, CookCommand, CookServerMessage, CookingSession, SessionEndReason,
    SessionSnapshot, TimerState,
};
use fusion_flavors::store::fallback::fallback_by_title;

use helpers::sample_recipe;

struct Harness {
    commands: mpsc::UnboundedSender<CookCommand>,
    updates: mpsc::UnboundedReceiver<CookServerMessage>,
    task: JoinHandle<SessionEndReason>,
}

impl Harness {
    fn start(session: CookingSession) -> Self {
        let (commands, command_rx) = mpsc::unbounded_channel();
        let (update_tx, updates) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_session(session, command_rx, update_tx));
        Self {
            commands,
            updates,
            task,
        }
    }

    fn send(&self, command: CookCommand) {
        self.commands.send(command).unwrap();
    }

    async fn snapshot(&mut self) -> SessionSnapshot {
        match self.updates.recv().await {
            Some(CookServerMessage::Snapshot { session }) => session,
            other => panic!("Expected snapshot, got {other:?}"),
        }
    }

    async fn assert_quiet_for(&mut self, secs: u64) {
        let waited = tokio::time::timeout(Duration::from_secs(secs), self.updates.recv()).await;
        assert!(waited.is_err(), "Unexpected update: {waited:?}");
    }
}

fn carbonara() -> CookingSession {
    let recipe = fallback_by_title("Spaghetti Carbonara").unwrap();
    CookingSession::new(derive_steps(&recipe, "Mexican")).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_timer_runs_to_finished_and_stops_ticking() {
    let mut harness = Harness::start(carbonara());
    assert_eq!(harness.snapshot().await.current_index, 0);

    harness.send(CookCommand::GoToStep { index: 1 });
    assert_eq!(harness.snapshot().await.current_index, 1);

    harness.send(CookCommand::StartTimer { minutes: None });
    let started = harness.snapshot().await;
    assert_eq!(started.timer.state, TimerState::Running);
    assert_eq!(started.timer.remaining_secs, 420);

    let mut last = started;
    for expected in (0..420).rev() {
        last = harness.snapshot().await;
        assert_eq!(last.timer.remaining_secs, expected);
    }
    assert_eq!(last.timer.state, TimerState::Finished);
    assert_eq!(last.timer.display, "0:00");

    harness.assert_quiet_for(30).await;

    harness.send(CookCommand::Exit);
    assert!(matches!(
        harness.updates.recv().await,
        Some(CookServerMessage::Ended {
            reason: SessionEndReason::Exited
        })
    ));
    assert_eq!(harness.task.await.unwrap(), SessionEndReason::Exited);
}

#[tokio::test(start_paused = true)]
async fn test_pause_and_resume_preserve_remaining_time() {
    let mut harness = Harness::start(carbonara());
    harness.snapshot().await;

    harness.send(CookCommand::StartTimer { minutes: Some(1) });
    assert_eq!(harness.snapshot().await.timer.remaining_secs, 60);
    for _ in 0..10 {
        harness.snapshot().await;
    }

    harness.send(CookCommand::PauseTimer);
    let paused = harness.snapshot().await;
    assert_eq!(paused.timer.state, TimerState::Paused);
    assert_eq!(paused.timer.remaining_secs, 50);

    harness.assert_quiet_for(30).await;

    harness.send(CookCommand::ResumeTimer);
    let resumed = harness.snapshot().await;
    assert_eq!(resumed.timer.state, TimerState::Running);
    assert_eq!(resumed.timer.remaining_secs, 50);
    assert_eq!(harness.snapshot().await.timer.remaining_secs, 49);
}

#[tokio::test(start_paused = true)]
async fn test_step_change_stops_ticks() {
    let mut harness = Harness::start(carbonara());
    harness.snapshot().await;

    harness.send(CookCommand::StartTimer { minutes: Some(2) });
    harness.snapshot().await;
    assert_eq!(harness.snapshot().await.timer.remaining_secs, 119);

    harness.send(CookCommand::Next);
    let moved = harness.snapshot().await;
    assert_eq!(moved.current_index, 1);
    assert_eq!(moved.timer.state, TimerState::Idle);

    harness.assert_quiet_for(10).await;
}

#[tokio::test(start_paused = true)]
async fn test_completing_last_step_ends_session() {
    let recipe = sample_recipe(1, "Two Step Toast", 2);
    let session = CookingSession::new(derive_steps(&recipe, "French")).unwrap();
    let mut harness = Harness::start(session);
    harness.snapshot().await;

    harness.send(CookCommand::MarkComplete);
    let first = harness.snapshot().await;
    assert_eq!(first.current_index, 1);
    assert!(first.is_last_step);

    harness.send(CookCommand::MarkComplete);
    let last = harness.snapshot().await;
    assert_eq!(last.completed, vec![0, 1]);
    assert!(matches!(
        harness.updates.recv().await,
        Some(CookServerMessage::Ended {
            reason: SessionEndReason::Completed
        })
    ));
    assert_eq!(harness.task.await.unwrap(), SessionEndReason::Completed);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_client_discards_session() {
    let mut harness = Harness::start(carbonara());
    harness.snapshot().await;
    harness.send(CookCommand::StartTimer { minutes: Some(5) });
    harness.snapshot().await;

    drop(harness.commands);
    assert!(matches!(
        harness.updates.recv().await,
        Some(CookServerMessage::Ended {
            reason: SessionEndReason::Disconnected
        })
    ));
    assert_eq!(harness.task.await.unwrap(), SessionEndReason::Disconnected);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_navigation_still_reports_state() {
    let mut harness = Harness::start(carbonara());
    harness.snapshot().await;

    harness.send(CookCommand::GoToStep { index: 10 });
    assert_eq!(harness.snapshot().await.current_index, 0);
    harness.send(CookCommand::Previous);
    assert_eq!(harness.snapshot().await.current_index, 0);
}
