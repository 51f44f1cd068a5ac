// ABOUTME: Drives a cooking session from client commands and a one-second ticker
// ABOUTME: The ticker exists only while the timer is running and dies with the session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

//! Live guided cooking
//!
//! [`run_session`] owns a [`CookingSession`] for the lifetime of one client
//! connection. Commands arrive on an mpsc receiver; every applied command and
//! every tick produces a [`CookServerMessage::Snapshot`]. The interval is created
//! when the timer enters `Running` and dropped on any transition out of it, so
//! no tick can reach a paused, reset or discarded session.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

use super::session::{CookingSession, SessionSnapshot};

/// Commands a client can send over the live connection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CookCommand {
    /// Jump to a step
    GoToStep {
        /// Target index
        index: usize,
    },
    /// Following step
    Next,
    /// Preceding step
    Previous,
    /// Mark the current step done
    MarkComplete,
    /// Start the timer, with the step's suggested duration unless `minutes` is given
    StartTimer {
        /// Explicit duration
        #[serde(default)]
        minutes: Option<u32>,
    },
    /// Pause a running timer
    PauseTimer,
    /// Resume a paused timer
    ResumeTimer,
    /// Reset the timer to idle
    ResetTimer,
    /// Leave guided-cook mode
    Exit,
}

/// Why a live session ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionEndReason {
    /// The last step was marked done
    Completed,
    /// The client asked to exit
    Exited,
    /// The client went away
    Disconnected,
}

/// Messages sent to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CookServerMessage {
    /// Full session state
    Snapshot {
        /// Session view
        session: SessionSnapshot,
    },
    /// The session is over and has been discarded
    Ended {
        /// Cause
        reason: SessionEndReason,
    },
    /// A client message could not be understood
    Error {
        /// Description
        message: String,
    },
}

impl CookServerMessage {
    fn snapshot(session: &CookingSession) -> Self {
        Self::Snapshot {
            session: session.snapshot(),
        }
    }
}

/// Apply a command. Returns `true` when the command ends the session.
fn apply(session: &mut CookingSession, command: CookCommand) -> bool {
    match command {
        CookCommand::GoToStep { index } => {
            session.go_to_step(index);
        }
        CookCommand::Next => {
            session.next();
        }
        CookCommand::Previous => {
            session.previous();
        }
        CookCommand::MarkComplete => {
            let was_last = session.is_last_step();
            session.mark_complete();
            return was_last;
        }
        CookCommand::StartTimer { minutes: Some(minutes) } => session.start_timer_minutes(minutes),
        CookCommand::StartTimer { minutes: None } => session.start_timer(),
        CookCommand::PauseTimer => session.pause_timer(),
        CookCommand::ResumeTimer => session.resume_timer(),
        CookCommand::ResetTimer => session.reset_timer(),
        CookCommand::Exit => return true,
    }
    false
}

fn one_second_ticker() -> Interval {
    let period = Duration::from_secs(1);
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Keep the ticker alive exactly while the timer runs
fn sync_ticker(session: &CookingSession, ticker: &mut Option<Interval>) {
    match (session.timer().is_running(), ticker.is_some()) {
        (true, false) => *ticker = Some(one_second_ticker()),
        (false, true) => *ticker = None,
        _ => {}
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

/// Run a session until it completes, the client exits, or either channel closes.
///
/// An initial snapshot is sent before any command is read.
pub async fn run_session(
    mut session: CookingSession,
    mut commands: mpsc::UnboundedReceiver<CookCommand>,
    updates: mpsc::UnboundedSender<CookServerMessage>,
) -> SessionEndReason {
    let mut ticker: Option<Interval> = None;

    if updates.send(CookServerMessage::snapshot(&session)).is_err() {
        return SessionEndReason::Disconnected;
    }

    let reason = loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    break SessionEndReason::Disconnected;
                };
                debug!(?command, step = session.current_index(), "Cooking command");
                let exiting = matches!(command, CookCommand::Exit);
                let ends = apply(&mut session, command);
                sync_ticker(&session, &mut ticker);
                if exiting {
                    break SessionEndReason::Exited;
                }
                if updates.send(CookServerMessage::snapshot(&session)).is_err() {
                    break SessionEndReason::Disconnected;
                }
                if ends {
                    break SessionEndReason::Completed;
                }
            }
            () = next_tick(&mut ticker), if ticker.is_some() => {
                session.tick();
                sync_ticker(&session, &mut ticker);
                if updates.send(CookServerMessage::snapshot(&session)).is_err() {
                    break SessionEndReason::Disconnected;
                }
            }
        }
    };

    drop(ticker);
    // Best effort: the client may already be gone
    let _ = updates.send(CookServerMessage::Ended { reason });
    info!(
        ?reason,
        completed = session.completed_count(),
        steps = session.step_count(),
        "Guided cooking session ended"
    );
    reason
}
