//! Session scheduler implementation.
//!
//! The scheduler is a tick-driven state machine. It has no internal
//! threads and never sleeps -- whenever it wants to run again it records a
//! [`PendingAction`] and the host fires it one second later via
//! [`SessionScheduler::fire_pending`]. Because the pending slot is a single
//! `Option`, at most one scheduled callback exists at any time, and
//! `stop()`/`reset()` cancel it by clearing the slot.
//!
//! ## Interval sequencing
//!
//! ```text
//! Idle --start--> Work(1) --expire--> Break(2) --auto-start--> Work(3) ...
//!                 Work(7) --expire--> LongBreak(8) --auto-start--> Work(9)
//! ```
//!
//! Work intervals are odd repetition counts; every fourth break (count
//! divisible by 8) is a long break. The cycle halts once the pomodoro
//! target is reached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::interval::IntervalKind;
use crate::config::SessionConfig;
use crate::directive::Directive;

/// Scheduled work the host owes the scheduler, due one second from when it
/// was recorded. `stop()` and `reset()` cancel it before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingAction {
    /// Continue the countdown.
    Tick,
    /// Begin the next interval after one expires.
    AutoStart,
}

/// Point-in-time view of the scheduler, for status output and tests.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub repetition_count: u64,
    pub interval_kind: Option<IntervalKind>,
    pub remaining_secs: u64,
    pub total_secs: u64,
    pub running: bool,
    pub target: Option<u32>,
    pub completed: u32,
    pub time_text: String,
    pub at: DateTime<Utc>,
}

/// The Pomodoro session state machine.
///
/// Owns every piece of timer state; all mutation goes through its methods
/// and every method returns the display directives the change produced.
#[derive(Debug, Clone)]
pub struct SessionScheduler {
    config: SessionConfig,
    /// Counts every interval started, work and break alike.
    repetition_count: u64,
    remaining_secs: u64,
    total_secs: u64,
    running: bool,
    /// Set lazily from the target input at first start, cleared by reset.
    target: Option<u32>,
    completed: u32,
    /// Raw target input text, parsed and locked at first start.
    target_input: String,
    pending: Option<PendingAction>,
}

impl SessionScheduler {
    pub fn new(config: SessionConfig) -> Self {
        let target_input = config.default_target.to_string();
        Self {
            config,
            repetition_count: 0,
            remaining_secs: 0,
            total_secs: 0,
            running: false,
            target: None,
            completed: 0,
            target_input,
            pending: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn repetition_count(&self) -> u64 {
        self.repetition_count
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn target(&self) -> Option<u32> {
        self.target
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Kind of the active (or most recently started) interval. `None`
    /// before the first start and after a reset.
    pub fn interval_kind(&self) -> Option<IntervalKind> {
        IntervalKind::from_repetition(self.repetition_count)
    }

    /// Scheduled work due in one second, if any.
    pub fn pending(&self) -> Option<PendingAction> {
        self.pending
    }

    /// Fraction of the current interval remaining, in `[0, 1]`.
    pub fn arc_fraction(&self) -> f64 {
        if self.total_secs == 0 {
            return 0.0;
        }
        self.remaining_secs as f64 / self.total_secs as f64
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            repetition_count: self.repetition_count,
            interval_kind: self.interval_kind(),
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs,
            running: self.running,
            target: self.target,
            completed: self.completed,
            time_text: format_time(self.remaining_secs),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the raw target input. Ignored once the target has been
    /// locked in by the first start.
    pub fn set_target_input(&mut self, text: impl Into<String>) {
        if self.target.is_none() {
            self.target_input = text.into();
        }
    }

    /// Begin the next interval in the sequence.
    ///
    /// No-op while a countdown is running. The first call parses and locks
    /// the target input; once the target has been met, further calls only
    /// re-announce the congratulations.
    pub fn start(&mut self) -> Vec<Directive> {
        if self.running {
            return Vec::new();
        }
        let mut directives = Vec::new();

        let target = match self.target {
            Some(t) => t,
            None => {
                let t = parse_target(&self.target_input);
                self.target = Some(t);
                directives.push(Directive::SetProgress {
                    value: self.completed,
                    maximum: t,
                });
                directives.push(Directive::LockTargetInput);
                t
            }
        };

        if self.completed >= target {
            self.pending = None;
            directives.push(Directive::ShowAlert {
                message: congratulations(target),
            });
            return directives;
        }

        self.repetition_count += 1;
        let kind = IntervalKind::from_repetition(self.repetition_count)
            .unwrap_or(IntervalKind::Work);
        self.total_secs = self.config.duration_secs(kind);
        self.remaining_secs = self.total_secs;

        directives.push(Directive::PlayStartSound);
        directives.push(Directive::SetIntervalLabel { kind });
        // Render the first countdown frame immediately; the arc shows a
        // full circle at interval start.
        directives.extend(self.tick());
        directives
    }

    /// Advance the countdown by one second, or finish the interval.
    ///
    /// Fired by the host once per second while a countdown is active.
    /// No-op when no interval has been started.
    pub fn tick(&mut self) -> Vec<Directive> {
        let Some(kind) = self.interval_kind() else {
            return Vec::new();
        };

        let mut directives = vec![
            Directive::SetTimeText {
                text: format_time(self.remaining_secs),
            },
            Directive::SetArcFraction {
                fraction: self.arc_fraction(),
            },
        ];

        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            self.running = true;
            self.pending = Some(PendingAction::Tick);
            return directives;
        }

        // Interval expired.
        self.running = false;
        self.pending = None;
        directives.push(Directive::PlayEndSound);
        directives.push(Directive::ShowAlert {
            message: "Time's up!".to_string(),
        });

        if kind.is_work() {
            self.completed += 1;
            let maximum = self.target.unwrap_or(1);
            directives.push(Directive::SetProgress {
                value: self.completed,
                maximum,
            });
            directives.push(Directive::SetCheckmarks {
                count: self.completed,
            });
            if self.completed >= maximum {
                directives.push(Directive::ShowAlert {
                    message: congratulations(self.completed),
                });
                return directives;
            }
        }

        self.pending = Some(PendingAction::AutoStart);
        directives
    }

    /// Halt the countdown in place, cancelling any pending tick or
    /// auto-start. Counts and remaining time are left untouched.
    ///
    /// Note: a subsequent `start()` begins the *next* interval in the
    /// sequence rather than resuming the frozen one.
    pub fn stop(&mut self) -> Vec<Directive> {
        if self.running || self.pending.is_some() {
            self.running = false;
            self.pending = None;
        }
        Vec::new()
    }

    /// Abandon the current interval and begin the next one immediately.
    pub fn next(&mut self) -> Vec<Directive> {
        self.running = false;
        self.pending = None;
        self.start()
    }

    /// Cancel everything and restore the construction-time state.
    pub fn reset(&mut self) -> Vec<Directive> {
        self.pending = None;
        self.repetition_count = 0;
        self.remaining_secs = 0;
        self.total_secs = 0;
        self.running = false;
        self.target = None;
        self.completed = 0;
        self.target_input = self.config.default_target.to_string();

        vec![
            Directive::SetTimeText {
                text: format_time(self.config.duration_secs(IntervalKind::Work)),
            },
            Directive::SetArcFraction { fraction: 1.0 },
            Directive::ClearIntervalLabel,
            Directive::SetCheckmarks { count: 0 },
            Directive::SetProgress {
                value: 0,
                maximum: 1,
            },
            Directive::UnlockAndResetTargetInput {
                default_text: self.target_input.clone(),
            },
        ]
    }

    /// Execute the scheduled action once its one-second delay has elapsed.
    pub fn fire_pending(&mut self) -> Vec<Directive> {
        match self.pending.take() {
            Some(PendingAction::Tick) => self.tick(),
            Some(PendingAction::AutoStart) => self.start(),
            None => Vec::new(),
        }
    }
}

/// Parse the raw target input: clamp to a minimum of 1, fall back to 1 on
/// anything non-numeric. Never fails.
fn parse_target(text: &str) -> u32 {
    match text.trim().parse::<i64>() {
        Ok(value) if value >= 1 => value.min(i64::from(u32::MAX)) as u32,
        _ => 1,
    }
}

fn format_time(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn congratulations(count: u32) -> String {
    format!("Congratulations! You completed {count} Pomodoros!")
}
