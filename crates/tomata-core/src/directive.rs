use serde::{Deserialize, Serialize};

use crate::session::IntervalKind;

/// A display instruction emitted by the scheduler.
///
/// The scheduler never touches a widget; every state change produces a
/// batch of directives, and whatever display surface the host wires up
/// applies them. Directives are push-only and carry no reply channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Directive {
    /// Countdown text, always zero-padded `MM:SS`.
    SetTimeText { text: String },
    /// Fraction of the current interval remaining, in `[0, 1]`.
    SetArcFraction { fraction: f64 },
    /// Label the active interval. Color/font choices belong to the surface.
    SetIntervalLabel { kind: IntervalKind },
    /// Restore the idle label (no interval active).
    ClearIntervalLabel,
    PlayStartSound,
    PlayEndSound,
    /// Modal "time's up" / "target reached" notification.
    ShowAlert { message: String },
    /// Pomodoros completed out of the session target.
    SetProgress { value: u32, maximum: u32 },
    SetCheckmarks { count: u32 },
    /// The target input is consumed at first start and locked thereafter.
    LockTargetInput,
    UnlockAndResetTargetInput { default_text: String },
}
