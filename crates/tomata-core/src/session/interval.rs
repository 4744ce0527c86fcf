use serde::{Deserialize, Serialize};

/// How often a long break comes around: every 4th break, i.e. every 8th
/// interval in the work/break sequence.
pub const LONG_BREAK_CYCLE: u64 = 8;

/// The three kinds of timed interval in a Pomodoro cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalKind {
    Work,
    ShortBreak,
    LongBreak,
}

impl IntervalKind {
    /// Derive the interval kind from the repetition count.
    ///
    /// The repetition count is incremented every time any interval starts,
    /// so odd counts are work intervals and even counts are breaks. Every
    /// fourth break (count divisible by 8) is a long break.
    ///
    /// Returns `None` for count 0 (no interval has started yet).
    pub fn from_repetition(count: u64) -> Option<Self> {
        if count == 0 {
            None
        } else if count % 2 == 1 {
            Some(IntervalKind::Work)
        } else if count % LONG_BREAK_CYCLE == 0 {
            Some(IntervalKind::LongBreak)
        } else {
            Some(IntervalKind::ShortBreak)
        }
    }

    /// Human-readable label shown next to the countdown.
    pub fn label(&self) -> &'static str {
        match self {
            IntervalKind::Work => "Work",
            IntervalKind::ShortBreak => "Break",
            IntervalKind::LongBreak => "Long Break",
        }
    }

    pub fn is_work(&self) -> bool {
        matches!(self, IntervalKind::Work)
    }
}
