mod interval;
mod scheduler;

pub use interval::{IntervalKind, LONG_BREAK_CYCLE};
pub use scheduler::{PendingAction, SessionScheduler, SessionSnapshot};
