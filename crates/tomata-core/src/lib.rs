//! # Tomata Core Library
//!
//! Core logic for the Tomata Pomodoro timer: a session scheduler that
//! alternates work and break intervals, counts down each one, and tracks
//! completed pomodoros against a user-chosen target.
//!
//! ## Architecture
//!
//! - **Session scheduler**: a tick-driven state machine with a single
//!   cancelable pending-action slot; the host fires pending work one
//!   second after it is recorded
//! - **Directives**: every operation returns display instructions instead
//!   of touching a widget; any rendering technology can sit behind the
//!   [`DisplaySurface`] trait
//! - **Runner**: a tokio host loop that serializes timer ticks and user
//!   commands onto one task
//! - **Config**: TOML-based interval durations and default target
//!
//! ## Key Components
//!
//! - [`SessionScheduler`]: the state machine
//! - [`Directive`] / [`DisplaySurface`]: the rendering boundary
//! - [`SessionRunner`]: async host loop
//! - [`SessionConfig`]: durations and default target

pub mod config;
pub mod directive;
pub mod display;
pub mod error;
pub mod runner;
pub mod session;

pub use config::SessionConfig;
pub use directive::Directive;
pub use display::{DisplaySurface, RecordingDisplay};
pub use error::{ConfigError, CoreError};
pub use runner::{Command, SessionRunner, TICK_INTERVAL};
pub use session::{IntervalKind, PendingAction, SessionScheduler, SessionSnapshot};
