//! Async host loop for the session scheduler.
//!
//! The scheduler itself never sleeps; it records pending work and expects
//! the host to fire it one second later. `SessionRunner` is that host: a
//! tokio task that races the one-second deadline against a command channel,
//! so user commands and timer ticks are serialized on one task and a
//! cancelled tick can never fire (stop/reset clear the pending slot before
//! the deadline is re-armed).

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use crate::display::DisplaySurface;
use crate::session::SessionScheduler;

/// Delay between scheduled fires: the countdown granularity.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// User actions forwarded into the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    /// Abandon the current interval and start the next one.
    Next,
    Reset,
    SetTargetInput(String),
    /// Stop the runner immediately, even mid-countdown.
    Shutdown,
}

/// Drives a [`SessionScheduler`] with wall-clock ticks and user commands,
/// applying every emitted directive to the display surface.
pub struct SessionRunner<D: DisplaySurface> {
    scheduler: SessionScheduler,
    display: D,
    commands: mpsc::Receiver<Command>,
}

impl<D: DisplaySurface> SessionRunner<D> {
    pub fn new(scheduler: SessionScheduler, display: D, commands: mpsc::Receiver<Command>) -> Self {
        Self {
            scheduler,
            display,
            commands,
        }
    }

    pub fn scheduler(&self) -> &SessionScheduler {
        &self.scheduler
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Run until the command channel closes and the scheduler goes
    /// quiescent, then hand the runner back for inspection.
    pub async fn run(mut self) -> Self {
        let mut deadline: Option<Instant> = None;
        let mut commands_closed = false;

        loop {
            match self.scheduler.pending() {
                Some(_) if !commands_closed => {
                    let at = *deadline.get_or_insert_with(|| Instant::now() + TICK_INTERVAL);
                    tokio::select! {
                        command = self.commands.recv() => match command {
                            Some(Command::Shutdown) => break,
                            Some(command) => {
                                let before = self.scheduler.pending();
                                self.handle(command);
                                if self.scheduler.pending() != before {
                                    deadline = None;
                                }
                            }
                            None => commands_closed = true,
                        },
                        _ = sleep_until(at) => {
                            deadline = None;
                            let directives = self.scheduler.fire_pending();
                            self.display.apply_all(&directives);
                        }
                    }
                }
                Some(_) => {
                    // Input is gone; let the session run out on its own.
                    let at = *deadline.get_or_insert_with(|| Instant::now() + TICK_INTERVAL);
                    sleep_until(at).await;
                    deadline = None;
                    let directives = self.scheduler.fire_pending();
                    self.display.apply_all(&directives);
                }
                None if commands_closed => break,
                None => {
                    deadline = None;
                    match self.commands.recv().await {
                        Some(Command::Shutdown) => break,
                        Some(command) => self.handle(command),
                        None => commands_closed = true,
                    }
                }
            }
        }
        self
    }

    fn handle(&mut self, command: Command) {
        let directives = match command {
            Command::Start => self.scheduler.start(),
            Command::Stop => self.scheduler.stop(),
            Command::Next => self.scheduler.next(),
            Command::Reset => self.scheduler.reset(),
            Command::SetTargetInput(text) => {
                self.scheduler.set_target_input(text);
                Vec::new()
            }
            // Handled by the run loop before dispatch.
            Command::Shutdown => Vec::new(),
        };
        self.display.apply_all(&directives);
    }
}
