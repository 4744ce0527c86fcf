//! Terminal display surface.
//!
//! Applies the scheduler's directives to stdout. Two modes: a human
//! rendering (countdown bar redrawn in place, BEL for the sound cues) and
//! a `--json` mode that prints one serialized directive per line for
//! machine consumption.

use std::io::Write;

use chrono::Local;
use tomata_core::{Directive, DisplaySurface, IntervalKind};

const BAR_WIDTH: usize = 20;

fn kind_color(kind: IntervalKind) -> &'static str {
    match kind {
        IntervalKind::Work => "\x1b[32m",       // green
        IntervalKind::ShortBreak => "\x1b[35m", // pink-ish
        IntervalKind::LongBreak => "\x1b[31m",  // red
    }
}

pub struct TermDisplay {
    json: bool,
    /// Last countdown text, redrawn together with the arc bar.
    time_text: String,
}

impl TermDisplay {
    pub fn new(json: bool) -> Self {
        Self {
            json,
            time_text: String::new(),
        }
    }

    fn redraw_countdown(&self, fraction: f64) {
        let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
        let bar: String = "#".repeat(filled) + &"-".repeat(BAR_WIDTH - filled);
        let mut out = std::io::stdout();
        let _ = write!(out, "\r  [{bar}] {}  ", self.time_text);
        let _ = out.flush();
    }

    fn ring_bell(&self) {
        // Audio is best-effort; a terminal without a bell just stays quiet.
        let mut out = std::io::stdout();
        let _ = write!(out, "\x07");
        let _ = out.flush();
    }
}

impl DisplaySurface for TermDisplay {
    fn apply(&mut self, directive: &Directive) {
        if self.json {
            if let Ok(line) = serde_json::to_string(directive) {
                println!("{line}");
            }
            return;
        }

        match directive {
            Directive::SetTimeText { text } => {
                self.time_text = text.clone();
            }
            Directive::SetArcFraction { fraction } => {
                self.redraw_countdown(*fraction);
            }
            Directive::SetIntervalLabel { kind } => {
                println!("\n{}== {} ==\x1b[0m", kind_color(*kind), kind.label());
            }
            Directive::ClearIntervalLabel => {
                println!("\n== Timer ==");
            }
            Directive::PlayStartSound | Directive::PlayEndSound => {
                self.ring_bell();
            }
            Directive::ShowAlert { message } => {
                println!("\n[{}] {message}", Local::now().format("%H:%M:%S"));
            }
            Directive::SetProgress { value, maximum } => {
                println!("Progress: {value}/{maximum}");
            }
            Directive::SetCheckmarks { count } => {
                if *count > 0 {
                    println!("{}", "✓".repeat(*count as usize));
                }
            }
            Directive::LockTargetInput => {
                println!("Target locked for this session.");
            }
            Directive::UnlockAndResetTargetInput { default_text } => {
                println!("Target input reset to {default_text}.");
            }
        }
    }
}
