//! The display surface boundary.
//!
//! The scheduler emits [`Directive`]s; a `DisplaySurface` applies them to
//! whatever rendering technology the host chose. Surfaces must treat every
//! directive as fire-and-forget -- in particular, sound playback failures
//! are swallowed and never reported back.

use crate::directive::Directive;

/// Anything that can render the scheduler's display directives.
pub trait DisplaySurface {
    fn apply(&mut self, directive: &Directive);

    fn apply_all(&mut self, directives: &[Directive]) {
        for directive in directives {
            self.apply(directive);
        }
    }
}

/// Test surface that records every directive it is handed.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub applied: Vec<Directive>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// All `SetTimeText` payloads, in order.
    pub fn time_texts(&self) -> Vec<&str> {
        self.applied
            .iter()
            .filter_map(|d| match d {
                Directive::SetTimeText { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All `ShowAlert` payloads, in order.
    pub fn alerts(&self) -> Vec<&str> {
        self.applied
            .iter()
            .filter_map(|d| match d {
                Directive::ShowAlert { message } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DisplaySurface for RecordingDisplay {
    fn apply(&mut self, directive: &Directive) {
        self.applied.push(directive.clone());
    }
}
