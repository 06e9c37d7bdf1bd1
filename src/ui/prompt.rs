//! User prompt seam.
//!
//! The controller reports rejected input with `alert` and asks before deleting
//! with `confirm`. The webview answers the confirmation in the page and sends
//! the answer along with the request, so the Rust side replays it through
//! [`RecordedPrompt`].

pub const DELETE_CONFIRMATION: &str = "Delete this bookmark?";

/// Blocking dialogs shown to the user.
pub trait UserPrompt {
    fn alert(&mut self, message: &str);
    fn confirm(&mut self, message: &str) -> bool;
}

/// A prompt with a preset confirmation answer that records every message.
#[derive(Debug, Default)]
pub struct RecordedPrompt {
    answer: bool,
    alerts: Vec<String>,
    confirmations: Vec<String>,
}

impl RecordedPrompt {
    /// Creates a prompt whose `confirm` always returns `answer`.
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }

    pub fn confirmations(&self) -> &[String] {
        &self.confirmations
    }
}

impl UserPrompt for RecordedPrompt {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.answer
    }
}
