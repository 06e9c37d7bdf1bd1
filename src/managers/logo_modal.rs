//! Logo modal overlay state.
//!
//! The overlay opens when the logo image is activated and closes on the
//! close control, a click on its backdrop, or Escape. Background scrolling
//! is locked while it is open.

use tracing::debug;

use crate::types::view::ModalView;

pub const ESCAPE_KEY: &str = "Escape";

/// Open/closed state of the logo modal.
#[derive(Debug, Default)]
pub struct LogoModal {
    open: bool,
}

impl LogoModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self) -> ModalView {
        debug!("logo modal opened");
        self.open = true;
        self.view()
    }

    pub fn hide(&mut self) -> ModalView {
        debug!("logo modal closed");
        self.open = false;
        self.view()
    }

    /// Handles a click inside the overlay. Only clicks whose target is the
    /// backdrop itself close it.
    pub fn click(&mut self, on_backdrop: bool) -> ModalView {
        if on_backdrop {
            self.hide()
        } else {
            self.view()
        }
    }

    /// Handles a document key press. Escape closes an open modal.
    pub fn key_down(&mut self, key: &str) -> ModalView {
        if key == ESCAPE_KEY && self.open {
            self.hide()
        } else {
            self.view()
        }
    }

    pub fn view(&self) -> ModalView {
        ModalView {
            open: self.open,
            scroll_locked: self.open,
        }
    }
}
