//! Enlarged-image popup controller.
//!
//! Two states, hidden and shown. `show` is valid from either state and
//! replaces the source; `hide` and Escape are idempotent. Nothing hides
//! the popup on a timer.

use crate::constants::ESCAPE_KEY;
use crate::model::{PopupPhase, PopupState};

/// Renders popup state onto the page.
pub trait PopupView {
    /// Apply visibility and image source.
    fn apply(&self, state: &PopupState);
}

/// Owns popup state and pushes every change to its view.
pub struct PopupController<V> {
    view: V,
    state: PopupState,
}

impl<V: PopupView> PopupController<V> {
    /// Create a hidden popup. The view is not touched until the first transition.
    pub fn new(view: V) -> Self {
        Self {
            view,
            state: PopupState::hidden(),
        }
    }

    /// Show the popup with `image_source`.
    ///
    /// An empty source would break the visible/source pairing, so it hides instead.
    pub fn show(&mut self, image_source: &str) {
        if image_source.is_empty() {
            log::debug!("Popup asked to show an empty source, hiding");
            self.hide();
            return;
        }

        log::debug!("Showing popup: {}", image_source);
        self.state = PopupState::shown(image_source);
        self.view.apply(&self.state);
    }

    /// Hide the popup and clear its source.
    pub fn hide(&mut self) {
        self.state = PopupState::hidden();
        self.view.apply(&self.state);
    }

    /// Handle a key press. Escape hides the popup, from either state.
    /// Returns true if the key was Escape.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key != ESCAPE_KEY {
            return false;
        }
        self.hide();
        true
    }

    pub fn state(&self) -> &PopupState {
        &self.state
    }

    pub fn phase(&self) -> PopupPhase {
        self.state.phase()
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
