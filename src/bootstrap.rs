//! View lifecycle: paging setup and key listener registration.
//!
//! A [`ViewController`] is built once per mounted view. `mount` attaches
//! paging to the ranking table and registers one keydown listener;
//! `unmount` drops the listener again. Label resolution is started by the
//! caller right after `mount`, once per view load.

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::DOCUMENT_LOADING;
use crate::error::ClientError;
use crate::popup::{PopupController, PopupView};

/// Pre-built table widget that renders rows and pages.
pub trait RankingTable {
    /// Attach paging showing `page_length` rows per page.
    fn enable_paging(&self, page_length: usize) -> Result<(), ClientError>;
}

/// Document-wide keyboard events.
pub trait KeySource {
    /// Listener registration; dropping it deregisters the handler.
    type Guard;

    /// Call `handler` with the key value of every keydown.
    fn on_key_down(&self, handler: Box<dyn Fn(&str)>) -> Self::Guard;
}

/// Whether a `document.readyState` value means the view's content is parsed.
///
/// `"interactive"` and `"complete"` are both ready; only `"loading"` is not.
pub fn content_ready(ready_state: &str) -> bool {
    ready_state != DOCUMENT_LOADING
}

/// Owns the popup and the key listener of one mounted view.
pub struct ViewController<P, K: KeySource> {
    popup: Rc<RefCell<PopupController<P>>>,
    keys: K,
    listener: Option<K::Guard>,
    page_length: usize,
}

impl<P: PopupView + 'static, K: KeySource> ViewController<P, K> {
    pub fn new(popup_view: P, keys: K, page_length: usize) -> Self {
        Self {
            popup: Rc::new(RefCell::new(PopupController::new(popup_view))),
            keys,
            listener: None,
            page_length,
        }
    }

    /// Enable table paging and start listening for Escape.
    ///
    /// A table that cannot be initialised is logged and the view stays usable.
    /// Mounting an already mounted view does nothing; the table widget
    /// rejects a second initialisation.
    pub fn mount<T: RankingTable>(&mut self, table: &T) {
        if self.listener.is_some() {
            log::debug!("View already mounted");
            return;
        }

        if let Err(e) = table.enable_paging(self.page_length) {
            log::warn!("Ranking table paging unavailable: {}", e);
        }

        let popup = Rc::clone(&self.popup);
        self.listener = Some(self.keys.on_key_down(Box::new(move |key: &str| {
            popup.borrow_mut().handle_key(key);
        })));
        log::info!("View mounted ({} rows per page)", self.page_length);
    }

    /// Stop listening for key presses.
    pub fn unmount(&mut self) {
        if self.listener.take().is_some() {
            log::info!("View unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    pub fn show_popup(&self, image_source: &str) {
        self.popup.borrow_mut().show(image_source);
    }

    pub fn hide_popup(&self) {
        self.popup.borrow_mut().hide();
    }

    pub fn popup(&self) -> &Rc<RefCell<PopupController<P>>> {
        &self.popup
    }
}
