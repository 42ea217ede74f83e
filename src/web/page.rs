//! Page reload and alerts through `window`.

use crate::choice::PageHost;

/// The browsing context the client runs in.
pub struct BrowserPage;

impl PageHost for BrowserPage {
    fn reload(&self) {
        let Some(window) = web_sys::window() else {
            log::error!("Cannot reload: no window");
            return;
        };
        if let Err(e) = window.location().reload() {
            log::error!("Failed to reload page: {:?}", e);
        }
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("Cannot alert: no window");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }
}
