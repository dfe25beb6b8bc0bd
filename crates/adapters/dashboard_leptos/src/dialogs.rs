//! [`Dialogs`] backed by `window.alert` and `window.confirm`.

use sitedeck_app::ports::Dialogs;

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(%message, "no window to alert in");
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            tracing::warn!(?err, "alert failed");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            tracing::warn!(%message, "no window to confirm in");
            return false;
        };
        window.confirm_with_message(message).unwrap_or_else(|err| {
            tracing::warn!(?err, "confirm failed");
            false
        })
    }
}
