//! Dialog port — blocking notifications and confirmations.

/// Modal dialogs shown to the user.
///
/// Both calls block until the user dismisses the dialog.
pub trait Dialogs {
    /// Show an acknowledgement or error message.
    fn alert(&self, message: &str);

    /// Ask a yes/no question; `true` when the user accepts.
    fn confirm(&self, message: &str) -> bool;
}

impl<D: Dialogs + ?Sized> Dialogs for &D {
    fn alert(&self, message: &str) {
        (**self).alert(message);
    }

    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}
