//! Blocking browser dialogs.

/// `window.confirm`; `false` when there is no window or the user cancels
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
