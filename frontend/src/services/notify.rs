//! Blocking user notifications.

/// Show a blocking `alert()` dialog.
///
/// Falls back to the console when no window is available.
pub fn alert(message: &str) {
    log::warn!("⚠️ {}", message);

    let Some(window) = web_sys::window() else {
        log::error!("No window to show alert: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::error!("Failed to show alert: {:?}", e);
    }
}
