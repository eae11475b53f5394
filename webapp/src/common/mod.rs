pub mod style;

/// Blocking user-facing notice. Every terminal failure in the location flow
/// and the upload cap rejection surface through this.
pub fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
