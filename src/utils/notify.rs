/// Blocking user-facing notice for a failed action.
#[tracing::instrument]
pub fn alert(message: &str) {
    tracing::warn!("{message}");

    #[cfg(feature = "hydrate")]
    match web_sys::window() {
        Some(window) => {
            if let Err(err) = window.alert_with_message(message) {
                tracing::error!("Failed to show alert: {err:?}");
            }
        }
        None => tracing::error!("no window to show alert in"),
    }
}
