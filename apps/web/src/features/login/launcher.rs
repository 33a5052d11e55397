use super::popup::{POPUP_NAME, PopupOutcome, PopupSpec};
use crate::app_lib::AppError;

fn screen_size(window: &web_sys::Window) -> (i32, i32) {
    window
        .screen()
        .ok()
        .and_then(|screen| Some((screen.width().ok()?, screen.height().ok()?)))
        .unwrap_or((0, 0))
}

/// Opens `url` in the login popup and focuses it.
///
/// # Errors
/// `AppError::Config` without a window, `AppError::Script` if `window.open`
/// throws. A popup blocker is not an error: it yields `PopupOutcome::Blocked`.
pub fn open_login_popup(url: &str) -> Result<PopupOutcome, AppError> {
    let window =
        web_sys::window().ok_or_else(|| AppError::Config("No window available.".to_string()))?;
    let (screen_width, screen_height) = screen_size(&window);
    let spec = PopupSpec::centered(screen_width, screen_height);

    let popup = window
        .open_with_url_and_target_and_features(url, POPUP_NAME, &spec.features())
        .map_err(|err| AppError::Script(format!("window.open failed: {err:?}")))?;

    match popup {
        Some(popup) => {
            if popup.focus().is_err() {
                tracing::debug!("Login popup could not be focused");
            }
            tracing::info!("Opened login popup");
            Ok(PopupOutcome::Opened)
        }
        None => {
            tracing::warn!("Login popup was blocked");
            Ok(PopupOutcome::Blocked)
        }
    }
}
