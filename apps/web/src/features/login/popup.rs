pub const POPUP_WIDTH: i32 = 1000;
pub const POPUP_HEIGHT: i32 = 800;
pub const POPUP_NAME: &str = "PalmrLogin";

/// Geometry of the login popup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopupSpec {
    pub width: i32,
    pub height: i32,
    pub left: i32,
    pub top: i32,
}

impl PopupSpec {
    /// Centres the popup on a screen; offsets clamp to 0 on small screens.
    pub fn centered(screen_width: i32, screen_height: i32) -> Self {
        Self {
            width: POPUP_WIDTH,
            height: POPUP_HEIGHT,
            left: ((screen_width - POPUP_WIDTH) / 2).max(0),
            top: ((screen_height - POPUP_HEIGHT) / 2).max(0),
        }
    }

    /// The `window.open` features string.
    pub fn features(&self) -> String {
        format!(
            "width={},height={},left={},top={},toolbar=no,location=no,directories=no,\
             status=no,menubar=no,scrollbars=yes,resizable=yes,copyhistory=no",
            self.width, self.height, self.left, self.top
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupOutcome {
    Opened,
    Blocked,
}
