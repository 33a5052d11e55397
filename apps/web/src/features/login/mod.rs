//! External sign-in: the provider's login page opens in a centred popup
//! without browser chrome. Nothing flows back from it.

#[cfg(target_arch = "wasm32")]
pub(crate) mod launcher;
pub(crate) mod popup;

pub(crate) use popup::PopupOutcome;
