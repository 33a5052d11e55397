//! CAPTCHA gating for both tabs. Completion flags live in an explicit
//! `CaptchaState` owned by the page and passed to whoever needs them; the
//! widget bridge only reports success/expiry and hands out tokens.

pub(crate) mod gate;
#[cfg(target_arch = "wasm32")]
pub(crate) mod widget;

pub(crate) use gate::{CaptchaForm, CaptchaGate, CaptchaState, TokenProvider};
