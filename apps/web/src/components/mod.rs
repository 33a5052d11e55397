//! Shared UI components exported for routes.

mod captcha;
pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use captcha::CaptchaWidget;
pub(crate) use layout::{AuthCard, TabBar};
pub(crate) use ui::{Button, NoticeBanner, Spinner, TextField};
