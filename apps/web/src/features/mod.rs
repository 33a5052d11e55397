//! Domain-level frontend features: registration, CAPTCHA gating and the login
//! popup. Routes import these modules to keep view code focused while the
//! validation and submission rules stay testable without a browser.

pub(crate) mod captcha;
pub(crate) mod login;
pub(crate) mod page;
pub(crate) mod register;
