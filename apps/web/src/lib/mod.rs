//! Shared frontend utilities: HTTP access, configuration, errors, localized
//! messages, console logging, and build metadata.
//!
//! ## Registration flow
//!
//! 1. **Validate:** every field of the register form is checked locally and all
//!    failures are reported at once.
//! 2. **Gate:** when a reCAPTCHA site key is configured, the register challenge
//!    must have succeeded and produced a token.
//! 3. **Submit:** the fields and token are POSTed as JSON to `/api/register`; the
//!    reply is mapped to a success or error banner.
//!
//! ## Login flow
//!
//! Sign-in happens on the external provider, opened in a centred popup without
//! browser chrome. Nothing is exchanged with it beyond navigation.
//!
//! Passwords and CAPTCHA tokens pass through these helpers; callers must never
//! log request bodies.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod http;
pub(crate) mod messages;
#[cfg(target_arch = "wasm32")]
pub(crate) mod telemetry;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::post_json_reply;
pub(crate) use errors::AppError;
pub(crate) use http::HttpReply;
pub(crate) use messages::{Label, Locale, Message};
