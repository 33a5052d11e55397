//! Registration feature: field model, validation, request/response payloads and
//! the submitter that turns a form into an outcome. The submitter is generic
//! over its transport so the whole flow can be exercised without a network.
//!
//! Flow Overview: validate every field, pass the CAPTCHA gate, POST the
//! normalized fields to `/api/register`, then map the reply to a banner.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod submit;
pub(crate) mod types;
pub(crate) mod validation;

pub(crate) use submit::{SubmitOutcome, submit};
pub(crate) use types::RegistrationForm;
pub(crate) use validation::{Field, FieldErrors};
