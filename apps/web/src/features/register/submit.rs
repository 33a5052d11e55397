//! Registration submission: validate, pass the CAPTCHA gate, POST, and map the
//! reply to something the page can show. The transport is a trait so the flow
//! runs in host tests without a browser.

use super::{
    types::{RegisterRequest, RegisterResponse, RegistrationForm},
    validation::{FieldErrors, validate},
};
use crate::{
    app_lib::{AppError, HttpReply, Locale, Message, http::sanitize_message},
    features::captcha::{CaptchaForm, CaptchaGate, CaptchaState, TokenProvider},
};
use tracing::{debug, error, info, warn};

pub const REGISTER_PATH: &str = "/api/register";

pub(crate) trait RegisterTransport {
    async fn post_register(&self, request: &RegisterRequest) -> Result<HttpReply, AppError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// The challenge has not succeeded yet; nothing was sent.
    CaptchaRequired,
    Registered { message: String },
    Rejected { message: String },
    /// The request never produced an HTTP reply.
    Unreachable,
}

impl SubmitOutcome {
    /// Only a successful registration empties the form and its challenge.
    pub fn clears_form(&self) -> bool {
        matches!(self, Self::Registered { .. })
    }
}

/// Runs one submission of the register form.
pub(crate) async fn submit<T: RegisterTransport>(
    transport: &T,
    gate: CaptchaGate,
    captcha: &CaptchaState,
    tokens: &impl TokenProvider,
    form: &RegistrationForm,
    locale: Locale,
) -> SubmitOutcome {
    let errors = validate(form);
    if !errors.is_valid() {
        debug!("Register form has {} invalid field(s)", errors.len());
        return SubmitOutcome::Invalid(errors);
    }

    let Ok(token) = gate.check(captcha, CaptchaForm::Register, tokens) else {
        debug!("Register submission blocked by CAPTCHA");
        return SubmitOutcome::CaptchaRequired;
    };

    let request = RegisterRequest::new(&form.normalized(), token);
    match transport.post_register(&request).await {
        Ok(reply) => {
            let outcome = interpret(&reply, locale);
            match &outcome {
                SubmitOutcome::Registered { .. } => {
                    info!(status = reply.status, "Registration accepted");
                }
                _ => warn!(status = reply.status, "Registration rejected"),
            }
            outcome
        }
        Err(err) => {
            if err.is_transport() {
                warn!("Registration request did not reach the server: {err}");
            } else {
                error!("Registration request could not be sent: {err}");
            }
            SubmitOutcome::Unreachable
        }
    }
}

/// Maps a completed HTTP exchange to an outcome.
pub fn interpret(reply: &HttpReply, locale: Locale) -> SubmitOutcome {
    let response = RegisterResponse::from_body(&reply.body);

    if reply.is_ok() && response.success != Some(false) {
        let message = response
            .message
            .as_deref()
            .and_then(sanitize_message)
            .unwrap_or_else(|| Message::RegistrationSucceeded.text(locale).to_string());
        return SubmitOutcome::Registered { message };
    }

    let message = [response.error.as_deref(), response.message.as_deref()]
        .into_iter()
        .flatten()
        .find_map(sanitize_message)
        .unwrap_or_else(|| Message::RegistrationFailed.text(locale).to_string());
    SubmitOutcome::Rejected { message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::register::Field;
    use std::cell::{Cell, RefCell};

    struct MockTransport {
        reply: Result<HttpReply, AppError>,
        calls: Cell<usize>,
        last: RefCell<Option<RegisterRequest>>,
    }

    impl MockTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self::new(Ok(HttpReply::new(status, body)))
        }

        fn new(reply: Result<HttpReply, AppError>) -> Self {
            Self {
                reply,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }
    }

    impl RegisterTransport for MockTransport {
        async fn post_register(&self, request: &RegisterRequest) -> Result<HttpReply, AppError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(request.clone());
            self.reply.clone()
        }
    }

    struct FixedTokens(Option<&'static str>);

    impl TokenProvider for FixedTokens {
        fn token(&self, _form: CaptchaForm) -> Option<String> {
            self.0.map(ToString::to_string)
        }
    }

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            first_name: " Lan ".to_string(),
            last_name: "Nguyen".to_string(),
            username: "lan".to_string(),
            email: "a@b.co".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        }
    }

    fn completed() -> CaptchaState {
        let mut state = CaptchaState::default();
        state.complete(CaptchaForm::Register);
        state
    }

    async fn run(transport: &MockTransport) -> SubmitOutcome {
        submit(
            transport,
            CaptchaGate::Required,
            &completed(),
            &FixedTokens(Some("token")),
            &valid_form(),
            Locale::En,
        )
        .await
    }

    #[tokio::test]
    async fn accepted_registration_uses_server_message() {
        let transport = MockTransport::replying(200, r#"{"success":true,"message":"ok"}"#);
        let outcome = run(&transport).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Registered {
                message: "ok".to_string()
            }
        );
        assert!(outcome.clears_form());
        assert_eq!(transport.calls.get(), 1);

        let sent = transport.last.borrow().clone().expect("request sent");
        assert_eq!(sent.first_name, "Lan");
        assert_eq!(sent.recaptcha_token.as_deref(), Some("token"));
    }

    #[tokio::test]
    async fn rejected_registration_uses_server_error() {
        let transport = MockTransport::replying(409, r#"{"error":"taken"}"#);
        let outcome = run(&transport).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: "taken".to_string()
            }
        );
        assert!(!outcome.clears_form());
    }

    #[tokio::test]
    async fn success_false_is_a_rejection_even_with_2xx() {
        let transport =
            MockTransport::replying(200, r#"{"success":false,"message":"Email already used"}"#);
        assert_eq!(
            run(&transport).await,
            SubmitOutcome::Rejected {
                message: "Email already used".to_string()
            }
        );
    }

    #[tokio::test]
    async fn missing_messages_fall_back_to_defaults() {
        let transport = MockTransport::replying(201, "");
        assert_eq!(
            run(&transport).await,
            SubmitOutcome::Registered {
                message: Message::RegistrationSucceeded.text(Locale::En).to_string()
            }
        );

        let transport = MockTransport::replying(500, "<html>Internal Server Error</html>");
        assert_eq!(
            run(&transport).await,
            SubmitOutcome::Rejected {
                message: Message::RegistrationFailed.text(Locale::En).to_string()
            }
        );
    }

    #[tokio::test]
    async fn transport_failure_is_unreachable() {
        for err in [
            AppError::Network("connection refused".to_string()),
            AppError::Timeout("Request timed out after 10000ms.".to_string()),
        ] {
            let transport = MockTransport::new(Err(err));
            assert_eq!(run(&transport).await, SubmitOutcome::Unreachable);
            assert_eq!(transport.calls.get(), 1);
        }
    }

    #[tokio::test]
    async fn invalid_form_is_not_sent() {
        let transport = MockTransport::replying(200, "{}");
        let mut form = valid_form();
        form.confirm_password = "other!".to_string();

        let outcome = submit(
            &transport,
            CaptchaGate::Required,
            &completed(),
            &FixedTokens(Some("token")),
            &form,
            Locale::En,
        )
        .await;

        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected invalid outcome, got {outcome:?}");
        };
        assert_eq!(errors.get(Field::ConfirmPassword), Some(Message::PasswordMismatch));
        assert_eq!(transport.calls.get(), 0);
    }

    #[tokio::test]
    async fn incomplete_captcha_is_not_sent() {
        let transport = MockTransport::replying(200, "{}");
        let outcome = submit(
            &transport,
            CaptchaGate::Required,
            &CaptchaState::default(),
            &FixedTokens(Some("token")),
            &valid_form(),
            Locale::En,
        )
        .await;
        assert_eq!(outcome, SubmitOutcome::CaptchaRequired);
        assert_eq!(transport.calls.get(), 0);
    }

    #[tokio::test]
    async fn disabled_gate_sends_without_token() {
        let transport = MockTransport::replying(200, r#"{"success":true}"#);
        let outcome = submit(
            &transport,
            CaptchaGate::Disabled,
            &CaptchaState::default(),
            &FixedTokens(None),
            &valid_form(),
            Locale::Vi,
        )
        .await;
        assert_eq!(
            outcome,
            SubmitOutcome::Registered {
                message: Message::RegistrationSucceeded.text(Locale::Vi).to_string()
            }
        );
        let sent = transport.last.borrow().clone().expect("request sent");
        assert_eq!(sent.recaptcha_token, None);
    }

    #[test]
    fn rejection_prefers_error_over_message() {
        let reply = HttpReply::new(400, r#"{"error":"bad","message":"ignored"}"#);
        assert_eq!(
            interpret(&reply, Locale::En),
            SubmitOutcome::Rejected {
                message: "bad".to_string()
            }
        );

        let reply = HttpReply::new(400, r#"{"error":"  ","message":"Username taken"}"#);
        assert_eq!(
            interpret(&reply, Locale::En),
            SubmitOutcome::Rejected {
                message: "Username taken".to_string()
            }
        );
    }

    #[test]
    fn mistyped_fields_do_not_hide_the_server_message() {
        let reply = HttpReply::new(409, r#"{"error":{"code":"E_TAKEN"},"message":"Username taken"}"#);
        assert_eq!(
            interpret(&reply, Locale::En),
            SubmitOutcome::Rejected {
                message: "Username taken".to_string()
            }
        );

        let reply = HttpReply::new(200, r#"{"success":"false","message":"Email already used"}"#);
        let outcome = interpret(&reply, Locale::En);
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: "Email already used".to_string()
            }
        );
        assert!(!outcome.clears_form());
    }
}
