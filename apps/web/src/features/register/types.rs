//! Request and response payloads for `/api/register`. The request carries the
//! password and CAPTCHA token, so its `Debug` output redacts both.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Live values of the register form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Trims the text fields. Passwords are kept verbatim.
    pub fn normalized(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }
}

#[derive(Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recaptcha_token: Option<String>,
}

impl RegisterRequest {
    pub fn new(form: &RegistrationForm, recaptcha_token: Option<String>) -> Self {
        Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            username: form.username.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
            recaptcha_token,
        }
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RegisterRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field(
                "recaptcha_token",
                &self.recaptcha_token.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}

/// Reply payload. Every field is optional: deployments differ in which of
/// `success`, `message` and `error` they send, and in their types.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterResponse {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl RegisterResponse {
    /// Parses a reply body field by field. A body that is not a JSON object is
    /// empty; a field of an unexpected type is treated as absent without
    /// discarding the others. `success` also accepts `"true"` and `"false"`.
    pub fn from_body(body: &str) -> Self {
        let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) else {
            return Self::default();
        };
        let text = |key: &str| fields.get(key).and_then(Value::as_str).map(ToString::to_string);

        Self {
            success: fields.get("success").and_then(|value| match value {
                Value::Bool(flag) => Some(*flag),
                Value::String(flag) => flag.trim().to_ascii_lowercase().parse::<bool>().ok(),
                _ => None,
            }),
            message: text("message"),
            error: text("error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form() -> RegistrationForm {
        RegistrationForm {
            first_name: "  Lan ".to_string(),
            last_name: " Nguyen".to_string(),
            username: " lan.nguyen ".to_string(),
            email: " lan@example.com ".to_string(),
            password: " secret1 ".to_string(),
            confirm_password: " secret1 ".to_string(),
        }
    }

    #[test]
    fn normalized_trims_text_but_not_passwords() {
        let normalized = form().normalized();
        assert_eq!(normalized.first_name, "Lan");
        assert_eq!(normalized.last_name, "Nguyen");
        assert_eq!(normalized.username, "lan.nguyen");
        assert_eq!(normalized.email, "lan@example.com");
        assert_eq!(normalized.password, " secret1 ");
        assert_eq!(normalized.confirm_password, " secret1 ");
    }

    #[test]
    fn request_uses_camel_case_keys() {
        let request = RegisterRequest::new(&form().normalized(), Some("token".to_string()));
        let value: Value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            value,
            json!({
                "firstName": "Lan",
                "lastName": "Nguyen",
                "username": "lan.nguyen",
                "email": "lan@example.com",
                "password": " secret1 ",
                "recaptchaToken": "token",
            })
        );
    }

    #[test]
    fn request_omits_missing_token() {
        let request = RegisterRequest::new(&form().normalized(), None);
        let value: Value = serde_json::to_value(&request).expect("serialize");
        assert!(value.get("recaptchaToken").is_none());
        assert!(value.get("confirmPassword").is_none());
    }

    #[test]
    fn request_debug_redacts_secrets() {
        let request = RegisterRequest::new(&form(), Some("token-value".to_string()));
        let debug = format!("{request:?}");
        assert!(!debug.contains("secret1"));
        assert!(!debug.contains("token-value"));
        assert!(debug.contains("[redacted]"));
    }

    #[test]
    fn response_keeps_fields_of_the_expected_type() {
        assert_eq!(
            RegisterResponse::from_body(
                r#"{"error":{"code":"E_TAKEN"},"message":"Username taken"}"#
            ),
            RegisterResponse {
                message: Some("Username taken".to_string()),
                ..RegisterResponse::default()
            }
        );
        assert_eq!(
            RegisterResponse::from_body(r#"{"success":"false","message":"Email already used"}"#),
            RegisterResponse {
                success: Some(false),
                message: Some("Email already used".to_string()),
                error: None,
            }
        );
        assert_eq!(
            RegisterResponse::from_body(r#"{"success":1,"message":42,"error":"bad"}"#),
            RegisterResponse {
                error: Some("bad".to_string()),
                ..RegisterResponse::default()
            }
        );
        assert_eq!(RegisterResponse::from_body("[1,2]"), RegisterResponse::default());
    }

    #[test]
    fn response_tolerates_partial_and_invalid_bodies() {
        assert_eq!(
            RegisterResponse::from_body(r#"{"error":"taken"}"#),
            RegisterResponse {
                error: Some("taken".to_string()),
                ..RegisterResponse::default()
            }
        );
        assert_eq!(
            RegisterResponse::from_body("<html>502</html>"),
            RegisterResponse::default()
        );
        assert_eq!(RegisterResponse::from_body(""), RegisterResponse::default());
        assert_eq!(
            RegisterResponse::from_body(r#"{"success":true,"message":"ok","user":{"id":1}}"#),
            RegisterResponse {
                success: Some(true),
                message: Some("ok".to_string()),
                error: None,
            }
        );
    }
}
