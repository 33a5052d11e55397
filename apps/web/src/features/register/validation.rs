//! Client-side checks for the register form. Every field is checked on each
//! pass so the user sees all problems at once; each field reports at most one
//! message and a missing value wins over a format problem.

use super::types::RegistrationForm;
use crate::app_lib::Message;
use regex::Regex;
use std::collections::BTreeMap;

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::Username,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// DOM id suffix, also used to link the input with its error line.
    pub fn id(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm-password",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, Message>);

impl FieldErrors {
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<Message> {
        self.0.get(&field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert(&mut self, field: Field, message: Message) {
        self.0.insert(field, message);
    }

    /// Drops the error of one field, e.g. when its input gains focus.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").is_ok_and(|re| re.is_match(email))
}

/// Checks a form. Text fields are trimmed first; passwords are compared as typed.
pub fn validate(form: &RegistrationForm) -> FieldErrors {
    let form = form.normalized();
    let mut errors = FieldErrors::default();

    if form.first_name.is_empty() {
        errors.insert(Field::FirstName, Message::FirstNameRequired);
    }

    if form.last_name.is_empty() {
        errors.insert(Field::LastName, Message::LastNameRequired);
    }

    if form.username.is_empty() {
        errors.insert(Field::Username, Message::UsernameRequired);
    } else if form.username.chars().count() < MIN_USERNAME_LENGTH {
        errors.insert(Field::Username, Message::UsernameTooShort);
    }

    if form.email.is_empty() {
        errors.insert(Field::Email, Message::EmailRequired);
    } else if !valid_email(&form.email) {
        errors.insert(Field::Email, Message::EmailInvalid);
    }

    if form.password.is_empty() {
        errors.insert(Field::Password, Message::PasswordRequired);
    } else if form.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.insert(Field::Password, Message::PasswordTooShort);
    }

    if form.confirm_password.is_empty() {
        errors.insert(Field::ConfirmPassword, Message::ConfirmPasswordRequired);
    } else if form.password != form.confirm_password {
        errors.insert(Field::ConfirmPassword, Message::PasswordMismatch);
    }

    errors
}
