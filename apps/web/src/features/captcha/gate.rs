/// Which form a challenge belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaptchaForm {
    Login,
    Register,
}

/// Completion flags of the two challenges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaptchaState {
    login: bool,
    register: bool,
}

impl CaptchaState {
    pub fn is_complete(&self, form: CaptchaForm) -> bool {
        match form {
            CaptchaForm::Login => self.login,
            CaptchaForm::Register => self.register,
        }
    }

    pub fn set(&mut self, form: CaptchaForm, complete: bool) {
        match form {
            CaptchaForm::Login => self.login = complete,
            CaptchaForm::Register => self.register = complete,
        }
    }

    pub fn complete(&mut self, form: CaptchaForm) {
        self.set(form, true);
    }

    /// Called whenever the form is cleared or the challenge expires.
    pub fn reset(&mut self, form: CaptchaForm) {
        self.set(form, false);
    }
}

/// Source of the response token for a completed challenge.
pub trait TokenProvider {
    fn token(&self, form: CaptchaForm) -> Option<String>;
}

/// Returned when a form is submitted before its challenge succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptchaBlocked;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptchaGate {
    /// No site key configured; forms submit without a token.
    Disabled,
    Required,
}

impl CaptchaGate {
    pub fn from_site_key(site_key: &str) -> Self {
        if site_key.trim().is_empty() {
            Self::Disabled
        } else {
            Self::Required
        }
    }

    pub fn is_required(self) -> bool {
        self == Self::Required
    }

    /// Lets a submission through, yielding the token to send with it.
    ///
    /// # Errors
    /// `CaptchaBlocked` when the gate is required and either the challenge has
    /// not signalled success or the library has no token for it.
    pub fn check(
        self,
        state: &CaptchaState,
        form: CaptchaForm,
        tokens: &impl TokenProvider,
    ) -> Result<Option<String>, CaptchaBlocked> {
        match self {
            Self::Disabled => Ok(None),
            Self::Required => {
                if !state.is_complete(form) {
                    return Err(CaptchaBlocked);
                }
                tokens
                    .token(form)
                    .filter(|token| !token.trim().is_empty())
                    .map(Some)
                    .ok_or(CaptchaBlocked)
            }
        }
    }
}
