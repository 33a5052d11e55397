//! User-facing text in every supported language. Validation and submission
//! logic deal in `Message` values; only the views turn them into strings.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Vi,
}

impl Locale {
    /// Parses a language tag such as `en`, `vi` or `vi-VN`.
    pub fn parse(value: &str) -> Option<Self> {
        let tag = value.trim().to_ascii_lowercase();
        let language = tag.split(['-', '_']).next().unwrap_or_default();
        match language {
            "en" => Some(Self::En),
            "vi" => Some(Self::Vi),
            _ => None,
        }
    }

    pub fn html_lang(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Vi => "vi",
        }
    }
}

/// Feedback shown in field errors and result banners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    FirstNameRequired,
    LastNameRequired,
    UsernameRequired,
    UsernameTooShort,
    EmailRequired,
    EmailInvalid,
    PasswordRequired,
    PasswordTooShort,
    ConfirmPasswordRequired,
    PasswordMismatch,
    CaptchaRequired,
    RegistrationSucceeded,
    RegistrationFailed,
    Unreachable,
    PopupBlocked,
}

impl Message {
    pub fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.english(),
            Locale::Vi => self.vietnamese(),
        }
    }

    fn english(self) -> &'static str {
        match self {
            Self::FirstNameRequired => "Please enter your first name",
            Self::LastNameRequired => "Please enter your last name",
            Self::UsernameRequired => "Please enter a username",
            Self::UsernameTooShort => "Username must be at least 3 characters",
            Self::EmailRequired => "Please enter your email",
            Self::EmailInvalid => "Email address is invalid",
            Self::PasswordRequired => "Please enter a password",
            Self::PasswordTooShort => "Password must be at least 6 characters",
            Self::ConfirmPasswordRequired => "Please confirm your password",
            Self::PasswordMismatch => "Passwords do not match",
            Self::CaptchaRequired => "Please complete the CAPTCHA verification",
            Self::RegistrationSucceeded => "Registration successful!",
            Self::RegistrationFailed => "Registration failed. Please try again.",
            Self::Unreachable => "An error occurred. Please try again later.",
            Self::PopupBlocked => {
                "Popup blocked. Please allow popups for this site and try again."
            }
        }
    }

    fn vietnamese(self) -> &'static str {
        match self {
            Self::FirstNameRequired => "Vui lòng nhập tên",
            Self::LastNameRequired => "Vui lòng nhập họ",
            Self::UsernameRequired => "Vui lòng nhập tên đăng nhập",
            Self::UsernameTooShort => "Tên đăng nhập phải có ít nhất 3 ký tự",
            Self::EmailRequired => "Vui lòng nhập email",
            Self::EmailInvalid => "Email không hợp lệ",
            Self::PasswordRequired => "Vui lòng nhập mật khẩu",
            Self::PasswordTooShort => "Mật khẩu phải có ít nhất 6 ký tự",
            Self::ConfirmPasswordRequired => "Vui lòng xác nhận mật khẩu",
            Self::PasswordMismatch => "Mật khẩu không khớp",
            Self::CaptchaRequired => "Vui lòng hoàn thành xác minh CAPTCHA",
            Self::RegistrationSucceeded => "Đăng ký thành công!",
            Self::RegistrationFailed => "Có lỗi xảy ra",
            Self::Unreachable => "Có lỗi xảy ra. Vui lòng thử lại sau.",
            Self::PopupBlocked => {
                "Cửa sổ bật lên đã bị chặn. Vui lòng cho phép cửa sổ bật lên và thử lại."
            }
        }
    }
}

/// Static labels for tabs, inputs and buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    LoginTab,
    RegisterTab,
    LoginHint,
    LoginButton,
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    ConfirmPassword,
    RegisterButton,
}

impl Label {
    pub fn text(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::LoginTab, Locale::En) => "Sign in",
            (Self::LoginTab, Locale::Vi) => "Đăng nhập",
            (Self::RegisterTab, Locale::En) => "Register",
            (Self::RegisterTab, Locale::Vi) => "Đăng ký",
            (Self::LoginHint, Locale::En) => {
                "Sign in continues in a separate window on the file service."
            }
            (Self::LoginHint, Locale::Vi) => {
                "Đăng nhập sẽ tiếp tục trong một cửa sổ riêng của dịch vụ lưu trữ."
            }
            (Self::LoginButton, Locale::En) => "Continue to sign in",
            (Self::LoginButton, Locale::Vi) => "Tiếp tục đăng nhập",
            (Self::FirstName, Locale::En) => "First name",
            (Self::FirstName, Locale::Vi) => "Tên",
            (Self::LastName, Locale::En) => "Last name",
            (Self::LastName, Locale::Vi) => "Họ",
            (Self::Username, Locale::En) => "Username",
            (Self::Username, Locale::Vi) => "Tên đăng nhập",
            (Self::Email, Locale::En) => "Email",
            (Self::Email, Locale::Vi) => "Email",
            (Self::Password, Locale::En) => "Password",
            (Self::Password, Locale::Vi) => "Mật khẩu",
            (Self::ConfirmPassword, Locale::En) => "Confirm password",
            (Self::ConfirmPassword, Locale::Vi) => "Xác nhận mật khẩu",
            (Self::RegisterButton, Locale::En) => "Create account",
            (Self::RegisterButton, Locale::Vi) => "Tạo tài khoản",
        }
    }
}
