//! Page-level state shared by both tabs.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Login,
    Register,
}

impl Tab {
    /// Initial tab for a route path; anything but `/register` shows login.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/register" | "/signup" => Self::Register,
            _ => Self::Login,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// The result banner below the forms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub tone: Tone,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            tone: Tone::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_paths_select_register_tab() {
        assert_eq!(Tab::from_path("/register"), Tab::Register);
        assert_eq!(Tab::from_path("/register/"), Tab::Register);
        assert_eq!(Tab::from_path("/signup"), Tab::Register);
    }

    #[test]
    fn other_paths_select_login_tab() {
        assert_eq!(Tab::from_path("/"), Tab::Login);
        assert_eq!(Tab::from_path("/login"), Tab::Login);
        assert_eq!(Tab::from_path(""), Tab::Login);
    }

    #[test]
    fn tab_paths_round_trip() {
        for tab in [Tab::Login, Tab::Register] {
            assert_eq!(Tab::from_path(tab.path()), tab);
        }
    }
}
