//! Options forwarded to the browser through `window.PORTAL_CONFIG`. Every value
//! here is public; never put secrets behind these flags.

use crate::portal::RuntimeConfig;
use anyhow::{Context, Result, anyhow};
use clap::{Arg, ArgMatches, Command};
use url::Url;

pub const ARG_API_BASE_URL: &str = "api-base-url";
pub const ARG_LOGIN_URL: &str = "login-url";
pub const ARG_RECAPTCHA_SITE_KEY: &str = "recaptcha-site-key";
pub const ARG_LOCALE: &str = "locale";

pub const DEFAULT_LOGIN_URL: &str = "https://app.saveyourfile.online/login";

/// Locales the frontend ships message catalogues for.
pub const LOCALES: [&str; 2] = ["en", "vi"];

impl RuntimeConfig {
    /// Parse frontend arguments from matches.
    ///
    /// # Errors
    /// Returns an error if the login URL is not an absolute http(s) URL or the
    /// API base URL is malformed.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let read = |id: &str| -> String {
            matches
                .get_one::<String>(id)
                .map(|value| value.trim().to_string())
                .unwrap_or_default()
        };

        let login_url = read(ARG_LOGIN_URL);
        let parsed = Url::parse(&login_url)
            .with_context(|| format!("Invalid --{ARG_LOGIN_URL}: {login_url}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(anyhow!(
                "--{ARG_LOGIN_URL} must use http or https, got: {}",
                parsed.scheme()
            ));
        }

        // Relative (same-origin) API bases are allowed; absolute ones must parse.
        let api_base_url = read(ARG_API_BASE_URL);
        if api_base_url.contains("://") {
            Url::parse(&api_base_url)
                .with_context(|| format!("Invalid --{ARG_API_BASE_URL}: {api_base_url}"))?;
        }

        Ok(Self {
            api_base_url,
            login_url,
            recaptcha_site_key: read(ARG_RECAPTCHA_SITE_KEY),
            locale: read(ARG_LOCALE),
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_BASE_URL)
                .long(ARG_API_BASE_URL)
                .help("Base URL the frontend uses for /api/register (empty means same origin)")
                .env("PORTAL_API_BASE_URL")
                .default_value(""),
        )
        .arg(
            Arg::new(ARG_LOGIN_URL)
                .long(ARG_LOGIN_URL)
                .help("External login page opened in the sign-in popup")
                .env("PORTAL_LOGIN_URL")
                .default_value(DEFAULT_LOGIN_URL),
        )
        .arg(
            Arg::new(ARG_RECAPTCHA_SITE_KEY)
                .long(ARG_RECAPTCHA_SITE_KEY)
                .help("reCAPTCHA v2 site key; CAPTCHA gating is disabled when empty")
                .env("PORTAL_RECAPTCHA_SITE_KEY")
                .default_value(""),
        )
        .arg(
            Arg::new(ARG_LOCALE)
                .long(ARG_LOCALE)
                .help("Language of user-facing messages")
                .env("PORTAL_LOCALE")
                .default_value("en")
                .value_parser(LOCALES),
        )
}
