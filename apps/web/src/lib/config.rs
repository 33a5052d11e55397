//! Build-time configuration for the API base, login popup target, CAPTCHA site
//! key and message language, with an optional runtime override. The runtime
//! config is read from `window.PORTAL_CONFIG` (served by the host as
//! `/config.js`) so static deployments can change values without rebuilding.
//! Configuration values are public; do not store secrets here.

use super::messages::Locale;

/// External page opened by the sign-in popup when nothing else is configured.
pub const DEFAULT_LOGIN_URL: &str = "https://app.saveyourfile.online/login";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub login_url: String,
    pub recaptcha_site_key: String,
    pub locale: Locale,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("PORTAL_API_BASE_URL").unwrap_or("");
        let login_url = option_env!("PORTAL_LOGIN_URL").unwrap_or(DEFAULT_LOGIN_URL);
        let recaptcha_site_key = option_env!("PORTAL_RECAPTCHA_SITE_KEY").unwrap_or("");
        let locale = option_env!("PORTAL_LOCALE")
            .and_then(Locale::parse)
            .unwrap_or_default();

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            login_url: login_url.to_string(),
            recaptcha_site_key: recaptcha_site_key.trim().to_string(),
            locale,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    login_url: Option<String>,
    recaptcha_site_key: Option<String>,
    locale: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.login_url {
        config.login_url = value;
    }
    if let Some(value) = runtime.recaptcha_site_key {
        config.recaptcha_site_key = value;
    }
    if let Some(value) = runtime.locale {
        match Locale::parse(&value) {
            Some(locale) => config.locale = locale,
            None => tracing::warn!("Ignoring unsupported locale override: {value}"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("PORTAL_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        login_url: read_runtime_value(&object, "login_url"),
        recaptcha_site_key: read_runtime_value(&object, "recaptcha_site_key"),
        locale: read_runtime_value(&object, "locale"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, DEFAULT_LOGIN_URL, Locale, RuntimeConfig, apply_runtime_overrides,
        normalize_runtime_value,
    };

    fn defaults() -> AppConfig {
        AppConfig {
            api_base_url: String::new(),
            login_url: DEFAULT_LOGIN_URL.to_string(),
            recaptcha_site_key: String::new(),
            locale: Locale::En,
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.saveyourfile.online "),
            Some("https://api.saveyourfile.online".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            login_url: normalize_runtime_value("  "),
            recaptcha_site_key: normalize_runtime_value(""),
            locale: normalize_runtime_value(" "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, defaults());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            login_url: normalize_runtime_value("https://login.override/login"),
            recaptcha_site_key: normalize_runtime_value("site-key"),
            locale: normalize_runtime_value("vi"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.login_url, "https://login.override/login");
        assert_eq!(config.recaptcha_site_key, "site-key");
        assert_eq!(config.locale, Locale::Vi);
    }

    #[test]
    fn apply_runtime_overrides_keeps_locale_when_unsupported() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            locale: normalize_runtime_value("klingon"),
            ..RuntimeConfig::default()
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn load_without_window_uses_build_defaults() {
        let config = AppConfig::load();
        assert!(!config.login_url.is_empty());
    }
}
