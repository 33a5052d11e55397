//! Bridge to the Google reCAPTCHA v2 script, loaded by `index.html` with
//! `render=explicit`. Widgets are rendered into our own containers so each form
//! gets its own id, success callback and expiry callback. Tokens are read on
//! demand and never logged.

use super::gate::{CaptchaForm, TokenProvider};
use crate::app_lib::AppError;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Object, Reflect};
use std::rc::Rc;
use wasm_bindgen::{JsValue, closure::Closure, prelude::wasm_bindgen};
use web_sys::HtmlElement;

const LOAD_POLL_MS: u32 = 200;
const LOAD_POLL_ATTEMPTS: u32 = 50;

/// Widget ids returned by `grecaptcha.render`, one per form.
#[derive(Clone, Copy, Debug, Default)]
pub struct WidgetIds {
    login: Option<i32>,
    register: Option<i32>,
}

impl WidgetIds {
    pub fn get(&self, form: CaptchaForm) -> Option<i32> {
        match form {
            CaptchaForm::Login => self.login,
            CaptchaForm::Register => self.register,
        }
    }

    pub fn set(&mut self, form: CaptchaForm, id: i32) {
        match form {
            CaptchaForm::Login => self.login = Some(id),
            CaptchaForm::Register => self.register = Some(id),
        }
    }

    /// Resets the widget of `form` if one was rendered.
    pub fn reset(&self, form: CaptchaForm) {
        if let Some(id) = self.get(form) {
            if let Err(err) = reset(id) {
                tracing::warn!("Failed to reset CAPTCHA widget: {err}");
            }
        }
    }
}

impl TokenProvider for WidgetIds {
    fn token(&self, form: CaptchaForm) -> Option<String> {
        let id = self.get(form)?;
        match response(id) {
            Ok(token) => Some(token),
            Err(err) => {
                tracing::warn!("Failed to read CAPTCHA response: {err}");
                None
            }
        }
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = grecaptcha, js_name = render)]
    fn grecaptcha_render(container: &HtmlElement, params: &Object) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = grecaptcha, js_name = getResponse)]
    fn grecaptcha_get_response(id: i32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = grecaptcha, js_name = reset)]
    fn grecaptcha_reset(id: i32) -> Result<(), JsValue>;
}

fn script_error(value: JsValue) -> AppError {
    AppError::Script(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// True once the script has defined `grecaptcha.render`. The bindings above
/// throw until then.
pub fn is_loaded() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    Reflect::get(&window, &JsValue::from_str("grecaptcha"))
        .ok()
        .filter(JsValue::is_object)
        .and_then(|grecaptcha| Reflect::get(&grecaptcha, &JsValue::from_str("render")).ok())
        .is_some_and(|render| render.is_function())
}

/// Polls until the asynchronously loaded script is ready.
///
/// # Errors
/// `AppError::Script` if the script is still missing after ten seconds.
pub async fn wait_until_loaded() -> Result<(), AppError> {
    for _ in 0..LOAD_POLL_ATTEMPTS {
        if is_loaded() {
            return Ok(());
        }
        TimeoutFuture::new(LOAD_POLL_MS).await;
    }
    Err(AppError::Script(
        "reCAPTCHA script did not load".to_string(),
    ))
}

/// Renders a widget into `container`. `on_change(true)` fires when the
/// challenge succeeds, `on_change(false)` when it expires or errors.
///
/// # Errors
/// `AppError::Script` if the library is missing or rejects the parameters.
pub fn render(
    container: &HtmlElement,
    site_key: &str,
    on_change: impl Fn(bool) + 'static,
) -> Result<i32, AppError> {
    if !is_loaded() {
        return Err(AppError::Script("grecaptcha is not loaded".to_string()));
    }

    let on_change = Rc::new(on_change);
    let succeeded = {
        let on_change = Rc::clone(&on_change);
        Closure::<dyn Fn(JsValue)>::new(move |_token: JsValue| on_change(true))
    };
    let expired = {
        let on_change = Rc::clone(&on_change);
        Closure::<dyn Fn()>::new(move || on_change(false))
    };
    let errored = Closure::<dyn Fn()>::new(move || on_change(false));

    let params = Object::new();
    for (key, value) in [
        ("sitekey", &JsValue::from_str(site_key)),
        ("callback", succeeded.as_ref()),
        ("expired-callback", expired.as_ref()),
        ("error-callback", errored.as_ref()),
    ] {
        Reflect::set(&params, &JsValue::from_str(key), value).map_err(script_error)?;
    }

    let id = grecaptcha_render(container, &params).map_err(script_error)?;

    // The widget outlives this call; the page keeps it until unload.
    succeeded.forget();
    expired.forget();
    errored.forget();

    id.as_f64()
        .map(|value| value as i32)
        .ok_or_else(|| AppError::Script("grecaptcha.render returned no widget id".to_string()))
}

/// Current response token of a widget; empty until the challenge succeeds.
///
/// # Errors
/// `AppError::Script` if the library is missing or the id is unknown.
pub fn response(id: i32) -> Result<String, AppError> {
    let value = grecaptcha_get_response(id).map_err(script_error)?;
    Ok(value.as_string().unwrap_or_default())
}

/// Clears a widget so the user must solve it again.
///
/// # Errors
/// `AppError::Script` if the library is missing or the id is unknown.
pub fn reset(id: i32) -> Result<(), AppError> {
    grecaptcha_reset(id).map_err(script_error)
}
