//! Sign-in page: a tab bar over the login and register panels with one shared
//! result banner. Both panels stay mounted while hidden so each keeps its
//! CAPTCHA widget.

use super::{login::LoginPanel, register::RegisterPanel};
use crate::{
    app_lib::{Locale, config::AppConfig},
    components::{AuthCard, NoticeBanner, Spinner, TabBar},
    features::{
        captcha::{CaptchaGate, CaptchaState, widget::WidgetIds},
        page::{Notice, Tab},
        register::FieldErrors,
    },
};
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use wasm_bindgen::JsValue;

/// State shared by both panels.
#[derive(Clone, Copy)]
pub(crate) struct PageState {
    pub tab: RwSignal<Tab>,
    pub notice: RwSignal<Option<Notice>>,
    pub field_errors: RwSignal<FieldErrors>,
    pub captcha: RwSignal<CaptchaState>,
    pub widgets: RwSignal<WidgetIds>,
    /// A registration request is in flight.
    pub busy: RwSignal<bool>,
}

impl PageState {
    fn new(initial: Tab) -> Self {
        Self {
            tab: RwSignal::new(initial),
            notice: RwSignal::new(None),
            field_errors: RwSignal::new(FieldErrors::default()),
            captcha: RwSignal::new(CaptchaState::default()),
            widgets: RwSignal::new(WidgetIds::default()),
            busy: RwSignal::new(false),
        }
    }

    /// Hides the banner and every field error.
    pub fn clear_messages(self) {
        self.notice.set(None);
        self.field_errors.set(FieldErrors::default());
    }

    pub fn show(self, notice: Notice) {
        self.notice.set(Some(notice));
    }

    fn select(self, tab: Tab) {
        self.tab.set(tab);
        self.clear_messages();
        replace_location(tab.path());
    }
}

/// Keeps the address bar on the active tab without a router navigation, which
/// would remount the page and its CAPTCHA widgets.
fn replace_location(path: &str) {
    let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
        return;
    };
    if history
        .replace_state_with_url(&JsValue::NULL, "", Some(path))
        .is_err()
    {
        tracing::debug!("Unable to update location to {path}");
    }
}

fn set_document_lang(locale: Locale) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        if root.set_attribute("lang", locale.html_lang()).is_err() {
            tracing::debug!("Unable to set document language");
        }
    }
}

/// The initial tab follows the path: `/register` and `/signup` open the
/// register form, anything else the login form.
#[component]
pub fn AuthPage() -> impl IntoView {
    let initial = Tab::from_path(&use_location().pathname.get_untracked());
    let config = AppConfig::load();
    let locale = config.locale;
    let gate = CaptchaGate::from_site_key(&config.recaptcha_site_key);
    let state = PageState::new(initial);

    set_document_lang(locale);
    if !gate.is_required() {
        tracing::info!("No reCAPTCHA site key configured; forms submit without a challenge");
    }

    view! {
        <AuthCard>
            <TabBar
                active=state.tab
                locale=locale
                on_select=Callback::new(move |tab: Tab| state.select(tab))
            />
            <div role="tabpanel" class:hidden=move || state.tab.get() != Tab::Login>
                <LoginPanel
                    state=state
                    gate=gate
                    site_key=config.recaptcha_site_key.clone()
                    login_url=config.login_url.clone()
                    locale=locale
                />
            </div>
            <div role="tabpanel" class:hidden=move || state.tab.get() != Tab::Register>
                <RegisterPanel
                    state=state
                    gate=gate
                    site_key=config.recaptcha_site_key.clone()
                    locale=locale
                />
            </div>
            <Show when=move || state.busy.get()>
                <div class="mt-4">
                    <Spinner />
                </div>
            </Show>
            <NoticeBanner notice=state.notice />
        </AuthCard>
    }
}
