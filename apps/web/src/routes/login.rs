//! Login tab. Credentials are entered on the external provider, so this panel
//! only gates the popup behind the login challenge and opens it.

use super::auth::PageState;
use crate::{
    app_lib::{Label, Locale, Message},
    components::{Button, CaptchaWidget},
    features::{
        captcha::{CaptchaForm, CaptchaGate},
        login::{PopupOutcome, launcher::open_login_popup},
        page::Notice,
    },
};
use leptos::{ev::SubmitEvent, prelude::*};

#[component]
pub fn LoginPanel(
    state: PageState,
    gate: CaptchaGate,
    site_key: String,
    login_url: String,
    locale: Locale,
) -> impl IntoView {
    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        state.clear_messages();

        let captcha = state.captcha.get_untracked();
        let widgets = state.widgets.get_untracked();
        if gate.check(&captcha, CaptchaForm::Login, &widgets).is_err() {
            state.show(Notice::error(Message::CaptchaRequired.text(locale)));
            return;
        }

        match open_login_popup(&login_url) {
            Ok(PopupOutcome::Opened) => {}
            Ok(PopupOutcome::Blocked) => {
                state.show(Notice::error(Message::PopupBlocked.text(locale)));
            }
            Err(err) => {
                tracing::error!("Unable to open login popup: {err}");
                state.show(Notice::error(Message::Unreachable.text(locale)));
            }
        }
    };

    view! {
        <form on:submit=on_submit novalidate>
            <p class="text-sm text-slate-500">{Label::LoginHint.text(locale)}</p>
            {gate
                .is_required()
                .then(|| {
                    view! {
                        <div class="mt-4">
                            <CaptchaWidget
                                site_key=site_key
                                on_render=Callback::new(move |id: i32| {
                                    state.widgets.update(|ids| ids.set(CaptchaForm::Login, id));
                                })
                                on_change=Callback::new(move |solved: bool| {
                                    state.captcha.update(|flags| flags.set(CaptchaForm::Login, solved));
                                })
                            />
                        </div>
                    }
                })}
            <div class="mt-6">
                <Button button_type="submit" disabled=state.busy>
                    {Label::LoginButton.text(locale)}
                </Button>
            </div>
        </form>
    }
}
