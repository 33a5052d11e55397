//! Register tab. The submitter does the work; this view only feeds it the
//! current input values and applies the outcome to the page.

use super::auth::PageState;
use crate::{
    app_lib::{Label, Locale, Message},
    components::{Button, CaptchaWidget, TextField},
    features::{
        captcha::{CaptchaForm, CaptchaGate},
        page::Notice,
        register::{
            Field, RegistrationForm, SubmitOutcome, client::HttpRegisterTransport, submit,
        },
    },
};
use leptos::{ev::SubmitEvent, prelude::*};

#[derive(Clone, Copy)]
struct FormInputs {
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    username: RwSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    confirm_password: RwSignal<String>,
}

impl FormInputs {
    fn new() -> Self {
        Self {
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            username: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            confirm_password: RwSignal::new(String::new()),
        }
    }

    fn value(self, field: Field) -> RwSignal<String> {
        match field {
            Field::FirstName => self.first_name,
            Field::LastName => self.last_name,
            Field::Username => self.username,
            Field::Email => self.email,
            Field::Password => self.password,
            Field::ConfirmPassword => self.confirm_password,
        }
    }

    fn snapshot(self) -> RegistrationForm {
        RegistrationForm {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            username: self.username.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
        }
    }

    fn clear(self) {
        for field in Field::ALL {
            self.value(field).set(String::new());
        }
    }
}

/// Label, input type and autocomplete hint of a field.
fn presentation(field: Field) -> (Label, &'static str, &'static str) {
    match field {
        Field::FirstName => (Label::FirstName, "text", "given-name"),
        Field::LastName => (Label::LastName, "text", "family-name"),
        Field::Username => (Label::Username, "text", "username"),
        Field::Email => (Label::Email, "email", "email"),
        Field::Password => (Label::Password, "password", "new-password"),
        Field::ConfirmPassword => (Label::ConfirmPassword, "password", "new-password"),
    }
}

#[component]
pub fn RegisterPanel(
    state: PageState,
    gate: CaptchaGate,
    site_key: String,
    locale: Locale,
) -> impl IntoView {
    let inputs = FormInputs::new();

    let register_action = Action::new_local(move |form: &RegistrationForm| {
        let form = form.clone();
        let captcha = state.captcha.get_untracked();
        let widgets = state.widgets.get_untracked();
        async move {
            submit(
                &HttpRegisterTransport,
                gate,
                &captcha,
                &widgets,
                &form,
                locale,
            )
            .await
        }
    });

    Effect::new(move |_| state.busy.set(register_action.pending().get()));

    Effect::new(move |_| {
        let Some(outcome) = register_action.value().get() else {
            return;
        };
        if outcome.clears_form() {
            inputs.clear();
            state
                .captcha
                .update(|flags| flags.reset(CaptchaForm::Register));
            state.widgets.get_untracked().reset(CaptchaForm::Register);
        }
        match outcome {
            SubmitOutcome::Invalid(errors) => state.field_errors.set(errors),
            SubmitOutcome::CaptchaRequired => {
                state.show(Notice::error(Message::CaptchaRequired.text(locale)));
            }
            SubmitOutcome::Registered { message } => state.show(Notice::success(message)),
            SubmitOutcome::Rejected { message } => state.show(Notice::error(message)),
            SubmitOutcome::Unreachable => {
                state.show(Notice::error(Message::Unreachable.text(locale)));
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if register_action.pending().get_untracked() {
            return;
        }
        state.clear_messages();
        register_action.dispatch(inputs.snapshot());
    };

    let fields = Field::ALL
        .into_iter()
        .map(|field| {
            let (label, input_type, autocomplete) = presentation(field);
            view! {
                <TextField
                    id=format!("register-{}", field.id())
                    label=label.text(locale)
                    input_type=input_type
                    autocomplete=autocomplete
                    value=inputs.value(field)
                    error=Signal::derive(move || {
                        state.field_errors.get().get(field).map(|message| message.text(locale))
                    })
                    on_focus=Callback::new(move |()| {
                        state.field_errors.update(|errors| errors.clear(field));
                    })
                />
            }
        })
        .collect_view();

    view! {
        <form on:submit=on_submit novalidate>
            <div class="space-y-4">{fields}</div>
            {gate
                .is_required()
                .then(|| {
                    view! {
                        <div class="mt-4">
                            <CaptchaWidget
                                site_key=site_key
                                on_render=Callback::new(move |id: i32| {
                                    state.widgets.update(|ids| ids.set(CaptchaForm::Register, id));
                                })
                                on_change=Callback::new(move |solved: bool| {
                                    state
                                        .captcha
                                        .update(|flags| flags.set(CaptchaForm::Register, solved));
                                })
                            />
                        </div>
                    }
                })}
            <div class="mt-6">
                <Button button_type="submit" disabled=state.busy>
                    {Label::RegisterButton.text(locale)}
                </Button>
            </div>
        </form>
    }
}
