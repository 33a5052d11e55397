//! Labelled input with an inline error line. The error is cleared by the
//! caller when the input gains focus.

use leptos::prelude::*;

const INPUT_CLASS: &str = "w-full rounded-xl border bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200";

#[component]
pub fn TextField(
    /// DOM id of the input; the error line uses `{id}-error`.
    id: String,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(into)] on_focus: Callback<()>,
) -> impl IntoView {
    let error_id = format!("{id}-error");
    let described_by = error_id.clone();
    let has_error = move || error.get().is_some();

    view! {
        <div>
            <label class="block mb-2 text-sm font-medium text-slate-700" for=id.clone()>
                {label}
            </label>
            <input
                id=id
                type=input_type.unwrap_or("text")
                class=INPUT_CLASS
                class:border-slate-200=move || !has_error()
                class:border-red-400=has_error
                autocomplete=autocomplete.unwrap_or("off")
                aria-invalid=move || if has_error() { "true" } else { "false" }
                aria-describedby=described_by
                prop:value=move || value.get()
                on:input=move |event| value.set(event_target_value(&event))
                on:focus=move |_| on_focus.run(())
            />
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <p id=error_id.clone() class="mt-1 text-xs text-red-600">
                                {message}
                            </p>
                        }
                    })
            }}
        </div>
    }
}
