use crate::{
    app_lib::{Label, Locale},
    features::page::Tab,
};
use leptos::prelude::*;

/// Centred card framing the login and register panels.
#[component]
pub fn AuthCard(children: Children) -> impl IntoView {
    view! {
        <main class="min-h-screen flex items-center justify-center bg-slate-100 px-6 py-10 dark:bg-gray-900">
            <div class="w-full max-w-md rounded-2xl border border-slate-200 bg-white/90 p-6 shadow-[0_20px_60px_-40px_rgba(15,23,42,0.35)] backdrop-blur sm:p-8">
                {children()}
            </div>
        </main>
    }
}

#[component]
pub fn TabBar(
    #[prop(into)] active: Signal<Tab>,
    locale: Locale,
    #[prop(into)] on_select: Callback<Tab>,
) -> impl IntoView {
    let tab_button = move |tab: Tab, label: Label| {
        let selected = move || active.get() == tab;
        view! {
            <button
                type="button"
                role="tab"
                class="flex-1 rounded-lg px-4 py-2 text-sm font-semibold transition-colors"
                class:bg-white=selected
                class:text-slate-900=selected
                class:shadow=selected
                class:text-slate-500=move || !selected()
                aria-selected=move || if selected() { "true" } else { "false" }
                on:click=move |_| on_select.run(tab)
            >
                {label.text(locale)}
            </button>
        }
    };

    view! {
        <div class="mb-6 flex gap-1 rounded-xl bg-slate-100 p-1" role="tablist">
            {tab_button(Tab::Login, Label::LoginTab)}
            {tab_button(Tab::Register, Label::RegisterTab)}
        </div>
    }
}
