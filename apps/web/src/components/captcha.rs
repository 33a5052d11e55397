//! Container for one reCAPTCHA widget. Rendering waits for the script, which
//! `index.html` loads asynchronously.

use crate::features::captcha::widget;
use leptos::{html, prelude::*, task::spawn_local};

#[component]
pub fn CaptchaWidget(
    site_key: String,
    /// Receives the widget id once rendered.
    #[prop(into)]
    on_render: Callback<i32>,
    /// `true` when the challenge succeeds, `false` when it expires or errors.
    #[prop(into)]
    on_change: Callback<bool>,
) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let rendered = StoredValue::new(false);

    Effect::new(move |_| {
        let Some(element) = container.get() else {
            return;
        };
        if rendered.get_value() {
            return;
        }
        rendered.set_value(true);

        let site_key = site_key.clone();
        spawn_local(async move {
            if let Err(err) = widget::wait_until_loaded().await {
                tracing::error!("CAPTCHA unavailable: {err}");
                return;
            }
            match widget::render(&element, &site_key, move |solved| on_change.run(solved)) {
                Ok(id) => on_render.run(id),
                Err(err) => tracing::error!("Failed to render CAPTCHA: {err}"),
            }
        });
    });

    view! { <div class="flex justify-center" node_ref=container></div> }
}
