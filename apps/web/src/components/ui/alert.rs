//! Result banner below the forms. Messages come from the localized catalogue or
//! a sanitized server reply, never from request data.

use crate::features::page::{Notice, Tone};
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
}

impl From<Tone> for AlertKind {
    fn from(tone: Tone) -> Self {
        match tone {
            Tone::Success => Self::Success,
            Tone::Error => Self::Error,
        }
    }
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200"
        }
        AlertKind::Success => {
            "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200"
        }
    };
    let live = if kind == AlertKind::Error { "assertive" } else { "polite" };

    view! { <div class=class role="alert" aria-live=live>{message}</div> }
}

/// Renders the current notice, if any.
#[component]
pub fn NoticeBanner(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            view! {
                <div class="mt-4">
                    <Alert kind=notice.tone.into() message=notice.message />
                </div>
            }
        })
    }
}
