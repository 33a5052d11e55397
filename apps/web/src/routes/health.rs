use crate::app_lib::build_info;
use crate::components::AuthCard;
use leptos::prelude::*;

/// Shows the commit the bundle was built from.
#[component]
pub fn HealthPage() -> impl IntoView {
    let commit = build_info::git_commit_hash();

    view! {
        <AuthCard>
            <div class="border-b border-slate-200 pb-3 text-slate-600 font-semibold">
                "Build Version"
            </div>
            <pre class="pt-4 text-center text-base text-slate-900">{commit}</pre>
        </AuthCard>
    }
}
