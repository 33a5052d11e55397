mod auth;
mod health;
mod login;
mod not_found;
mod register;

pub(crate) use auth::AuthPage;
pub(crate) use health::HealthPage;
pub(crate) use not_found::NotFoundPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=AuthPage />
            <Route path=path!("/login") view=AuthPage />
            <Route path=path!("/register") view=AuthPage />
            <Route path=path!("/signup") view=AuthPage />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
