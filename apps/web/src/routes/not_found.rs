//! 404 page for unknown routes.

use crate::components::AuthCard;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AuthCard>
            <div class="flex flex-col items-center text-center">
                <div class="relative">
                    <h1 class="text-9xl font-black text-gray-100 select-none">"404"</h1>
                    <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-2xl font-bold text-gray-900 whitespace-nowrap">
                        "Page not found"
                    </p>
                </div>
                <div class="mt-6 flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/login"
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 transition-all"
                    >
                        "Sign in"
                    </A>
                    <button
                        on:click=move |_| {
                            if let Some(history) = web_sys::window()
                                .and_then(|window| window.history().ok())
                            {
                                let _ = history.back();
                            }
                        }
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 hover:text-blue-700 focus:z-10 focus:ring-4 focus:ring-gray-100 transition-all"
                    >
                        "Go Back"
                    </button>
                </div>
            </div>
        </AuthCard>
    }
}
