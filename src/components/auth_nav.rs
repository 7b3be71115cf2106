//! Top navigation reacting to the signed-in session.
//!
//! Marketplace, upload, and logistics links stay visible for everyone; the
//! pages behind them enforce role behavior.

use leptos::prelude::*;

use crate::app::AuthContext;
use crate::state::auth::AuthState;

#[component]
pub fn AuthNav() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let service = expect_context::<AuthContext>();

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        service.with_value(|service| service.logout());
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    view! {
        <nav class="site-nav">
            <a class="site-nav__link" href="/">"Marketplace"</a>
            <a class="site-nav__link" href="/upload">"Upload"</a>
            <a class="site-nav__link" href="/logistics">"Logistics"</a>
            <span class="site-nav__spacer"></span>
            <Show when=move || auth.get().user.is_none()>
                <a class="site-nav__link" href="/login">"Login"</a>
                <a class="site-nav__link" href="/register">"Register"</a>
            </Show>
            <Show when=move || auth.get().user.is_some()>
                <span class="site-nav__user">
                    {move || auth.get().user.map(|user| user.name).unwrap_or_default()}
                </span>
                <a class="site-nav__link" href="/" on:click=on_logout>
                    "Logout"
                </a>
            </Show>
        </nav>
    }
}
