//! Login page: validates credentials against the cached user snapshot.
//!
//! No network call happens on submit; whatever snapshot is currently in
//! memory decides.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::AuthContext;

/// Where to send a freshly signed-in user: the decoded `next` query target,
/// restricted to site-absolute paths.
#[cfg(any(test, feature = "hydrate"))]
fn next_target(search: &str) -> String {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("next="))
        .and_then(|raw| urlencoding::decode(raw).ok())
        .map(std::borrow::Cow::into_owned)
        .filter(|target| target.starts_with('/') && !target.starts_with("//"))
        .unwrap_or_else(|| "/".to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let service = expect_context::<AuthContext>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match service.with_value(|service| service.login(&email.get(), &password.get())) {
            Ok(_) => {
                #[cfg(feature = "hydrate")]
                {
                    let target = crate::util::auth::current_location()
                        .map_or_else(|| "/".to_owned(), |(_, search)| next_target(&search));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&target);
                    }
                }
            }
            Err(err) => info.set(err.to_string()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign In"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">"Sign In"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "No account? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
