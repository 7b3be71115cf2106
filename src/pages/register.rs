//! Registration page: optimistic create against the user directory.
//!
//! DESIGN
//! ======
//! Submit returns instantly; the create task runs in the background and the
//! page leaves once the session resolves. Until then the visitor is not
//! signed in, and a failed create only ever shows up in the console.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AuthContext;
use crate::net::types::NewUser;
use crate::state::auth::AuthState;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let service = expect_context::<AuthContext>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new("buyer".to_owned());
    let info = RwSignal::new(String::new());
    let navigate = use_navigate();

    // Leave once the create lands and the session resolves.
    Effect::new(move || {
        if auth.get().user.is_some() {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = NewUser {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            role: role.get(),
        };
        match service.with_value(|service| service.register(form)) {
            Ok(task) => {
                info.set("Creating your account...".to_owned());
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(task);
                #[cfg(not(feature = "hydrate"))]
                let _ = task;
            }
            Err(err) => info.set(err.to_string()),
        }
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1>"Create Account"</h1>
                <form class="register-form" on:submit=on_submit>
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        class="register-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="buyer">"Buyer"</option>
                        <option value="seller">"Seller"</option>
                    </select>
                    <button class="register-button" type="submit">"Register"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="register-message">{move || info.get()}</p>
                </Show>
                <p class="register-card__subtitle">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
