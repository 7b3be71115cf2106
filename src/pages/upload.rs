//! Listing upload page, restricted to sellers.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_role_gate;

#[component]
pub fn UploadPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_role_gate(auth, &["seller"], use_navigate());

    view! {
        <section class="page-upload">
            <h1>"Upload a Listing"</h1>
            <p>"Add products to the marketplace."</p>
        </section>
    }
}
