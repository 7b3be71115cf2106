//! Logistics overview page for signed-in marketplace members.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_role_gate;

#[component]
pub fn LogisticsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_role_gate(auth, &["buyer", "seller"], use_navigate());

    view! {
        <section class="page-logistics">
            <h1>"Logistics"</h1>
            <p>"Track shipments for your orders and listings."</p>
        </section>
    }
}
