//! Public marketplace landing page.

use leptos::prelude::*;

#[component]
pub fn MarketplacePage() -> impl IntoView {
    view! {
        <section class="page-marketplace">
            <h1>"Marketplace"</h1>
            <p>"Browse listings from every seller."</p>
        </section>
    }
}
