//! Application shell: context wiring, the initial directory refresh, routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `AuthService` is built per page lifecycle and shared through context;
//! an `RwSignal<AuthState>` mirrors it for reactive consumers. Nothing else
//! in the crate holds session state.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::auth_nav::AuthNav;
use crate::net::api::RestUserDirectory;
use crate::pages::login::LoginPage;
use crate::pages::logistics::LogisticsPage;
use crate::pages::marketplace::MarketplacePage;
use crate::pages::register::RegisterPage;
use crate::pages::upload::UploadPage;
use crate::state::auth::{AuthService, AuthState};
use crate::state::session::BrowserSessionStore;

/// Auth service as wired for the browser build.
pub type AppAuthService = AuthService<RestUserDirectory, BrowserSessionStore>;

/// Context handle for the shared auth service. The service is single-threaded
/// (`Rc`/`RefCell` inside), so the value lives in local storage and only the
/// `Copy` handle crosses into views.
pub type AuthContext = StoredValue<AppAuthService, LocalStorage>;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { user: None, loading: true });
    let service = AuthService::new(RestUserDirectory, BrowserSessionStore);
    service.subscribe(move |user| auth.set(AuthState { user, loading: false }));
    let service: AuthContext = StoredValue::new_local(service);

    provide_context(auth);
    provide_context(service);

    // One refresh per page load, unordered relative to every other operation.
    // `loading` flips off when it settles either way.
    #[cfg(feature = "hydrate")]
    {
        let refresh = service.with_value(|service| service.refresh());
        leptos::task::spawn_local(async move {
            refresh.await;
            auth.set(AuthState {
                user: service.with_value(|service| service.current_user()),
                loading: false,
            });
        });
    }

    view! {
        <Title text="Marketfront"/>
        <Stylesheet id="site" href="/assets/site.css"/>
        <Router>
            <AuthNav/>
            <main class="page">
                <Routes fallback=|| view! { <p class="page__missing">"Not found."</p> }>
                    <Route path=path!("/") view=MarketplacePage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/register") view=RegisterPage/>
                    <Route path=path!("/upload") view=UploadPage/>
                    <Route path=path!("/logistics") view=LogisticsPage/>
                </Routes>
            </main>
        </Router>
    }
}
