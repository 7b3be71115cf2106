//! Role-gate helpers shared by route components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: wait for auth to
//! load, then bounce disallowed visitors to `/login` carrying the original
//! location as a return target.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// True when `role` is present and listed in `allowed`.
pub fn role_allowed(role: Option<&str>, allowed: &[&str]) -> bool {
    role.is_some_and(|role| allowed.contains(&role))
}

/// True once auth has loaded and the signed-in role is not in `allowed`.
pub fn should_gate(state: &AuthState, allowed: &[&str]) -> bool {
    if state.loading {
        return false;
    }
    !role_allowed(state.user.as_ref().map(|user| user.role.as_str()), allowed)
}

/// Login route carrying `path` + `search` as a percent-encoded `next` target.
pub fn login_redirect_target(path: &str, search: &str) -> String {
    let back = format!("{path}{search}");
    format!("/login?next={}", urlencoding::encode(&back))
}

/// Current window path + search, when running in a browser.
pub(crate) fn current_location() -> Option<(String, String)> {
    #[cfg(feature = "hydrate")]
    {
        let location = web_sys::window()?.location();
        Some((location.pathname().ok()?, location.search().ok()?))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Redirect to the login page whenever auth has loaded and the signed-in role
/// is not in `allowed`. The original location rides along as `next`.
pub fn install_role_gate<F>(auth: RwSignal<AuthState>, allowed: &'static [&'static str], navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !should_gate(&state, allowed) {
            return;
        }
        let target = match current_location() {
            Some((path, search)) => login_redirect_target(&path, &search),
            None => "/login".to_owned(),
        };
        navigate(&target, NavigateOptions::default());
    });
}
