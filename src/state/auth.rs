//! Auth orchestration over the session store, user cache, and directory API.
//!
//! DESIGN
//! ======
//! Login and duplicate-email checks run against whatever user snapshot is in
//! memory right now; only registration ever writes to the directory, and it
//! does so through a task the caller drives. Callers therefore get an instant
//! answer, and the session settles whenever the outstanding requests land.
//! There are no retries and no ordering guarantees between those requests.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::net::api::UserDirectory;
use crate::net::types::{NewUser, User};
use crate::state::session::{SessionCache, SessionStore};

/// Authentication state tracking the current user and loading status.
///
/// Held in an `RwSignal` provided via context; route guards and user-aware
/// components read it to coordinate redirects and identity-dependent
/// rendering.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

/// Errors raised synchronously by [`AuthService`] entry points.
///
/// Directory failures never appear here: the asynchronous paths swallow them
/// and report through logging only.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// A registration field was empty after trimming.
    #[error("all fields are required")]
    MissingFields,
    /// The email already exists in the local user snapshot.
    #[error("email already registered")]
    EmailTaken,
    /// No cached user matched the supplied credentials.
    #[error("invalid email or password")]
    InvalidCredentials,
}

type Listener = Box<dyn Fn(Option<User>)>;
type Listeners = Rc<RefCell<Vec<Listener>>>;

/// Session and credential operations for the current browser context.
///
/// One instance is built per page lifecycle and shared by reference; the
/// cache and listener list use `Rc`/`RefCell` because everything runs on the
/// single browser thread.
pub struct AuthService<D, S> {
    directory: Rc<D>,
    store: Rc<S>,
    cache: SessionCache,
    listeners: Listeners,
}

impl<D, S> AuthService<D, S>
where
    D: UserDirectory + 'static,
    S: SessionStore + 'static,
{
    pub fn new(directory: D, store: S) -> Self {
        Self {
            directory: Rc::new(directory),
            store: Rc::new(store),
            cache: SessionCache::default(),
            listeners: Rc::default(),
        }
    }

    /// Observe session changes: sign-in, sign-out, and snapshot refreshes.
    /// The listener receives the freshly resolved current user.
    pub fn subscribe(&self, listener: impl Fn(Option<User>) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// The signed-in user, if the persisted id resolves against the snapshot.
    ///
    /// Returns `None` while anonymous, but also when the cache has not been
    /// refreshed yet or the user was removed remotely.
    pub fn current_user(&self) -> Option<User> {
        resolve_user(&self.cache, &self.store)
    }

    /// The signed-in user's role, if any.
    pub fn current_role(&self) -> Option<String> {
        self.current_user().map(|user| user.role)
    }

    /// Validate credentials against the current snapshot and sign in.
    ///
    /// Emails compare trimmed and case-insensitively, passwords verbatim.
    /// No network call happens here; an unrefreshed cache simply cannot
    /// match.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] when nothing in the snapshot
    /// matches.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = normalize_email(email);
        let users = self.cache.load();
        if users.is_empty() {
            log::warn!("login: user cache is empty; the directory may not have loaded yet");
        }
        for user in users {
            if normalize_email(&user.email) == email && user.password == password {
                self.store.set_current_id(&user.id);
                notify(&self.cache, &self.store, &self.listeners);
                return Ok(user);
            }
        }
        Err(AuthError::InvalidCredentials)
    }

    /// Forget the persisted session. No network call.
    pub fn logout(&self) {
        self.store.clear_current_id();
        notify(&self.cache, &self.store, &self.listeners);
    }

    /// Validate and normalize a registration, then hand back the create task.
    ///
    /// The synchronous part checks the fields and scans the current snapshot
    /// for a duplicate email (best effort; the snapshot is not re-checked
    /// once the task runs). The returned task POSTs the payload and, on a
    /// created record with an id, appends it to the snapshot and signs the
    /// new user in. Directory failures are logged and leave state unchanged;
    /// the caller is never notified of them.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingFields`] when any field is empty after trimming,
    /// [`AuthError::EmailTaken`] when the email is already in the snapshot.
    pub fn register(&self, form: NewUser) -> Result<impl Future<Output = ()> + use<D, S>, AuthError> {
        let name = form.name.trim().to_owned();
        let email = normalize_email(&form.email);
        if name.is_empty() || email.is_empty() || form.password.is_empty() || form.role.is_empty() {
            return Err(AuthError::MissingFields);
        }
        if self.cache.load().iter().any(|user| normalize_email(&user.email) == email) {
            return Err(AuthError::EmailTaken);
        }

        let payload = NewUser {
            name,
            email,
            password: form.password,
            role: form.role,
        };
        let directory = Rc::clone(&self.directory);
        let store = Rc::clone(&self.store);
        let cache = self.cache.clone();
        let listeners = Rc::clone(&self.listeners);
        Ok(async move {
            match directory.create(&payload).await {
                Ok(created) => {
                    if created.id.is_empty() {
                        log::warn!("register: directory returned a user without an id");
                        return;
                    }
                    let id = created.id.clone();
                    cache.push(created);
                    store.set_current_id(&id);
                    notify(&cache, &store, &listeners);
                }
                Err(err) => log::error!("register: failed to create user: {err}"),
            }
        })
    }

    /// Reload the snapshot from the directory, replacing it wholesale.
    ///
    /// A refresh that completes after an optimistic append silently discards
    /// the append; last write wins. On failure the snapshot keeps its
    /// previous value and the error is logged.
    pub fn refresh(&self) -> impl Future<Output = ()> + 'static {
        let directory = Rc::clone(&self.directory);
        let store = Rc::clone(&self.store);
        let cache = self.cache.clone();
        let listeners = Rc::clone(&self.listeners);
        async move {
            match directory.get_all().await {
                Ok(users) => {
                    cache.replace(users);
                    notify(&cache, &store, &listeners);
                }
                Err(err) => log::error!("auth: failed to load users from the directory: {err}"),
            }
        }
    }
}

fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn resolve_user<S: SessionStore>(cache: &SessionCache, store: &S) -> Option<User> {
    let id = store.current_id()?;
    cache.load().into_iter().find(|user| user.id == id)
}

fn notify<S: SessionStore>(cache: &SessionCache, store: &S, listeners: &RefCell<Vec<Listener>>) {
    let user = resolve_user(cache, store);
    for listener in listeners.borrow().iter() {
        listener(user.clone());
    }
}
