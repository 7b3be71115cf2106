//! Session persistence and the in-memory user cache.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser remembers only *who* is signed in (one localStorage key); the
//! user records themselves live in an in-memory snapshot refreshed from the
//! directory. Nothing here touches the network.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::types::User;

/// Storage key remembering which user is signed in on this device.
#[cfg(any(test, feature = "hydrate"))]
const CURRENT_USER_KEY: &str = "currentUserId";

/// Persists the current session id across page loads. Absence means anonymous.
pub trait SessionStore {
    /// The persisted user id, if any.
    fn current_id(&self) -> Option<String>;

    /// Persist `id` as the signed-in user.
    fn set_current_id(&self, id: &str);

    /// Forget the signed-in user.
    fn clear_current_id(&self);
}

impl<T: SessionStore> SessionStore for Rc<T> {
    fn current_id(&self) -> Option<String> {
        (**self).current_id()
    }

    fn set_current_id(&self, id: &str) {
        (**self).set_current_id(id);
    }

    fn clear_current_id(&self) {
        (**self).clear_current_id();
    }
}

/// [`SessionStore`] backed by browser `localStorage`.
///
/// Persistence is best-effort browser-only behavior; SSR paths safely no-op
/// so server rendering stays deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn current_id(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(CURRENT_USER_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set_current_id(&self, id: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(CURRENT_USER_KEY, id);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }

    fn clear_current_id(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(CURRENT_USER_KEY);
            }
        }
    }
}

/// In-memory [`SessionStore`] for server rendering and tests.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    current: RefCell<Option<String>>,
}

impl SessionStore for MemorySessionStore {
    fn current_id(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    fn set_current_id(&self, id: &str) {
        *self.current.borrow_mut() = Some(id.to_owned());
    }

    fn clear_current_id(&self) {
        *self.current.borrow_mut() = None;
    }
}

/// Shared snapshot of the users known to this client.
///
/// Cloning the handle shares the snapshot. `replace` swaps the whole list at
/// once, never merging, so whichever writer lands last wins.
#[derive(Clone, Debug, Default)]
pub struct SessionCache {
    users: Rc<RefCell<Vec<User>>>,
}

impl SessionCache {
    /// The current snapshot; empty until the first refresh lands.
    pub fn load(&self) -> Vec<User> {
        self.users.borrow().clone()
    }

    /// Swap the snapshot wholesale.
    pub fn replace(&self, list: Vec<User>) {
        *self.users.borrow_mut() = list;
    }

    /// Append one record to the snapshot.
    pub fn push(&self, user: User) {
        self.users.borrow_mut().push(user);
    }

    pub fn is_empty(&self) -> bool {
        self.users.borrow().is_empty()
    }
}
