//! REST client for the user-directory API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`DirectoryError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The directory is the source of truth but is never awaited on hot UI paths;
//! callers that fire these requests in the background log failures instead of
//! surfacing them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::rc::Rc;

use super::types::{NewUser, User};

#[cfg(any(test, feature = "hydrate"))]
const USERS_ENDPOINT: &str = "/api/users";

/// Failure modes when talking to the user directory.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// The request never completed (network, CORS, aborted).
    #[error("directory request failed: {0}")]
    Transport(String),
    /// The directory answered with a non-OK status.
    #[error("directory returned status {0}")]
    Status(u16),
    /// The body did not decode into the expected record shape.
    #[error("malformed directory response: {0}")]
    Malformed(String),
    /// Not running in a browser; there is no directory to reach.
    #[error("user directory is not available outside the browser")]
    Unavailable,
}

/// The remote user directory: list every known user, create a new one.
#[allow(async_fn_in_trait)]
pub trait UserDirectory {
    /// Fetch all user records.
    async fn get_all(&self) -> Result<Vec<User>, DirectoryError>;

    /// Create a user record; the directory assigns the id.
    async fn create(&self, payload: &NewUser) -> Result<User, DirectoryError>;
}

impl<T: UserDirectory> UserDirectory for Rc<T> {
    async fn get_all(&self) -> Result<Vec<User>, DirectoryError> {
        (**self).get_all().await
    }

    async fn create(&self, payload: &NewUser) -> Result<User, DirectoryError> {
        (**self).create(payload).await
    }
}

/// [`UserDirectory`] backed by the site's REST API.
#[derive(Clone, Copy, Debug, Default)]
pub struct RestUserDirectory;

impl UserDirectory for RestUserDirectory {
    async fn get_all(&self) -> Result<Vec<User>, DirectoryError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(USERS_ENDPOINT)
                .send()
                .await
                .map_err(|e| DirectoryError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(DirectoryError::Status(resp.status()));
            }
            resp.json::<Vec<User>>()
                .await
                .map_err(|e| DirectoryError::Malformed(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(DirectoryError::Unavailable)
        }
    }

    async fn create(&self, payload: &NewUser) -> Result<User, DirectoryError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(USERS_ENDPOINT)
                .json(payload)
                .map_err(|e| DirectoryError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| DirectoryError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(DirectoryError::Status(resp.status()));
            }
            resp.json::<User>()
                .await
                .map_err(|e| DirectoryError::Malformed(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(DirectoryError::Unavailable)
        }
    }
}
