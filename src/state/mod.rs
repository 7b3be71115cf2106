//! Session and auth state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns persistence and the user snapshot; `auth` orchestrates them
//! against the directory API and is the only writer of session state.

pub mod auth;
pub mod session;
