//! Reusable view components shared across pages.

pub mod auth_nav;
