//! Networking modules for the user-directory REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the directory contract and its HTTP implementation, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;
