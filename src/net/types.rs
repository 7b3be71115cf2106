//! Wire DTOs for the user-directory API.
//!
//! DESIGN
//! ======
//! These types mirror the directory's JSON records so serde round-trips stay
//! lossless. Some deployments hand out integer ids, so `User::id` tolerates
//! both and is always held as a string on the client.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A user record as returned by the user-directory API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Directory-assigned identifier, opaque to the client.
    #[serde(deserialize_with = "deserialize_id_string")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Case-insensitive unique key for login and duplicate checks.
    pub email: String,
    /// Stored as plain text by the directory; compared verbatim at login.
    pub password: String,
    /// Open role set (e.g. `"buyer"`, `"seller"`).
    pub role: String,
}

/// Payload for creating a user record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

fn deserialize_id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or numeric id")),
    }
}
