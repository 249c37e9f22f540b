//! Wire-protocol DTOs for the client/server boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by `POST /api/auth/login`.
///
/// Only `_id` and `email` are required; profile fields the server omits
/// deserialize as `None`/`false`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier (Mongo-style `_id`).
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_optional_u32_from_number")]
    pub age: Option<u32>,
    /// Profile photo URL, if uploaded.
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "deserialize_bool_or_null")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "deserialize_bool_or_null")]
    pub is_verified: bool,
}

/// Login form payload sent as the JSON request body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Accepts `null` as `false`.
fn deserialize_bool_or_null<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Accepts `null`, integers, and whole floats (`30.0`).
fn deserialize_optional_u32_from_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return u32::try_from(int)
                    .map(Some)
                    .map_err(|_| D::Error::custom(format!("value {int} out of range for u32")));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= f64::from(u32::MAX)
            {
                return Ok(Some(float as u32));
            }
            Err(D::Error::custom(format!("expected non-negative whole number, got {number}")))
        }
        other => Err(D::Error::custom(format!("expected number, got {other}"))),
    }
}
