//! REST endpoint wrappers over [`HttpClient`].
//!
//! ERROR HANDLING
//! ==============
//! Endpoints return `Result<_, ApiError>`; the store is the only caller and
//! folds failures into `AuthState.error`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::{HttpClient, Transport};
use super::types::{Credentials, User};
use crate::util::storage::DurableStorage;

pub const LOGIN_PATH: &str = "/auth/login";

/// Authenticate via `POST /api/auth/login`.
///
/// Returns `Ok(None)` when the server accepts the login but sends no user.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server rejects it, or
/// the body has an unrecognized shape.
pub async fn login<T: Transport, S: DurableStorage>(
    client: &HttpClient<T, S>,
    credentials: &Credentials,
) -> Result<Option<User>, ApiError> {
    let response = client.post_json(LOGIN_PATH, credentials).await?;
    parse_login_body(&response.body)
}

/// Decode a login response body: a user, a `{data}` envelope, or nothing.
///
/// An object that is present but does not decode as a user is an error, never
/// a silent "no user".
fn parse_login_body(body: &str) -> Result<Option<User>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let value: serde_json::Value = serde_json::from_str(body).map_err(invalid_login_response)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Object(mut fields) => match fields.remove("data") {
            Some(data) => serde_json::from_value::<Option<User>>(data).map_err(invalid_login_response),
            None => serde_json::from_value::<User>(serde_json::Value::Object(fields))
                .map(Some)
                .map_err(invalid_login_response),
        },
        other => Err(ApiError::Unexpected { message: format!("invalid login response: unexpected {other}") }),
    }
}

fn invalid_login_response(e: serde_json::Error) -> ApiError {
    ApiError::Unexpected { message: format!("invalid login response: {e}") }
}
