use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::auth::jwt::JwtKeys;
use crate::auth::repo::User;
use crate::error::ApiError;
use crate::state::AppState;

/// Pulls the token out of an `Authorization` header value. Absent header,
/// non-Bearer scheme or an empty value all resolve to anonymous.
pub(crate) fn bearer_token(header: Option<&str>) -> Option<&str> {
    let value = header?;
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))?
        .trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Authenticated caller, resolved against the users table. Fails closed
/// with 401 when the token is absent, invalid, expired, or names a user
/// that no longer exists.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let token = bearer_token(header).ok_or(ApiError::AuthenticationRequired)?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|e| {
            warn!(error = %e, "token rejected");
            ApiError::AuthenticationRequired
        })?;

        let user = User::find_by_id(&state.db, claims.user_id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = claims.user_id, "token for deleted user");
                ApiError::AuthenticationRequired
            })?;

        Ok(CurrentUser(user))
    }
}
