use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::auth::{
    dto::{LoginRequest, PublicUser, RegisterRequest, TokenResponse},
    extractors::CurrentUser,
    jwt::JwtKeys,
    password::{hash_password, verify_password},
    repo::User,
};
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<PublicUser>), ApiError> {
    payload.normalize_and_validate()?;

    if User::find_by_username(&state.db, &payload.username)
        .await?
        .is_some()
    {
        warn!(username = %payload.username, "username already taken");
        return Err(ApiError::Conflict("Username already registered".into()));
    }
    if User::find_by_email(&state.db, &payload.email)
        .await?
        .is_some()
    {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict("Email already registered".into()));
    }

    let hash = hash_password(&payload.password)?;

    // The unique constraints still catch a concurrent duplicate; the
    // 23505 mapping turns that into the same 409.
    let user = User::create(&state.db, &payload.username, &payload.email, &hash).await?;

    info!(user_id = user.id, username = %user.username, "user registered");
    Ok((StatusCode::CREATED, Json(PublicUser::from(user))))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let username = payload.username.trim();

    // Unknown user and wrong password are indistinguishable to the caller
    let user = match User::find_by_username(&state.db, username).await? {
        Some(u) => u,
        None => {
            warn!(username = %username, "login for unknown username");
            return Err(invalid_credentials());
        }
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = user.id, "login with invalid password");
        return Err(invalid_credentials());
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user)?;

    info!(user_id = user.id, username = %user.username, "user logged in");
    Ok(Json(TokenResponse::bearer(token)))
}

fn invalid_credentials() -> ApiError {
    ApiError::NotFound("Invalid username or password".into())
}

#[instrument(skip(user), fields(user_id = user.id))]
pub async fn me(CurrentUser(user): CurrentUser) -> Json<PublicUser> {
    Json(PublicUser::from(user))
}
