use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::ads::{
    dto::{AdListResponse, CreateAdRequest, UpdateAdRequest},
    repo::{Ad, AdFilter},
    services::load_owned,
};
use crate::auth::extractors::CurrentUser;
use crate::error::ApiError;
use crate::pagination::Pagination;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ads", get(list_ads).post(create_ad))
        .route("/ads/:id", get(get_ad).put(update_ad).delete(delete_ad))
}

/// Raw query values; pagination fields stay untyped so junk input can be
/// normalized instead of rejected.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub size: Option<String>,
    pub search: Option<String>,
    pub user_id: Option<String>,
}

impl ListQuery {
    fn filter(&self) -> AdFilter {
        AdFilter {
            user_id: self.user_id.as_deref().and_then(|v| v.trim().parse().ok()),
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
        }
    }
}

#[instrument(skip(state))]
pub async fn list_ads(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<AdListResponse>, ApiError> {
    let pagination = Pagination::normalize(query.page.as_deref(), query.size.as_deref());
    let filter = query.filter();

    let items = Ad::list(&state.db, &filter, pagination.limit(), pagination.offset()).await?;
    let total = Ad::count(&state.db, &filter).await?;

    Ok(Json(AdListResponse {
        items,
        total,
        page: pagination.page,
        size: pagination.size,
        pages: pagination.pages(total),
    }))
}

#[instrument(skip(state))]
pub async fn get_ad(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Ad>, ApiError> {
    let ad = Ad::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Advertisement not found".into()))?;
    Ok(Json(ad))
}

#[instrument(skip(state, user, payload), fields(user_id = user.id))]
pub async fn create_ad(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(mut payload): Json<CreateAdRequest>,
) -> Result<(StatusCode, Json<Ad>), ApiError> {
    payload.normalize_and_validate()?;

    let ad = Ad::create(&state.db, user.id, &payload.title, &payload.description).await?;

    info!(ad_id = ad.id, user_id = user.id, "ad created");
    Ok((StatusCode::CREATED, Json(ad)))
}

#[instrument(skip(state, user, payload), fields(user_id = user.id))]
pub async fn update_ad(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(mut payload): Json<UpdateAdRequest>,
) -> Result<Json<Ad>, ApiError> {
    payload.normalize_and_validate()?;

    load_owned(&state.db, id, &user).await?;
    let ad = Ad::update(
        &state.db,
        id,
        payload.title.as_deref(),
        payload.description.as_deref(),
    )
    .await?;

    info!(ad_id = ad.id, user_id = user.id, "ad updated");
    Ok(Json(ad))
}

#[instrument(skip(state, user), fields(user_id = user.id))]
pub async fn delete_ad(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    load_owned(&state.db, id, &user).await?;
    Ad::delete(&state.db, id).await?;

    info!(ad_id = id, user_id = user.id, "ad deleted");
    Ok(StatusCode::NO_CONTENT)
}
