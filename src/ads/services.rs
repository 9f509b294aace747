use sqlx::PgPool;

use crate::ads::repo::Ad;
use crate::auth::repo::User;
use crate::error::ApiError;

/// Loads the ad and enforces ownership. A missing ad and someone else's
/// ad both come back as the same 404, so callers cannot tell which ids
/// exist.
pub async fn load_owned(db: &PgPool, id: i64, user: &User) -> Result<Ad, ApiError> {
    let ad = Ad::find_by_id(db, id).await?;
    check_owner(ad, id, user.id)
}

/// Pure ownership decision: only the creator gets the ad back, every
/// other outcome is the same `NotFound`.
fn check_owner(ad: Option<Ad>, id: i64, user_id: i64) -> Result<Ad, ApiError> {
    let ad = ad.ok_or_else(not_found)?;
    if ad.user_id != user_id {
        tracing::warn!(ad_id = id, user_id, owner_id = ad.user_id, "ownership denied");
        return Err(not_found());
    }
    Ok(ad)
}

fn not_found() -> ApiError {
    ApiError::NotFound("Advertisement not found".into())
}
