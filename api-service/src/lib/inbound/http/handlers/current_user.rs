use axum::Extension;
use axum::Json;

use crate::domain::auth::models::SafeUser;

/// Return the authenticated user's safe projection.
///
/// The guard middleware has already resolved the bearer token and checked
/// the active flag; the projection arrives via request extensions.
pub async fn current_user(Extension(user): Extension<SafeUser>) -> Json<SafeUser> {
    Json(user)
}
