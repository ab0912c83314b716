/**
 * Profile Handler
 *
 * Returns the currently authenticated user. The heavy lifting (token
 * verification, user lookup) happens in the `CurrentUser` extractor.
 */

use axum::response::Json;

use crate::auth::gate::CurrentUser;
use crate::auth::handlers::types::ProfileResponse;

/// GET /profile - current user info, no sensitive fields.
pub async fn profile(CurrentUser(principal): CurrentUser) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        id: principal.user.id,
        username: principal.user.username,
    })
}
