use actix_web::HttpResponse;

use crate::dto::user::UserResponse;
use crate::middleware::auth::AuthContext;

/// Handler for GET /user/me
///
/// Returns the profile of the authenticated principal. The
/// [`AuthContext`] extractor rejects the request with 401 when the gate
/// attached no principal.
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(UserResponse::from(&auth.user))
}
