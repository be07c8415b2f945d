//! Post-action redirect targets.
//!
//! Success URLs and the two authorization bounces live here so every
//! handler applies the same navigation rules explicitly instead of
//! inheriting them.

use actix_web::HttpResponse;
use actix_web::http::header;
use uuid::Uuid;

/// Where unauthenticated mutation attempts land.
pub fn login() -> HttpResponse {
    see_other("/api/auth/login".to_string())
}

/// Where post deletion lands.
pub fn home() -> HttpResponse {
    see_other("/api/posts".to_string())
}

/// Where post/comment mutations land, and where non-owner attempts are
/// silently bounced to.
pub fn post_detail(post_id: Uuid) -> HttpResponse {
    see_other(format!("/api/posts/{post_id}"))
}

/// Where post creation and profile edits land.
pub fn profile(username: &str) -> HttpResponse {
    see_other(format!("/api/profile/{username}"))
}

fn see_other(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
