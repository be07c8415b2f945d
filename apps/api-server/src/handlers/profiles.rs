//! Profile feed and profile editing handlers.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::Serialize;

use chronicle_core::feed::FeedPage;
use chronicle_shared::dto::{FeedQuery, UpdateProfileRequest, UserResponse};

use crate::middleware::auth::OptionalIdentity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::redirect;

#[derive(Serialize)]
struct ProfileFeedResponse {
    profile: UserResponse,
    feed: FeedPage,
}

/// GET /api/profile/{username}
///
/// The owner sees every post of theirs, unpublished and future-dated ones
/// included. Anyone else gets the public visibility filter.
pub async fn profile_feed(
    state: web::Data<AppState>,
    path: web::Path<String>,
    identity: OptionalIdentity,
    query: web::Query<FeedQuery>,
) -> AppResult<HttpResponse> {
    let today = Utc::now().date_naive();
    let username = path.into_inner();

    let user = state
        .users
        .find_by_username(&username)
        .await?
        .ok_or(AppError::NotFound)?;

    let visible_as_of = if identity.viewer().is_user(user.id) {
        None
    } else {
        Some(today)
    };

    let feed = state
        .posts
        .profile_feed(user.id, visible_as_of, query.page.unwrap_or(1))
        .await?;

    Ok(HttpResponse::Ok().json(ProfileFeedResponse {
        profile: UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
        },
        feed,
    }))
}

/// PUT /api/profile
///
/// A user edits only their own profile; the target comes from the token.
pub async fn update_profile(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    body: web::Json<UpdateProfileRequest>,
) -> AppResult<HttpResponse> {
    let Some(actor) = identity.0 else {
        return Ok(redirect::login());
    };

    let req = body.into_inner();
    if req.username.trim().is_empty() {
        return Err(AppError::BadRequest("Username must not be empty".to_string()));
    }
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    let mut user = state
        .users
        .find_by_id(actor.user_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if req.username != user.username
        && state.users.find_by_username(&req.username).await?.is_some()
    {
        return Err(AppError::Conflict("Username already registered".to_string()));
    }

    user.username = req.username;
    user.email = req.email;
    user.first_name = req.first_name;
    user.last_name = req.last_name;
    user.updated_at = Utc::now();

    let user = state.users.update(user).await?;

    Ok(redirect::profile(&user.username))
}
