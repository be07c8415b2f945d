//! Post handlers: feeds, detail, and the authoring lifecycle.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use chronicle_core::access::{can_mutate, post_is_visible};
use chronicle_core::domain::Post;
use chronicle_core::feed::{CommentWithAuthor, PostDetail};
use chronicle_core::ports::PostCreated;
use chronicle_shared::dto::{CommentResponse, FeedQuery, PostDetailResponse, PostPayload};

use crate::middleware::auth::OptionalIdentity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::redirect;

fn detail_response(detail: PostDetail, comments: Vec<CommentWithAuthor>) -> PostDetailResponse {
    PostDetailResponse {
        id: detail.post.id,
        title: detail.post.title,
        text: detail.post.text,
        pub_date: detail.post.pub_date,
        is_published: detail.post.is_published,
        author_username: detail.author_username,
        category_title: detail.category.title,
        category_slug: detail.category.slug,
        location_name: detail.location_name,
        created_at: detail.post.created_at,
        comments: comments
            .into_iter()
            .map(|c| CommentResponse {
                id: c.comment.id,
                text: c.comment.text,
                author_username: c.author_username,
                created_at: c.comment.created_at,
            })
            .collect(),
    }
}

/// A dangling location reference is a client error, same as an unknown
/// category; it must not surface as a foreign-key failure from the store.
async fn check_location(state: &AppState, location_id: Option<Uuid>) -> AppResult<()> {
    if let Some(location_id) = location_id {
        if state.locations.find_by_id(location_id).await?.is_none() {
            return Err(AppError::BadRequest("Unknown location".to_string()));
        }
    }
    Ok(())
}

fn validate_payload(payload: &PostPayload) -> AppResult<()> {
    if payload.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title must not be empty".to_string()));
    }
    if payload.text.trim().is_empty() {
        return Err(AppError::BadRequest("Text must not be empty".to_string()));
    }
    Ok(())
}

/// GET /api/posts
///
/// The shared public feed: visibility is computed for an anonymous viewer,
/// with no author bypass, whoever asks.
pub async fn home_feed(
    state: web::Data<AppState>,
    query: web::Query<FeedQuery>,
) -> AppResult<HttpResponse> {
    let today = Utc::now().date_naive();

    let feed = state
        .posts
        .home_feed(today, query.page.unwrap_or(1))
        .await?;

    Ok(HttpResponse::Ok().json(feed))
}

/// GET /api/posts/{post_id}
pub async fn detail(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    identity: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let today = Utc::now().date_naive();
    let post_id = path.into_inner();

    let detail = state
        .posts
        .find_detail(post_id)
        .await?
        .ok_or(AppError::NotFound)?;

    // Invisible reads the same as absent.
    if !post_is_visible(
        &detail.post,
        detail.category.is_published,
        identity.viewer(),
        today,
    ) {
        return Err(AppError::NotFound);
    }

    let comments = state.comments.find_for_post(post_id).await?;

    Ok(HttpResponse::Ok().json(detail_response(detail, comments)))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let Some(actor) = identity.0 else {
        return Ok(redirect::login());
    };

    let payload = body.into_inner();
    validate_payload(&payload)?;

    let category = state
        .categories
        .find_by_id(payload.category_id)
        .await?
        .ok_or_else(|| AppError::BadRequest("Unknown category".to_string()))?;
    check_location(&state, payload.location_id).await?;

    // The author comes from the token, never from the body.
    let post = Post::new(
        actor.user_id,
        payload.category_id,
        payload.location_id,
        payload.title,
        payload.text,
        payload.pub_date,
    );
    let post = state.posts.insert(post).await?;

    // Best-effort announcement; must never block or fail the creation.
    let notifier = state.notifier.clone();
    let event = PostCreated {
        title: post.title.clone(),
        category: category.title,
        pub_date: post.pub_date,
    };
    tokio::spawn(async move {
        if let Err(e) = notifier.post_created(&event).await {
            tracing::warn!("Post notification failed: {e}");
        }
    });

    Ok(redirect::profile(&actor.username))
}

/// PUT /api/posts/{post_id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    identity: OptionalIdentity,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let Some(actor) = identity.0 else {
        return Ok(redirect::login());
    };

    let post_id = path.into_inner();
    let mut post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or(AppError::NotFound)?;

    // Wrong owner: bounce to read-only viewing, indistinguishable from
    // success. No changes applied.
    if !can_mutate(post.author_id, actor.viewer()) {
        return Ok(redirect::post_detail(post_id));
    }

    let payload = body.into_inner();
    validate_payload(&payload)?;

    if state
        .categories
        .find_by_id(payload.category_id)
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest("Unknown category".to_string()));
    }
    check_location(&state, payload.location_id).await?;

    post.title = payload.title;
    post.text = payload.text;
    post.pub_date = payload.pub_date;
    post.category_id = payload.category_id;
    post.location_id = payload.location_id;

    state.posts.update(post).await?;

    Ok(redirect::post_detail(post_id))
}

/// DELETE /api/posts/{post_id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    identity: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let Some(actor) = identity.0 else {
        return Ok(redirect::login());
    };

    let post_id = path.into_inner();
    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if !can_mutate(post.author_id, actor.viewer()) {
        return Ok(redirect::post_detail(post_id));
    }

    state.posts.delete(post_id).await?;

    Ok(redirect::home())
}
