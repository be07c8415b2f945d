//! Comment handlers, scoped to one parent post.
//!
//! Every success redirects to the parent post's detail view.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use chronicle_core::access::can_mutate;
use chronicle_core::domain::{Comment, Post};
use chronicle_shared::dto::CommentPayload;

use crate::middleware::auth::OptionalIdentity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::redirect;

async fn parent_post(state: &AppState, post_id: Uuid) -> AppResult<Post> {
    state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or(AppError::NotFound)
}

/// A comment addressed under the wrong parent reads as absent.
async fn comment_of(state: &AppState, post_id: Uuid, comment_id: Uuid) -> AppResult<Comment> {
    let comment = state
        .comments
        .find_by_id(comment_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if comment.post_id != post_id {
        return Err(AppError::NotFound);
    }

    Ok(comment)
}

fn validate_text(text: &str) -> AppResult<()> {
    if text.trim().is_empty() {
        return Err(AppError::BadRequest("Text must not be empty".to_string()));
    }
    Ok(())
}

/// POST /api/posts/{post_id}/comments
pub async fn create(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    identity: OptionalIdentity,
    body: web::Json<CommentPayload>,
) -> AppResult<HttpResponse> {
    let Some(actor) = identity.0 else {
        return Ok(redirect::login());
    };

    let post_id = path.into_inner();
    let post = parent_post(&state, post_id).await?;

    let payload = body.into_inner();
    validate_text(&payload.text)?;

    let comment = Comment::new(post.id, actor.user_id, payload.text);
    state.comments.insert(comment).await?;

    Ok(redirect::post_detail(post_id))
}

/// PUT /api/posts/{post_id}/comments/{comment_id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
    identity: OptionalIdentity,
    body: web::Json<CommentPayload>,
) -> AppResult<HttpResponse> {
    let Some(actor) = identity.0 else {
        return Ok(redirect::login());
    };

    let (post_id, comment_id) = path.into_inner();
    parent_post(&state, post_id).await?;
    let mut comment = comment_of(&state, post_id, comment_id).await?;

    if !can_mutate(comment.author_id, actor.viewer()) {
        return Ok(redirect::post_detail(post_id));
    }

    let payload = body.into_inner();
    validate_text(&payload.text)?;

    comment.text = payload.text;
    state.comments.update(comment).await?;

    Ok(redirect::post_detail(post_id))
}

/// DELETE /api/posts/{post_id}/comments/{comment_id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
    identity: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let Some(actor) = identity.0 else {
        return Ok(redirect::login());
    };

    let (post_id, comment_id) = path.into_inner();
    parent_post(&state, post_id).await?;
    let comment = comment_of(&state, post_id, comment_id).await?;

    if !can_mutate(comment.author_id, actor.viewer()) {
        return Ok(redirect::post_detail(post_id));
    }

    state.comments.delete(comment_id).await?;

    Ok(redirect::post_detail(post_id))
}
