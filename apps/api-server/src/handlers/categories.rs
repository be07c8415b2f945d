//! Category feed handler.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::Serialize;

use chronicle_core::feed::FeedPage;
use chronicle_shared::dto::{CategoryResponse, FeedQuery};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Serialize)]
struct CategoryFeedResponse {
    category: CategoryResponse,
    feed: FeedPage,
}

/// GET /api/category/{slug}
///
/// An unpublished category is a 404, same as an absent one.
pub async fn category_feed(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<FeedQuery>,
) -> AppResult<HttpResponse> {
    let today = Utc::now().date_naive();
    let slug = path.into_inner();

    let category = state
        .categories
        .find_by_slug(&slug)
        .await?
        .ok_or(AppError::NotFound)?;

    if !category.is_published {
        return Err(AppError::NotFound);
    }

    let feed = state
        .posts
        .category_feed(category.id, today, query.page.unwrap_or(1))
        .await?;

    Ok(HttpResponse::Ok().json(CategoryFeedResponse {
        category: CategoryResponse {
            id: category.id,
            title: category.title,
            description: category.description,
            slug: category.slug,
        },
        feed,
    }))
}
