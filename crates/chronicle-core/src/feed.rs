//! Feed types - paginated post listings with their eager-loaded relations.

use serde::{Deserialize, Serialize};

use crate::domain::{Category, Comment, Post};

/// Fixed page size for all feeds.
pub const PAGE_SIZE: u64 = 10;

/// One post in a feed, with the related data every listing shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEntry {
    pub post: Post,
    pub author_username: String,
    pub category_title: String,
    pub category_slug: String,
    pub location_name: Option<String>,
    pub comment_count: u64,
}

/// One page of a feed, ordered by `pub_date` descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPage {
    pub entries: Vec<FeedEntry>,
    /// 1-based page number.
    pub page: u64,
    pub total_pages: u64,
    pub total_items: u64,
}

impl FeedPage {
    pub fn empty(page: u64) -> Self {
        Self {
            entries: Vec::new(),
            page,
            total_pages: 0,
            total_items: 0,
        }
    }
}

/// A post detail fetch: the post plus the relations the detail view shows.
/// The category comes back whole because its publication flag feeds the
/// visibility check.
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub post: Post,
    pub category: Category,
    pub author_username: String,
    pub location_name: Option<String>,
}

/// A comment joined with its author's username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author_username: String,
}
