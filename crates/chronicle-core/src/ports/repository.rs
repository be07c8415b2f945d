use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{Category, Comment, Post, User};
use crate::error::RepoError;
use crate::feed::{CommentWithAuthor, FeedPage, PostDetail};

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Update an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with lookup by the unique username.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}

/// Category repository with lookup by the unique slug.
#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, Uuid> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepoError>;
}

/// Post repository. Feed queries apply the public-visibility filter in SQL;
/// it must agree with `access::post_is_visible` for an anonymous viewer on
/// the given day.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Post with its category, author and location loaded, for the detail
    /// view. No visibility filtering here; the caller decides with the
    /// predicate.
    async fn find_detail(&self, id: Uuid) -> Result<Option<PostDetail>, RepoError>;

    /// Publicly visible posts as of `today`, newest publication first.
    async fn home_feed(&self, today: NaiveDate, page: u64) -> Result<FeedPage, RepoError>;

    /// Publicly visible posts of one category.
    async fn category_feed(
        &self,
        category_id: Uuid,
        today: NaiveDate,
        page: u64,
    ) -> Result<FeedPage, RepoError>;

    /// Posts authored by one user. `visible_as_of` = `None` returns
    /// everything (the owner's view); `Some(today)` applies the public
    /// filter for other viewers.
    async fn profile_feed(
        &self,
        author_id: Uuid,
        visible_as_of: Option<NaiveDate>,
        page: u64,
    ) -> Result<FeedPage, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    /// All comments of a post with their authors, oldest first.
    async fn find_for_post(&self, post_id: Uuid) -> Result<Vec<CommentWithAuthor>, RepoError>;
}
