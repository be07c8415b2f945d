//! PostgreSQL repository implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::{
    ColumnTrait, Condition, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use uuid::Uuid;

use chronicle_core::domain::{Category, User};
use chronicle_core::error::RepoError;
use chronicle_core::feed::{CommentWithAuthor, FeedEntry, FeedPage, PAGE_SIZE, PostDetail};
use chronicle_core::ports::{
    CategoryRepository, CommentRepository, PostRepository, UserRepository,
};

use super::entity::{category, comment, location, post, user};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<user::Entity>;

/// PostgreSQL category repository.
pub type PostgresCategoryRepository = PostgresBaseRepository<category::Entity>;

/// PostgreSQL location repository. Only the generic CRUD surface; posts
/// reference locations by id and feeds batch-load the names.
pub type PostgresLocationRepository = PostgresBaseRepository<location::Entity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<post::Entity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<comment::Entity>;

fn qerr(e: DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

/// `pub_date.date() <= today` rewritten for SQL: anything strictly before
/// the midnight that follows `today`. Keeps the boundary inclusive the same
/// way `access::post_is_visible` does.
pub(crate) fn visibility_cutoff(today: NaiveDate) -> DateTime<Utc> {
    let next_midnight = today
        .succ_opt()
        .unwrap_or(NaiveDate::MAX)
        .and_time(NaiveTime::MIN);
    DateTime::from_naive_utc_and_offset(next_midnight, Utc)
}

/// SQL counterpart of `access::post_is_visible` for an anonymous viewer.
/// Callers must join the category table onto the query.
pub(crate) fn visible_condition(today: NaiveDate) -> Condition {
    Condition::all()
        .add(post::Column::IsPublished.eq(true))
        .add(category::Column::IsPublished.eq(true))
        .add(post::Column::PubDate.lt(visibility_cutoff(today)))
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let result = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(qerr)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepoError> {
        let result = category::Entity::find()
            .filter(category::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(qerr)?;

        Ok(result.map(Into::into))
    }
}

impl PostgresPostRepository {
    async fn fetch_feed(&self, condition: Condition, page: u64) -> Result<FeedPage, RepoError> {
        let page = page.max(1);
        let paginator = post::Entity::find()
            .join(JoinType::InnerJoin, post::Relation::Category.def())
            .filter(condition)
            .order_by_desc(post::Column::PubDate)
            .paginate(&self.db, PAGE_SIZE);

        let totals = paginator.num_items_and_pages().await.map_err(qerr)?;
        let models = paginator.fetch_page(page - 1).await.map_err(qerr)?;

        let entries = self.hydrate(models).await?;

        Ok(FeedPage {
            entries,
            page,
            total_pages: totals.number_of_pages,
            total_items: totals.number_of_items,
        })
    }

    /// Batch-load what every feed row shows: author, category, location and
    /// the comment count. One query per relation instead of one per row.
    async fn hydrate(&self, models: Vec<post::Model>) -> Result<Vec<FeedEntry>, RepoError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let post_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let author_ids: Vec<Uuid> = models.iter().map(|m| m.author_id).collect();
        let category_ids: Vec<Uuid> = models.iter().map(|m| m.category_id).collect();
        let location_ids: Vec<Uuid> = models.iter().filter_map(|m| m.location_id).collect();

        let authors: HashMap<Uuid, String> = user::Entity::find()
            .filter(user::Column::Id.is_in(author_ids))
            .all(&self.db)
            .await
            .map_err(qerr)?
            .into_iter()
            .map(|u| (u.id, u.username))
            .collect();

        let categories: HashMap<Uuid, (String, String)> = category::Entity::find()
            .filter(category::Column::Id.is_in(category_ids))
            .all(&self.db)
            .await
            .map_err(qerr)?
            .into_iter()
            .map(|c| (c.id, (c.title, c.slug)))
            .collect();

        let locations: HashMap<Uuid, String> = if location_ids.is_empty() {
            HashMap::new()
        } else {
            location::Entity::find()
                .filter(location::Column::Id.is_in(location_ids))
                .all(&self.db)
                .await
                .map_err(qerr)?
                .into_iter()
                .map(|l| (l.id, l.name))
                .collect()
        };

        let counts: HashMap<Uuid, i64> = comment::Entity::find()
            .select_only()
            .column(comment::Column::PostId)
            .column_as(comment::Column::Id.count(), "comment_count")
            .filter(comment::Column::PostId.is_in(post_ids))
            .group_by(comment::Column::PostId)
            .into_tuple::<(Uuid, i64)>()
            .all(&self.db)
            .await
            .map_err(qerr)?
            .into_iter()
            .collect();

        let mut entries = Vec::with_capacity(models.len());
        for model in models {
            let author_username = authors.get(&model.author_id).cloned().unwrap_or_default();
            let (category_title, category_slug) = categories
                .get(&model.category_id)
                .cloned()
                .unwrap_or_default();
            let location_name = model.location_id.and_then(|id| locations.get(&id).cloned());
            let comment_count = counts.get(&model.id).copied().unwrap_or(0).max(0) as u64;

            entries.push(FeedEntry {
                post: model.into(),
                author_username,
                category_title,
                category_slug,
                location_name,
                comment_count,
            });
        }

        Ok(entries)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_detail(&self, id: Uuid) -> Result<Option<PostDetail>, RepoError> {
        let Some((post_model, category_model)) = post::Entity::find_by_id(id)
            .find_also_related(category::Entity)
            .one(&self.db)
            .await
            .map_err(qerr)?
        else {
            return Ok(None);
        };

        let category_model = category_model.ok_or_else(|| {
            RepoError::Query(format!("post {id} references a missing category"))
        })?;

        let author = user::Entity::find_by_id(post_model.author_id)
            .one(&self.db)
            .await
            .map_err(qerr)?
            .ok_or_else(|| RepoError::Query(format!("post {id} references a missing author")))?;

        let location_name = match post_model.location_id {
            Some(location_id) => location::Entity::find_by_id(location_id)
                .one(&self.db)
                .await
                .map_err(qerr)?
                .map(|l| l.name),
            None => None,
        };

        Ok(Some(PostDetail {
            post: post_model.into(),
            category: category_model.into(),
            author_username: author.username,
            location_name,
        }))
    }

    async fn home_feed(&self, today: NaiveDate, page: u64) -> Result<FeedPage, RepoError> {
        self.fetch_feed(visible_condition(today), page).await
    }

    async fn category_feed(
        &self,
        category_id: Uuid,
        today: NaiveDate,
        page: u64,
    ) -> Result<FeedPage, RepoError> {
        let condition = visible_condition(today).add(post::Column::CategoryId.eq(category_id));
        self.fetch_feed(condition, page).await
    }

    async fn profile_feed(
        &self,
        author_id: Uuid,
        visible_as_of: Option<NaiveDate>,
        page: u64,
    ) -> Result<FeedPage, RepoError> {
        let mut condition = Condition::all().add(post::Column::AuthorId.eq(author_id));
        if let Some(today) = visible_as_of {
            condition = condition.add(visible_condition(today));
        }
        self.fetch_feed(condition, page).await
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_for_post(&self, post_id: Uuid) -> Result<Vec<CommentWithAuthor>, RepoError> {
        let rows = comment::Entity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .find_also_related(user::Entity)
            .order_by_asc(comment::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(qerr)?;

        Ok(rows
            .into_iter()
            .map(|(comment_model, author)| CommentWithAuthor {
                comment: comment_model.into(),
                author_username: author.map(|u| u.username).unwrap_or_default(),
            })
            .collect())
    }
}
