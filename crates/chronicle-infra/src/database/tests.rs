#[cfg(test)]
mod tests {
    use crate::database::entity::{category, post, user};
    use crate::database::postgres_repo::{
        PostgresCategoryRepository, PostgresPostRepository, PostgresUserRepository,
        visibility_cutoff,
    };
    use chronicle_core::domain::{Category, Post, User};
    use chronicle_core::ports::{BaseRepository, CategoryRepository, UserRepository};
    use chrono::{NaiveDate, TimeDelta};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = uuid::Uuid::new_v4();
        let author_id = uuid::Uuid::new_v4();
        let category_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post::Model {
                id: post_id,
                title: "Test Post".to_owned(),
                text: "Content".to_owned(),
                pub_date: now.into(),
                is_published: true,
                author_id,
                category_id,
                location_id: None,
                created_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        assert!(result.is_some());
        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, post_id);
        assert_eq!(post.author_id, author_id);
    }

    #[tokio::test]
    async fn test_find_user_by_username() {
        let user_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: user_id,
                username: "alice".to_owned(),
                email: "alice@example.com".to_owned(),
                first_name: None,
                last_name: None,
                password_hash: "hash".to_owned(),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let result: Option<User> = repo.find_by_username("alice").await.unwrap();

        assert_eq!(result.unwrap().id, user_id);
    }

    #[tokio::test]
    async fn test_find_category_by_slug() {
        let category_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![category::Model {
                id: category_id,
                title: "Travel".to_owned(),
                description: "Travel posts".to_owned(),
                slug: "travel".to_owned(),
                is_published: false,
                created_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresCategoryRepository::new(db);

        let result: Option<Category> = repo.find_by_slug("travel").await.unwrap();

        let found = result.unwrap();
        assert_eq!(found.id, category_id);
        assert!(!found.is_published);
    }

    #[test]
    fn test_visibility_cutoff_is_boundary_inclusive() {
        // The SQL filter and the in-memory predicate must agree: a post
        // dated any time during `today` passes, midnight tomorrow does not.
        let today = NaiveDate::from_ymd_opt(2024, 5, 5).unwrap();
        let cutoff = visibility_cutoff(today);

        let late_today = cutoff - TimeDelta::seconds(1);
        assert!(late_today < cutoff);
        assert_eq!(late_today.date_naive(), today);

        assert_eq!(cutoff.date_naive(), today.succ_opt().unwrap());
        assert!(!(cutoff < cutoff));
    }
}
