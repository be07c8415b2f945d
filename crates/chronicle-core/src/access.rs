//! Visibility and authorization predicates.
//!
//! Every place that decides whether a post may be seen or mutated goes
//! through these functions, so list filtering and single-object checks
//! cannot drift apart. The SQL feed filter in the infra crate mirrors
//! [`post_is_visible`] for the anonymous case; see
//! `chronicle_infra::database` for the pairing.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::Post;

/// The identity a request is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    User(Uuid),
}

impl Viewer {
    /// True when this viewer is the given user.
    pub fn is_user(&self, user_id: Uuid) -> bool {
        matches!(self, Viewer::User(id) if *id == user_id)
    }
}

/// Whether a post may be shown to a viewer on a given day.
///
/// Public visibility requires the post flag, the category flag, and a
/// publication date that has arrived (date-only comparison, boundary
/// inclusive). The author bypasses all three and always sees their own
/// posts. Location publication state deliberately plays no part.
pub fn post_is_visible(
    post: &Post,
    category_published: bool,
    viewer: Viewer,
    today: NaiveDate,
) -> bool {
    if viewer.is_user(post.author_id) {
        return true;
    }
    post.is_published && category_published && post.pub_date.date_naive() <= today
}

/// Whether an actor may edit or delete an entity owned by `author_id`.
///
/// Owner-only, no superuser override. Anonymous actors always fail; the
/// caller is expected to bounce them to the login flow rather than error.
pub fn can_mutate(author_id: Uuid, actor: Viewer) -> bool {
    actor.is_user(author_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, Utc};

    fn sample_post(author_id: Uuid, is_published: bool, pub_date: chrono::DateTime<Utc>) -> Post {
        Post {
            id: Uuid::new_v4(),
            title: "title".to_owned(),
            text: "text".to_owned(),
            pub_date,
            is_published,
            author_id,
            category_id: Uuid::new_v4(),
            location_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn published_past_post_visible_to_anonymous() {
        let post = sample_post(Uuid::new_v4(), true, Utc::now() - TimeDelta::days(1));
        assert!(post_is_visible(
            &post,
            true,
            Viewer::Anonymous,
            Utc::now().date_naive()
        ));
    }

    #[test]
    fn pub_date_today_is_visible() {
        // Boundary is inclusive: a post dated later today still counts.
        let today = NaiveDate::from_ymd_opt(2024, 5, 5).unwrap();
        let late_today = today.and_hms_opt(23, 59, 0).unwrap().and_utc();
        let post = sample_post(Uuid::new_v4(), true, late_today);
        assert!(post_is_visible(&post, true, Viewer::Anonymous, today));
    }

    #[test]
    fn future_post_hidden_from_strangers() {
        let post = sample_post(Uuid::new_v4(), true, Utc::now() + TimeDelta::days(2));
        assert!(!post_is_visible(
            &post,
            true,
            Viewer::Anonymous,
            Utc::now().date_naive()
        ));
        assert!(!post_is_visible(
            &post,
            true,
            Viewer::User(Uuid::new_v4()),
            Utc::now().date_naive()
        ));
    }

    #[test]
    fn unpublished_post_hidden_from_strangers() {
        let post = sample_post(Uuid::new_v4(), false, Utc::now() - TimeDelta::days(1));
        assert!(!post_is_visible(
            &post,
            true,
            Viewer::Anonymous,
            Utc::now().date_naive()
        ));
    }

    #[test]
    fn unpublished_category_hides_published_post() {
        let post = sample_post(Uuid::new_v4(), true, Utc::now() - TimeDelta::days(1));
        assert!(!post_is_visible(
            &post,
            false,
            Viewer::Anonymous,
            Utc::now().date_naive()
        ));
    }

    #[test]
    fn author_sees_own_post_regardless_of_flags() {
        let author = Uuid::new_v4();
        let post = sample_post(author, false, Utc::now() + TimeDelta::days(30));
        assert!(post_is_visible(
            &post,
            false,
            Viewer::User(author),
            Utc::now().date_naive()
        ));
    }

    #[test]
    fn only_the_owner_can_mutate() {
        let owner = Uuid::new_v4();
        assert!(can_mutate(owner, Viewer::User(owner)));
        assert!(!can_mutate(owner, Viewer::User(Uuid::new_v4())));
        assert!(!can_mutate(owner, Viewer::Anonymous));
    }
}
