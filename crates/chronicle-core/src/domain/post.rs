use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a blog post authored by a user, filed under a category and
/// optionally tagged with a location.
///
/// `pub_date` may lie in the future; such posts stay hidden from public
/// feeds until the date arrives. `created_at` is set once at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub is_published: bool,
    pub author_id: Uuid,
    pub category_id: Uuid,
    pub location_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post. Posts are published by default; the flag is an
    /// editorial switch, not part of the authoring form.
    pub fn new(
        author_id: Uuid,
        category_id: Uuid,
        location_id: Option<Uuid>,
        title: String,
        text: String,
        pub_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            text,
            pub_date,
            is_published: true,
            author_id,
            category_id,
            location_id,
            created_at: Utc::now(),
        }
    }
}
