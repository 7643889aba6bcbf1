//! Model definitions `tests/generated/user.rs` is generated from
//!
//! ```text
//! queryset-codegen generate --input tests/fixtures/models.rs --output tests/generated/user.rs
//! ```

use chrono::{DateTime, Utc};

#[queryset]
pub struct User {
    #[primary_key]
    pub id: u64,
    pub name: String,
    pub email: String,
    pub nickname: Option<String>,
    pub age: Option<i32>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[soft_delete]
    pub deleted_at: Option<DateTime<Utc>>,
    #[association]
    pub posts: Vec<Post>,
}

#[queryset]
pub struct Post {
    #[primary_key]
    pub id: i64,
    pub user_id: u64,
    pub title: String,
    #[default]
    pub body: String,
}
