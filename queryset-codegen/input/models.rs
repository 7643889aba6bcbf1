//! Example model definitions
//!
//! This file is read by `queryset-codegen`, never compiled:
//!
//! ```text
//! queryset-codegen generate --input input/models.rs --output src/generated.rs
//! ```

use chrono::{DateTime, Utc};

#[queryset]
pub struct User {
    #[primary_key]
    pub id: u64,

    pub name: String,

    #[column_name = "email_address"]
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
#[table_name = "blog_posts"]
pub struct Post {
    #[primary_key]
    pub id: i64,

    pub user_id: u64,

    pub title: String,

    pub rating: f64,

    #[default]
    pub body: String,
}
