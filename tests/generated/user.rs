// Code generated by queryset-codegen from models.rs. DO NOT EDIT.

#[doc = " Row of the `users` table"]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub nickname: Option<String>,
    pub age: Option<i32>,
    pub active: bool,
    pub created_at: queryset::chrono::DateTime<queryset::chrono::Utc>,
    pub updated_at: queryset::chrono::DateTime<queryset::chrono::Utc>,
    pub deleted_at: Option<queryset::chrono::DateTime<queryset::chrono::Utc>>,
    pub posts: Vec<Post>,
}

#[doc = " Columns of [`User`], in declaration order"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserColumn {
    Id,
    Name,
    Email,
    Nickname,
    Age,
    Active,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

impl UserColumn {
    pub const ALL: [UserColumn; 9usize] = [
        UserColumn::Id,
        UserColumn::Name,
        UserColumn::Email,
        UserColumn::Nickname,
        UserColumn::Age,
        UserColumn::Active,
        UserColumn::CreatedAt,
        UserColumn::UpdatedAt,
        UserColumn::DeletedAt,
    ];

    #[doc = r" Column name in the store"]
    pub const fn name(self) -> &'static str {
        match self {
            UserColumn::Id => "id",
            UserColumn::Name => "name",
            UserColumn::Email => "email",
            UserColumn::Nickname => "nickname",
            UserColumn::Age => "age",
            UserColumn::Active => "active",
            UserColumn::CreatedAt => "created_at",
            UserColumn::UpdatedAt => "updated_at",
            UserColumn::DeletedAt => "deleted_at",
        }
    }
}

impl std::fmt::Display for UserColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

static USER_META: queryset::ModelMeta = queryset::ModelMeta {
    name: "User",
    table: "users",
    columns: &[
        "id",
        "name",
        "email",
        "nickname",
        "age",
        "active",
        "created_at",
        "updated_at",
        "deleted_at",
    ],
    primary_key: Some("id"),
    soft_delete: Some(queryset::SoftDelete {
        column: "deleted_at",
        kind: queryset::TimeKind::Utc,
    }),
};

impl queryset::ModelTrait for User {
    fn meta() -> &'static queryset::ModelMeta {
        &USER_META
    }

    fn from_row(row: &queryset::Row) -> Result<Self, queryset::StoreError> {
        Ok(Self {
            id: row.try_get_integer("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            nickname: row.try_get("nickname")?,
            age: row.try_get_optional_integer("age")?,
            active: row.try_get("active")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            deleted_at: row.try_get("deleted_at")?,
            posts: Default::default(),
        })
    }

    fn get(&self, column: &str) -> Option<queryset::Value> {
        match column {
            "id" => Some(queryset::Value::from(self.id)),
            "name" => Some(queryset::Value::from(self.name.clone())),
            "email" => Some(queryset::Value::from(self.email.clone())),
            "nickname" => Some(queryset::Value::from(self.nickname.clone())),
            "age" => Some(queryset::Value::from(self.age)),
            "active" => Some(queryset::Value::from(self.active)),
            "created_at" => Some(queryset::Value::from(self.created_at)),
            "updated_at" => Some(queryset::Value::from(self.updated_at)),
            "deleted_at" => Some(queryset::Value::from(self.deleted_at)),
            _ => None,
        }
    }

    fn primary_key_value(&self) -> Option<queryset::Value> {
        (self.id != 0).then(|| queryset::Value::from(self.id))
    }

    fn set_primary_key(&mut self, value: queryset::Value) -> Result<(), queryset::StoreError> {
        self.id = queryset::identity(value, "id")?;
        Ok(())
    }

    fn insert_values(&self) -> Vec<(&'static str, queryset::Value)> {
        let mut values = Vec::with_capacity(9usize);
        if self.id != 0 {
            values.push(("id", queryset::Value::from(self.id)));
        }
        values.push(("name", queryset::Value::from(self.name.clone())));
        values.push(("email", queryset::Value::from(self.email.clone())));
        values.push(("nickname", queryset::Value::from(self.nickname.clone())));
        values.push(("age", queryset::Value::from(self.age)));
        values.push(("active", queryset::Value::from(self.active)));
        values.push(("created_at", queryset::Value::from(self.created_at)));
        values.push(("updated_at", queryset::Value::from(self.updated_at)));
        values.push(("deleted_at", queryset::Value::from(self.deleted_at)));
        values
    }

    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.email.is_empty() {
            missing.push("email");
        }
        missing
    }

    fn stamp_created(&mut self, now: queryset::chrono::DateTime<queryset::chrono::Utc>) {
        self.created_at = now;
        self.updated_at = now;
    }
}

impl User {
    #[doc = r" Insert this value; the primary key is filled from the store"]
    #[doc = r" when it was unset"]
    pub fn create(&mut self, store: &dyn queryset::Store) -> Result<(), queryset::QueryError> {
        queryset::active_model::create(store, self)
    }

    #[doc = r" Write the selected columns of this value to its row"]
    pub fn update(
        &self,
        store: &dyn queryset::Store,
        columns: &[UserColumn],
    ) -> Result<u64, queryset::QueryError> {
        let columns: Vec<&'static str> = columns.iter().map(|c| c.name()).collect();
        queryset::active_model::update_columns(store, self, &columns)
    }

    #[doc = r" Delete this value's row; soft-delete models are stamped instead"]
    pub fn delete(&self, store: &dyn queryset::Store) -> Result<u64, queryset::QueryError> {
        queryset::active_model::delete(store, self)
    }
}

#[doc = " Query set over [`User`] rows"]
#[derive(Debug)]
pub struct UserQuerySet<'s> {
    inner: queryset::QuerySet<'s, User>,
}

impl<'s> UserQuerySet<'s> {
    pub fn new(store: &'s dyn queryset::Store) -> Self {
        Self {
            inner: queryset::QuerySet::new(store),
        }
    }

    fn filter(self, predicate: queryset::Predicate) -> Self {
        Self {
            inner: self.inner.filter(predicate),
        }
    }

    pub fn id_eq(self, value: u64) -> Self {
        self.filter(queryset::Predicate::compare(
            "id",
            queryset::Operator::Eq,
            queryset::Value::from(value),
        ))
    }

    pub fn id_ne(self, value: u64) -> Self {
        self.filter(queryset::Predicate::compare(
            "id",
            queryset::Operator::Ne,
            queryset::Value::from(value),
        ))
    }

    pub fn id_gt(self, value: u64) -> Self {
        self.filter(queryset::Predicate::compare(
            "id",
            queryset::Operator::Gt,
            queryset::Value::from(value),
        ))
    }

    pub fn id_gte(self, value: u64) -> Self {
        self.filter(queryset::Predicate::compare(
            "id",
            queryset::Operator::Gte,
            queryset::Value::from(value),
        ))
    }

    pub fn id_lt(self, value: u64) -> Self {
        self.filter(queryset::Predicate::compare(
            "id",
            queryset::Operator::Lt,
            queryset::Value::from(value),
        ))
    }

    pub fn id_lte(self, value: u64) -> Self {
        self.filter(queryset::Predicate::compare(
            "id",
            queryset::Operator::Lte,
            queryset::Value::from(value),
        ))
    }

    pub fn id_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        self.filter(queryset::Predicate::list(
            "id",
            queryset::Operator::In,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn id_not_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        self.filter(queryset::Predicate::list(
            "id",
            queryset::Operator::NotIn,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn order_asc_by_id(self) -> Self {
        Self {
            inner: self.inner.order_by("id", queryset::Direction::Asc),
        }
    }

    pub fn order_desc_by_id(self) -> Self {
        Self {
            inner: self.inner.order_by("id", queryset::Direction::Desc),
        }
    }

    pub fn name_eq(self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.filter(queryset::Predicate::compare(
            "name",
            queryset::Operator::Eq,
            queryset::Value::from(value),
        ))
    }

    pub fn name_ne(self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.filter(queryset::Predicate::compare(
            "name",
            queryset::Operator::Ne,
            queryset::Value::from(value),
        ))
    }

    pub fn name_like(self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.filter(queryset::Predicate::compare(
            "name",
            queryset::Operator::Like,
            queryset::Value::from(value),
        ))
    }

    pub fn name_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.filter(queryset::Predicate::list(
            "name",
            queryset::Operator::In,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn name_not_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.filter(queryset::Predicate::list(
            "name",
            queryset::Operator::NotIn,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn order_asc_by_name(self) -> Self {
        Self {
            inner: self.inner.order_by("name", queryset::Direction::Asc),
        }
    }

    pub fn order_desc_by_name(self) -> Self {
        Self {
            inner: self.inner.order_by("name", queryset::Direction::Desc),
        }
    }

    pub fn email_eq(self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.filter(queryset::Predicate::compare(
            "email",
            queryset::Operator::Eq,
            queryset::Value::from(value),
        ))
    }

    pub fn email_ne(self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.filter(queryset::Predicate::compare(
            "email",
            queryset::Operator::Ne,
            queryset::Value::from(value),
        ))
    }

    pub fn email_like(self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.filter(queryset::Predicate::compare(
            "email",
            queryset::Operator::Like,
            queryset::Value::from(value),
        ))
    }

    pub fn email_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.filter(queryset::Predicate::list(
            "email",
            queryset::Operator::In,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn email_not_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.filter(queryset::Predicate::list(
            "email",
            queryset::Operator::NotIn,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn order_asc_by_email(self) -> Self {
        Self {
            inner: self.inner.order_by("email", queryset::Direction::Asc),
        }
    }

    pub fn order_desc_by_email(self) -> Self {
        Self {
            inner: self.inner.order_by("email", queryset::Direction::Desc),
        }
    }

    pub fn nickname_eq(self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.filter(queryset::Predicate::compare(
            "nickname",
            queryset::Operator::Eq,
            queryset::Value::from(value),
        ))
    }

    pub fn nickname_ne(self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.filter(queryset::Predicate::compare(
            "nickname",
            queryset::Operator::Ne,
            queryset::Value::from(value),
        ))
    }

    pub fn nickname_like(self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.filter(queryset::Predicate::compare(
            "nickname",
            queryset::Operator::Like,
            queryset::Value::from(value),
        ))
    }

    pub fn nickname_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.filter(queryset::Predicate::list(
            "nickname",
            queryset::Operator::In,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn nickname_not_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.filter(queryset::Predicate::list(
            "nickname",
            queryset::Operator::NotIn,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn nickname_is_null(self) -> Self {
        self.filter(queryset::Predicate::null("nickname", queryset::Operator::IsNull))
    }

    pub fn nickname_is_not_null(self) -> Self {
        self.filter(queryset::Predicate::null("nickname", queryset::Operator::IsNotNull))
    }

    pub fn order_asc_by_nickname(self) -> Self {
        Self {
            inner: self.inner.order_by("nickname", queryset::Direction::Asc),
        }
    }

    pub fn order_desc_by_nickname(self) -> Self {
        Self {
            inner: self.inner.order_by("nickname", queryset::Direction::Desc),
        }
    }

    pub fn age_eq(self, value: i32) -> Self {
        self.filter(queryset::Predicate::compare(
            "age",
            queryset::Operator::Eq,
            queryset::Value::from(value),
        ))
    }

    pub fn age_ne(self, value: i32) -> Self {
        self.filter(queryset::Predicate::compare(
            "age",
            queryset::Operator::Ne,
            queryset::Value::from(value),
        ))
    }

    pub fn age_gt(self, value: i32) -> Self {
        self.filter(queryset::Predicate::compare(
            "age",
            queryset::Operator::Gt,
            queryset::Value::from(value),
        ))
    }

    pub fn age_gte(self, value: i32) -> Self {
        self.filter(queryset::Predicate::compare(
            "age",
            queryset::Operator::Gte,
            queryset::Value::from(value),
        ))
    }

    pub fn age_lt(self, value: i32) -> Self {
        self.filter(queryset::Predicate::compare(
            "age",
            queryset::Operator::Lt,
            queryset::Value::from(value),
        ))
    }

    pub fn age_lte(self, value: i32) -> Self {
        self.filter(queryset::Predicate::compare(
            "age",
            queryset::Operator::Lte,
            queryset::Value::from(value),
        ))
    }

    pub fn age_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        self.filter(queryset::Predicate::list(
            "age",
            queryset::Operator::In,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn age_not_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        self.filter(queryset::Predicate::list(
            "age",
            queryset::Operator::NotIn,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn age_is_null(self) -> Self {
        self.filter(queryset::Predicate::null("age", queryset::Operator::IsNull))
    }

    pub fn age_is_not_null(self) -> Self {
        self.filter(queryset::Predicate::null("age", queryset::Operator::IsNotNull))
    }

    pub fn order_asc_by_age(self) -> Self {
        Self {
            inner: self.inner.order_by("age", queryset::Direction::Asc),
        }
    }

    pub fn order_desc_by_age(self) -> Self {
        Self {
            inner: self.inner.order_by("age", queryset::Direction::Desc),
        }
    }

    pub fn active_eq(self, value: bool) -> Self {
        self.filter(queryset::Predicate::compare(
            "active",
            queryset::Operator::Eq,
            queryset::Value::from(value),
        ))
    }

    pub fn active_ne(self, value: bool) -> Self {
        self.filter(queryset::Predicate::compare(
            "active",
            queryset::Operator::Ne,
            queryset::Value::from(value),
        ))
    }

    pub fn created_at_eq(self, value: queryset::chrono::DateTime<queryset::chrono::Utc>) -> Self {
        self.filter(queryset::Predicate::compare(
            "created_at",
            queryset::Operator::Eq,
            queryset::Value::from(value),
        ))
    }

    pub fn created_at_ne(self, value: queryset::chrono::DateTime<queryset::chrono::Utc>) -> Self {
        self.filter(queryset::Predicate::compare(
            "created_at",
            queryset::Operator::Ne,
            queryset::Value::from(value),
        ))
    }

    pub fn created_at_gt(self, value: queryset::chrono::DateTime<queryset::chrono::Utc>) -> Self {
        self.filter(queryset::Predicate::compare(
            "created_at",
            queryset::Operator::Gt,
            queryset::Value::from(value),
        ))
    }

    pub fn created_at_gte(self, value: queryset::chrono::DateTime<queryset::chrono::Utc>) -> Self {
        self.filter(queryset::Predicate::compare(
            "created_at",
            queryset::Operator::Gte,
            queryset::Value::from(value),
        ))
    }

    pub fn created_at_lt(self, value: queryset::chrono::DateTime<queryset::chrono::Utc>) -> Self {
        self.filter(queryset::Predicate::compare(
            "created_at",
            queryset::Operator::Lt,
            queryset::Value::from(value),
        ))
    }

    pub fn created_at_lte(self, value: queryset::chrono::DateTime<queryset::chrono::Utc>) -> Self {
        self.filter(queryset::Predicate::compare(
            "created_at",
            queryset::Operator::Lte,
            queryset::Value::from(value),
        ))
    }

    pub fn created_at_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = queryset::chrono::DateTime<queryset::chrono::Utc>>,
    {
        self.filter(queryset::Predicate::list(
            "created_at",
            queryset::Operator::In,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn created_at_not_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = queryset::chrono::DateTime<queryset::chrono::Utc>>,
    {
        self.filter(queryset::Predicate::list(
            "created_at",
            queryset::Operator::NotIn,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn order_asc_by_created_at(self) -> Self {
        Self {
            inner: self.inner.order_by("created_at", queryset::Direction::Asc),
        }
    }

    pub fn order_desc_by_created_at(self) -> Self {
        Self {
            inner: self.inner.order_by("created_at", queryset::Direction::Desc),
        }
    }

    pub fn updated_at_eq(self, value: queryset::chrono::DateTime<queryset::chrono::Utc>) -> Self {
        self.filter(queryset::Predicate::compare(
            "updated_at",
            queryset::Operator::Eq,
            queryset::Value::from(value),
        ))
    }

    pub fn updated_at_ne(self, value: queryset::chrono::DateTime<queryset::chrono::Utc>) -> Self {
        self.filter(queryset::Predicate::compare(
            "updated_at",
            queryset::Operator::Ne,
            queryset::Value::from(value),
        ))
    }

    pub fn updated_at_gt(self, value: queryset::chrono::DateTime<queryset::chrono::Utc>) -> Self {
        self.filter(queryset::Predicate::compare(
            "updated_at",
            queryset::Operator::Gt,
            queryset::Value::from(value),
        ))
    }

    pub fn updated_at_gte(self, value: queryset::chrono::DateTime<queryset::chrono::Utc>) -> Self {
        self.filter(queryset::Predicate::compare(
            "updated_at",
            queryset::Operator::Gte,
            queryset::Value::from(value),
        ))
    }

    pub fn updated_at_lt(self, value: queryset::chrono::DateTime<queryset::chrono::Utc>) -> Self {
        self.filter(queryset::Predicate::compare(
            "updated_at",
            queryset::Operator::Lt,
            queryset::Value::from(value),
        ))
    }

    pub fn updated_at_lte(self, value: queryset::chrono::DateTime<queryset::chrono::Utc>) -> Self {
        self.filter(queryset::Predicate::compare(
            "updated_at",
            queryset::Operator::Lte,
            queryset::Value::from(value),
        ))
    }

    pub fn updated_at_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = queryset::chrono::DateTime<queryset::chrono::Utc>>,
    {
        self.filter(queryset::Predicate::list(
            "updated_at",
            queryset::Operator::In,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn updated_at_not_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = queryset::chrono::DateTime<queryset::chrono::Utc>>,
    {
        self.filter(queryset::Predicate::list(
            "updated_at",
            queryset::Operator::NotIn,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn order_asc_by_updated_at(self) -> Self {
        Self {
            inner: self.inner.order_by("updated_at", queryset::Direction::Asc),
        }
    }

    pub fn order_desc_by_updated_at(self) -> Self {
        Self {
            inner: self.inner.order_by("updated_at", queryset::Direction::Desc),
        }
    }

    #[doc = " Ask the store to load the `posts` association"]
    pub fn preload_posts(self) -> Self {
        Self {
            inner: self.inner.preload("posts"),
        }
    }

    pub fn limit(self, limit: u64) -> Self {
        Self {
            inner: self.inner.limit(limit),
        }
    }

    pub fn offset(self, offset: u64) -> Self {
        Self {
            inner: self.inner.offset(offset),
        }
    }

    #[doc = r" Load every matching row into `dest`"]
    pub fn all(self, dest: &mut Vec<User>) -> Result<(), queryset::QueryError> {
        self.inner.all(dest)
    }

    #[doc = r" Load the first matching row into `dest`"]
    pub fn one(self, dest: &mut User) -> Result<(), queryset::QueryError> {
        self.inner.one(dest)
    }

    pub fn count(self) -> Result<u64, queryset::QueryError> {
        self.inner.count()
    }

    #[doc = r" Delete every matching row"]
    pub fn delete(self) -> Result<u64, queryset::QueryError> {
        self.inner.delete()
    }

    #[doc = r" Updater scoped by this query set's conditions"]
    pub fn get_updater(self) -> UserUpdater<'s> {
        UserUpdater {
            inner: self.inner.get_updater(),
        }
    }
}

#[doc = " Column assignments applied to [`User`] rows"]
#[derive(Debug)]
pub struct UserUpdater<'s> {
    inner: queryset::Updater<'s, User>,
}

impl<'s> UserUpdater<'s> {
    #[doc = r" Updater for the row of one instance, located by primary key"]
    pub fn for_model(store: &'s dyn queryset::Store, model: &User) -> Self {
        Self {
            inner: queryset::Updater::for_model(store, model),
        }
    }

    pub fn set_name(self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        Self {
            inner: self.inner.set("name", value),
        }
    }

    pub fn set_email(self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        Self {
            inner: self.inner.set("email", value),
        }
    }

    pub fn set_nickname(self, value: Option<String>) -> Self {
        Self {
            inner: self.inner.set("nickname", value),
        }
    }

    pub fn set_age(self, value: Option<i32>) -> Self {
        Self {
            inner: self.inner.set("age", value),
        }
    }

    pub fn set_active(self, value: bool) -> Self {
        Self {
            inner: self.inner.set("active", value),
        }
    }

    pub fn set_created_at(self, value: queryset::chrono::DateTime<queryset::chrono::Utc>) -> Self {
        Self {
            inner: self.inner.set("created_at", value),
        }
    }

    pub fn set_updated_at(self, value: queryset::chrono::DateTime<queryset::chrono::Utc>) -> Self {
        Self {
            inner: self.inner.set("updated_at", value),
        }
    }

    #[doc = r" Apply the assignments, returning the number of rows written"]
    pub fn update(self) -> Result<u64, queryset::QueryError> {
        self.inner.update()
    }
}

#[doc = " Row of the `posts` table"]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Post {
    pub id: i64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

#[doc = " Columns of [`Post`], in declaration order"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostColumn {
    Id,
    UserId,
    Title,
    Body,
}

impl PostColumn {
    pub const ALL: [PostColumn; 4usize] = [
        PostColumn::Id,
        PostColumn::UserId,
        PostColumn::Title,
        PostColumn::Body,
    ];

    #[doc = r" Column name in the store"]
    pub const fn name(self) -> &'static str {
        match self {
            PostColumn::Id => "id",
            PostColumn::UserId => "user_id",
            PostColumn::Title => "title",
            PostColumn::Body => "body",
        }
    }
}

impl std::fmt::Display for PostColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

static POST_META: queryset::ModelMeta = queryset::ModelMeta {
    name: "Post",
    table: "posts",
    columns: &[
        "id",
        "user_id",
        "title",
        "body",
    ],
    primary_key: Some("id"),
    soft_delete: None,
};

impl queryset::ModelTrait for Post {
    fn meta() -> &'static queryset::ModelMeta {
        &POST_META
    }

    fn from_row(row: &queryset::Row) -> Result<Self, queryset::StoreError> {
        Ok(Self {
            id: row.try_get_integer("id")?,
            user_id: row.try_get_integer("user_id")?,
            title: row.try_get("title")?,
            body: row.try_get("body")?,
        })
    }

    fn get(&self, column: &str) -> Option<queryset::Value> {
        match column {
            "id" => Some(queryset::Value::from(self.id)),
            "user_id" => Some(queryset::Value::from(self.user_id)),
            "title" => Some(queryset::Value::from(self.title.clone())),
            "body" => Some(queryset::Value::from(self.body.clone())),
            _ => None,
        }
    }

    fn primary_key_value(&self) -> Option<queryset::Value> {
        (self.id != 0).then(|| queryset::Value::from(self.id))
    }

    fn set_primary_key(&mut self, value: queryset::Value) -> Result<(), queryset::StoreError> {
        self.id = queryset::identity(value, "id")?;
        Ok(())
    }

    fn insert_values(&self) -> Vec<(&'static str, queryset::Value)> {
        let mut values = Vec::with_capacity(4usize);
        if self.id != 0 {
            values.push(("id", queryset::Value::from(self.id)));
        }
        values.push(("user_id", queryset::Value::from(self.user_id)));
        values.push(("title", queryset::Value::from(self.title.clone())));
        if !self.body.is_empty() {
            values.push(("body", queryset::Value::from(self.body.clone())));
        }
        values
    }

    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push("title");
        }
        missing
    }
}

impl Post {
    #[doc = r" Insert this value; the primary key is filled from the store"]
    #[doc = r" when it was unset"]
    pub fn create(&mut self, store: &dyn queryset::Store) -> Result<(), queryset::QueryError> {
        queryset::active_model::create(store, self)
    }

    #[doc = r" Write the selected columns of this value to its row"]
    pub fn update(
        &self,
        store: &dyn queryset::Store,
        columns: &[PostColumn],
    ) -> Result<u64, queryset::QueryError> {
        let columns: Vec<&'static str> = columns.iter().map(|c| c.name()).collect();
        queryset::active_model::update_columns(store, self, &columns)
    }

    #[doc = r" Delete this value's row; soft-delete models are stamped instead"]
    pub fn delete(&self, store: &dyn queryset::Store) -> Result<u64, queryset::QueryError> {
        queryset::active_model::delete(store, self)
    }
}

#[doc = " Query set over [`Post`] rows"]
#[derive(Debug)]
pub struct PostQuerySet<'s> {
    inner: queryset::QuerySet<'s, Post>,
}

impl<'s> PostQuerySet<'s> {
    pub fn new(store: &'s dyn queryset::Store) -> Self {
        Self {
            inner: queryset::QuerySet::new(store),
        }
    }

    fn filter(self, predicate: queryset::Predicate) -> Self {
        Self {
            inner: self.inner.filter(predicate),
        }
    }

    pub fn id_eq(self, value: i64) -> Self {
        self.filter(queryset::Predicate::compare(
            "id",
            queryset::Operator::Eq,
            queryset::Value::from(value),
        ))
    }

    pub fn id_ne(self, value: i64) -> Self {
        self.filter(queryset::Predicate::compare(
            "id",
            queryset::Operator::Ne,
            queryset::Value::from(value),
        ))
    }

    pub fn id_gt(self, value: i64) -> Self {
        self.filter(queryset::Predicate::compare(
            "id",
            queryset::Operator::Gt,
            queryset::Value::from(value),
        ))
    }

    pub fn id_gte(self, value: i64) -> Self {
        self.filter(queryset::Predicate::compare(
            "id",
            queryset::Operator::Gte,
            queryset::Value::from(value),
        ))
    }

    pub fn id_lt(self, value: i64) -> Self {
        self.filter(queryset::Predicate::compare(
            "id",
            queryset::Operator::Lt,
            queryset::Value::from(value),
        ))
    }

    pub fn id_lte(self, value: i64) -> Self {
        self.filter(queryset::Predicate::compare(
            "id",
            queryset::Operator::Lte,
            queryset::Value::from(value),
        ))
    }

    pub fn id_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        self.filter(queryset::Predicate::list(
            "id",
            queryset::Operator::In,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn id_not_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        self.filter(queryset::Predicate::list(
            "id",
            queryset::Operator::NotIn,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn order_asc_by_id(self) -> Self {
        Self {
            inner: self.inner.order_by("id", queryset::Direction::Asc),
        }
    }

    pub fn order_desc_by_id(self) -> Self {
        Self {
            inner: self.inner.order_by("id", queryset::Direction::Desc),
        }
    }

    pub fn user_id_eq(self, value: u64) -> Self {
        self.filter(queryset::Predicate::compare(
            "user_id",
            queryset::Operator::Eq,
            queryset::Value::from(value),
        ))
    }

    pub fn user_id_ne(self, value: u64) -> Self {
        self.filter(queryset::Predicate::compare(
            "user_id",
            queryset::Operator::Ne,
            queryset::Value::from(value),
        ))
    }

    pub fn user_id_gt(self, value: u64) -> Self {
        self.filter(queryset::Predicate::compare(
            "user_id",
            queryset::Operator::Gt,
            queryset::Value::from(value),
        ))
    }

    pub fn user_id_gte(self, value: u64) -> Self {
        self.filter(queryset::Predicate::compare(
            "user_id",
            queryset::Operator::Gte,
            queryset::Value::from(value),
        ))
    }

    pub fn user_id_lt(self, value: u64) -> Self {
        self.filter(queryset::Predicate::compare(
            "user_id",
            queryset::Operator::Lt,
            queryset::Value::from(value),
        ))
    }

    pub fn user_id_lte(self, value: u64) -> Self {
        self.filter(queryset::Predicate::compare(
            "user_id",
            queryset::Operator::Lte,
            queryset::Value::from(value),
        ))
    }

    pub fn user_id_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        self.filter(queryset::Predicate::list(
            "user_id",
            queryset::Operator::In,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn user_id_not_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        self.filter(queryset::Predicate::list(
            "user_id",
            queryset::Operator::NotIn,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn order_asc_by_user_id(self) -> Self {
        Self {
            inner: self.inner.order_by("user_id", queryset::Direction::Asc),
        }
    }

    pub fn order_desc_by_user_id(self) -> Self {
        Self {
            inner: self.inner.order_by("user_id", queryset::Direction::Desc),
        }
    }

    pub fn title_eq(self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.filter(queryset::Predicate::compare(
            "title",
            queryset::Operator::Eq,
            queryset::Value::from(value),
        ))
    }

    pub fn title_ne(self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.filter(queryset::Predicate::compare(
            "title",
            queryset::Operator::Ne,
            queryset::Value::from(value),
        ))
    }

    pub fn title_like(self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.filter(queryset::Predicate::compare(
            "title",
            queryset::Operator::Like,
            queryset::Value::from(value),
        ))
    }

    pub fn title_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.filter(queryset::Predicate::list(
            "title",
            queryset::Operator::In,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn title_not_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.filter(queryset::Predicate::list(
            "title",
            queryset::Operator::NotIn,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn order_asc_by_title(self) -> Self {
        Self {
            inner: self.inner.order_by("title", queryset::Direction::Asc),
        }
    }

    pub fn order_desc_by_title(self) -> Self {
        Self {
            inner: self.inner.order_by("title", queryset::Direction::Desc),
        }
    }

    pub fn body_eq(self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.filter(queryset::Predicate::compare(
            "body",
            queryset::Operator::Eq,
            queryset::Value::from(value),
        ))
    }

    pub fn body_ne(self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.filter(queryset::Predicate::compare(
            "body",
            queryset::Operator::Ne,
            queryset::Value::from(value),
        ))
    }

    pub fn body_like(self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.filter(queryset::Predicate::compare(
            "body",
            queryset::Operator::Like,
            queryset::Value::from(value),
        ))
    }

    pub fn body_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.filter(queryset::Predicate::list(
            "body",
            queryset::Operator::In,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn body_not_in<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.filter(queryset::Predicate::list(
            "body",
            queryset::Operator::NotIn,
            values.into_iter().map(queryset::Value::from),
        ))
    }

    pub fn order_asc_by_body(self) -> Self {
        Self {
            inner: self.inner.order_by("body", queryset::Direction::Asc),
        }
    }

    pub fn order_desc_by_body(self) -> Self {
        Self {
            inner: self.inner.order_by("body", queryset::Direction::Desc),
        }
    }

    pub fn limit(self, limit: u64) -> Self {
        Self {
            inner: self.inner.limit(limit),
        }
    }

    pub fn offset(self, offset: u64) -> Self {
        Self {
            inner: self.inner.offset(offset),
        }
    }

    #[doc = r" Load every matching row into `dest`"]
    pub fn all(self, dest: &mut Vec<Post>) -> Result<(), queryset::QueryError> {
        self.inner.all(dest)
    }

    #[doc = r" Load the first matching row into `dest`"]
    pub fn one(self, dest: &mut Post) -> Result<(), queryset::QueryError> {
        self.inner.one(dest)
    }

    pub fn count(self) -> Result<u64, queryset::QueryError> {
        self.inner.count()
    }

    #[doc = r" Delete every matching row"]
    pub fn delete(self) -> Result<u64, queryset::QueryError> {
        self.inner.delete()
    }

    #[doc = r" Updater scoped by this query set's conditions"]
    pub fn get_updater(self) -> PostUpdater<'s> {
        PostUpdater {
            inner: self.inner.get_updater(),
        }
    }
}

#[doc = " Column assignments applied to [`Post`] rows"]
#[derive(Debug)]
pub struct PostUpdater<'s> {
    inner: queryset::Updater<'s, Post>,
}

impl<'s> PostUpdater<'s> {
    #[doc = r" Updater for the row of one instance, located by primary key"]
    pub fn for_model(store: &'s dyn queryset::Store, model: &Post) -> Self {
        Self {
            inner: queryset::Updater::for_model(store, model),
        }
    }

    pub fn set_user_id(self, value: u64) -> Self {
        Self {
            inner: self.inner.set("user_id", value),
        }
    }

    pub fn set_title(self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        Self {
            inner: self.inner.set("title", value),
        }
    }

    pub fn set_body(self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        Self {
            inner: self.inner.set("body", value),
        }
    }

    #[doc = r" Apply the assignments, returning the number of rows written"]
    pub fn update(self) -> Result<u64, queryset::QueryError> {
        self.inner.update()
    }
}
