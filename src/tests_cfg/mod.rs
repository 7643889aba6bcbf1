//! Test models shared by the runtime's unit tests.
//!
//! Written the way `queryset-codegen` emits model impls: `Article` carries a
//! soft-delete column and a creation stamp, `Tag` is hard-deleted.

use crate::error::StoreError;
use crate::model::{ModelMeta, ModelTrait, SoftDelete, TimeKind};
use crate::row::{identity, Row};
use chrono::{DateTime, Utc};
use sea_query::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub views: i32,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

pub static ARTICLE_META: ModelMeta = ModelMeta {
    name: "Article",
    table: "articles",
    columns: &["id", "title", "views", "created_at", "deleted_at"],
    primary_key: Some("id"),
    soft_delete: Some(SoftDelete {
        column: "deleted_at",
        kind: TimeKind::Utc,
    }),
};

impl ModelTrait for Article {
    fn meta() -> &'static ModelMeta {
        &ARTICLE_META
    }

    fn from_row(row: &Row) -> Result<Self, StoreError> {
        Ok(Self {
            id: row.try_get_integer("id")?,
            title: row.try_get("title")?,
            views: row.try_get_integer("views")?,
            created_at: row.try_get("created_at")?,
            deleted_at: row.try_get("deleted_at")?,
        })
    }

    fn get(&self, column: &str) -> Option<Value> {
        match column {
            "id" => Some(Value::from(self.id)),
            "title" => Some(Value::from(self.title.clone())),
            "views" => Some(Value::from(self.views)),
            "created_at" => Some(Value::from(self.created_at)),
            "deleted_at" => Some(Value::from(self.deleted_at)),
            _ => None,
        }
    }

    fn primary_key_value(&self) -> Option<Value> {
        (self.id != 0).then(|| Value::from(self.id))
    }

    fn set_primary_key(&mut self, value: Value) -> Result<(), StoreError> {
        self.id = identity(value, "id")?;
        Ok(())
    }

    fn insert_values(&self) -> Vec<(&'static str, Value)> {
        let mut values = Vec::new();
        if self.id != 0 {
            values.push(("id", Value::from(self.id)));
        }
        values.push(("title", Value::from(self.title.clone())));
        values.push(("views", Value::from(self.views)));
        values.push(("created_at", Value::from(self.created_at)));
        values.push(("deleted_at", Value::from(self.deleted_at)));
        values
    }

    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push("title");
        }
        missing
    }

    fn stamp_created(&mut self, now: DateTime<Utc>) {
        self.created_at = now;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tag {
    pub id: i32,
    pub label: String,
}

pub static TAG_META: ModelMeta = ModelMeta {
    name: "Tag",
    table: "tags",
    columns: &["id", "label"],
    primary_key: Some("id"),
    soft_delete: None,
};

impl ModelTrait for Tag {
    fn meta() -> &'static ModelMeta {
        &TAG_META
    }

    fn from_row(row: &Row) -> Result<Self, StoreError> {
        Ok(Self {
            id: row.try_get_integer("id")?,
            label: row.try_get("label")?,
        })
    }

    fn get(&self, column: &str) -> Option<Value> {
        match column {
            "id" => Some(Value::from(self.id)),
            "label" => Some(Value::from(self.label.clone())),
            _ => None,
        }
    }

    fn primary_key_value(&self) -> Option<Value> {
        (self.id != 0).then(|| Value::from(self.id))
    }

    fn set_primary_key(&mut self, value: Value) -> Result<(), StoreError> {
        self.id = identity(value, "id")?;
        Ok(())
    }

    fn insert_values(&self) -> Vec<(&'static str, Value)> {
        let mut values = Vec::new();
        if self.id != 0 {
            values.push(("id", Value::from(self.id)));
        }
        values.push(("label", Value::from(self.label.clone())));
        values
    }
}

pub fn article_row(id: i64, title: &str) -> Row {
    Row::new()
        .with("id", id)
        .with("title", title)
        .with("views", 0i32)
        .with("created_at", Utc::now())
        .with("deleted_at", Value::from(None::<DateTime<Utc>>))
}
