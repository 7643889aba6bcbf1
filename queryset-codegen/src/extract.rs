//! Raw model definitions → [`Schema`]
//!
//! Pure and deterministic: declaration order is preserved and no model depends
//! on another.

use crate::classify::classify;
use crate::error::{CodegenError, Result};
use crate::parser::{RawField, RawModel};
use crate::schema::{option_inner, BaseType, Field, FieldType, Model, Schema, TimestampRole};
use convert_case::{Case, Casing};
use quote::ToTokens;
use std::collections::{BTreeMap, HashSet};

pub fn extract(raw: Vec<RawModel>) -> Result<Schema> {
    if raw.is_empty() {
        return Err(CodegenError::extraction(
            "<input>",
            "no #[queryset] model found",
        ));
    }

    let mut names = HashSet::new();
    let mut types = BTreeMap::new();
    let mut models = Vec::with_capacity(raw.len());
    for model in raw {
        if !names.insert(model.name.clone()) {
            return Err(CodegenError::extraction(
                model.name,
                "model is defined more than once",
            ));
        }
        for suffix in ["", "Column", "QuerySet", "Updater"] {
            let ty = format!("{}{suffix}", model.name);
            if let Some(other) = types.insert(ty.clone(), model.name.clone()) {
                return Err(CodegenError::extraction(
                    model.name,
                    format!("generated type `{ty}` clashes with model `{other}`"),
                ));
            }
        }
        models.push(extract_model(model)?);
    }
    Ok(Schema { models })
}

/// Names end up as Rust identifiers in the generated file
fn check_identifier(model: &str, name: &str) -> Result<()> {
    if syn::parse_str::<syn::Ident>(name).is_err() {
        return Err(CodegenError::extraction(
            model,
            format!("`{name}` is not a valid identifier"),
        ));
    }
    Ok(())
}

pub fn extract_model(raw: RawModel) -> Result<Model> {
    check_identifier(&raw.name, &raw.name)?;
    if raw.fields.is_empty() {
        return Err(CodegenError::extraction(raw.name, "model has no fields"));
    }

    let mut fields = Vec::with_capacity(raw.fields.len());
    let mut columns = HashSet::new();
    for raw_field in raw.fields {
        let field = extract_field(&raw.name, raw_field)?;
        if !field.is_association() && !columns.insert(field.column_name.clone()) {
            return Err(CodegenError::DuplicateColumn {
                model: raw.name,
                column: field.column_name,
            });
        }
        fields.push(field);
    }

    if fields.iter().filter(|f| f.primary_key).count() > 1 {
        return Err(CodegenError::extraction(
            raw.name,
            "more than one primary key (composite keys are not supported)",
        ));
    }
    if fields.iter().filter(|f| f.soft_delete).count() > 1 {
        return Err(CodegenError::extraction(
            raw.name,
            "more than one soft-delete field",
        ));
    }
    if fields.iter().all(Field::is_association) {
        return Err(CodegenError::extraction(raw.name, "model has no columns"));
    }

    let table_name = raw
        .table_name
        .unwrap_or_else(|| pluralize(&raw.name.to_case(Case::Snake)));

    let model = Model {
        name: raw.name,
        table_name,
        fields,
    };
    check_generated_names(&model)?;
    Ok(model)
}

/// Methods every query set and updater carries regardless of its fields
const QUERYSET_METHODS: [&str; 9] = [
    "new",
    "filter",
    "limit",
    "offset",
    "all",
    "one",
    "count",
    "delete",
    "get_updater",
];
const UPDATER_METHODS: [&str; 2] = ["for_model", "update"];

/// Distinct fields must not map onto the same generated item
fn check_generated_names(model: &Model) -> Result<()> {
    let mut fields = HashSet::new();
    let mut variants = BTreeMap::new();
    let mut queryset: BTreeMap<String, &str> = QUERYSET_METHODS
        .iter()
        .map(|m| (m.to_string(), "<builtin>"))
        .collect();
    let mut updater: BTreeMap<String, &str> = UPDATER_METHODS
        .iter()
        .map(|m| (m.to_string(), "<builtin>"))
        .collect();

    for field in &model.fields {
        if !fields.insert(field.name.as_str()) {
            return Err(CodegenError::extraction(
                &model.name,
                format!("field `{}` is declared more than once", field.name),
            ));
        }
        if !field.is_association() {
            claim(&mut variants, field.variant_name(), field, model, "column variant")?;
        }

        let capabilities = classify(field);
        for operator in &capabilities.operators {
            let method = format!("{}_{}", field.name, operator.method_suffix());
            claim(&mut queryset, method, field, model, "method")?;
        }
        if capabilities.orderable {
            for direction in ["asc", "desc"] {
                let method = format!("order_{direction}_by_{}", field.name);
                claim(&mut queryset, method, field, model, "method")?;
            }
        }
        if capabilities.preload {
            claim(&mut queryset, format!("preload_{}", field.name), field, model, "method")?;
        }
        if capabilities.settable {
            claim(&mut updater, format!("set_{}", field.name), field, model, "method")?;
        }
    }
    Ok(())
}

fn claim<'a>(
    taken: &mut BTreeMap<String, &'a str>,
    name: String,
    field: &'a Field,
    model: &Model,
    kind: &str,
) -> Result<()> {
    match taken.get(&name) {
        Some(owner) => Err(CodegenError::extraction(
            &model.name,
            format!(
                "generated {kind} `{name}` of field `{}` collides with `{owner}`",
                field.name
            ),
        )),
        None => {
            taken.insert(name, field.name.as_str());
            Ok(())
        }
    }
}

fn extract_field(model: &str, raw: RawField) -> Result<Field> {
    check_identifier(model, &raw.name)?;
    let column_name = raw
        .column_name
        .clone()
        .unwrap_or_else(|| raw.name.to_case(Case::Snake));

    if raw.association {
        if raw.primary_key || raw.soft_delete {
            return Err(CodegenError::extraction(
                model,
                format!(
                    "association `{}` cannot be a primary key or soft-delete field",
                    raw.name
                ),
            ));
        }
        return Ok(Field {
            name: raw.name,
            column_name,
            ty: FieldType::Association(raw.ty),
            primary_key: false,
            soft_delete: false,
            defaulted: false,
            timestamp: None,
        });
    }

    let (inner, nullable) = match option_inner(&raw.ty) {
        Some(inner) => (inner, true),
        None => (&raw.ty, false),
    };
    let base = BaseType::from_type(inner).ok_or_else(|| CodegenError::UnsupportedFieldType {
        model: model.to_string(),
        field: raw.name.clone(),
        ty: raw.ty.to_token_stream().to_string(),
    })?;

    if raw.primary_key && (nullable || !(base.is_integer() || base == BaseType::String)) {
        return Err(CodegenError::extraction(
            model,
            format!(
                "primary key `{}` must be a non-optional integer or String",
                raw.name
            ),
        ));
    }
    if raw.soft_delete && (!nullable || base.time_kind().is_none()) {
        return Err(CodegenError::extraction(
            model,
            format!(
                "soft-delete field `{}` must be Option<DateTime<Utc>> or Option<NaiveDateTime>",
                raw.name
            ),
        ));
    }

    let timestamp = timestamp_role(model, &raw, base)?;

    Ok(Field {
        name: raw.name,
        column_name,
        ty: FieldType::Scalar { base, nullable },
        primary_key: raw.primary_key,
        soft_delete: raw.soft_delete,
        defaulted: raw.default,
        timestamp,
    })
}

/// Explicit attributes win; `created_at` / `updated_at` time fields are
/// recognised by name
fn timestamp_role(model: &str, raw: &RawField, base: BaseType) -> Result<Option<TimestampRole>> {
    let explicit = match (raw.created_at, raw.updated_at) {
        (true, true) => {
            return Err(CodegenError::extraction(
                model,
                format!("field `{}` cannot be both created_at and updated_at", raw.name),
            ))
        }
        (true, false) => Some(TimestampRole::CreatedAt),
        (false, true) => Some(TimestampRole::UpdatedAt),
        (false, false) => None,
    };

    if explicit.is_some() && base.time_kind().is_none() {
        return Err(CodegenError::extraction(
            model,
            format!(
                "timestamp field `{}` must be DateTime<Utc> or NaiveDateTime",
                raw.name
            ),
        ));
    }
    if explicit.is_some() || raw.soft_delete || base.time_kind().is_none() {
        return Ok(explicit);
    }

    Ok(match raw.name.as_str() {
        "created_at" => Some(TimestampRole::CreatedAt),
        "updated_at" => Some(TimestampRole::UpdatedAt),
        _ => None,
    })
}

/// Simple pluralization for table names
pub fn pluralize(s: &str) -> String {
    if s.ends_with('s') || s.ends_with("sh") || s.ends_with("ch") || s.ends_with('x') {
        format!("{s}es")
    } else if s.ends_with('y') && !s.ends_with("ay") && !s.ends_with("ey") && !s.ends_with("oy") {
        format!("{}ies", &s[..s.len() - 1])
    } else {
        format!("{s}s")
    }
}
