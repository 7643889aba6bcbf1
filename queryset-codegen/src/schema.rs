//! Extracted schema representation
//!
//! Built once per generation run by [`crate::extract`] and only read afterwards.

use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::quote;
use queryset::TimeKind;

#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub models: Vec<Model>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub name: String,
    pub table_name: String,
    /// Declaration order
    pub fields: Vec<Field>,
}

impl Model {
    pub fn primary_key(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.primary_key)
    }

    pub fn soft_delete(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.soft_delete)
    }

    /// Fields backed by a column (associations excluded)
    pub fn columns(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|f| !f.is_association())
    }

    pub fn associations(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|f| f.is_association())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub column_name: String,
    pub ty: FieldType,
    pub primary_key: bool,
    pub soft_delete: bool,
    /// The column has a store-side default and may be omitted on insert
    pub defaulted: bool,
    pub timestamp: Option<TimestampRole>,
}

impl Field {
    pub fn is_association(&self) -> bool {
        matches!(self.ty, FieldType::Association(_))
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self.ty, FieldType::Scalar { nullable: true, .. })
    }

    pub fn base(&self) -> Option<BaseType> {
        match self.ty {
            FieldType::Scalar { base, .. } => Some(base),
            FieldType::Association(_) => None,
        }
    }

    pub fn category(&self) -> TypeCategory {
        self.ty.category()
    }

    /// Variant of the model's column enum
    pub fn variant_name(&self) -> String {
        self.name.to_case(Case::Pascal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampRole {
    CreatedAt,
    UpdatedAt,
}

/// Type of a field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// Column value, optionally wrapped in `Option`
    Scalar { base: BaseType, nullable: bool },
    /// Related model(s), kept verbatim for the model struct
    Association(syn::Type),
}

impl FieldType {
    pub fn category(&self) -> TypeCategory {
        match self {
            FieldType::Scalar {
                base,
                nullable: true,
            } => TypeCategory::Nullable(Box::new(base.category())),
            FieldType::Scalar { base, .. } => base.category(),
            FieldType::Association(_) => TypeCategory::Association,
        }
    }
}

/// Semantic category deciding the operator set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeCategory {
    Boolean,
    OrderedScalar,
    String,
    Nullable(Box<TypeCategory>),
    Association,
}

/// Column types with a query capability mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
    DateTimeUtc,
    NaiveDateTime,
    NaiveDate,
}

impl BaseType {
    /// Recognise a type by its last path segment
    pub fn from_type(ty: &syn::Type) -> Option<Self> {
        let syn::Type::Path(type_path) = ty else {
            return None;
        };
        if type_path.qself.is_some() {
            return None;
        }
        let segment = type_path.path.segments.last()?;
        let base = match segment.ident.to_string().as_str() {
            "bool" => BaseType::Bool,
            "i8" => BaseType::I8,
            "i16" => BaseType::I16,
            "i32" => BaseType::I32,
            "i64" => BaseType::I64,
            "u8" => BaseType::U8,
            "u16" => BaseType::U16,
            "u32" => BaseType::U32,
            "u64" => BaseType::U64,
            "f32" => BaseType::F32,
            "f64" => BaseType::F64,
            "String" => BaseType::String,
            "NaiveDateTime" => BaseType::NaiveDateTime,
            "NaiveDate" => BaseType::NaiveDate,
            "DateTime" => {
                let inner = single_generic(segment)?;
                match inner {
                    syn::Type::Path(p) if p.path.segments.last()?.ident == "Utc" => {
                        BaseType::DateTimeUtc
                    }
                    _ => return None,
                }
            }
            _ => return None,
        };
        let plain = matches!(segment.arguments, syn::PathArguments::None);
        if base != BaseType::DateTimeUtc && !plain {
            return None;
        }
        Some(base)
    }

    pub fn category(self) -> TypeCategory {
        match self {
            BaseType::Bool => TypeCategory::Boolean,
            BaseType::String => TypeCategory::String,
            _ => TypeCategory::OrderedScalar,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            BaseType::I8
                | BaseType::I16
                | BaseType::I32
                | BaseType::I64
                | BaseType::U8
                | BaseType::U16
                | BaseType::U32
                | BaseType::U64
        )
    }

    /// Storage kind when the runtime writes this column with the current time
    pub fn time_kind(self) -> Option<TimeKind> {
        match self {
            BaseType::DateTimeUtc => Some(TimeKind::Utc),
            BaseType::NaiveDateTime => Some(TimeKind::Naive),
            _ => None,
        }
    }

    /// Fully qualified type, so generated code needs only the runtime crate
    pub fn tokens(self, runtime: &TokenStream) -> TokenStream {
        match self {
            BaseType::Bool => quote! { bool },
            BaseType::I8 => quote! { i8 },
            BaseType::I16 => quote! { i16 },
            BaseType::I32 => quote! { i32 },
            BaseType::I64 => quote! { i64 },
            BaseType::U8 => quote! { u8 },
            BaseType::U16 => quote! { u16 },
            BaseType::U32 => quote! { u32 },
            BaseType::U64 => quote! { u64 },
            BaseType::F32 => quote! { f32 },
            BaseType::F64 => quote! { f64 },
            BaseType::String => quote! { String },
            BaseType::DateTimeUtc => {
                quote! { #runtime::chrono::DateTime<#runtime::chrono::Utc> }
            }
            BaseType::NaiveDateTime => quote! { #runtime::chrono::NaiveDateTime },
            BaseType::NaiveDate => quote! { #runtime::chrono::NaiveDate },
        }
    }
}

/// Inner type of `Option<T>`
pub fn option_inner(ty: &syn::Type) -> Option<&syn::Type> {
    let syn::Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    single_generic(segment)
}

fn single_generic(segment: &syn::PathSegment) -> Option<&syn::Type> {
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
