//! Model struct, column enum, metadata and `ModelTrait` impl

use super::{field_ident, field_type, model_ident, Context};
use crate::schema::{BaseType, Field, Model};
use convert_case::{Case, Casing};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

pub(crate) fn column_enum_ident(model: &Model) -> Ident {
    format_ident!("{}Column", model.name)
}

pub(crate) fn column_variant(field: &Field) -> Ident {
    format_ident!("{}", field.variant_name())
}

pub(crate) fn generate(model: &Model, context: &Context) -> TokenStream {
    let struct_def = model_struct(model, context);
    let columns = column_enum(model);
    let meta = model_meta(model, context);
    let model_impl = model_trait_impl(model, context);
    let instance = instance_methods(model, context);

    quote! {
        #struct_def
        #columns
        #meta
        #model_impl
        #instance
    }
}

fn model_struct(model: &Model, context: &Context) -> TokenStream {
    let name = model_ident(model);
    let derives = &context.derives;
    let doc = format!(" Row of the `{}` table", model.table_name);
    let fields = model.fields.iter().map(|field| {
        let ident = field_ident(field);
        let ty = field_type(field, &context.runtime);
        quote! { pub #ident: #ty }
    });

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Default, PartialEq #(, #derives)*)]
        pub struct #name {
            #(#fields,)*
        }
    }
}

fn column_enum(model: &Model) -> TokenStream {
    let name = model_ident(model);
    let enum_name = column_enum_ident(model);
    let doc = format!(" Columns of [`{name}`], in declaration order");
    let variants: Vec<Ident> = model.columns().map(column_variant).collect();
    let column_names: Vec<&str> = model.columns().map(|f| f.column_name.as_str()).collect();
    let count = variants.len();

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum #enum_name {
            #(#variants,)*
        }

        impl #enum_name {
            pub const ALL: [#enum_name; #count] = [#(#enum_name::#variants,)*];

            /// Column name in the store
            pub const fn name(self) -> &'static str {
                match self {
                    #(#enum_name::#variants => #column_names,)*
                }
            }
        }

        impl std::fmt::Display for #enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    }
}

pub(crate) fn meta_ident(model: &Model) -> Ident {
    format_ident!("{}_META", model.name.to_case(Case::UpperSnake))
}

fn model_meta(model: &Model, context: &Context) -> TokenStream {
    let rt = &context.runtime;
    let meta = meta_ident(model);
    let name = &model.name;
    let table = &model.table_name;
    let columns = model.columns().map(|f| f.column_name.as_str());

    let primary_key = match model.primary_key() {
        Some(field) => {
            let column = &field.column_name;
            quote! { Some(#column) }
        }
        None => quote! { None },
    };

    let soft_delete = match model.soft_delete() {
        Some(field) => {
            let column = &field.column_name;
            let kind = match field.base() {
                Some(BaseType::NaiveDateTime) => quote! { #rt::TimeKind::Naive },
                _ => quote! { #rt::TimeKind::Utc },
            };
            quote! { Some(#rt::SoftDelete { column: #column, kind: #kind }) }
        }
        None => quote! { None },
    };

    quote! {
        static #meta: #rt::ModelMeta = #rt::ModelMeta {
            name: #name,
            table: #table,
            columns: &[#(#columns),*],
            primary_key: #primary_key,
            soft_delete: #soft_delete,
        };
    }
}

fn is_string(field: &Field) -> bool {
    field.base() == Some(BaseType::String)
}

/// `self.<field>`, cloned when the type is not `Copy`
fn owned_access(field: &Field) -> TokenStream {
    let ident = field_ident(field);
    if is_string(field) {
        quote! { self.#ident.clone() }
    } else {
        quote! { self.#ident }
    }
}

/// Required: a plain String column the store cannot fill in
fn is_required(field: &Field) -> bool {
    is_string(field)
        && !field.is_nullable()
        && !field.defaulted
        && !field.primary_key
        && !field.soft_delete
}

fn model_trait_impl(model: &Model, context: &Context) -> TokenStream {
    let rt = &context.runtime;
    let name = model_ident(model);
    let meta = meta_ident(model);

    let from_row_fields = model.fields.iter().map(|field| {
        let ident = field_ident(field);
        let column = &field.column_name;
        if field.is_association() {
            quote! { #ident: Default::default() }
        } else if field.base().is_some_and(BaseType::is_integer) {
            if field.is_nullable() {
                quote! { #ident: row.try_get_optional_integer(#column)? }
            } else {
                quote! { #ident: row.try_get_integer(#column)? }
            }
        } else {
            quote! { #ident: row.try_get(#column)? }
        }
    });

    let get_arms = model.columns().map(|field| {
        let column = &field.column_name;
        let access = owned_access(field);
        quote! { #column => Some(#rt::Value::from(#access)) }
    });

    let (primary_key_value, set_primary_key) = match model.primary_key() {
        Some(field) => {
            let ident = field_ident(field);
            let column = &field.column_name;
            if is_string(field) {
                (
                    quote! { (!self.#ident.is_empty()).then(|| #rt::Value::from(self.#ident.clone())) },
                    quote! {
                        self.#ident = #rt::decode(value, #column)?;
                        Ok(())
                    },
                )
            } else {
                (
                    quote! { (self.#ident != 0).then(|| #rt::Value::from(self.#ident)) },
                    quote! {
                        self.#ident = #rt::identity(value, #column)?;
                        Ok(())
                    },
                )
            }
        }
        None => (
            quote! { None },
            quote! {
                let _ = value;
                Ok(())
            },
        ),
    };

    let insert_pushes = model.columns().map(|field| {
        let ident = field_ident(field);
        let column = &field.column_name;
        let access = owned_access(field);
        let push = quote! { values.push((#column, #rt::Value::from(#access))); };
        if field.primary_key {
            if is_string(field) {
                quote! { if !self.#ident.is_empty() { #push } }
            } else {
                quote! { if self.#ident != 0 { #push } }
            }
        } else if field.defaulted && field.is_nullable() {
            quote! { if self.#ident.is_some() { #push } }
        } else if field.defaulted && is_string(field) {
            quote! { if !self.#ident.is_empty() { #push } }
        } else {
            push
        }
    });
    let column_count = model.columns().count();

    let required: Vec<&Field> = model.columns().filter(|f| is_required(f)).collect();
    let missing_required = if required.is_empty() {
        TokenStream::new()
    } else {
        let checks = required.iter().map(|field| {
            let ident = field_ident(field);
            let column = &field.column_name;
            quote! {
                if self.#ident.is_empty() {
                    missing.push(#column);
                }
            }
        });
        quote! {
            fn missing_required(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                #(#checks)*
                missing
            }
        }
    };

    let stamped: Vec<&Field> = model.columns().filter(|f| f.timestamp.is_some()).collect();
    let stamp_created = if stamped.is_empty() {
        TokenStream::new()
    } else {
        let assignments = stamped.iter().map(|field| {
            let ident = field_ident(field);
            let now = match field.base() {
                Some(BaseType::NaiveDateTime) => quote! { now.naive_utc() },
                _ => quote! { now },
            };
            if field.is_nullable() {
                quote! { self.#ident = Some(#now); }
            } else {
                quote! { self.#ident = #now; }
            }
        });
        quote! {
            fn stamp_created(&mut self, now: #rt::chrono::DateTime<#rt::chrono::Utc>) {
                #(#assignments)*
            }
        }
    };

    quote! {
        impl #rt::ModelTrait for #name {
            fn meta() -> &'static #rt::ModelMeta {
                &#meta
            }

            fn from_row(row: &#rt::Row) -> Result<Self, #rt::StoreError> {
                Ok(Self {
                    #(#from_row_fields,)*
                })
            }

            fn get(&self, column: &str) -> Option<#rt::Value> {
                match column {
                    #(#get_arms,)*
                    _ => None,
                }
            }

            fn primary_key_value(&self) -> Option<#rt::Value> {
                #primary_key_value
            }

            fn set_primary_key(&mut self, value: #rt::Value) -> Result<(), #rt::StoreError> {
                #set_primary_key
            }

            fn insert_values(&self) -> Vec<(&'static str, #rt::Value)> {
                let mut values = Vec::with_capacity(#column_count);
                #(#insert_pushes)*
                values
            }

            #missing_required

            #stamp_created
        }
    }
}

fn instance_methods(model: &Model, context: &Context) -> TokenStream {
    let rt = &context.runtime;
    let name = model_ident(model);
    let column_enum = column_enum_ident(model);

    quote! {
        impl #name {
            /// Insert this value; the primary key is filled from the store
            /// when it was unset
            pub fn create(&mut self, store: &dyn #rt::Store) -> Result<(), #rt::QueryError> {
                #rt::active_model::create(store, self)
            }

            /// Write the selected columns of this value to its row
            pub fn update(
                &self,
                store: &dyn #rt::Store,
                columns: &[#column_enum],
            ) -> Result<u64, #rt::QueryError> {
                let columns: Vec<&'static str> = columns.iter().map(|c| c.name()).collect();
                #rt::active_model::update_columns(store, self, &columns)
            }

            /// Delete this value's row; soft-delete models are stamped instead
            pub fn delete(&self, store: &dyn #rt::Store) -> Result<u64, #rt::QueryError> {
                #rt::active_model::delete(store, self)
            }
        }
    }
}
