//! `<Model>QuerySet`: one chain method per legal (field, operator) pair

use super::updater::updater_ident;
use super::{model_ident, Context};
use crate::classify::classify;
use crate::schema::{BaseType, Field, Model};
use proc_macro2::{Ident, TokenStream};
use queryset::{Arity, Operator};
use quote::{format_ident, quote};

pub(crate) fn queryset_ident(model: &Model) -> Ident {
    format_ident!("{}QuerySet", model.name)
}

pub(crate) fn generate(model: &Model, context: &Context) -> TokenStream {
    let rt = &context.runtime;
    let name = model_ident(model);
    let queryset = queryset_ident(model);
    let updater = updater_ident(model);
    let doc = format!(" Query set over [`{name}`] rows");

    let mut methods = Vec::new();
    for field in &model.fields {
        let capabilities = classify(field);
        for operator in &capabilities.operators {
            methods.push(predicate_method(field, *operator, context));
        }
        if capabilities.orderable {
            methods.push(order_methods(field, context));
        }
        if capabilities.preload {
            methods.push(preload_method(field));
        }
    }

    quote! {
        #[doc = #doc]
        #[derive(Debug)]
        pub struct #queryset<'s> {
            inner: #rt::QuerySet<'s, #name>,
        }

        impl<'s> #queryset<'s> {
            pub fn new(store: &'s dyn #rt::Store) -> Self {
                Self {
                    inner: #rt::QuerySet::new(store),
                }
            }

            fn filter(self, predicate: #rt::Predicate) -> Self {
                Self {
                    inner: self.inner.filter(predicate),
                }
            }

            #(#methods)*

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

            /// Load every matching row into `dest`
            pub fn all(self, dest: &mut Vec<#name>) -> Result<(), #rt::QueryError> {
                self.inner.all(dest)
            }

            /// Load the first matching row into `dest`
            pub fn one(self, dest: &mut #name) -> Result<(), #rt::QueryError> {
                self.inner.one(dest)
            }

            pub fn count(self) -> Result<u64, #rt::QueryError> {
                self.inner.count()
            }

            /// Delete every matching row
            pub fn delete(self) -> Result<u64, #rt::QueryError> {
                self.inner.delete()
            }

            /// Updater scoped by this query set's conditions
            pub fn get_updater(self) -> #updater<'s> {
                #updater {
                    inner: self.inner.get_updater(),
                }
            }
        }
    }
}

/// Argument type of binary predicate methods
fn argument_type(base: BaseType, context: &Context) -> TokenStream {
    match base {
        BaseType::String => quote! { impl Into<String> },
        other => other.tokens(&context.runtime),
    }
}

/// Statement converting the argument into a `String` where needed
fn argument_binding(base: BaseType) -> TokenStream {
    match base {
        BaseType::String => quote! { let value: String = value.into(); },
        _ => TokenStream::new(),
    }
}

fn predicate_method(field: &Field, operator: Operator, context: &Context) -> TokenStream {
    let rt = &context.runtime;
    let method = format_ident!("{}_{}", field.name, operator.method_suffix());
    let column = &field.column_name;
    let variant = format_ident!("{}", operator.variant_name());
    let Some(base) = field.base() else {
        return TokenStream::new();
    };

    match operator.arity() {
        Arity::Binary => {
            let ty = argument_type(base, context);
            let binding = argument_binding(base);
            quote! {
                pub fn #method(self, value: #ty) -> Self {
                    #binding
                    self.filter(#rt::Predicate::compare(
                        #column,
                        #rt::Operator::#variant,
                        #rt::Value::from(value),
                    ))
                }
            }
        }
        Arity::List => {
            let item = base.tokens(&context.runtime);
            quote! {
                pub fn #method<I>(self, values: I) -> Self
                where
                    I: IntoIterator<Item = #item>,
                {
                    self.filter(#rt::Predicate::list(
                        #column,
                        #rt::Operator::#variant,
                        values.into_iter().map(#rt::Value::from),
                    ))
                }
            }
        }
        Arity::Unary => quote! {
            pub fn #method(self) -> Self {
                self.filter(#rt::Predicate::null(#column, #rt::Operator::#variant))
            }
        },
    }
}

fn order_methods(field: &Field, context: &Context) -> TokenStream {
    let rt = &context.runtime;
    let asc = format_ident!("order_asc_by_{}", field.name);
    let desc = format_ident!("order_desc_by_{}", field.name);
    let column = &field.column_name;

    quote! {
        pub fn #asc(self) -> Self {
            Self {
                inner: self.inner.order_by(#column, #rt::Direction::Asc),
            }
        }

        pub fn #desc(self) -> Self {
            Self {
                inner: self.inner.order_by(#column, #rt::Direction::Desc),
            }
        }
    }
}

fn preload_method(field: &Field) -> TokenStream {
    let method = format_ident!("preload_{}", field.name);
    let association = &field.name;
    let doc = format!(" Ask the store to load the `{association}` association");

    quote! {
        #[doc = #doc]
        pub fn #method(self) -> Self {
            Self {
                inner: self.inner.preload(#association),
            }
        }
    }
}
