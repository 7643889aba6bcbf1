//! `<Model>Updater`: one setter per settable field

use super::{model_ident, Context};
use crate::classify::classify;
use crate::schema::{BaseType, Field, Model};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

pub(crate) fn updater_ident(model: &Model) -> Ident {
    format_ident!("{}Updater", model.name)
}

pub(crate) fn generate(model: &Model, context: &Context) -> TokenStream {
    let rt = &context.runtime;
    let name = model_ident(model);
    let updater = updater_ident(model);
    let doc = format!(" Column assignments applied to [`{name}`] rows");

    let setters = model
        .fields
        .iter()
        .filter(|field| classify(field).settable)
        .map(|field| setter(field, context));

    quote! {
        #[doc = #doc]
        #[derive(Debug)]
        pub struct #updater<'s> {
            inner: #rt::Updater<'s, #name>,
        }

        impl<'s> #updater<'s> {
            /// Updater for the row of one instance, located by primary key
            pub fn for_model(store: &'s dyn #rt::Store, model: &#name) -> Self {
                Self {
                    inner: #rt::Updater::for_model(store, model),
                }
            }

            #(#setters)*

            /// Apply the assignments, returning the number of rows written
            pub fn update(self) -> Result<u64, #rt::QueryError> {
                self.inner.update()
            }
        }
    }
}

fn setter(field: &Field, context: &Context) -> TokenStream {
    let rt = &context.runtime;
    let method = format_ident!("set_{}", field.name);
    let column = &field.column_name;
    let Some(base) = field.base() else {
        return TokenStream::new();
    };

    if field.is_nullable() {
        let ty = base.tokens(rt);
        quote! {
            pub fn #method(self, value: Option<#ty>) -> Self {
                Self {
                    inner: self.inner.set(#column, value),
                }
            }
        }
    } else if base == BaseType::String {
        quote! {
            pub fn #method(self, value: impl Into<String>) -> Self {
                let value: String = value.into();
                Self {
                    inner: self.inner.set(#column, value),
                }
            }
        }
    } else {
        let ty = base.tokens(rt);
        quote! {
            pub fn #method(self, value: #ty) -> Self {
                Self {
                    inner: self.inner.set(#column, value),
                }
            }
        }
    }
}
