//! Model derive macro implementation
//!
//! - `attrs`: struct and field attribute parsing

mod attrs;

use attrs::{FieldColumn, get_field_column, get_table_name};

use proc_macro2::TokenStream;
use quote::quote;
use std::collections::HashSet;
use syn::{Data, DeriveInput, Fields, Result};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let table_name = get_table_name(&input)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Model can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Model can only be derived for structs",
            ));
        }
    };

    let mut column_names: Vec<String> = Vec::with_capacity(fields.len());
    let mut seen = HashSet::<String>::with_capacity(fields.len());

    for field in fields.iter() {
        let column = match get_field_column(field)? {
            FieldColumn::Column(column) => column,
            FieldColumn::Skip => continue,
        };
        if !seen.insert(column.clone()) {
            return Err(syn::Error::new_spanned(
                field,
                format!("duplicate column '{column}' in Model"),
            ));
        }
        column_names.push(column);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::sqld::Model for #name #ty_generics #where_clause {
            const TABLE: &'static str = #table_name;
            const COLUMNS: &'static [&'static str] = &[#(#column_names),*];
        }
    })
}
