//! Derive macros for sqld
//!
//! Provides `#[derive(Model)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod model;
mod sql_ident;

/// Derive `sqld::Model` table metadata for a struct.
///
/// # Example
///
/// ```ignore
/// use sqld::Model;
///
/// #[derive(Model)]
/// #[sqld(table = "pizzerias")]
/// struct Pizzeria {
///     id: i64,
///     #[sqld(column = "display_name")]
///     name: String,
/// }
/// ```
///
/// # Generated
///
/// - `TABLE: &'static str` - Table name
/// - `COLUMNS: &'static [&'static str]` - Column names, in field order
///
/// # Attributes
///
/// - `#[sqld(table = "name")]` - Specify table name (required)
/// - `#[sqld(column = "name")]` - Map field to a different column name
/// - `#[sqld(skip)]` - Leave the field out of the column list
#[proc_macro_derive(Model, attributes(sqld))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    model::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
